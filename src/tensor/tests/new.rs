use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::assert_panic;
use crate::errors::TensorError;
use crate::tensor::Tensor;

#[test]
fn test_new_and_properties() {
    let tensor = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]);
    assert_eq!(tensor.shape(), &[2, 3]);
    assert_eq!(tensor.dimension(), 2);
    assert_eq!(tensor.size(), 6);
    assert_eq!(tensor.get(&[1, 0]), Some(4.));
    assert_eq!(tensor.get(&[2, 0]), None);
    assert_eq!(tensor.to_vec(), vec![1., 2., 3., 4., 5., 6.]);
    assert_eq!(tensor.get_data_number(), None);
}

#[test]
fn test_new_with_wrong_length() {
    assert_eq!(
        Tensor::try_new(&[1., 2., 3.], &[2, 2]),
        Err(TensorError::DataShapeMismatch {
            data_len: 3,
            shape: vec![2, 2]
        })
    );
    assert_panic!(Tensor::new(&[1., 2., 3.], &[2, 2]));
}

#[test]
fn test_constructors() {
    assert_eq!(Tensor::zeros(&[2, 1]).to_vec(), vec![0., 0.]);
    assert_eq!(Tensor::ones(&[1, 3]).to_vec(), vec![1., 1., 1.]);
    assert_eq!(Tensor::full(2.5, &[2, 2]).to_vec(), vec![2.5; 4]);

    let scalar = Tensor::scalar(7.);
    assert_eq!(scalar.shape(), &[1, 1]);
    assert_eq!(scalar.get_data_number(), Some(7.));

    let column = Tensor::column(&[1., 2., 3.]);
    assert_eq!(column.shape(), &[3, 1]);
}

#[test]
fn test_random_constructors_are_reproducible() {
    let a = Tensor::normal_with_rng(0., 1., &[3, 4], &mut StdRng::seed_from_u64(42));
    let b = Tensor::normal_with_rng(0., 1., &[3, 4], &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
    assert!(!a.has_non_finite());

    let u = Tensor::uniform_with_rng(-2., 2., &[100, 1], &mut StdRng::seed_from_u64(1));
    assert!(u.to_vec().iter().all(|v| (-2. ..2.).contains(v)));
}

#[test]
fn test_has_non_finite() {
    assert!(!Tensor::new(&[1., -2.], &[2]).has_non_finite());
    assert!(Tensor::new(&[1., f32::NAN], &[2]).has_non_finite());
    assert!(Tensor::new(&[f32::NEG_INFINITY], &[1]).has_non_finite());
}
