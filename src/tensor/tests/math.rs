use approx::assert_abs_diff_eq;

use crate::tensor::Tensor;

#[test]
fn test_activations() {
    let x = Tensor::new(&[-2., 0., 3.], &[3]);

    let tanh = x.tanh().to_vec();
    assert_abs_diff_eq!(tanh[0], (-2f32).tanh());
    assert_abs_diff_eq!(tanh[1], 0.);

    let sigmoid = x.sigmoid().to_vec();
    assert_abs_diff_eq!(sigmoid[0], 1. / (1. + 2f32.exp()), epsilon = 1e-6);
    assert_abs_diff_eq!(sigmoid[1], 0.5);
    assert_abs_diff_eq!(sigmoid[2], 1. / (1. + (-3f32).exp()), epsilon = 1e-6);

    let softplus = x.softplus().to_vec();
    assert_abs_diff_eq!(softplus[0], (1. + (-2f32).exp()).ln(), epsilon = 1e-6);
    assert_abs_diff_eq!(softplus[1], 2f32.ln(), epsilon = 1e-6);
    assert_abs_diff_eq!(softplus[2], (1. + 3f32.exp()).ln(), epsilon = 1e-6);
}

#[test]
fn test_activations_are_stable_for_large_inputs() {
    let x = Tensor::new(&[-1000., 1000.], &[2]);
    let sigmoid = x.sigmoid().to_vec();
    assert_eq!(sigmoid, vec![0., 1.]);
    let softplus = x.softplus().to_vec();
    assert_eq!(softplus, vec![0., 1000.]);
}

#[test]
fn test_exp_ln_abs_sign() {
    let x = Tensor::new(&[-1.5, 0., 2.], &[3]);
    assert_eq!(x.abs().to_vec(), vec![1.5, 0., 2.]);
    assert_eq!(x.sign().to_vec(), vec![-1., 0., 1.]);
    assert_eq!(x.square().to_vec(), vec![2.25, 0., 4.]);
    assert_abs_diff_eq!(x.exp().ln().to_vec()[2], 2., epsilon = 1e-6);
    assert!(x.ln().to_vec()[0].is_nan());
    assert_eq!(x.ln().to_vec()[1], f32::NEG_INFINITY);
    assert_eq!(Tensor::new(&[2., 4.], &[2]).recip().to_vec(), vec![0.5, 0.25]);
}

#[test]
fn test_sum_and_mean() {
    let x = Tensor::new(&[1., 2., 3., 6.], &[2, 2]);
    assert_eq!(x.sum(), 12.);
    assert_eq!(x.mean(), 3.);
    assert!(Tensor::zeros(&[0]).mean().is_nan());
}
