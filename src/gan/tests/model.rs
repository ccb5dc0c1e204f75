use crate::gan::{discriminator, generator, MLP_HIDDEN_SIZE};
use crate::nn::{Graph, Scope};

#[test]
fn test_generator_structure() {
    let graph = Graph::new_with_seed(0);
    let z = graph.input_shape(&[12, 1], Some("z")).unwrap();
    let g = generator(&z, &Scope::new("Gen"), MLP_HIDDEN_SIZE).unwrap();

    assert_eq!(g.value_expected_shape().unwrap(), vec![12, 1]);
    assert_eq!(
        graph.trainable_var_paths("Gen"),
        vec![
            "Gen/generator/l1/w",
            "Gen/generator/l1/b",
            "Gen/generator/l2/w",
            "Gen/generator/l2/b",
        ]
    );
    let shapes: Vec<Vec<usize>> = graph
        .trainable_vars("Gen")
        .iter()
        .map(|v| v.value_expected_shape().unwrap())
        .collect();
    assert_eq!(shapes, vec![vec![1, 4], vec![1, 4], vec![4, 1], vec![1, 1]]);
}

#[test]
fn test_discriminator_structure() {
    let graph = Graph::new_with_seed(0);
    let x = graph.input_shape(&[12, 1], Some("x")).unwrap();
    let d = discriminator(&x, &Scope::new("Disc"), MLP_HIDDEN_SIZE, false).unwrap();

    assert_eq!(d.value_expected_shape().unwrap(), vec![12, 1]);
    let paths = graph.trainable_var_paths("Disc");
    assert_eq!(paths.len(), 8);
    assert_eq!(paths[0], "Disc/discriminator/l1/w");
    assert_eq!(paths[4], "Disc/discriminator/l3/w");
    assert_eq!(paths[7], "Disc/discriminator/l4/b");
}

#[test]
fn test_discriminator_with_minibatch() {
    let graph = Graph::new_with_seed(0);
    let x = graph.input_shape(&[12, 1], Some("x")).unwrap();
    let d = discriminator(&x, &Scope::new("Disc"), MLP_HIDDEN_SIZE, true).unwrap();

    assert_eq!(d.value_expected_shape().unwrap(), vec![12, 1]);
    let paths = graph.trainable_var_paths("Disc");
    assert_eq!(
        paths,
        vec![
            "Disc/discriminator/l1/w",
            "Disc/discriminator/l1/b",
            "Disc/discriminator/l2/w",
            "Disc/discriminator/l2/b",
            "Disc/discriminator/minibatch/l1/w",
            "Disc/discriminator/minibatch/l1/b",
            "Disc/discriminator/l4/w",
            "Disc/discriminator/l4/b",
        ]
    );
    // l4 的输入为 2×hidden + 5 个 minibatch 特征
    assert_eq!(
        graph.trainable_vars("Disc")[6].value_expected_shape().unwrap(),
        vec![2 * MLP_HIDDEN_SIZE + 5, 1]
    );
}

#[test]
fn test_discriminator_reuse_shares_params() {
    let graph = Graph::new_with_seed(0);
    let scope = Scope::new("Disc");
    let x = graph.input_shape(&[12, 1], Some("x")).unwrap();
    let y = graph.input_shape(&[12, 1], Some("y")).unwrap();
    let d1 = discriminator(&x, &scope, MLP_HIDDEN_SIZE, false).unwrap();
    let nodes_before = graph.nodes_count();
    let d2 = discriminator(&y, &scope.reuse(), MLP_HIDDEN_SIZE, false).unwrap();

    assert_ne!(d1.node_id(), d2.node_id());
    assert_eq!(graph.trainable_vars("Disc").len(), 8);
    assert!(graph.nodes_count() > nodes_before);

    // 未复用时重复构建会报错
    assert!(discriminator(&y, &scope, MLP_HIDDEN_SIZE, false).is_err());
}
