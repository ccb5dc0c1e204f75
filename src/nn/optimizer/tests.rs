use approx::assert_abs_diff_eq;

use crate::nn::optimizer::{optimizer, LearningRateSchedule, Optimizer, DECAY_RATE, SGD};
use crate::nn::{Graph, Init, Scope, VarLossOps, VarReduceOps};
use crate::tensor::Tensor;

// ========== 学习率调度 ==========

#[test]
fn test_staircase_decay() {
    let schedule = LearningRateSchedule::ExponentialDecay {
        init_lr: 0.03,
        decay_rate: 0.95,
        decay_steps: 150,
        staircase: true,
    };
    assert_abs_diff_eq!(schedule.learning_rate_at(0), 0.03);
    assert_abs_diff_eq!(schedule.learning_rate_at(149), 0.03);
    assert_abs_diff_eq!(schedule.learning_rate_at(150), 0.03 * 0.95, epsilon = 1e-8);
    assert_abs_diff_eq!(schedule.learning_rate_at(300), 0.03 * 0.95 * 0.95, epsilon = 1e-8);
}

#[test]
fn test_continuous_decay() {
    let schedule = LearningRateSchedule::ExponentialDecay {
        init_lr: 1.0,
        decay_rate: 0.5,
        decay_steps: 10,
        staircase: false,
    };
    assert_abs_diff_eq!(schedule.learning_rate_at(5), 0.5f32.sqrt(), epsilon = 1e-6);
    assert_abs_diff_eq!(LearningRateSchedule::Constant(0.1).learning_rate_at(1000), 0.1);
}

// ========== SGD ==========

#[test]
fn test_sgd_step() {
    // loss = mse(p, 0) = p²，dloss/dp = 2p = 4，p ← 2 - 0.1 * 4 = 1.6
    let graph = Graph::new();
    let p = graph
        .variable(&Scope::new("p"), "w", &[1, 1], Init::Constant(2.0))
        .unwrap();
    let target = graph.constant(&Tensor::scalar(0.0)).unwrap();
    let loss = p.mse_loss(&target).unwrap();

    let mut sgd = SGD::with_constant_lr(&graph, &[p.clone()], 0.1);
    let loss_val = sgd.minimize(&loss).unwrap();
    assert_abs_diff_eq!(loss_val, 4.0);
    assert_abs_diff_eq!(p.value().unwrap().unwrap().get_data_number().unwrap(), 1.6, epsilon = 1e-6);
    assert_eq!(sgd.global_step(), 1);

    // 第二步返回的是更新前的 loss：1.6² = 2.56
    let loss_val = sgd.minimize(&loss).unwrap();
    assert_abs_diff_eq!(loss_val, 2.56, epsilon = 1e-5);
    assert_eq!(sgd.global_step(), 2);
}

#[test]
fn test_sgd_only_updates_own_params() {
    let graph = Graph::new();
    let a = graph
        .variable(&Scope::new("A"), "w", &[1, 1], Init::Constant(1.0))
        .unwrap();
    let b = graph
        .variable(&Scope::new("B"), "w", &[1, 1], Init::Constant(1.0))
        .unwrap();
    let loss = a.try_add(&b).unwrap().mean().unwrap();

    let mut opt = optimizer(&graph, Some(graph.trainable_vars("A")), 0.5);
    opt.minimize(&loss).unwrap();
    assert_eq!(a.value().unwrap().unwrap(), Tensor::scalar(0.5));
    assert_eq!(b.value().unwrap().unwrap(), Tensor::scalar(1.0));
    assert_eq!(opt.params(), &[a.node_id()]);
}

#[test]
fn test_optimizer_defaults_to_all_registered_params() {
    let graph = Graph::new();
    graph.variable(&Scope::new("A"), "w", &[1, 1], Init::Zeros).unwrap();
    graph.variable(&Scope::new("B"), "w", &[1, 1], Init::Zeros).unwrap();
    let opt = optimizer(&graph, None, 0.03);
    assert_eq!(opt.params().len(), 2);

    // 之后登记的参数不在其中
    graph.variable(&Scope::new("C"), "w", &[1, 1], Init::Zeros).unwrap();
    assert_eq!(opt.params().len(), 2);
}

#[test]
fn test_learning_rate_decays_with_global_step() {
    let graph = Graph::new();
    let p = graph
        .variable(&Scope::new("p"), "w", &[1, 1], Init::Constant(0.0))
        .unwrap();
    let loss = p.mean().unwrap();
    let mut opt = optimizer(&graph, None, 0.03);
    for _ in 0..150 {
        opt.minimize(&loss).unwrap();
    }
    assert_eq!(opt.global_step(), 150);
    assert_abs_diff_eq!(opt.learning_rate(), 0.03 * DECAY_RATE, epsilon = 1e-8);
    // 每步 dloss/dp = 1，前150步学习率恒为0.03
    assert_abs_diff_eq!(
        p.value().unwrap().unwrap().get_data_number().unwrap(),
        -4.5,
        epsilon = 1e-4
    );
}

#[test]
fn test_step_skips_params_without_grad() {
    let graph = Graph::new();
    let p = graph
        .variable(&Scope::new("p"), "w", &[1, 1], Init::Constant(3.0))
        .unwrap();
    let mut sgd = SGD::with_constant_lr(&graph, &[p.clone()], 0.1);
    sgd.zero_grad().unwrap();
    sgd.step().unwrap();
    assert_eq!(p.value().unwrap().unwrap(), Tensor::scalar(3.0));
}
