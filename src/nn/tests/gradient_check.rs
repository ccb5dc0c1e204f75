/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 数值梯度检查：用中心差分验证各节点的 VJP 实现
 */

use crate::nn::{
    linear, minibatch, Graph, Init, LinearInit, Scope, Var, VarActivationOps, VarLossOps,
    VarReduceOps,
};
use crate::tensor::Tensor;

const EPS: f32 = 1e-3;
const TOLERANCE: f32 = 5e-3;

/// 对`params`中的每个元素做中心差分，并与反向传播得到的梯度比较
fn check_gradients(loss: &Var, params: &[Var]) {
    loss.backward().unwrap();
    let analytic: Vec<Tensor> = params
        .iter()
        .map(|p| p.grad().unwrap().expect("参数应有梯度"))
        .collect();

    for (param, analytic_grad) in params.iter().zip(&analytic) {
        let original = param.value().unwrap().unwrap();
        let shape = original.shape().to_vec();
        let data = original.to_vec();
        let analytic_data = analytic_grad.to_vec();

        for i in 0..data.len() {
            let mut plus = data.clone();
            plus[i] += EPS;
            param.set_value(&Tensor::new(&plus, &shape)).unwrap();
            loss.forward().unwrap();
            let loss_plus = loss.item().unwrap();

            let mut minus = data.clone();
            minus[i] -= EPS;
            param.set_value(&Tensor::new(&minus, &shape)).unwrap();
            loss.forward().unwrap();
            let loss_minus = loss.item().unwrap();

            let numeric = (loss_plus - loss_minus) / (2.0 * EPS);
            let diff = (numeric - analytic_data[i]).abs();
            let scale = numeric.abs().max(analytic_data[i].abs()).max(1.0);
            assert!(
                diff / scale < TOLERANCE,
                "参数{}第{i}个元素的梯度不一致：数值{numeric}，解析{}",
                param.name().unwrap(),
                analytic_data[i]
            );
        }
        param.set_value(&original).unwrap();
    }
}

fn column_input(graph: &Graph, data: &[f32]) -> Var {
    graph.input(&Tensor::column(data)).unwrap()
}

#[test]
fn test_linear_tanh_sigmoid_mean() {
    let graph = Graph::new_with_seed(7);
    let x = column_input(&graph, &[-1.0, 0.5, 2.0]);
    let scope = Scope::new("net");

    let h = linear(&x, 4, &scope.child("l1"), LinearInit::default())
        .unwrap()
        .tanh()
        .unwrap();
    let out = linear(&h, 1, &scope.child("l2"), LinearInit::default())
        .unwrap()
        .sigmoid()
        .unwrap();
    let loss = out.mean().unwrap();

    check_gradients(&loss, &graph.trainable_vars("net"));
}

#[test]
fn test_softplus_exp_ln_abs() {
    let graph = Graph::new_with_seed(11);
    let x = column_input(&graph, &[-1.5, -0.2, 0.7, 1.3]);
    let scope = Scope::new("f");

    // ln(softplus(.)) 保证 ln 的输入为正；abs 的输入远离0
    let a = linear(&x, 2, &scope.child("l1"), LinearInit::with_stddev(0.5)).unwrap();
    let b = a.softplus().unwrap().ln().unwrap();
    let c = a.scalar_mul(0.5).unwrap().exp().unwrap();
    let d = graph
        .constant(&Tensor::full(3.0, &[1, 2]))
        .unwrap()
        .try_add(&a)
        .unwrap()
        .abs()
        .unwrap();
    let loss = b
        .try_add(&c)
        .unwrap()
        .try_sub(&d)
        .unwrap()
        .sum_axis(1)
        .unwrap()
        .mean()
        .unwrap();

    check_gradients(&loss, &graph.trainable_vars("f"));
}

#[test]
fn test_mse_loss() {
    let graph = Graph::new_with_seed(3);
    let x = column_input(&graph, &[0.1, 0.4, -0.3]);
    let target = column_input(&graph, &[1.0, -1.0, 0.5]);
    let pred = linear(&x, 1, &Scope::new("reg"), LinearInit::default()).unwrap();
    let loss = pred.mse_loss(&target).unwrap();

    check_gradients(&loss, &graph.trainable_vars("reg"));
}

#[test]
fn test_gan_style_loss() {
    // -mean(ln(D) + ln(1 - D))
    let graph = Graph::new_with_seed(5);
    let x = column_input(&graph, &[3.5, 4.0, 4.5]);
    let d = linear(&x, 1, &Scope::new("d"), LinearInit::with_stddev(0.1))
        .unwrap()
        .sigmoid()
        .unwrap();
    let ones = graph.constant(&Tensor::ones(&[3, 1])).unwrap();
    let loss = d
        .ln()
        .unwrap()
        .try_add(&ones.try_sub(&d).unwrap().ln().unwrap())
        .unwrap()
        .neg()
        .unwrap()
        .mean()
        .unwrap();

    check_gradients(&loss, &graph.trainable_vars("d"));
}

#[test]
fn test_minibatch_features() {
    let graph = Graph::new_with_seed(13);
    let x = graph
        .input(&Tensor::new(&[0.3, -0.8, 1.1, 0.2, -0.5, 0.9], &[3, 2]))
        .unwrap();
    let scope = Scope::new("mb");
    // 较大的标准差让样本间距离远离0，避免 abs 的不可导点
    let h = linear(&x, 3, &scope.child("l0"), LinearInit::with_stddev(1.0)).unwrap();
    let features = minibatch(&h, &scope).unwrap();
    assert_eq!(features.value_expected_shape().unwrap(), vec![3, 8]);
    let loss = features.sum_axis(1).unwrap().mean().unwrap();

    // minibatch 内部 l1 的权重用的是0.02的小标准差，放大后再检查
    let inner_w = graph.trainable_vars("mb/minibatch")[0].clone();
    let w = inner_w.value().unwrap().unwrap();
    inner_w
        .set_value(&Tensor::new(
            &w.to_vec().iter().map(|v| v * 50.0).collect::<Vec<_>>(),
            w.shape(),
        ))
        .unwrap();

    check_gradients(&loss, &graph.trainable_vars("mb"));
}

#[test]
fn test_shared_parent_accumulates_gradient() {
    // y = mean(w * 2 + w)，dy/dw = 3/n
    let graph = Graph::new();
    let w = graph
        .variable(&Scope::new("s"), "w", &[1, 2], Init::Constant(1.0))
        .unwrap();
    let loss = w
        .scalar_mul(2.0)
        .unwrap()
        .try_add(&w)
        .unwrap()
        .mean()
        .unwrap();
    loss.backward().unwrap();
    assert_eq!(w.grad().unwrap().unwrap(), Tensor::new(&[1.5, 1.5], &[1, 2]));

    check_gradients(&loss, &[w]);
}
