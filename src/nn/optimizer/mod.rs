/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 优化器模块：梯度下降 + 学习率衰减
 */

mod schedule;
mod sgd;

pub use schedule::LearningRateSchedule;
pub use sgd::SGD;

use crate::nn::{Graph, GraphError, Var};

/// 学习率每隔`DECAY_STEPS`步乘以`DECAY_RATE`（阶梯式）
pub const DECAY_RATE: f32 = 0.95;
pub const DECAY_STEPS: u64 = 150;

/// Optimizer trait
///
/// - Optimizer 绑定特定参数（通过 Var）
/// - `step()` 只更新 Optimizer 绑定的参数
///
/// ```ignore
/// let mut opt = optimizer(&graph, Some(graph.trainable_vars("Disc")), 0.03);
/// let loss_val = opt.minimize(&loss_d)?;
/// ```
pub trait Optimizer {
    /// 清零所绑定参数的梯度
    fn zero_grad(&mut self) -> Result<(), GraphError>;

    /// 按当前学习率更新参数，并把全局步数加1
    fn step(&mut self) -> Result<(), GraphError>;

    /// 一步完成：forward + backward + step，返回更新前的 loss 值
    fn minimize(&mut self, loss: &Var) -> Result<f32, GraphError>;

    /// 当前步数对应的学习率
    fn learning_rate(&self) -> f32;

    /// 已执行的更新次数
    fn global_step(&self) -> u64;
}

/// 创建带阶梯式指数衰减的梯度下降优化器
///
/// `params`为`None`时，优化此刻图中已登记的全部参数。
pub fn optimizer(graph: &Graph, params: Option<Vec<Var>>, init_lr: f32) -> SGD {
    let params = params.unwrap_or_else(|| graph.trainable_vars(""));
    SGD::new(
        graph,
        &params,
        LearningRateSchedule::ExponentialDecay {
            init_lr,
            decay_rate: DECAY_RATE,
            decay_steps: DECAY_STEPS,
            staircase: true,
        },
    )
}

#[cfg(test)]
mod tests;
