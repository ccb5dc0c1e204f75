/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 梯度下降优化器实现
 */

use std::cell::RefCell;
use std::rc::Rc;

use super::{LearningRateSchedule, Optimizer};
use crate::nn::graph::GraphInner;
use crate::nn::{Graph, GraphError, NodeId, Var};

/// SGD (随机梯度下降) 优化器：θ = θ - lr(step) * ∇θ
///
/// 每个优化器有自己的全局步数，互不影响。
pub struct SGD {
    graph: Rc<RefCell<GraphInner>>,
    /// 要优化的参数节点 ID
    params: Vec<NodeId>,
    schedule: LearningRateSchedule,
    global_step: u64,
}

impl SGD {
    pub fn new(graph: &Graph, params: &[Var], schedule: LearningRateSchedule) -> Self {
        Self {
            graph: graph.inner_rc(),
            params: params.iter().map(Var::node_id).collect(),
            schedule,
            global_step: 0,
        }
    }

    /// 固定学习率的 SGD
    pub fn with_constant_lr(graph: &Graph, params: &[Var], lr: f32) -> Self {
        Self::new(graph, params, LearningRateSchedule::Constant(lr))
    }

    pub fn params(&self) -> &[NodeId] {
        &self.params
    }

    pub const fn schedule(&self) -> LearningRateSchedule {
        self.schedule
    }
}

impl Optimizer for SGD {
    fn zero_grad(&mut self) -> Result<(), GraphError> {
        let mut g = self.graph.borrow_mut();
        for &node_id in &self.params {
            g.clear_node_grad(node_id)?;
        }
        Ok(())
    }

    fn step(&mut self) -> Result<(), GraphError> {
        let lr = self.learning_rate();
        let mut g = self.graph.borrow_mut();
        for &node_id in &self.params {
            let new_value = {
                let Some(grad) = g.get_node_grad(node_id)? else {
                    continue;
                };
                let current = g.get_node_value(node_id)?.ok_or_else(|| {
                    GraphError::ComputationError(format!("参数节点 {node_id:?} 没有值"))
                })?;
                current.try_sub(&(lr * grad))?
            };
            g.set_node_value(node_id, Some(&new_value))?;
        }
        self.global_step += 1;
        Ok(())
    }

    fn minimize(&mut self, loss: &Var) -> Result<f32, GraphError> {
        self.zero_grad()?;
        let loss_val = loss.backward()?;
        self.step()?;
        Ok(loss_val)
    }

    fn learning_rate(&self) -> f32 {
        self.schedule.learning_rate_at(self.global_step)
    }

    fn global_step(&self) -> u64 {
        self.global_step
    }
}
