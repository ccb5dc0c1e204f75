/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : GraphInner VJP 反向传播
 */

use super::super::error::GraphError;
use super::GraphInner;
use crate::nn::NodeId;
use crate::tensor::Tensor;
use std::collections::HashSet;

impl GraphInner {
    // ========== VJP 反向传播核心 ==========

    /// 从标量损失节点反向传播，返回损失值
    ///
    /// 调用前须已对`loss`执行 forward。每次反向传播前会清空所有梯度，
    /// 因此参数的梯度只反映本次损失。
    pub fn backward(&mut self, loss: NodeId) -> Result<f32, GraphError> {
        let loss_node = self.get_node(loss)?;
        let loss_value = loss_node.value().ok_or_else(|| {
            GraphError::ComputationError(format!("损失{loss_node}没有值，请先执行 forward"))
        })?;
        let loss_scalar = loss_value.get_data_number().ok_or_else(|| {
            GraphError::InvalidOperation(format!(
                "反向传播要求损失为标量 [1, 1]，但得到 {:?}",
                loss_value.shape()
            ))
        })?;
        let loss_grad = Tensor::ones(loss_value.shape());

        self.clear_all_grads();
        self.get_node_mut(loss)?.accumulate_grad(&loss_grad)?;

        let topo_order = self.topological_sort_backward(loss)?;
        for node_id in topo_order {
            self.propagate_grad_to_parents(node_id)?;
        }

        self.last_backward_pass_id += 1;
        Ok(loss_scalar)
    }

    /// 反向拓扑排序：每个节点都排在它的所有子节点（在损失子图内）之后
    fn topological_sort_backward(&self, loss_id: NodeId) -> Result<Vec<NodeId>, GraphError> {
        let mut visited = HashSet::new();
        let mut post_order = Vec::new();
        // (节点, 父节点是否已展开)
        let mut stack = vec![(loss_id, false)];

        while let Some((node_id, expanded)) = stack.pop() {
            if expanded {
                post_order.push(node_id);
                continue;
            }
            if !visited.insert(node_id) {
                continue;
            }
            stack.push((node_id, true));
            for parent_id in self.get_node_parents(node_id)? {
                if !visited.contains(&parent_id) {
                    stack.push((parent_id, false));
                }
            }
        }

        post_order.reverse();
        Ok(post_order)
    }

    /// 把节点已累加好的梯度传给它的父节点（输入节点不接收梯度）
    fn propagate_grad_to_parents(&mut self, node_id: NodeId) -> Result<(), GraphError> {
        let node = self.get_node(node_id)?;
        if node.is_leaf() {
            return Ok(());
        }
        let Some(upstream_grad) = node.grad() else {
            return Ok(());
        };

        let parents_ids = self.get_node_parents(node_id)?;
        let parent_values = self.collect_parent_values(&parents_ids)?;
        let mut parent_grads = Vec::with_capacity(parents_ids.len());
        for (parent_index, &parent_id) in parents_ids.iter().enumerate() {
            let parent = self.get_node(parent_id)?;
            if parent.is_leaf() && !parent.is_parameter() {
                continue;
            }
            let grad = node.calc_grad_to_parent(parent_index, &parent_values, upstream_grad)?;
            parent_grads.push((parent_id, grad));
        }

        for (parent_id, grad) in parent_grads {
            self.get_node_mut(parent_id)?.accumulate_grad(&grad)?;
        }
        Ok(())
    }
}
