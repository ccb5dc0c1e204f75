use std::fmt;

use super::raw_node::{NodeType, TraitNode};
use crate::nn::GraphError;
use crate::tensor::Tensor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// 节点句柄：节点类型（决定如何计算）+ 节点在图中的公共状态
pub(in crate::nn) struct NodeHandle {
    id: NodeId,
    name: String,
    raw_node: NodeType,
    value: Option<Tensor>,
    grad: Option<Tensor>,
    last_forward_pass_id: u64,
}

impl NodeHandle {
    pub(in crate::nn) fn new<T: Into<NodeType>>(raw_node: T) -> Self {
        Self {
            id: NodeId(0),
            name: String::new(),
            raw_node: raw_node.into(),
            value: None,
            grad: None,
            last_forward_pass_id: 0,
        }
    }

    pub(in crate::nn) fn bind_id_and_name(&mut self, id: NodeId, name: &str) {
        self.id = id;
        self.name = name.to_string();
    }

    pub(in crate::nn) fn name(&self) -> &str {
        &self.name
    }

    pub(in crate::nn) fn type_name(&self) -> &'static str {
        self.raw_node.type_name()
    }

    /// 输入/参数节点是叶子节点，其值只能手动设置
    pub(in crate::nn) const fn is_leaf(&self) -> bool {
        matches!(self.raw_node, NodeType::Input(_) | NodeType::Parameter(_))
    }

    pub(in crate::nn) const fn is_parameter(&self) -> bool {
        matches!(self.raw_node, NodeType::Parameter(_))
    }

    pub(in crate::nn) fn value_expected_shape(&self) -> &[usize] {
        self.raw_node.value_expected_shape()
    }

    // ========== 值 ==========

    pub(in crate::nn) const fn value(&self) -> Option<&Tensor> {
        self.value.as_ref()
    }

    pub(in crate::nn) const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// 设置叶子节点的值（形状必须与节点创建时的形状一致）
    pub(in crate::nn) fn set_value(&mut self, value: Option<&Tensor>) -> Result<(), GraphError> {
        if !self.is_leaf() {
            return Err(GraphError::InvalidOperation(format!(
                "{self}的值只能通过前向传播计算得到，不能直接设置"
            )));
        }
        if let Some(value) = value {
            if value.shape() != self.value_expected_shape() {
                return Err(GraphError::ShapeMismatch {
                    expected: self.value_expected_shape().to_vec(),
                    got: value.shape().to_vec(),
                    message: format!("{self}被设置的值形状与节点形状不一致"),
                });
            }
        }
        self.value = value.cloned();
        Ok(())
    }

    pub(in crate::nn) const fn last_forward_pass_id(&self) -> u64 {
        self.last_forward_pass_id
    }

    pub(in crate::nn) fn set_last_forward_pass_id(&mut self, pass_id: u64) {
        self.last_forward_pass_id = pass_id;
    }

    /// 根据父节点的值计算本节点的值
    pub(in crate::nn) fn calc_value_by_parents(
        &mut self,
        parents: &[&Tensor],
    ) -> Result<(), GraphError> {
        let value = self.raw_node.calc_value_by_parents(parents)?;
        self.value = Some(value);
        Ok(())
    }

    // ========== 梯度 ==========

    pub(in crate::nn) const fn grad(&self) -> Option<&Tensor> {
        self.grad.as_ref()
    }

    /// 累加梯度（同一节点被多个子节点使用时，梯度相加）
    pub(in crate::nn) fn accumulate_grad(&mut self, grad: &Tensor) -> Result<(), GraphError> {
        if grad.shape() != self.value_expected_shape() {
            return Err(GraphError::ShapeMismatch {
                expected: self.value_expected_shape().to_vec(),
                got: grad.shape().to_vec(),
                message: format!("{self}收到的梯度形状与节点形状不一致"),
            });
        }
        self.grad = Some(match self.grad.take() {
            Some(existing) => existing.try_add(grad)?,
            None => grad.clone(),
        });
        Ok(())
    }

    pub(in crate::nn) fn clear_grad(&mut self) {
        self.grad = None;
    }

    /// 计算本节点对第`parent_index`个父节点的梯度（VJP）
    pub(in crate::nn) fn calc_grad_to_parent(
        &self,
        parent_index: usize,
        parents: &[&Tensor],
        upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError> {
        let value = self.value.as_ref().ok_or_else(|| {
            GraphError::ComputationError(format!("{self}没有值，无法计算梯度，请先执行 forward"))
        })?;
        self.raw_node
            .calc_grad_to_parent(parent_index, parents, value, upstream_grad)
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "节点[id={}, name={}, type={}]",
            self.id.0,
            self.name,
            self.type_name()
        )
    }
}
