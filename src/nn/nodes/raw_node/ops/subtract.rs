use crate::nn::nodes::raw_node::{check_parents_count, TraitNode};
use crate::nn::GraphError;
use crate::tensor::{broadcast_shape, Tensor};

/// 减法节点：a - b，支持广播
///
/// backward: 对a为上游梯度，对b为上游梯度取负，再各自归约回父节点形状
pub(in crate::nn) struct Subtract {
    shape: Vec<usize>,
    parent_shapes: Vec<Vec<usize>>,
}

impl Subtract {
    pub(in crate::nn) fn new(parent_shapes: &[&[usize]]) -> Result<Self, GraphError> {
        check_parents_count("Subtract", parent_shapes, 2)?;
        let shape = broadcast_shape(parent_shapes[0], parent_shapes[1]).ok_or_else(|| {
            GraphError::ShapeMismatch {
                expected: parent_shapes[0].to_vec(),
                got: parent_shapes[1].to_vec(),
                message: "Subtract节点的两个父节点形状无法广播".to_string(),
            }
        })?;
        Ok(Self {
            shape,
            parent_shapes: parent_shapes.iter().map(|s| s.to_vec()).collect(),
        })
    }
}

impl TraitNode for Subtract {
    fn type_name(&self) -> &'static str {
        "Subtract"
    }

    fn value_expected_shape(&self) -> &[usize] {
        &self.shape
    }

    fn calc_value_by_parents(&mut self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        Ok(parents[0].try_sub(parents[1])?)
    }

    fn calc_grad_to_parent(
        &self,
        parent_index: usize,
        _parents: &[&Tensor],
        _value: &Tensor,
        upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError> {
        let grad = if parent_index == 0 {
            upstream_grad.clone()
        } else {
            -upstream_grad
        };
        Ok(grad.sum_to_shape(&self.parent_shapes[parent_index])?)
    }
}
