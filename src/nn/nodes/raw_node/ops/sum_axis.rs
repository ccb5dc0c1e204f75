use crate::nn::nodes::raw_node::{check_parents_count, TraitNode};
use crate::nn::GraphError;
use crate::tensor::Tensor;

/// 沿某一维度求和的节点（不保留该维度，同 `reduce_sum(x, axis)`）
///
/// backward: 在该维度处补回长度1后，把上游梯度广播回父节点形状
pub(in crate::nn) struct SumAxis {
    shape: Vec<usize>,
    axis: usize,
    parent_shape: Vec<usize>,
}

impl SumAxis {
    pub(in crate::nn) fn new(parent_shapes: &[&[usize]], axis: usize) -> Result<Self, GraphError> {
        check_parents_count("SumAxis", parent_shapes, 1)?;
        let parent_shape = parent_shapes[0];
        if axis >= parent_shape.len() {
            return Err(GraphError::DimensionMismatch {
                expected: axis + 1,
                got: parent_shape.len(),
                message: format!("SumAxis的维度{axis}超出父节点形状{parent_shape:?}"),
            });
        }
        let mut shape = parent_shape.to_vec();
        shape.remove(axis);
        Ok(Self {
            shape,
            axis,
            parent_shape: parent_shape.to_vec(),
        })
    }
}

impl TraitNode for SumAxis {
    fn type_name(&self) -> &'static str {
        "SumAxis"
    }

    fn value_expected_shape(&self) -> &[usize] {
        &self.shape
    }

    fn calc_value_by_parents(&mut self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        Ok(parents[0].sum_axis(self.axis, false)?)
    }

    fn calc_grad_to_parent(
        &self,
        _parent_index: usize,
        _parents: &[&Tensor],
        _value: &Tensor,
        upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError> {
        Ok(upstream_grad
            .unsqueeze(self.axis)?
            .broadcast_to(&self.parent_shape)?)
    }
}
