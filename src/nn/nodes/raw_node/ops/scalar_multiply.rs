use crate::nn::nodes::raw_node::{check_parents_count, TraitNode};
use crate::nn::GraphError;
use crate::tensor::Tensor;

/// 数乘节点：c * x（c为创建时确定的常数，取-1即为取负）
pub(in crate::nn) struct ScalarMultiply {
    shape: Vec<usize>,
    scalar: f32,
}

impl ScalarMultiply {
    pub(in crate::nn) fn new(parent_shapes: &[&[usize]], scalar: f32) -> Result<Self, GraphError> {
        check_parents_count("ScalarMultiply", parent_shapes, 1)?;
        Ok(Self {
            shape: parent_shapes[0].to_vec(),
            scalar,
        })
    }
}

impl TraitNode for ScalarMultiply {
    fn type_name(&self) -> &'static str {
        "ScalarMultiply"
    }

    fn value_expected_shape(&self) -> &[usize] {
        &self.shape
    }

    fn calc_value_by_parents(&mut self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        Ok(parents[0] * self.scalar)
    }

    fn calc_grad_to_parent(
        &self,
        _parent_index: usize,
        _parents: &[&Tensor],
        _value: &Tensor,
        upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError> {
        Ok(upstream_grad * self.scalar)
    }
}
