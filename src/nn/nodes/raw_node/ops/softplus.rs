use crate::nn::nodes::raw_node::{check_parents_count, TraitNode};
use crate::nn::GraphError;
use crate::tensor::Tensor;

/// SoftPlus激活函数节点
///
/// forward: f(x) = ln(1 + e^x)
/// backward: f'(x) = sigmoid(x)，需要父节点的值
pub(in crate::nn) struct SoftPlus {
    shape: Vec<usize>,
}

impl SoftPlus {
    pub(in crate::nn) fn new(parent_shapes: &[&[usize]]) -> Result<Self, GraphError> {
        check_parents_count("SoftPlus", parent_shapes, 1)?;
        Ok(Self {
            shape: parent_shapes[0].to_vec(),
        })
    }
}

impl TraitNode for SoftPlus {
    fn type_name(&self) -> &'static str {
        "SoftPlus"
    }

    fn value_expected_shape(&self) -> &[usize] {
        &self.shape
    }

    fn calc_value_by_parents(&mut self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        Ok(parents[0].softplus())
    }

    fn calc_grad_to_parent(
        &self,
        _parent_index: usize,
        parents: &[&Tensor],
        _value: &Tensor,
        upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError> {
        Ok(upstream_grad * &parents[0].sigmoid())
    }
}
