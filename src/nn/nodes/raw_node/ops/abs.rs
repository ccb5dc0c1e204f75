use crate::nn::nodes::raw_node::{check_parents_count, TraitNode};
use crate::nn::GraphError;
use crate::tensor::Tensor;

/// 绝对值节点：|x|
///
/// backward: sign(x)（x == 0 处取次梯度0）
pub(in crate::nn) struct Abs {
    shape: Vec<usize>,
}

impl Abs {
    pub(in crate::nn) fn new(parent_shapes: &[&[usize]]) -> Result<Self, GraphError> {
        check_parents_count("Abs", parent_shapes, 1)?;
        Ok(Self {
            shape: parent_shapes[0].to_vec(),
        })
    }
}

impl TraitNode for Abs {
    fn type_name(&self) -> &'static str {
        "Abs"
    }

    fn value_expected_shape(&self) -> &[usize] {
        &self.shape
    }

    fn calc_value_by_parents(&mut self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        Ok(parents[0].abs())
    }

    fn calc_grad_to_parent(
        &self,
        _parent_index: usize,
        parents: &[&Tensor],
        _value: &Tensor,
        upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError> {
        Ok(upstream_grad * &parents[0].sign())
    }
}
