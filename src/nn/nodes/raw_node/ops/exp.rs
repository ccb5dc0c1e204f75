use crate::nn::nodes::raw_node::{check_parents_count, TraitNode};
use crate::nn::GraphError;
use crate::tensor::Tensor;

/// 指数节点：e^x
///
/// backward: d(e^x)/dx = e^x，即本节点的值
pub(in crate::nn) struct Exp {
    shape: Vec<usize>,
}

impl Exp {
    pub(in crate::nn) fn new(parent_shapes: &[&[usize]]) -> Result<Self, GraphError> {
        check_parents_count("Exp", parent_shapes, 1)?;
        Ok(Self {
            shape: parent_shapes[0].to_vec(),
        })
    }
}

impl TraitNode for Exp {
    fn type_name(&self) -> &'static str {
        "Exp"
    }

    fn value_expected_shape(&self) -> &[usize] {
        &self.shape
    }

    fn calc_value_by_parents(&mut self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        Ok(parents[0].exp())
    }

    fn calc_grad_to_parent(
        &self,
        _parent_index: usize,
        _parents: &[&Tensor],
        value: &Tensor,
        upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError> {
        Ok(upstream_grad * value)
    }
}
