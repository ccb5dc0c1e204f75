use crate::nn::nodes::raw_node::{check_parents_count, TraitNode};
use crate::nn::GraphError;
use crate::tensor::Tensor;

/// 自然对数节点：ln(x)
///
/// 对非正数取对数不做保护，结果为-inf/NaN并继续向后传播。
/// backward: d(ln x)/dx = 1 / x
pub(in crate::nn) struct Ln {
    shape: Vec<usize>,
}

impl Ln {
    pub(in crate::nn) fn new(parent_shapes: &[&[usize]]) -> Result<Self, GraphError> {
        check_parents_count("Ln", parent_shapes, 1)?;
        Ok(Self {
            shape: parent_shapes[0].to_vec(),
        })
    }
}

impl TraitNode for Ln {
    fn type_name(&self) -> &'static str {
        "Ln"
    }

    fn value_expected_shape(&self) -> &[usize] {
        &self.shape
    }

    fn calc_value_by_parents(&mut self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        Ok(parents[0].ln())
    }

    fn calc_grad_to_parent(
        &self,
        _parent_index: usize,
        parents: &[&Tensor],
        _value: &Tensor,
        upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError> {
        Ok(upstream_grad * &parents[0].recip())
    }
}
