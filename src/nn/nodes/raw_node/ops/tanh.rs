use crate::nn::nodes::raw_node::{check_parents_count, TraitNode};
use crate::nn::GraphError;
use crate::tensor::Tensor;

/// Tanh激活函数节点
///
/// forward: tanh(x)
/// backward: d(tanh)/dx = 1 - tanh²(x)，用本节点的值即可算出
pub(in crate::nn) struct Tanh {
    shape: Vec<usize>,
}

impl Tanh {
    pub(in crate::nn) fn new(parent_shapes: &[&[usize]]) -> Result<Self, GraphError> {
        check_parents_count("Tanh", parent_shapes, 1)?;
        Ok(Self {
            shape: parent_shapes[0].to_vec(),
        })
    }
}

impl TraitNode for Tanh {
    fn type_name(&self) -> &'static str {
        "Tanh"
    }

    fn value_expected_shape(&self) -> &[usize] {
        &self.shape
    }

    fn calc_value_by_parents(&mut self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        Ok(parents[0].tanh())
    }

    fn calc_grad_to_parent(
        &self,
        _parent_index: usize,
        _parents: &[&Tensor],
        value: &Tensor,
        upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError> {
        // 1 - tanh²(x)，逐元素乘以上游梯度
        let local_grad = Tensor::ones(value.shape()) - value.square();
        Ok(upstream_grad * &local_grad)
    }
}
