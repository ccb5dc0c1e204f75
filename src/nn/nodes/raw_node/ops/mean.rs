use crate::nn::nodes::raw_node::{check_parents_count, TraitNode};
use crate::nn::GraphError;
use crate::tensor::Tensor;

/// 全局平均节点：所有元素求平均，输出`[1, 1]`的标量（同 `reduce_mean(x)`）
///
/// backward: 每个元素的梯度都是 upstream / n
pub(in crate::nn) struct Mean {
    shape: Vec<usize>,
    parent_shape: Vec<usize>,
}

impl Mean {
    pub(in crate::nn) fn new(parent_shapes: &[&[usize]]) -> Result<Self, GraphError> {
        check_parents_count("Mean", parent_shapes, 1)?;
        Ok(Self {
            shape: vec![1, 1],
            parent_shape: parent_shapes[0].to_vec(),
        })
    }
}

impl TraitNode for Mean {
    fn type_name(&self) -> &'static str {
        "Mean"
    }

    fn value_expected_shape(&self) -> &[usize] {
        &self.shape
    }

    fn calc_value_by_parents(&mut self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        Ok(Tensor::scalar(parents[0].mean()))
    }

    fn calc_grad_to_parent(
        &self,
        _parent_index: usize,
        _parents: &[&Tensor],
        _value: &Tensor,
        upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError> {
        let n = self.parent_shape.iter().product::<usize>() as f32;
        let upstream = upstream_grad.get_data_number().ok_or_else(|| {
            GraphError::ComputationError(format!(
                "Mean节点的上游梯度应为标量，但形状为{:?}",
                upstream_grad.shape()
            ))
        })?;
        Ok(Tensor::full(upstream / n, &self.parent_shape))
    }
}
