use crate::nn::nodes::raw_node::{check_parents_count, TraitNode};
use crate::nn::GraphError;
use crate::tensor::Tensor;

/// 维度交换节点：输出第i维 = 父节点第`axes[i]`维
///
/// backward: 用逆排列把上游梯度换回去
pub(in crate::nn) struct Permute {
    shape: Vec<usize>,
    axes: Vec<usize>,
    inverse_axes: Vec<usize>,
}

impl Permute {
    pub(in crate::nn) fn new(parent_shapes: &[&[usize]], axes: &[usize]) -> Result<Self, GraphError> {
        check_parents_count("Permute", parent_shapes, 1)?;
        let parent_shape = parent_shapes[0];
        let ndim = parent_shape.len();
        let mut inverse_axes = vec![usize::MAX; ndim];
        if axes.len() != ndim {
            return Err(GraphError::DimensionMismatch {
                expected: ndim,
                got: axes.len(),
                message: format!("Permute的维度排列{axes:?}长度与父节点形状{parent_shape:?}不一致"),
            });
        }
        for (i, &axis) in axes.iter().enumerate() {
            if axis >= ndim || inverse_axes[axis] != usize::MAX {
                return Err(GraphError::InvalidOperation(format!(
                    "Permute的维度排列{axes:?}不是[0, {ndim})的一个排列"
                )));
            }
            inverse_axes[axis] = i;
        }
        Ok(Self {
            shape: axes.iter().map(|&axis| parent_shape[axis]).collect(),
            axes: axes.to_vec(),
            inverse_axes,
        })
    }
}

impl TraitNode for Permute {
    fn type_name(&self) -> &'static str {
        "Permute"
    }

    fn value_expected_shape(&self) -> &[usize] {
        &self.shape
    }

    fn calc_value_by_parents(&mut self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        Ok(parents[0].permute(&self.axes)?)
    }

    fn calc_grad_to_parent(
        &self,
        _parent_index: usize,
        _parents: &[&Tensor],
        _value: &Tensor,
        upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError> {
        Ok(upstream_grad.permute(&self.inverse_axes)?)
    }
}
