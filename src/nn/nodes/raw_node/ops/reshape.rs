use crate::nn::nodes::raw_node::{check_parents_count, TraitNode};
use crate::nn::GraphError;
use crate::tensor::Tensor;

/// 形状变换节点（元素按行优先顺序保持不变）
///
/// unsqueeze/expand_dims 也通过本节点实现。
/// backward: 把上游梯度变回父节点的形状
pub(in crate::nn) struct Reshape {
    shape: Vec<usize>,
    parent_shape: Vec<usize>,
}

impl Reshape {
    pub(in crate::nn) fn new(
        parent_shapes: &[&[usize]],
        target_shape: &[usize],
    ) -> Result<Self, GraphError> {
        check_parents_count("Reshape", parent_shapes, 1)?;
        let parent_shape = parent_shapes[0];
        let parent_size: usize = parent_shape.iter().product();
        let target_size: usize = target_shape.iter().product();
        if parent_size != target_size {
            return Err(GraphError::ShapeMismatch {
                expected: parent_shape.to_vec(),
                got: target_shape.to_vec(),
                message: format!(
                    "Reshape前后元素个数必须相同：{parent_size} != {target_size}"
                ),
            });
        }
        Ok(Self {
            shape: target_shape.to_vec(),
            parent_shape: parent_shape.to_vec(),
        })
    }
}

impl TraitNode for Reshape {
    fn type_name(&self) -> &'static str {
        "Reshape"
    }

    fn value_expected_shape(&self) -> &[usize] {
        &self.shape
    }

    fn calc_value_by_parents(&mut self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        Ok(parents[0].reshape(&self.shape)?)
    }

    fn calc_grad_to_parent(
        &self,
        _parent_index: usize,
        _parents: &[&Tensor],
        _value: &Tensor,
        upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError> {
        Ok(upstream_grad.reshape(&self.parent_shape)?)
    }
}
