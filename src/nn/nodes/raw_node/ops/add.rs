use crate::nn::nodes::raw_node::{check_parents_count, TraitNode};
use crate::nn::GraphError;
use crate::tensor::{broadcast_shape, Tensor};

/// 加法节点：a + b，支持广播（如全连接层中`[batch, out] + [1, out]`的偏置）
///
/// backward: 上游梯度按广播的逆过程求和归约回各父节点的形状
pub(in crate::nn) struct Add {
    shape: Vec<usize>,
    parent_shapes: Vec<Vec<usize>>,
}

impl Add {
    pub(in crate::nn) fn new(parent_shapes: &[&[usize]]) -> Result<Self, GraphError> {
        check_parents_count("Add", parent_shapes, 2)?;
        let shape = broadcast_shape(parent_shapes[0], parent_shapes[1]).ok_or_else(|| {
            GraphError::ShapeMismatch {
                expected: parent_shapes[0].to_vec(),
                got: parent_shapes[1].to_vec(),
                message: "Add节点的两个父节点形状无法广播".to_string(),
            }
        })?;
        Ok(Self {
            shape,
            parent_shapes: parent_shapes.iter().map(|s| s.to_vec()).collect(),
        })
    }
}

impl TraitNode for Add {
    fn type_name(&self) -> &'static str {
        "Add"
    }

    fn value_expected_shape(&self) -> &[usize] {
        &self.shape
    }

    fn calc_value_by_parents(&mut self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        Ok(parents[0].try_add(parents[1])?)
    }

    fn calc_grad_to_parent(
        &self,
        parent_index: usize,
        _parents: &[&Tensor],
        _value: &Tensor,
        upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError> {
        Ok(upstream_grad.sum_to_shape(&self.parent_shapes[parent_index])?)
    }
}
