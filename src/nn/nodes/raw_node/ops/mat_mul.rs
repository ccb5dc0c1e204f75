use crate::nn::nodes::raw_node::{check_parents_count, TraitNode};
use crate::nn::GraphError;
use crate::tensor::Tensor;

/// 矩阵乘法节点：`[m, k] x [k, n] -> [m, n]`
///
/// backward:
/// - 对左矩阵a：upstream · bᵀ
/// - 对右矩阵b：aᵀ · upstream
pub(in crate::nn) struct MatMul {
    shape: Vec<usize>,
}

impl MatMul {
    pub(in crate::nn) fn new(parent_shapes: &[&[usize]]) -> Result<Self, GraphError> {
        check_parents_count("MatMul", parent_shapes, 2)?;
        let (a, b) = (parent_shapes[0], parent_shapes[1]);
        for shape in [a, b] {
            if shape.len() != 2 {
                return Err(GraphError::DimensionMismatch {
                    expected: 2,
                    got: shape.len(),
                    message: format!("MatMul节点的父节点必须是2维矩阵，但得到{shape:?}"),
                });
            }
        }
        if a[1] != b[0] {
            return Err(GraphError::ShapeMismatch {
                expected: vec![a[1], b[1]],
                got: b.to_vec(),
                message: format!("MatMul节点的左矩阵{a:?}列数与右矩阵{b:?}行数不一致"),
            });
        }
        Ok(Self {
            shape: vec![a[0], b[1]],
        })
    }
}

impl TraitNode for MatMul {
    fn type_name(&self) -> &'static str {
        "MatMul"
    }

    fn value_expected_shape(&self) -> &[usize] {
        &self.shape
    }

    fn calc_value_by_parents(&mut self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        Ok(parents[0].mat_mul(parents[1])?)
    }

    fn calc_grad_to_parent(
        &self,
        parent_index: usize,
        parents: &[&Tensor],
        _value: &Tensor,
        upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError> {
        let grad = if parent_index == 0 {
            upstream_grad.mat_mul(&parents[1].transpose()?)?
        } else {
            parents[0].transpose()?.mat_mul(upstream_grad)?
        };
        Ok(grad)
    }
}
