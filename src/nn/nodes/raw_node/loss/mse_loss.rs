use crate::nn::nodes::raw_node::{check_parents_count, TraitNode};
use crate::nn::GraphError;
use crate::tensor::Tensor;

/// 均方误差损失节点：mean((prediction - target)²)，输出`[1, 1]`
///
/// backward:
/// - 对 prediction：upstream * 2(prediction - target) / n
/// - 对 target：上式取负
pub(in crate::nn) struct MseLoss {
    shape: Vec<usize>,
}

impl MseLoss {
    pub(in crate::nn) fn new(parent_shapes: &[&[usize]]) -> Result<Self, GraphError> {
        check_parents_count("MseLoss", parent_shapes, 2)?;
        if parent_shapes[0] != parent_shapes[1] {
            return Err(GraphError::ShapeMismatch {
                expected: parent_shapes[0].to_vec(),
                got: parent_shapes[1].to_vec(),
                message: "MseLoss的预测值与目标值形状必须一致".to_string(),
            });
        }
        Ok(Self { shape: vec![1, 1] })
    }
}

impl TraitNode for MseLoss {
    fn type_name(&self) -> &'static str {
        "MseLoss"
    }

    fn value_expected_shape(&self) -> &[usize] {
        &self.shape
    }

    fn calc_value_by_parents(&mut self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        let diff = parents[0].try_sub(parents[1])?;
        Ok(Tensor::scalar(diff.square().mean()))
    }

    fn calc_grad_to_parent(
        &self,
        parent_index: usize,
        parents: &[&Tensor],
        _value: &Tensor,
        upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError> {
        let upstream = upstream_grad.get_data_number().ok_or_else(|| {
            GraphError::ComputationError(format!(
                "MseLoss节点的上游梯度应为标量，但形状为{:?}",
                upstream_grad.shape()
            ))
        })?;
        let diff = parents[0].try_sub(parents[1])?;
        let scale = 2.0 * upstream / diff.size() as f32;
        let grad = &diff * scale;
        Ok(if parent_index == 0 { grad } else { -grad })
    }
}
