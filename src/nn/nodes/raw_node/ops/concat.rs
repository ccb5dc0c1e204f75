use crate::nn::nodes::raw_node::TraitNode;
use crate::nn::GraphError;
use crate::tensor::Tensor;

/// 拼接节点：沿`axis`把多个父节点拼接在一起
///
/// backward: 按各父节点在该维度上的长度，把上游梯度切回去
pub(in crate::nn) struct Concat {
    shape: Vec<usize>,
    axis: usize,
    /// 每个父节点在`axis`维上的起止位置
    offsets: Vec<(usize, usize)>,
}

impl Concat {
    pub(in crate::nn) fn new(parent_shapes: &[&[usize]], axis: usize) -> Result<Self, GraphError> {
        let first = parent_shapes.first().ok_or_else(|| {
            GraphError::InvalidOperation("Concat节点至少需要1个父节点".to_string())
        })?;
        if axis >= first.len() {
            return Err(GraphError::DimensionMismatch {
                expected: axis + 1,
                got: first.len(),
                message: format!("Concat的维度{axis}超出父节点形状{first:?}"),
            });
        }

        let mut offsets = Vec::with_capacity(parent_shapes.len());
        let mut total = 0;
        for shape in parent_shapes {
            let compatible = shape.len() == first.len()
                && shape
                    .iter()
                    .zip(first.iter())
                    .enumerate()
                    .all(|(i, (a, b))| i == axis || a == b);
            if !compatible {
                return Err(GraphError::ShapeMismatch {
                    expected: first.to_vec(),
                    got: shape.to_vec(),
                    message: format!("Concat节点的父节点除第{axis}维外形状必须一致"),
                });
            }
            offsets.push((total, total + shape[axis]));
            total += shape[axis];
        }

        let mut shape = first.to_vec();
        shape[axis] = total;
        Ok(Self {
            shape,
            axis,
            offsets,
        })
    }
}

impl TraitNode for Concat {
    fn type_name(&self) -> &'static str {
        "Concat"
    }

    fn value_expected_shape(&self) -> &[usize] {
        &self.shape
    }

    fn calc_value_by_parents(&mut self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        Ok(Tensor::concat(parents, self.axis)?)
    }

    fn calc_grad_to_parent(
        &self,
        parent_index: usize,
        _parents: &[&Tensor],
        _value: &Tensor,
        upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError> {
        let (start, end) = self.offsets[parent_index];
        Ok(upstream_grad.slice_axis(self.axis, start, end)?)
    }
}
