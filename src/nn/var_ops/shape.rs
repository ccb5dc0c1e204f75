/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : Var 形状变换扩展 trait
 */

use crate::nn::{GraphError, Var};

/// 形状变换扩展 trait
///
/// ```ignore
/// use gan_1d::nn::VarShapeOps;
///
/// let t = x.reshape(&[12, 5, 5])?;
/// let p = t.permute(&[1, 2, 0])?;
/// let u = t.unsqueeze(3)?;
/// let joined = x.concat(&[&features], 1)?;
/// ```
pub trait VarShapeOps {
    /// 变形为指定形状，元素总数必须保持一致
    fn reshape(&self, shape: &[usize]) -> Result<Var, GraphError>;

    /// 维度重排：输出第i维 = 输入第`axes[i]`维
    fn permute(&self, axes: &[usize]) -> Result<Var, GraphError>;

    /// 在`axis`处插入一个长度为1的维度（即 expand_dims）
    fn unsqueeze(&self, axis: usize) -> Result<Var, GraphError>;

    /// 沿`axis`把自己与`others`依次拼接
    fn concat(&self, others: &[&Var], axis: usize) -> Result<Var, GraphError>;
}

impl VarShapeOps for Var {
    fn reshape(&self, shape: &[usize]) -> Result<Var, GraphError> {
        self.derive(|g| g.new_reshape_node(self.node_id(), shape, None))
    }

    fn permute(&self, axes: &[usize]) -> Result<Var, GraphError> {
        self.derive(|g| g.new_permute_node(self.node_id(), axes, None))
    }

    fn unsqueeze(&self, axis: usize) -> Result<Var, GraphError> {
        let mut shape = self.value_expected_shape()?;
        if axis > shape.len() {
            return Err(GraphError::DimensionMismatch {
                expected: axis,
                got: shape.len(),
                message: format!("unsqueeze的维度{axis}超出形状{shape:?}"),
            });
        }
        shape.insert(axis, 1);
        self.reshape(&shape)
    }

    fn concat(&self, others: &[&Var], axis: usize) -> Result<Var, GraphError> {
        let mut ids = Vec::with_capacity(others.len() + 1);
        ids.push(self.node_id());
        for other in others {
            self.check_same_graph(other, "拼接")?;
            ids.push(other.node_id());
        }
        self.derive(|g| g.new_concat_node(&ids, axis, None))
    }
}
