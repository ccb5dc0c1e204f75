/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : Var 归约扩展 trait
 */

use crate::nn::{GraphError, Var};

/// 归约扩展 trait
pub trait VarReduceOps {
    /// 沿`axis`求和，结果去掉该维度
    fn sum_axis(&self, axis: usize) -> Result<Var, GraphError>;

    /// 全部元素的平均值，结果为`[1, 1]`
    fn mean(&self) -> Result<Var, GraphError>;
}

impl VarReduceOps for Var {
    fn sum_axis(&self, axis: usize) -> Result<Var, GraphError> {
        self.derive(|g| g.new_sum_axis_node(self.node_id(), axis, None))
    }

    fn mean(&self) -> Result<Var, GraphError> {
        self.derive(|g| g.new_mean_node(self.node_id(), None))
    }
}
