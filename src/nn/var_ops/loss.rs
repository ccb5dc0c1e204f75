/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : Var 损失函数扩展 trait
 */

use crate::nn::{GraphError, Var};

/// 损失函数扩展 trait
pub trait VarLossOps {
    /// MSE Loss（均方误差），返回`[1, 1]`的标量损失节点
    fn mse_loss(&self, target: &Var) -> Result<Var, GraphError>;
}

impl VarLossOps for Var {
    fn mse_loss(&self, target: &Var) -> Result<Var, GraphError> {
        self.check_same_graph(target, "mse_loss")?;
        self.derive(|g| g.new_mse_loss_node(self.node_id(), target.node_id(), None))
    }
}
