/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : Var 激活函数（逐元素函数）扩展 trait
 */

use crate::nn::{GraphError, Var};

/// 逐元素函数扩展 trait
///
/// ```ignore
/// use gan_1d::nn::VarActivationOps;
///
/// let h = x.softplus()?;
/// let p = logits.sigmoid()?;
/// ```
pub trait VarActivationOps {
    /// Tanh 激活
    fn tanh(&self) -> Result<Var, GraphError>;

    /// Sigmoid 激活：1 / (1 + exp(-x))
    fn sigmoid(&self) -> Result<Var, GraphError>;

    /// `SoftPlus` 激活：ln(1 + exp(x))
    fn softplus(&self) -> Result<Var, GraphError>;

    fn exp(&self) -> Result<Var, GraphError>;

    /// 自然对数，输入须为正
    fn ln(&self) -> Result<Var, GraphError>;

    fn abs(&self) -> Result<Var, GraphError>;
}

impl VarActivationOps for Var {
    fn tanh(&self) -> Result<Var, GraphError> {
        self.derive(|g| g.new_tanh_node(self.node_id(), None))
    }

    fn sigmoid(&self) -> Result<Var, GraphError> {
        self.derive(|g| g.new_sigmoid_node(self.node_id(), None))
    }

    fn softplus(&self) -> Result<Var, GraphError> {
        self.derive(|g| g.new_softplus_node(self.node_id(), None))
    }

    fn exp(&self) -> Result<Var, GraphError> {
        self.derive(|g| g.new_exp_node(self.node_id(), None))
    }

    fn ln(&self) -> Result<Var, GraphError> {
        self.derive(|g| g.new_ln_node(self.node_id(), None))
    }

    fn abs(&self) -> Result<Var, GraphError> {
        self.derive(|g| g.new_abs_node(self.node_id(), None))
    }
}
