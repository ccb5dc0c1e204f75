/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 负责神经网络（neural network）的构建：计算图、节点、变量句柄、层与优化器
 */

mod graph;
pub mod layer;
mod nodes;
pub mod optimizer;
mod scope;
mod var;
mod var_ops;

pub use graph::{Graph, GraphError, GraphInner};
pub use layer::{linear, minibatch, Linear, LinearInit};
pub use nodes::NodeId;
pub use optimizer::{optimizer, LearningRateSchedule, Optimizer, SGD};
pub use scope::{Scope, ScopeMode};
pub use var::{Init, Var};
pub use var_ops::{VarActivationOps, VarLossOps, VarMatrixOps, VarReduceOps, VarShapeOps};

#[cfg(test)]
mod tests;
