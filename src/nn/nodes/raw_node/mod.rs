/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 各类节点的具体计算实现。
 *                 每类节点只负责：
 *                 1. 根据父节点的值计算本节点的值；
 *                 2. 给定上游梯度，计算对某个父节点的梯度（VJP）。
 *                 值/梯度的存储与累加由 NodeHandle 统一负责。
 */

mod input;
mod loss;
mod ops;
mod parameter;

pub(in crate::nn) use input::Input;
pub(in crate::nn) use loss::*;
pub(in crate::nn) use ops::*;
pub(in crate::nn) use parameter::Parameter;

use enum_dispatch::enum_dispatch;

use crate::nn::GraphError;
use crate::tensor::Tensor;

#[enum_dispatch]
pub(in crate::nn) enum NodeType {
    Input(Input),
    Parameter(Parameter),
    Add(Add),
    Subtract(Subtract),
    MatMul(MatMul),
    ScalarMultiply(ScalarMultiply),
    Tanh(Tanh),
    Sigmoid(Sigmoid),
    SoftPlus(SoftPlus),
    Exp(Exp),
    Ln(Ln),
    Abs(Abs),
    Reshape(Reshape),
    Permute(Permute),
    SumAxis(SumAxis),
    Mean(Mean),
    Concat(Concat),
    MseLoss(MseLoss),
}

#[enum_dispatch(NodeType)]
pub(in crate::nn) trait TraitNode {
    /// 节点类型名，用于显示以及自动生成节点名
    fn type_name(&self) -> &'static str;

    /// 节点值的形状，在节点创建时就已确定
    fn value_expected_shape(&self) -> &[usize];

    /// 根据父节点的值计算本节点的值（调用方保证父节点的值均已算好）
    fn calc_value_by_parents(&mut self, parents: &[&Tensor]) -> Result<Tensor, GraphError>;

    /// 给定本节点的值与上游梯度，计算对第`parent_index`个父节点的梯度
    fn calc_grad_to_parent(
        &self,
        parent_index: usize,
        parents: &[&Tensor],
        value: &Tensor,
        upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError>;
}

/// 检查父节点数量，供各节点的构造函数使用
pub(in crate::nn) fn check_parents_count(
    type_name: &str,
    parent_shapes: &[&[usize]],
    expected: usize,
) -> Result<(), GraphError> {
    if parent_shapes.len() != expected {
        return Err(GraphError::InvalidOperation(format!(
            "{type_name}节点需要{expected}个父节点，但得到{}个",
            parent_shapes.len()
        )));
    }
    Ok(())
}

/// 叶子节点没有父节点，不参与前向计算，也不向父节点传播梯度
fn leaf_error(type_name: &str) -> GraphError {
    GraphError::InvalidOperation(format!(
        "{type_name}节点的值应通过 set_value 设置，而非通过父节点前向传播计算"
    ))
}
