/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : Minibatch Discrimination 特征层
 *
 * 让判别器看到 batch 内样本之间的相似度，以缓解生成器的模式坍塌：
 * 1. 线性映射到 K×D 维，变形为 [batch, K, D]
 * 2. 所有样本两两之间在每个核上的 L1 距离：[batch, K, batch]
 * 3. 对 exp(-距离) 沿 batch 求和（含自身）：[batch, K]
 * 4. 与输入拼接：[batch, features + K]
 */

use super::{linear, LinearInit};
use crate::nn::{
    GraphError, Scope, Var, VarActivationOps, VarReduceOps, VarShapeOps,
};

pub const MINIBATCH_NUM_KERNELS: usize = 5;
pub const MINIBATCH_KERNEL_DIM: usize = 5;

/// 在`scope/minibatch`下构建 minibatch discrimination 特征，并与输入拼接
pub fn minibatch(input: &Var, scope: &Scope) -> Result<Var, GraphError> {
    let scope = scope.child("minibatch");
    let batch_size = input.value_expected_shape()?[0];

    let x = linear(
        input,
        MINIBATCH_NUM_KERNELS * MINIBATCH_KERNEL_DIM,
        &scope.child("l1"),
        LinearInit::with_stddev(0.02),
    )?;
    let activation = x.reshape(&[batch_size, MINIBATCH_NUM_KERNELS, MINIBATCH_KERNEL_DIM])?;

    // [batch, K, D, 1] - [1, K, D, batch] => [batch, K, D, batch]
    let diffs = activation
        .unsqueeze(3)?
        .try_sub(&activation.permute(&[1, 2, 0])?.unsqueeze(0)?)?;
    let abs_diffs = diffs.abs()?.sum_axis(2)?;
    let features = abs_diffs.neg()?.exp()?.sum_axis(2)?;

    input.concat(&[&features], 1)
}
