/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 生成器与判别器网络结构
 */

use crate::nn::{linear, minibatch, GraphError, LinearInit, Scope, Var, VarActivationOps};

/// 隐藏层宽度（判别器的隐藏层为其2倍）
pub const MLP_HIDDEN_SIZE: usize = 4;

/// 生成器：`l1`(hidden_dim) + softplus -> `l2`(1)，输出不加激活
///
/// 参数登记在`{scope}/generator/...`下。
pub fn generator(input: &Var, scope: &Scope, hidden_dim: usize) -> Result<Var, GraphError> {
    let scope = scope.child("generator");
    let h0 = linear(input, hidden_dim, &scope.child("l1"), LinearInit::default())?.softplus()?;
    linear(&h0, 1, &scope.child("l2"), LinearInit::default())
}

/// 判别器：`l1`、`l2`(2×hidden_dim) + tanh，
/// 接着是`l3`(2×hidden_dim) + tanh 或 minibatch 特征层（二选一），
/// 最后`l4`(1) + sigmoid 输出"是真实数据"的概率
///
/// 参数登记在`{scope}/discriminator/...`下；`scope`为复用模式时共享同名参数。
pub fn discriminator(
    input: &Var,
    scope: &Scope,
    hidden_dim: usize,
    use_minibatch: bool,
) -> Result<Var, GraphError> {
    let scope = scope.child("discriminator");
    let init = LinearInit::default();
    let h0 = linear(input, hidden_dim * 2, &scope.child("l1"), init)?.tanh()?;
    let h1 = linear(&h0, hidden_dim * 2, &scope.child("l2"), init)?.tanh()?;
    let h2 = if use_minibatch {
        minibatch(&h1, &scope)?
    } else {
        linear(&h1, hidden_dim * 2, &scope.child("l3"), init)?.tanh()?
    };
    linear(&h2, 1, &scope.child("l4"), init)?.sigmoid()
}
