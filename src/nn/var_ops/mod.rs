/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : Var 扩展 trait 模块
 *
 * 按功能领域组织 Var 的扩展方法，用户按需 import。
 *
 * # 模块结构
 * - `activation`: 逐元素函数（tanh, sigmoid, softplus, exp, ln, abs）
 * - `loss`: 损失函数（mse_loss）
 * - `matrix`: 矩阵运算（matmul）
 * - `reduce`: 归约（sum_axis, mean）
 * - `shape`: 形状变换（reshape, permute, unsqueeze, concat）
 *
 * # 使用示例
 * ```ignore
 * use gan_1d::nn::{Var, VarActivationOps, VarMatrixOps, VarReduceOps};
 *
 * let h = x.matmul(&w)?.try_add(&b)?.tanh()?;
 * let loss = h.mean()?;
 * ```
 */

mod activation;
mod loss;
mod matrix;
mod reduce;
mod shape;

pub use activation::VarActivationOps;
pub use loss::VarLossOps;
pub use matrix::VarMatrixOps;
pub use reduce::VarReduceOps;
pub use shape::VarShapeOps;
