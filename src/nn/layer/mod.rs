/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : Layer 模块 - 组合 Var 运算构建常见网络结构
 *
 * 层的参数都通过作用域（Scope）在图的参数表中登记，
 * 因此同一个层在复用模式下再次构建时会共享同一组参数。
 */

mod linear;
mod minibatch;

pub use linear::{linear, Linear, LinearInit};
pub use minibatch::{minibatch, MINIBATCH_KERNEL_DIM, MINIBATCH_NUM_KERNELS};
