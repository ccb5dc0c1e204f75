//! # GAN 1D
//!
//! 用纯rust自制的计算图（自动求导 + 梯度下降）训练一个一维GAN：
//! 生成器把[-8, 8]上的均匀噪声映射为高斯分布N(4, 0.5²)的样本，
//! 判别器则学习区分真实样本与生成样本。
//!
//! - [`nn`]：计算图、参数作用域、层与优化器
//! - [`gan`]：网络结构、训练流程与快照
//! - [`distribution`]：真实数据分布、噪声分布与直方图
//! - [`vision`]：把快照渲染成静态图或动图
//!

pub mod distribution;
pub mod errors;
pub mod gan;
pub mod nn;
pub mod tensor;
pub mod utils;
pub mod vision;
