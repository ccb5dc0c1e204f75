/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 张量模块。底层数据使用ndarray的动态维度数组，
 *                 只提供本项目（一维GAN）计算图所需的运算。
 */

use ndarray::{Array, ArrayD, IxDyn};
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

use crate::errors::TensorError;

mod ops {
    pub mod arithmetic;
    pub mod math;
}

mod shape;

pub use ops::arithmetic::broadcast_shape;

#[cfg(test)]
mod tests;

/// 定义张量的结构体。其可以是标量、向量、矩阵或更高维度的数组。
/// 注：计算图中的标量统一使用形状`[1, 1]`的张量表示。
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    data: ArrayD<f32>,
}

impl Tensor {
    /// 创建一个张量，`data`的长度必须和`shape`中所有元素的乘积相等，否则panic。
    /// 需要错误处理的场景请使用[`Tensor::try_new`]。
    pub fn new(data: &[f32], shape: &[usize]) -> Self {
        Self::try_new(data, shape).unwrap_or_else(|e| panic!("{}", e))
    }

    pub fn try_new(data: &[f32], shape: &[usize]) -> Result<Self, TensorError> {
        let data = Array::from_shape_vec(IxDyn(shape), data.to_vec()).map_err(|_| {
            TensorError::DataShapeMismatch {
                data_len: data.len(),
                shape: shape.to_vec(),
            }
        })?;
        Ok(Self { data })
    }

    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            data: ArrayD::zeros(IxDyn(shape)),
        }
    }

    pub fn ones(shape: &[usize]) -> Self {
        Self {
            data: ArrayD::ones(IxDyn(shape)),
        }
    }

    /// 所有元素都为`value`的张量
    pub fn full(value: f32, shape: &[usize]) -> Self {
        Self {
            data: ArrayD::from_elem(IxDyn(shape), value),
        }
    }

    /// 形状为`[1, 1]`的标量张量
    pub fn scalar(value: f32) -> Self {
        Self::full(value, &[1, 1])
    }

    /// 列向量`[n, 1]`，计算图中一个batch的一维样本都以这种形状喂入
    pub fn column(data: &[f32]) -> Self {
        Self::new(data, &[data.len(), 1])
    }

    /// 服从正态分布N(mean, std_dev²)的随机张量（使用指定的RNG以保证可重复性）
    ///
    /// `std_dev`须为非负有限值，否则panic。
    pub fn normal_with_rng<R: Rng + ?Sized>(
        mean: f32,
        std_dev: f32,
        shape: &[usize],
        rng: &mut R,
    ) -> Self {
        let normal = Normal::new(mean, std_dev)
            .unwrap_or_else(|e| panic!("无效的正态分布参数(mean={mean}, std={std_dev})：{e}"));
        let data = ArrayD::from_shape_simple_fn(IxDyn(shape), || normal.sample(&mut *rng));
        Self { data }
    }

    /// 值在[min, max)区间内均匀分布的随机张量
    pub fn uniform_with_rng<R: Rng + ?Sized>(
        min: f32,
        max: f32,
        shape: &[usize],
        rng: &mut R,
    ) -> Self {
        let uniform = Uniform::new(min, max);
        let data = ArrayD::from_shape_simple_fn(IxDyn(shape), || uniform.sample(&mut *rng));
        Self { data }
    }

    pub(crate) fn from_array(data: ArrayD<f32>) -> Self {
        Self { data }
    }
}

// ========== 属性 ==========

impl Tensor {
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn dimension(&self) -> usize {
        self.data.ndim()
    }

    /// 元素个数
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &ArrayD<f32> {
        &self.data
    }

    /// 若张量只含一个元素，则返回该元素，否则返回None
    pub fn get_data_number(&self) -> Option<f32> {
        if self.size() == 1 {
            self.data.iter().next().copied()
        } else {
            None
        }
    }

    /// 按逻辑顺序（行优先）展开为Vec
    pub fn to_vec(&self) -> Vec<f32> {
        self.data.iter().copied().collect()
    }

    /// 对`[rows, cols]`形状的张量按下标取值
    pub fn get(&self, index: &[usize]) -> Option<f32> {
        self.data.get(IxDyn(index)).copied()
    }

    pub fn has_non_finite(&self) -> bool {
        self.data.iter().any(|x| !x.is_finite())
    }
}
