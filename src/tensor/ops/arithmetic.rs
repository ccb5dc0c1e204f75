/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 张量的逐元素二元运算（加、减、乘），遵循numpy的广播规则。
 *                 运算符重载版本在形状不兼容时panic，`try_*`版本返回错误。
 */

use std::ops::{Add, Mul, Neg, Sub};

use ndarray::{IxDyn, Zip};

use crate::errors::{Operator, TensorError};
use crate::tensor::Tensor;

/// 按numpy规则计算两个形状广播后的形状，不兼容时返回None
pub fn broadcast_shape(shape1: &[usize], shape2: &[usize]) -> Option<Vec<usize>> {
    let ndim = shape1.len().max(shape2.len());
    let mut result = vec![0; ndim];
    for i in 0..ndim {
        // 从最后一维向前对齐
        let d1 = shape1.len().checked_sub(i + 1).map_or(1, |j| shape1[j]);
        let d2 = shape2.len().checked_sub(i + 1).map_or(1, |j| shape2[j]);
        result[ndim - 1 - i] = match (d1, d2) {
            (a, b) if a == b => a,
            (1, b) => b,
            (a, 1) => a,
            _ => return None,
        };
    }
    Some(result)
}

impl Tensor {
    fn zip_broadcast(
        &self,
        other: &Self,
        operator: Operator,
        f: impl Fn(f32, f32) -> f32,
    ) -> Result<Self, TensorError> {
        let error = || TensorError::OperatorError {
            operator,
            tensor1_shape: self.shape().to_vec(),
            tensor2_shape: other.shape().to_vec(),
        };
        let shape = broadcast_shape(self.shape(), other.shape()).ok_or_else(error)?;
        let lhs = self.data.broadcast(IxDyn(&shape)).ok_or_else(error)?;
        let rhs = other.data.broadcast(IxDyn(&shape)).ok_or_else(error)?;
        let data = Zip::from(&lhs).and(&rhs).map_collect(|&a, &b| f(a, b));
        Ok(Self::from_array(data))
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, TensorError> {
        self.zip_broadcast(other, Operator::Add, |a, b| a + b)
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, TensorError> {
        self.zip_broadcast(other, Operator::Sub, |a, b| a - b)
    }

    /// 逐元素乘法（非矩阵乘法）
    pub fn try_mul(&self, other: &Self) -> Result<Self, TensorError> {
        self.zip_broadcast(other, Operator::Mul, |a, b| a * b)
    }

    /// 广播到指定形状（用于反向传播时把梯度摊回被广播的父节点）
    pub fn broadcast_to(&self, shape: &[usize]) -> Result<Self, TensorError> {
        let view = self
            .data
            .broadcast(IxDyn(shape))
            .ok_or_else(|| TensorError::OperatorError {
                operator: Operator::Add,
                tensor1_shape: self.shape().to_vec(),
                tensor2_shape: shape.to_vec(),
            })?;
        Ok(Self::from_array(view.to_owned()))
    }
}

// ========== 运算符重载 ==========

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $try_method:ident) => {
        impl $trait for &Tensor {
            type Output = Tensor;

            fn $method(self, other: &Tensor) -> Tensor {
                self.$try_method(other).unwrap_or_else(|e| panic!("{}", e))
            }
        }

        impl $trait for Tensor {
            type Output = Tensor;

            fn $method(self, other: Tensor) -> Tensor {
                (&self).$method(&other)
            }
        }

        impl $trait<&Tensor> for Tensor {
            type Output = Tensor;

            fn $method(self, other: &Tensor) -> Tensor {
                (&self).$method(other)
            }
        }

        impl $trait<f32> for &Tensor {
            type Output = Tensor;

            fn $method(self, scalar: f32) -> Tensor {
                self.$method(&Tensor::full(scalar, &[1]))
            }
        }

        impl $trait<f32> for Tensor {
            type Output = Tensor;

            fn $method(self, scalar: f32) -> Tensor {
                (&self).$method(scalar)
            }
        }
    };
}

impl_binary_operator!(Add, add, try_add);
impl_binary_operator!(Sub, sub, try_sub);
impl_binary_operator!(Mul, mul, try_mul);

impl Mul<&Tensor> for f32 {
    type Output = Tensor;

    fn mul(self, tensor: &Tensor) -> Tensor {
        tensor * self
    }
}

impl Neg for &Tensor {
    type Output = Tensor;

    fn neg(self) -> Tensor {
        Tensor::from_array(self.data.mapv(|x| -x))
    }
}

impl Neg for Tensor {
    type Output = Tensor;

    fn neg(self) -> Tensor {
        -&self
    }
}
