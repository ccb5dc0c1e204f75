/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 张量的形状变换、按维度归约及矩阵乘法
 */

use ndarray::{concatenate, Axis, Ix2, IxDyn, Slice};

use crate::errors::{Operator, TensorError};
use crate::tensor::Tensor;

impl Tensor {
    /// 改变形状（按行优先的逻辑顺序重排），元素总数必须不变
    pub fn reshape(&self, shape: &[usize]) -> Result<Self, TensorError> {
        Self::try_new(&self.to_vec(), shape)
    }

    /// 交换维度，`axes`须是`[0, ndim)`的一个排列
    pub fn permute(&self, axes: &[usize]) -> Result<Self, TensorError> {
        let ndim = self.dimension();
        let mut seen = vec![false; ndim];
        if axes.len() != ndim {
            return Err(TensorError::PermuteNeedUniqueAndInRange);
        }
        for &axis in axes {
            if axis >= ndim || seen[axis] {
                return Err(TensorError::PermuteNeedUniqueAndInRange);
            }
            seen[axis] = true;
        }
        let permuted = self.data.view().permuted_axes(IxDyn(axes));
        // 保证结果是标准（行优先）内存布局
        Ok(Self::from_array(permuted.as_standard_layout().into_owned()))
    }

    /// 2维张量的转置
    pub fn transpose(&self) -> Result<Self, TensorError> {
        self.permute(&[1, 0])
    }

    /// 在`axis`处插入一个长度为1的维度
    pub fn unsqueeze(&self, axis: usize) -> Result<Self, TensorError> {
        let ndim = self.dimension();
        if axis > ndim {
            return Err(TensorError::AxisOutOfRange { axis, ndim });
        }
        Ok(Self::from_array(self.data.clone().insert_axis(Axis(axis))))
    }

    /// 沿`axis`求和；`keep_dims`为true时保留长度为1的该维度
    pub fn sum_axis(&self, axis: usize, keep_dims: bool) -> Result<Self, TensorError> {
        let ndim = self.dimension();
        if axis >= ndim {
            return Err(TensorError::AxisOutOfRange { axis, ndim });
        }
        let summed = self.data.sum_axis(Axis(axis));
        let summed = if keep_dims {
            summed.insert_axis(Axis(axis))
        } else {
            summed
        };
        Ok(Self::from_array(summed))
    }

    /// 广播的逆运算：把（由`shape`广播得到的）张量求和归约回`shape`
    pub fn sum_to_shape(&self, shape: &[usize]) -> Result<Self, TensorError> {
        let error = || TensorError::OperatorError {
            operator: Operator::Add,
            tensor1_shape: self.shape().to_vec(),
            tensor2_shape: shape.to_vec(),
        };
        if shape.len() > self.dimension() {
            return Err(error());
        }
        let mut result = self.clone();
        // 1. 先把多出来的前导维度求和掉
        while result.dimension() > shape.len() {
            result = result.sum_axis(0, false)?;
        }
        // 2. 再把目标中长度为1、但当前长度不为1的维度求和（保留维度）
        for (axis, &target) in shape.iter().enumerate() {
            let current = result.shape()[axis];
            if target == current {
                continue;
            }
            if target != 1 {
                return Err(error());
            }
            result = result.sum_axis(axis, true)?;
        }
        Ok(result)
    }

    /// 沿`axis`拼接多个张量，除`axis`外其余维度须一致
    pub fn concat(tensors: &[&Self], axis: usize) -> Result<Self, TensorError> {
        let first = tensors.first().ok_or(TensorError::EmptyList)?;
        let ndim = first.dimension();
        if axis >= ndim {
            return Err(TensorError::AxisOutOfRange { axis, ndim });
        }
        let views = tensors.iter().map(|t| t.data.view()).collect::<Vec<_>>();
        let data = concatenate(Axis(axis), &views).map_err(|_| TensorError::OperatorError {
            operator: Operator::Concat,
            tensor1_shape: first.shape().to_vec(),
            tensor2_shape: tensors.last().map(|t| t.shape().to_vec()).unwrap_or_default(),
        })?;
        Ok(Self::from_array(data))
    }

    /// 沿`axis`截取`[start, end)`部分
    pub fn slice_axis(&self, axis: usize, start: usize, end: usize) -> Result<Self, TensorError> {
        let ndim = self.dimension();
        if axis >= ndim {
            return Err(TensorError::AxisOutOfRange { axis, ndim });
        }
        let sliced = self
            .data
            .slice_axis(Axis(axis), Slice::from(start..end))
            .to_owned();
        Ok(Self::from_array(sliced))
    }

    /// 矩阵乘法：`[m, k] x [k, n] -> [m, n]`
    pub fn mat_mul(&self, other: &Self) -> Result<Self, TensorError> {
        let lhs = self
            .data
            .view()
            .into_dimensionality::<Ix2>()
            .map_err(|_| TensorError::MatMulNeed2Dims(self.shape().to_vec()))?;
        let rhs = other
            .data
            .view()
            .into_dimensionality::<Ix2>()
            .map_err(|_| TensorError::MatMulNeed2Dims(other.shape().to_vec()))?;
        if lhs.ncols() != rhs.nrows() {
            return Err(TensorError::OperatorError {
                operator: Operator::MatMul,
                tensor1_shape: self.shape().to_vec(),
                tensor2_shape: other.shape().to_vec(),
            });
        }
        Ok(Self::from_array(lhs.dot(&rhs).into_dyn()))
    }
}
