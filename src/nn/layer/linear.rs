/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : Linear (全连接) 层
 *
 * 提供两种 API：
 * - `Linear` 结构体：持有参数，可对多个输入 forward
 * - `linear()` 函数：一次性构建并前向，返回输出 Var
 */

use crate::nn::{Graph, GraphError, Init, Scope, Var, VarMatrixOps};

/// 全连接层的初始化参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearInit {
    /// 权重`w`服从 N(0, stddev²)
    pub stddev: f32,
    /// 偏置`b`的初始常数
    pub constant: f32,
}

impl Default for LinearInit {
    fn default() -> Self {
        Self {
            stddev: 1.0,
            constant: 0.0,
        }
    }
}

impl LinearInit {
    pub const fn with_stddev(stddev: f32) -> Self {
        Self {
            stddev,
            constant: 0.0,
        }
    }
}

/// Linear (全连接) 层：`output = x @ W + b`
///
/// # 输入/输出形状
/// - 输入：[batch_size, in_features]
/// - 输出：[batch_size, out_features]
///
/// 参数登记在`{scope}/w`与`{scope}/b`下。
pub struct Linear {
    /// 权重参数 [in_features, out_features]
    weights: Var,
    /// 偏置参数 [1, out_features]
    bias: Var,
    in_features: usize,
    out_features: usize,
}

impl Linear {
    /// 在`scope`下创建（或按作用域模式复用）一个全连接层
    pub fn new(
        graph: &Graph,
        scope: &Scope,
        in_features: usize,
        out_features: usize,
        init: LinearInit,
    ) -> Result<Self, GraphError> {
        let weights = graph.variable(
            scope,
            "w",
            &[in_features, out_features],
            Init::Normal {
                mean: 0.0,
                std: init.stddev,
            },
        )?;
        let bias = graph.variable(scope, "b", &[1, out_features], Init::Constant(init.constant))?;
        Ok(Self {
            weights,
            bias,
            in_features,
            out_features,
        })
    }

    /// 计算 `x @ W + b`（偏置按行广播）
    pub fn forward(&self, x: &Var) -> Result<Var, GraphError> {
        x.matmul(&self.weights)?.try_add(&self.bias)
    }

    pub const fn in_features(&self) -> usize {
        self.in_features
    }

    pub const fn out_features(&self) -> usize {
        self.out_features
    }

    pub const fn weights(&self) -> &Var {
        &self.weights
    }

    pub const fn bias(&self) -> &Var {
        &self.bias
    }

    pub fn parameters(&self) -> Vec<Var> {
        vec![self.weights.clone(), self.bias.clone()]
    }
}

/// 便捷函数：在`scope`下构建全连接层并直接作用于`input`
///
/// 输入特征维度取自`input`的第2维。
pub fn linear(
    input: &Var,
    out_features: usize,
    scope: &Scope,
    init: LinearInit,
) -> Result<Var, GraphError> {
    let shape = input.value_expected_shape()?;
    if shape.len() != 2 {
        return Err(GraphError::DimensionMismatch {
            expected: 2,
            got: shape.len(),
            message: format!("全连接层{}的输入必须是[batch, features]", scope.path()),
        });
    }
    let layer = Linear::new(&input.get_graph(), scope, shape[1], out_features, init)?;
    layer.forward(input)
}
