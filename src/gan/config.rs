use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::GanError;

/// 未指定时静态图写到当前目录下的该文件
pub const DEFAULT_PLOT_PATH: &str = "gan_1d.png";

/// 训练配置
///
/// 可从 JSON 文件加载，缺省字段取默认值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GanConfig {
    /// 真实数据分布的均值
    pub real_mean: f32,
    /// 真实数据分布的标准差
    pub real_stddev: f32,
    /// 生成器输入噪声的半宽：噪声位于[-noise_range, noise_range]
    pub noise_range: f32,
    pub num_steps: usize,
    pub batch_size: usize,
    pub use_minibatch_discrimination: bool,
    /// 每隔多少步输出一次损失；0 表示不输出
    pub log_every: usize,
    /// 设置后每步记录快照，训练结束时保存为动图
    pub animation_output_path: Option<PathBuf>,
    pub num_pretrain_steps: usize,
    pub hidden_dim: usize,
    pub seed: u64,
    /// 静态图的保存路径（未设置动图时使用）
    pub plot_output_path: PathBuf,
}

impl Default for GanConfig {
    fn default() -> Self {
        Self {
            real_mean: 4.0,
            real_stddev: 0.5,
            noise_range: 8.0,
            num_steps: 1200,
            batch_size: 12,
            use_minibatch_discrimination: false,
            log_every: 10,
            animation_output_path: None,
            num_pretrain_steps: 1000,
            hidden_dim: super::MLP_HIDDEN_SIZE,
            seed: 42,
            plot_output_path: PathBuf::from(DEFAULT_PLOT_PATH),
        }
    }
}

impl GanConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GanError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// 使用 minibatch discrimination 时学习率较小
    pub const fn learning_rate(&self) -> f32 {
        if self.use_minibatch_discrimination {
            0.005
        } else {
            0.03
        }
    }
}
