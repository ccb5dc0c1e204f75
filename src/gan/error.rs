use thiserror::Error;

use super::TrainingPhase;
use crate::distribution::DistributionError;
use crate::nn::GraphError;

#[derive(Error, Debug)]
pub enum GanError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Distribution(#[from] DistributionError),
    #[error("IO错误：{0}")]
    Io(#[from] std::io::Error),
    #[error("图像编码错误：{0}")]
    Image(#[from] image::ImageError),
    #[error("JSON解析错误：{0}")]
    Json(#[from] serde_json::Error),
    #[error("渲染失败：{0}")]
    Render(String),
    #[error("配置错误：{0}")]
    Config(String),
    #[error("当前处于{actual:?}阶段，不能执行{operation}")]
    InvalidPhase {
        operation: &'static str,
        actual: TrainingPhase,
    },
}
