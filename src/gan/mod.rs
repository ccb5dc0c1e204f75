/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 一维 GAN：生成器学习把均匀噪声映射成高斯分布 N(4, 0.5²)。
 *                 判别器先用解析密度做预训练，再把权重拷贝给正式的判别器，
 *                 之后交替更新判别器与生成器。
 */

mod config;
mod error;
mod model;
mod snapshot;
mod trainer;

pub use config::{GanConfig, DEFAULT_PLOT_PATH};
pub use error::GanError;
pub use model::{discriminator, generator, MLP_HIDDEN_SIZE};
pub use snapshot::{Snapshot, SNAPSHOT_NUM_BINS, SNAPSHOT_NUM_POINTS};
pub use trainer::{Gan, StepLosses, TrainingPhase, TrainingReport};

#[cfg(test)]
mod tests;
