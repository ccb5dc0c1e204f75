/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 命令行入口：加载配置（JSON文件 + 命令行覆盖），训练一维GAN并输出图片/动图
 */

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Parser;
use gan_1d::gan::{Gan, GanConfig, GanError};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 训练一个一维GAN：生成器学习把均匀噪声映射为高斯分布
#[derive(Parser, Debug)]
#[command(name = "gan_1d")]
#[command(version)]
struct Cli {
    /// JSON 配置文件；命令行参数会覆盖其中的同名字段
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 交替训练的步数
    #[arg(long)]
    num_steps: Option<usize>,

    #[arg(long)]
    batch_size: Option<usize>,

    /// 判别器使用 minibatch discrimination
    #[arg(long)]
    minibatch: bool,

    /// 每隔多少步输出一次损失（0 表示不输出）
    #[arg(long)]
    log_every: Option<usize>,

    /// 动图（GIF）保存路径；设置后每步都会记录快照
    #[arg(long)]
    anim_path: Option<PathBuf>,

    /// 静态图（PNG）保存路径，默认 gan_1d.png
    #[arg(long)]
    plot_path: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    real_mean: Option<f32>,

    #[arg(long)]
    real_stddev: Option<f32>,

    /// 噪声范围：[-noise_range, noise_range]
    #[arg(long)]
    noise_range: Option<f32>,

    #[arg(long)]
    pretrain_steps: Option<usize>,

    /// 把预训练损失与每步损失写入该 JSON 文件
    #[arg(long)]
    history_path: Option<PathBuf>,
}

impl Cli {
    fn apply_overrides(&self, config: &mut GanConfig) {
        if let Some(num_steps) = self.num_steps {
            config.num_steps = num_steps;
        }
        if let Some(batch_size) = self.batch_size {
            config.batch_size = batch_size;
        }
        if self.minibatch {
            config.use_minibatch_discrimination = true;
        }
        if let Some(log_every) = self.log_every {
            config.log_every = log_every;
        }
        if let Some(path) = &self.anim_path {
            config.animation_output_path = Some(path.clone());
        }
        if let Some(path) = &self.plot_path {
            config.plot_output_path = path.clone();
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(mean) = self.real_mean {
            config.real_mean = mean;
        }
        if let Some(stddev) = self.real_stddev {
            config.real_stddev = stddev;
        }
        if let Some(range) = self.noise_range {
            config.noise_range = range;
        }
        if let Some(steps) = self.pretrain_steps {
            config.num_pretrain_steps = steps;
        }
    }
}

fn main() -> Result<(), GanError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => GanConfig::from_json_file(path)?,
        None => GanConfig::default(),
    };
    cli.apply_overrides(&mut config);
    info!(?config, "开始训练");

    let mut gan = Gan::new(config)?;
    let report = gan.train()?;

    if let Some(path) = &cli.history_path {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &report)?;
        info!(path = %path.display(), "训练记录已保存");
    }
    if let Some(last) = report.history.last() {
        info!(
            step = last.step,
            loss_d = last.loss_d,
            loss_g = last.loss_g,
            "训练完成"
        );
    }
    Ok(())
}
