/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 一维采样器：真实数据（高斯）分布、生成器输入噪声（分层采样）分布，
 *                 以及绘图用的 linspace / 归一化直方图
 */

use rand::Rng;
use rand_distr::{Distribution, Normal};
use thiserror::Error;


/// 分层采样时附加在每个等距点上的抖动幅度上限
pub const NOISE_JITTER: f32 = 0.01;

#[derive(Error, Debug, PartialEq)]
pub enum DistributionError {
    #[error("无效的正态分布参数(mean={mean}, std={std})：标准差必须为正的有限值")]
    InvalidStdDev { mean: f32, std: f32 },
    #[error("直方图至少需要2个单调递增的边界，但得到{0}个")]
    InvalidBins(usize),
}

// ========== 真实数据分布 ==========

/// 真实数据分布：N(mean, std²)
#[derive(Debug, Clone, Copy)]
pub struct DataDistribution {
    mean: f32,
    std: f32,
    normal: Normal<f32>,
}

impl DataDistribution {
    pub fn new(mean: f32, std: f32) -> Result<Self, DistributionError> {
        if !(std.is_finite() && std > 0.0 && mean.is_finite()) {
            return Err(DistributionError::InvalidStdDev { mean, std });
        }
        let normal =
            Normal::new(mean, std).map_err(|_| DistributionError::InvalidStdDev { mean, std })?;
        Ok(Self { mean, std, normal })
    }

    pub const fn mean(&self) -> f32 {
        self.mean
    }

    pub const fn std(&self) -> f32 {
        self.std
    }

    /// 采样`n`个独立同分布的值，并按升序排列
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f32> {
        let mut samples: Vec<f32> = (0..n).map(|_| self.normal.sample(&mut *rng)).collect();
        samples.sort_by(f32::total_cmp);
        samples
    }

    /// 概率密度函数
    pub fn pdf(&self, x: f32) -> f32 {
        let z = (x - self.mean) / self.std;
        (-0.5 * z * z).exp() / (self.std * (2.0 * std::f32::consts::PI).sqrt())
    }
}

// ========== 生成器输入噪声分布 ==========

/// 生成器的输入噪声：[-range, range]上的等距点各加一个[0, 0.01)的均匀抖动
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorDistribution {
    range: f32,
}

impl GeneratorDistribution {
    pub const fn new(range: f32) -> Self {
        Self { range }
    }

    pub const fn range(&self) -> f32 {
        self.range
    }

    /// 未加抖动的等距点
    pub fn base_points(&self, n: usize) -> Vec<f32> {
        linspace(-self.range, self.range, n)
    }

    /// 分层采样：等距点 + 独立的均匀抖动
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f32> {
        self.base_points(n)
            .into_iter()
            .map(|x| x + rng.gen::<f32>() * NOISE_JITTER)
            .collect()
    }
}

// ========== 工具函数 ==========

/// `[start, stop]`上的`n`个等距点（含两端；`n == 1`时只有`start`）
pub fn linspace(start: f32, stop: f32, n: usize) -> Vec<f32> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f32;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f32 })
                .collect()
        }
    }
}

/// 归一化直方图（概率密度）
///
/// `edges`为单调递增的区间边界，返回`edges.len() - 1`个区间的密度：
/// `count / (落入范围内的样本总数 * 区间宽度)`。
/// 除最后一个区间包含右端点外，其余区间均为左闭右开；范围外的样本被忽略。
/// 没有样本落入范围时所有密度为 NaN。
pub fn histogram_density(samples: &[f32], edges: &[f32]) -> Result<Vec<f32>, DistributionError> {
    if edges.len() < 2 || edges.windows(2).any(|w| w[1] <= w[0]) {
        return Err(DistributionError::InvalidBins(edges.len()));
    }
    let num_bins = edges.len() - 1;
    let (lo, hi) = (edges[0], edges[num_bins]);

    let mut counts = vec![0usize; num_bins];
    for &x in samples {
        if !(lo..=hi).contains(&x) {
            continue;
        }
        // edges[i] <= x 的最后一个 i
        let bin = edges.partition_point(|&e| e <= x).saturating_sub(1).min(num_bins - 1);
        counts[bin] += 1;
    }

    let total: usize = counts.iter().sum();
    Ok(counts
        .iter()
        .zip(edges.windows(2))
        .map(|(&count, w)| count as f32 / (total as f32 * (w[1] - w[0])))
        .collect())
}
