use serde::Serialize;

/// 决策边界曲线的采样点数
pub const SNAPSHOT_NUM_POINTS: usize = 10000;
/// 直方图边界个数（区间数为其减1）
pub const SNAPSHOT_NUM_BINS: usize = 100;

/// 某一时刻的训练快照，用于绘图/动画
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// 判别器在[-range, range]等距网格上的输出（只评估完整的 batch）
    pub decision_boundary: Vec<f32>,
    /// 真实数据的归一化直方图
    pub real_density: Vec<f32>,
    /// 生成数据的归一化直方图
    pub generated_density: Vec<f32>,
}
