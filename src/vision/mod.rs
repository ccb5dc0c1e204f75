/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 本模块负责把训练快照画成图片：
 *                 1. 静态图：决策边界 + 真实/生成分布的概率密度曲线，保存为 PNG；
 *                 2. 动画：每个训练步一帧，保存为 GIF。
 *                 图中不绘制文字，图例只用颜色块表示三条曲线。
 */

mod animation;
mod plot;

use image::Rgba;


/// 决策边界（蓝）
pub const DECISION_BOUNDARY_COLOR: Rgba<u8> = Rgba([31, 119, 180, 255]);
/// 真实数据（橙）
pub const REAL_DATA_COLOR: Rgba<u8> = Rgba([255, 127, 14, 255]);
/// 生成数据（绿）
pub const GENERATED_DATA_COLOR: Rgba<u8> = Rgba([44, 160, 44, 255]);

const BACKGROUND_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const AXIS_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const PROGRESS_COLOR: Rgba<u8> = Rgba([128, 128, 128, 255]);

/// 静态图尺寸
pub const PLOT_SIZE: (u32, u32) = (640, 480);
/// 动画帧尺寸
pub const ANIMATION_SIZE: (u32, u32) = (600, 400);
/// 动画帧率
pub const ANIMATION_FPS: u32 = 30;

/// 坐标轴的显示范围（数据坐标）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Viewport {
    /// 静态图：横轴为整个噪声范围，纵轴[0, 1]
    pub const fn plot(range: f32) -> Self {
        Self {
            x_min: -range,
            x_max: range,
            y_min: 0.0,
            y_max: 1.0,
        }
    }

    /// 动画：横轴[-6, 6]，纵轴[0, 1.4]
    pub const fn animation() -> Self {
        Self {
            x_min: -6.0,
            x_max: 6.0,
            y_min: 0.0,
            y_max: 1.4,
        }
    }
}

pub struct Vision;
