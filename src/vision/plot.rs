use std::path::Path;

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

use super::{
    Viewport, Vision, AXIS_COLOR, BACKGROUND_COLOR, DECISION_BOUNDARY_COLOR,
    GENERATED_DATA_COLOR, PLOT_SIZE, REAL_DATA_COLOR,
};
use crate::distribution::linspace;
use crate::gan::{GanError, Snapshot};

// 绘图区四周的留白（像素）
const MARGIN_LEFT: u32 = 50;
const MARGIN_RIGHT: u32 = 20;
const MARGIN_TOP: u32 = 30;
const MARGIN_BOTTOM: u32 = 40;

/// 数据坐标 -> 像素坐标的映射
struct PlotArea {
    viewport: Viewport,
    left: f32,
    top: f32,
    width: f32,
    height: f32,
}

impl PlotArea {
    fn new(viewport: Viewport, (width, height): (u32, u32)) -> Self {
        Self {
            viewport,
            left: MARGIN_LEFT as f32,
            top: MARGIN_TOP as f32,
            width: width.saturating_sub(MARGIN_LEFT + MARGIN_RIGHT).max(1) as f32,
            height: height.saturating_sub(MARGIN_TOP + MARGIN_BOTTOM).max(1) as f32,
        }
    }

    /// 超出纵轴范围的值被压到边界上；横轴越界的点返回 None
    fn to_pixel(&self, x: f32, y: f32) -> Option<(f32, f32)> {
        let vp = &self.viewport;
        if !x.is_finite() || !y.is_finite() || x < vp.x_min || x > vp.x_max {
            return None;
        }
        let y = y.clamp(vp.y_min, vp.y_max);
        let px = self.left + (x - vp.x_min) / (vp.x_max - vp.x_min) * self.width;
        let py = self.top + (1.0 - (y - vp.y_min) / (vp.y_max - vp.y_min)) * self.height;
        Some((px, py))
    }

    fn frame(&self) -> Rect {
        Rect::at(self.left as i32, self.top as i32).of_size(self.width as u32, self.height as u32)
    }
}

impl Vision {
    /// 把一个快照画成图片
    ///
    /// 三条曲线的横坐标都是[-range, range]上的等距点，点数等于各自序列的长度。
    pub fn render_snapshot(
        snapshot: &Snapshot,
        range: f32,
        viewport: Viewport,
        size: (u32, u32),
    ) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(size.0, size.1, BACKGROUND_COLOR);
        let area = PlotArea::new(viewport, size);

        draw_curve(&mut img, &area, range, &snapshot.decision_boundary, DECISION_BOUNDARY_COLOR);
        draw_curve(&mut img, &area, range, &snapshot.real_density, REAL_DATA_COLOR);
        draw_curve(&mut img, &area, range, &snapshot.generated_density, GENERATED_DATA_COLOR);

        draw_hollow_rect_mut(&mut img, area.frame(), AXIS_COLOR);
        draw_legend(&mut img, &area);
        img
    }

    /// 保存静态分布图（PNG 等格式由扩展名决定）
    pub fn save_plot(snapshot: &Snapshot, range: f32, path: &Path) -> Result<(), GanError> {
        let img = Self::render_snapshot(snapshot, range, Viewport::plot(range), PLOT_SIZE);
        img.save(path)?;
        Ok(())
    }
}

fn draw_curve(img: &mut RgbaImage, area: &PlotArea, range: f32, values: &[f32], color: Rgba<u8>) {
    let xs = linspace(-range, range, values.len());
    let points: Vec<Option<(f32, f32)>> = xs
        .iter()
        .zip(values)
        .map(|(&x, &y)| area.to_pixel(x, y))
        .collect();
    for pair in points.windows(2) {
        // 任一端点无效（越界或非有限值）则跳过这一段
        if let (Some(start), Some(end)) = (pair[0], pair[1]) {
            draw_line_segment_mut(img, start, end, color);
        }
    }
}

fn draw_legend(img: &mut RgbaImage, area: &PlotArea) {
    let colors = [DECISION_BOUNDARY_COLOR, REAL_DATA_COLOR, GENERATED_DATA_COLOR];
    let x = (area.left + area.width) as i32 - 40;
    for (i, color) in colors.into_iter().enumerate() {
        let y = area.top as i32 + 10 + 12 * i as i32;
        draw_filled_rect_mut(img, Rect::at(x, y).of_size(24, 4), color);
    }
}
