use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use super::{Viewport, Vision, ANIMATION_FPS, ANIMATION_SIZE, PROGRESS_COLOR};
use crate::gan::{GanError, Snapshot};

/// 调色板量化速度（1最慢质量最好，30最快）
const GIF_QUANTIZE_SPEED: i32 = 10;

impl Vision {
    /// 每个快照渲染成一帧，顶部的灰条表示当前帧在全部帧中的进度
    pub fn render_animation_frames(
        frames: &[Snapshot],
        range: f32,
    ) -> Result<Vec<RgbaImage>, GanError> {
        if frames.is_empty() {
            return Err(GanError::Render("没有可供生成动画的帧".to_string()));
        }
        let (width, _) = ANIMATION_SIZE;
        let total = frames.len();
        Ok(frames
            .iter()
            .enumerate()
            .map(|(i, snapshot)| {
                let mut img =
                    Self::render_snapshot(snapshot, range, Viewport::animation(), ANIMATION_SIZE);
                let progress = ((i + 1) as f32 / total as f32 * width as f32).round().max(1.0);
                draw_filled_rect_mut(&mut img, Rect::at(0, 0).of_size(progress as u32, 6), PROGRESS_COLOR);
                img
            })
            .collect())
    }

    /// 保存为循环播放的 GIF 动画
    pub fn save_animation(frames: &[Snapshot], range: f32, path: &Path) -> Result<(), GanError> {
        let images = Self::render_animation_frames(frames, range)?;
        let writer = BufWriter::new(File::create(path)?);
        let mut encoder = GifEncoder::new_with_speed(writer, GIF_QUANTIZE_SPEED);
        encoder.set_repeat(Repeat::Infinite)?;
        let delay = Delay::from_numer_denom_ms(1000, ANIMATION_FPS);
        encoder.encode_frames(
            images
                .into_iter()
                .map(|img| Frame::from_parts(img, 0, 0, delay)),
        )?;
        Ok(())
    }
}
