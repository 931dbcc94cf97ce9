use std::ops::Range;
use std::path::Path;

use anyhow::Context as _;

use crate::{
    assets::decode::SheetImage,
    foundation::core::{Canvas, Rect},
    foundation::error::FlipbookResult,
    render::surface::DrawSurface,
};

/// A rendered surface as RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Straight-alpha RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Write this frame as a PNG, creating parent directories as needed.
    pub fn save_png(&self, path: &Path) -> FlipbookResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// Software RGBA8 surface.
///
/// A pixel is covered by a rect when its center lies inside it. `draw_image` samples the source
/// nearest-neighbour and composites source-over.
#[derive(Clone, Debug)]
pub struct CpuSurface {
    canvas: Canvas,
    data: Vec<u8>,
}

impl CpuSurface {
    /// Fully transparent surface of `canvas` size.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            data: vec![0; byte_len(canvas)],
        }
    }

    /// RGBA at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        let i = self.offset(x, y);
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Copy out the current contents.
    pub fn to_frame(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.data.clone(),
        }
    }

    /// Byte offset of `(x, y)`. `data` was allocated at `byte_len(canvas)`, so any in-canvas
    /// coordinate stays within `usize`.
    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.canvas.width as usize) + (x as usize)) * 4
    }
}

impl DrawSurface for CpuSurface {
    type Image = SheetImage;

    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn resize(&mut self, canvas: Canvas) {
        self.canvas = canvas;
        self.data = vec![0; byte_len(canvas)];
    }

    fn clear_rect(&mut self, rect: Rect) {
        let xs = covered(rect.x0, rect.x1, self.canvas.width);
        for y in covered(rect.y0, rect.y1, self.canvas.height) {
            let start = self.offset(xs.start, y);
            let end = start + (xs.len() * 4);
            self.data[start..end].fill(0);
        }
    }

    fn draw_image(&mut self, image: &SheetImage, src: Rect, dst: Rect) {
        if image.width == 0 || image.height == 0 || dst.width() <= 0.0 || dst.height() <= 0.0 {
            return;
        }
        let sx_range = sample_bounds(src.x0, src.x1, image.width);
        let sy_range = sample_bounds(src.y0, src.y1, image.height);
        let (Some(sx_range), Some(sy_range)) = (sx_range, sy_range) else {
            return;
        };
        let scale_x = src.width() / dst.width();
        let scale_y = src.height() / dst.height();

        for y in covered(dst.y0, dst.y1, self.canvas.height) {
            let v = src.y0 + ((f64::from(y) + 0.5) - dst.y0) * scale_y;
            let sy = clamp_sample(v, &sy_range);
            for x in covered(dst.x0, dst.x1, self.canvas.width) {
                let u = src.x0 + ((f64::from(x) + 0.5) - dst.x0) * scale_x;
                let sx = clamp_sample(u, &sx_range);
                let s = image.pixel(sx, sy);
                let i = self.offset(x, y);
                let d = [
                    self.data[i],
                    self.data[i + 1],
                    self.data[i + 2],
                    self.data[i + 3],
                ];
                self.data[i..i + 4].copy_from_slice(&source_over(s, d));
            }
        }
    }
}

fn byte_len(canvas: Canvas) -> usize {
    (canvas.width as usize)
        .saturating_mul(canvas.height as usize)
        .saturating_mul(4)
}

/// Pixel indices whose centers fall in `[lo, hi)`, clipped to `[0, limit)`.
fn covered(lo: f64, hi: f64, limit: u32) -> Range<u32> {
    let start = (lo - 0.5).ceil().max(0.0);
    let end = (hi - 0.5).ceil().min(f64::from(limit));
    if start >= end {
        return 0..0;
    }
    (start as u32)..(end as u32)
}

/// Inclusive source pixel bounds a sample in `[lo, hi)` may read.
fn sample_bounds(lo: f64, hi: f64, limit: u32) -> Option<(u32, u32)> {
    let first = lo.floor().max(0.0);
    let last = (hi.ceil() - 1.0).min(f64::from(limit) - 1.0);
    if first > last {
        return None;
    }
    Some((first as u32, last as u32))
}

fn clamp_sample(coord: f64, bounds: &(u32, u32)) -> u32 {
    let v = coord.floor().max(f64::from(bounds.0)).min(f64::from(bounds.1));
    v as u32
}

fn source_over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    match (src[3], dst[3]) {
        (255, _) | (_, 0) => return src,
        (0, _) => return dst,
        _ => {}
    }
    let sa = f32::from(src[3]) / 255.0;
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    let mut out = [0u8; 4];
    for c in 0..3 {
        let sc = f32::from(src[c]) * sa;
        let dc = f32::from(dst[c]) * da * (1.0 - sa);
        out[c] = ((sc + dc) / out_a).round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
