use crate::foundation::error::{FlipbookError, FlipbookResult};

pub use kurbo::{Point, Rect, Size};

/// Pixel size of a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// Validated size; both sides must be non-zero.
    pub fn new(width: u32, height: u32) -> FlipbookResult<Self> {
        if width == 0 || height == 0 {
            return Err(FlipbookError::config(format!(
                "canvas size must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// The whole canvas as a rect at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Geometry of a sprite sheet: one row of equal-width frames spanning the full height.
///
/// Immutable once built; all frame rects are derived from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SheetDesc {
    pub width: u32,
    pub height: u32,
    pub frames: u32,
}

impl SheetDesc {
    pub fn new(width: u32, height: u32, frames: u32) -> FlipbookResult<Self> {
        if frames == 0 {
            return Err(FlipbookError::config("sheet must have at least one frame"));
        }
        if width == 0 || height == 0 {
            return Err(FlipbookError::config(format!(
                "sheet size must be non-zero, got {width}x{height}"
            )));
        }
        if width < frames {
            return Err(FlipbookError::config(format!(
                "sheet width {width} cannot hold {frames} frames"
            )));
        }
        Ok(Self {
            width,
            height,
            frames,
        })
    }

    /// `width / frames`, kept fractional like a canvas would.
    pub fn frame_width(self) -> f64 {
        f64::from(self.width) / f64::from(self.frames)
    }

    /// Source rectangle of frame `index` on the sheet.
    ///
    /// Callers keep `index < frames`; the math itself does not wrap.
    pub fn frame_rect(self, index: u32) -> Rect {
        let fw = self.frame_width();
        Rect::from_origin_size(
            Point::new(f64::from(index) * fw, 0.0),
            Size::new(fw, f64::from(self.height)),
        )
    }
}

/// `width * height * 4` without wrapping.
pub(crate) fn rgba8_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
