use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::{
    FlipbookResult,
    foundation::core::{SheetDesc, rgba8_len},
    foundation::error::FlipbookError,
};

/// Decoded sprite sheet pixels.
#[derive(Clone, Debug)]
pub struct SheetImage {
    pub width: u32,
    pub height: u32,
    /// Straight-alpha RGBA8, row-major, tightly packed.
    pub rgba8: Arc<Vec<u8>>,
}

impl SheetImage {
    /// Wrap raw RGBA8 pixels. `rgba8.len()` must equal `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, rgba8: Vec<u8>) -> FlipbookResult<Self> {
        let expected = rgba8_len(width, height).ok_or_else(|| {
            FlipbookError::config(format!("sheet size {width}x{height} overflows a pixel buffer"))
        })?;
        if rgba8.len() != expected {
            return Err(FlipbookError::config(format!(
                "sheet pixel buffer is {} bytes, expected {expected} for {width}x{height}",
                rgba8.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8: Arc::new(rgba8),
        })
    }

    /// Describe this image as a sheet of `frames` equal-width frames.
    pub fn desc(&self, frames: u32) -> FlipbookResult<SheetDesc> {
        SheetDesc::new(self.width, self.height, frames)
    }

    /// RGBA of the pixel at `(x, y)`; transparent when it falls outside the buffer.
    pub(crate) fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize)
            .checked_mul(self.width as usize)
            .and_then(|n| n.checked_add(x as usize))
            .and_then(|n| n.checked_mul(4));
        match i.and_then(|i| self.rgba8.get(i..i + 4)) {
            Some(&[r, g, b, a]) => [r, g, b, a],
            _ => [0; 4],
        }
    }
}

/// Decode encoded image bytes (PNG) into a [`SheetImage`].
pub fn decode_sheet(bytes: &[u8]) -> FlipbookResult<SheetImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode sprite sheet from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    SheetImage::from_rgba8(width, height, rgba.into_raw())
}

/// Read and decode a sprite sheet from disk.
#[tracing::instrument]
pub fn load_sheet(path: &Path) -> FlipbookResult<SheetImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read sprite sheet '{}'", path.display()))?;
    let sheet = decode_sheet(&bytes)?;
    tracing::debug!(width = sheet.width, height = sheet.height, "loaded sprite sheet");
    Ok(sheet)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
