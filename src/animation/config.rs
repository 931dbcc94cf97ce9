use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::{Canvas, SheetDesc};
use crate::foundation::error::{FlipbookError, FlipbookResult};

/// Playback configuration for one sprite sheet.
///
/// The JSON form uses camelCase keys:
///
/// ```json
/// { "ticksPerFrame": 4, "numberOfFrames": 8, "renderWidth": 147, "renderHeight": 325 }
/// ```
///
/// `renderWidth`/`renderHeight` may be omitted; each falls back to the sheet size passed to
/// [`crate::Animator::load`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnimationConfig {
    /// Update ticks a frame stays visible before advancing. `0` advances on every tick.
    pub ticks_per_frame: u32,
    /// Frames in the sheet's single row. Must be at least 1.
    pub number_of_frames: u32,
    /// Destination blit width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_width: Option<u32>,
    /// Destination blit height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_height: Option<u32>,
}

impl AnimationConfig {
    /// Build and validate a config with an explicit render size.
    pub fn new(
        ticks_per_frame: u32,
        number_of_frames: u32,
        render_width: u32,
        render_height: u32,
    ) -> FlipbookResult<Self> {
        let cfg = Self {
            ticks_per_frame,
            number_of_frames,
            render_width: Some(render_width),
            render_height: Some(render_height),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build and validate a config that renders at the sheet's own size.
    pub fn unscaled(ticks_per_frame: u32, number_of_frames: u32) -> FlipbookResult<Self> {
        let cfg = Self {
            ticks_per_frame,
            number_of_frames,
            render_width: None,
            render_height: None,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject configs that cannot play, such as zero frames.
    pub fn validate(&self) -> FlipbookResult<()> {
        if self.number_of_frames == 0 {
            return Err(FlipbookError::config("numberOfFrames must be >= 1"));
        }
        if self.render_width == Some(0) {
            return Err(FlipbookError::config("renderWidth must be > 0"));
        }
        if self.render_height == Some(0) {
            return Err(FlipbookError::config("renderHeight must be > 0"));
        }
        // u32 arithmetic in slow motion must not overflow.
        if self.ticks_per_frame.checked_mul(3).is_none() {
            return Err(FlipbookError::config(format!(
                "ticksPerFrame {} is too large",
                self.ticks_per_frame
            )));
        }
        Ok(())
    }

    /// Resolve the destination size against the sheet it will play.
    pub fn render_size(&self, sheet: &SheetDesc) -> FlipbookResult<Canvas> {
        Canvas::new(
            self.render_width.unwrap_or(sheet.width),
            self.render_height.unwrap_or(sheet.height),
        )
    }

    /// Parse and validate a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FlipbookResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| FlipbookError::serde(format!("parse animation config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a config from a JSON string.
    pub fn from_json_str(s: &str) -> FlipbookResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse and validate a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FlipbookResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FlipbookError::config(format!(
                "open animation config '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/config.rs"]
mod tests;
