use crate::foundation::error::{FlipbookError, FlipbookResult};

/// Slow motion stretches every frame to this many times its configured tick count.
pub const SLOMO_FACTOR: u32 = 3;

/// Tick and frame counters for one sheet.
///
/// This is the pure half of a [`crate::Sprite`]: it counts, wraps and never draws. All
/// mutation goes through [`update`](Self::update), [`advance`](Self::advance),
/// [`retreat`](Self::retreat), [`set_frame`](Self::set_frame) and
/// [`toggle_slomo`](Self::toggle_slomo).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationState {
    number_of_frames: u32,
    ticks_per_frame: u32,
    slomo: bool,

    frame_index: u32,
    tick_count: u32,
    total_ticks: u64,
    total_frames: i64,
    total_loops: i64,
}

impl AnimationState {
    /// Counters at frame 0 with no ticks counted.
    pub fn new(number_of_frames: u32, ticks_per_frame: u32) -> FlipbookResult<Self> {
        if number_of_frames == 0 {
            return Err(FlipbookError::config("numberOfFrames must be >= 1"));
        }
        Ok(Self {
            number_of_frames,
            ticks_per_frame,
            slomo: false,
            frame_index: 0,
            tick_count: 0,
            total_ticks: 0,
            total_frames: 0,
            total_loops: 0,
        })
    }

    /// Count one tick. Returns `true` when the tick moved to the next frame.
    pub fn update(&mut self) -> bool {
        self.total_ticks += 1;
        self.tick_count += 1;
        if self.tick_count > self.current_ticks_per_frame() {
            self.advance();
            return true;
        }
        false
    }

    /// Step forward one frame, wrapping past the last one.
    pub fn advance(&mut self) {
        self.tick_count = 0;
        self.total_frames += 1;
        if self.frame_index + 1 < self.number_of_frames {
            self.frame_index += 1;
        } else {
            self.frame_index = 0;
            self.total_loops += 1;
            tracing::debug!(loops = self.total_loops, "wrapped forward");
        }
    }

    /// Step back one frame, wrapping before the first one.
    pub fn retreat(&mut self) {
        self.tick_count = 0;
        self.total_frames -= 1;
        if self.frame_index > 0 {
            self.frame_index -= 1;
        } else {
            self.frame_index = self.number_of_frames - 1;
            self.total_loops -= 1;
            tracing::debug!(loops = self.total_loops, "wrapped backward");
        }
    }

    /// Jump to `index` without touching any counter.
    pub fn set_frame(&mut self, index: u32) -> FlipbookResult<()> {
        if index >= self.number_of_frames {
            return Err(FlipbookError::frame(format!(
                "frame {index} out of range 0..{}",
                self.number_of_frames
            )));
        }
        self.frame_index = index;
        Ok(())
    }

    /// Flip slow motion on or off. The tick count is kept.
    pub fn toggle_slomo(&mut self) {
        self.slomo = !self.slomo;
    }

    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    pub fn tick_count(&self) -> u32 {
        self.tick_count
    }

    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    pub fn total_frames(&self) -> i64 {
        self.total_frames
    }

    /// Completed passes through the sheet; negative after stepping back past frame 0.
    pub fn total_loops(&self) -> i64 {
        self.total_loops
    }

    pub fn number_of_frames(&self) -> u32 {
        self.number_of_frames
    }

    pub fn ticks_per_frame(&self) -> u32 {
        self.ticks_per_frame
    }

    pub fn is_slomo(&self) -> bool {
        self.slomo
    }

    /// Effective rate: `ticks_per_frame`, or [`SLOMO_FACTOR`] times that in slow motion.
    pub fn current_ticks_per_frame(&self) -> u32 {
        if self.slomo {
            self.ticks_per_frame.saturating_mul(SLOMO_FACTOR)
        } else {
            self.ticks_per_frame
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/state.rs"]
mod tests;
