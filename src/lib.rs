//! Flipbook plays sprite-sheet animations by counting ticks.
//!
//! A sprite sheet is one row of equal-width frames. A [`Sprite`] turns a stream of host ticks
//! into frame transitions and blits the current frame onto a [`DrawSurface`]. An [`Animator`]
//! owns the sprite, listens to a host [`TickScheduler`], and exposes play, pause, step and slow
//! motion.
//!
//! # Timing model
//!
//! Time is counted in ticks, never in wall-clock seconds. A frame stays visible for
//! `ticks_per_frame + 1` ticks (three times `ticks_per_frame` plus one in slow motion), so a
//! host that drops display refreshes slows the animation down without corrupting it.
//!
//! # Phases
//!
//! 1. **Update**: [`Sprite::update`] counts one tick and may move to the next frame. It never draws.
//! 2. **Render**: [`Sprite::render`] clears the destination and blits `frameIndex * frameWidth`
//!    of the sheet into it.
//!
//! The host side (surface, tick source, feedback, slider) is injected, so everything runs
//! headless with [`NullSurface`] (or [`RecordingSurface`] to inspect draws) and
//! [`ManualScheduler`], or to pixels with [`CpuSurface`].
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod foundation;
mod host;
mod player;
mod render;

pub use animation::config::AnimationConfig;
pub use animation::sprite::{AnimationInfo, Sprite};
pub use animation::state::{AnimationState, SLOMO_FACTOR};
pub use assets::decode::{SheetImage, decode_sheet, load_sheet};
pub use foundation::core::{Canvas, Point, Rect, SheetDesc, Size};
pub use foundation::error::{FlipbookError, FlipbookResult};
pub use host::feedback::{FeedbackSink, FrameSlider, RecordingFeedback, TracingFeedback};
pub use host::scheduler::{ManualScheduler, TickHandle, TickScheduler};
pub use player::animator::{Animator, PlayerState};
pub use render::cpu::{CpuSurface, FrameRGBA};
pub use render::recording::{DrawCommand, NullSurface, RecordingSurface};
pub use render::surface::DrawSurface;
