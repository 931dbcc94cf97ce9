use crate::{
    animation::config::AnimationConfig,
    animation::state::AnimationState,
    foundation::core::{Canvas, Rect, SheetDesc},
    foundation::error::{FlipbookError, FlipbookResult},
    render::surface::DrawSurface,
};

/// One sprite sheet bound to a drawing surface.
///
/// `update` only counts; drawing happens in `render` and in the manual steps
/// (`next_frame`, `prev_frame`, `set_frame`), which render right after they move.
pub struct Sprite<S: DrawSurface> {
    sheet: SheetDesc,
    image: S::Image,
    surface: S,
    render_size: Canvas,
    state: AnimationState,
}

impl<S: DrawSurface> Sprite<S> {
    /// Bind `image` (described by `sheet`) to `surface`. Nothing is drawn yet.
    pub fn new(
        surface: S,
        image: S::Image,
        sheet: SheetDesc,
        config: &AnimationConfig,
    ) -> FlipbookResult<Self> {
        config.validate()?;
        if sheet.frames != config.number_of_frames {
            return Err(FlipbookError::config(format!(
                "sheet has {} frames but config declares {}",
                sheet.frames, config.number_of_frames
            )));
        }
        let render_size = config.render_size(&sheet)?;
        let state = AnimationState::new(config.number_of_frames, config.ticks_per_frame)?;
        Ok(Self {
            sheet,
            image,
            surface,
            render_size,
            state,
        })
    }

    /// Source rect of the current frame on the sheet.
    pub fn source_rect(&self) -> Rect {
        self.sheet.frame_rect(self.state.frame_index())
    }

    /// Destination rect on the surface.
    pub fn dest_rect(&self) -> Rect {
        self.render_size.rect()
    }

    /// Clear the destination and blit the current frame into it.
    pub fn render(&mut self) {
        let src = self.source_rect();
        let dst = self.dest_rect();
        self.surface.clear_rect(dst);
        self.surface.draw_image(&self.image, src, dst);
    }

    /// Count one tick; see [`AnimationState::update`]. Does not draw.
    pub fn update(&mut self) -> bool {
        let moved = self.state.update();
        tracing::trace!(
            frame = self.state.frame_index(),
            tick = self.state.tick_count(),
            moved,
            "sprite update"
        );
        moved
    }

    /// Step forward one frame (wrapping) and render.
    pub fn next_frame(&mut self) {
        self.state.advance();
        self.render();
    }

    /// Step back one frame (wrapping) and render.
    pub fn prev_frame(&mut self) {
        self.state.retreat();
        self.render();
    }

    /// Show frame `index` directly. Out-of-range indices are rejected and nothing is drawn.
    pub fn set_frame(&mut self, index: u32) -> FlipbookResult<()> {
        self.state.set_frame(index)?;
        self.render();
        Ok(())
    }

    /// Switch between the base rate and slow motion.
    pub fn toggle_slomo(&mut self) {
        self.state.toggle_slomo();
        tracing::debug!(
            slomo = self.state.is_slomo(),
            ticks_per_frame = self.state.current_ticks_per_frame(),
            "toggled slow motion"
        );
    }

    /// Snapshot of the counters and sizes.
    pub fn animation_info(&self) -> AnimationInfo {
        AnimationInfo {
            frame_index: self.state.frame_index(),
            tick_count: self.state.tick_count(),
            total_ticks: self.state.total_ticks(),
            total_frames: self.state.total_frames(),
            total_loops: self.state.total_loops(),
            ticks_per_frame: self.state.ticks_per_frame(),
            current_ticks_per_frame: self.state.current_ticks_per_frame(),
            slomo: self.state.is_slomo(),
            number_of_frames: self.state.number_of_frames(),
            frame_width: self.sheet.frame_width(),
            sheet_width: self.sheet.width,
            sheet_height: self.sheet.height,
            render_width: self.render_size.width,
            render_height: self.render_size.height,
        }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Geometry of the bound sheet.
    pub fn sheet(&self) -> SheetDesc {
        self.sheet
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, e.g. to drain a recording between frames.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

/// Read-only snapshot of a sprite's counters and configuration.
///
/// This is the payload handed to feedback sinks. It serializes with camelCase keys.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationInfo {
    pub frame_index: u32,
    pub tick_count: u32,
    pub total_ticks: u64,
    pub total_frames: i64,
    pub total_loops: i64,
    pub ticks_per_frame: u32,
    pub current_ticks_per_frame: u32,
    pub slomo: bool,
    pub number_of_frames: u32,
    pub frame_width: f64,
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub render_width: u32,
    pub render_height: u32,
}

impl AnimationInfo {
    /// Compact camelCase JSON.
    pub fn to_json(&self) -> FlipbookResult<String> {
        serde_json::to_string(self)
            .map_err(|e| FlipbookError::serde(format!("serialize animation info: {e}")))
    }

    pub fn to_json_pretty(&self) -> FlipbookResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FlipbookError::serde(format!("serialize animation info: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sprite.rs"]
mod tests;
