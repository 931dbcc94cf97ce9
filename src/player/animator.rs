use crate::{
    animation::config::AnimationConfig,
    animation::sprite::{AnimationInfo, Sprite},
    foundation::core::SheetDesc,
    foundation::error::{FlipbookError, FlipbookResult},
    host::feedback::{FeedbackSink, FrameSlider},
    host::scheduler::{ManualScheduler, TickHandle, TickScheduler},
    render::surface::DrawSurface,
};

/// Lifecycle of an [`Animator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerState {
    /// Nothing loaded.
    Unloaded,
    /// A sprite is built but its image has not signalled ready; no ticks are requested.
    Loading,
    /// Ticks arrive but do not advance frames.
    Paused,
    /// Every tick updates and renders.
    Playing,
}

impl PlayerState {
    pub fn is_loaded(self) -> bool {
        matches!(self, Self::Paused | Self::Playing)
    }
}

/// Drives a [`Sprite`] from host visual ticks and exposes transport controls.
///
/// The animator never schedules anything itself. It asks `T` for one tick at a time, and the
/// host hands the returned [`TickHandle`] back through [`Animator::tick`]. Each delivered tick
/// re-requests the next one before doing any work, so pausing only gates work while the tick
/// cadence keeps running.
pub struct Animator<S: DrawSurface, T: TickScheduler> {
    scheduler: T,
    sprite: Option<Sprite<S>>,
    state: PlayerState,
    pending: Option<TickHandle>,
    feedback: Option<Box<dyn FeedbackSink>>,
    slider: Option<Box<dyn FrameSlider>>,
}

impl<S: DrawSurface, T: TickScheduler> Animator<S, T> {
    /// Unloaded animator that will request ticks from `scheduler`.
    pub fn new(scheduler: T) -> Self {
        Self {
            scheduler,
            sprite: None,
            state: PlayerState::Unloaded,
            pending: None,
            feedback: None,
            slider: None,
        }
    }

    /// Send a snapshot to `sink` after every rendered tick and manual step.
    pub fn with_feedback(mut self, sink: impl FeedbackSink + 'static) -> Self {
        self.feedback = Some(Box::new(sink));
        self
    }

    /// Keep `slider` in sync with the current frame.
    pub fn with_slider(mut self, slider: impl FrameSlider + 'static) -> Self {
        self.slider = Some(Box::new(slider));
        self
    }

    /// Bind a sprite sheet to `surface` and compute its first frame.
    ///
    /// The surface is resized to the configured render size (or the sheet size for any
    /// unset axis). No tick is requested until [`Animator::on_image_ready`]. Loading again
    /// replaces the current sprite and drops its pending tick.
    #[tracing::instrument(skip(self, surface, image))]
    pub fn load(
        &mut self,
        mut surface: S,
        image: S::Image,
        sheet_width: u32,
        sheet_height: u32,
        config: AnimationConfig,
    ) -> FlipbookResult<()> {
        config.validate()?;
        let sheet = SheetDesc::new(sheet_width, sheet_height, config.number_of_frames)?;
        surface.resize(config.render_size(&sheet)?);

        let mut sprite = Sprite::new(surface, image, sheet, &config)?;
        sprite.update();

        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_tick(handle);
        }
        if let Some(slider) = self.slider.as_mut() {
            slider.set_range(config.number_of_frames - 1);
            slider.set_value(sprite.state().frame_index());
        }
        self.sprite = Some(sprite);
        self.state = PlayerState::Loading;
        tracing::debug!("sprite loaded, waiting for image");
        Ok(())
    }

    /// One-shot signal that the sheet image is decoded.
    ///
    /// Draws the current frame, arms the tick loop, and leaves the animator paused.
    pub fn on_image_ready(&mut self) -> FlipbookResult<()> {
        if self.state != PlayerState::Loading {
            return Err(FlipbookError::state(format!(
                "image ready signalled while {:?}",
                self.state
            )));
        }
        if let Some(sprite) = self.sprite.as_mut() {
            sprite.render();
        }
        self.pending = Some(self.scheduler.request_tick());
        self.state = PlayerState::Paused;
        tracing::debug!("image ready, tick loop armed");
        self.notify();
        Ok(())
    }

    /// Per-tick callback. Returns `true` when the tick advanced and rendered.
    ///
    /// Handles other than the one most recently requested are stale and ignored.
    pub fn tick(&mut self, handle: TickHandle) -> bool {
        if self.pending != Some(handle) {
            tracing::trace!(?handle, "ignoring stale tick");
            return false;
        }
        self.pending = Some(self.scheduler.request_tick());

        if self.state != PlayerState::Playing {
            return false;
        }
        let Some(sprite) = self.sprite.as_mut() else {
            return false;
        };
        sprite.update();
        sprite.render();
        self.notify();
        true
    }

    /// Start advancing on delivered ticks.
    pub fn play(&mut self) -> FlipbookResult<()> {
        self.require_loaded("play")?;
        self.state = PlayerState::Playing;
        Ok(())
    }

    /// Stop advancing; ticks keep arriving.
    pub fn pause(&mut self) -> FlipbookResult<()> {
        self.require_loaded("pause")?;
        self.state = PlayerState::Paused;
        Ok(())
    }

    /// Step one frame: forward when `direction > 0`, backward otherwise.
    pub fn frame(&mut self, direction: i32) -> FlipbookResult<()> {
        let sprite = self.loaded_sprite("frame")?;
        if direction > 0 {
            sprite.next_frame();
        } else {
            sprite.prev_frame();
        }
        self.notify();
        Ok(())
    }

    /// Switch the sprite between its base rate and slow motion.
    pub fn toggle_slomo(&mut self) -> FlipbookResult<()> {
        self.loaded_sprite("toggle_slomo")?.toggle_slomo();
        Ok(())
    }

    /// Slider input: show `index`, clamped to the last frame.
    pub fn seek(&mut self, index: u32) -> FlipbookResult<()> {
        let sprite = self.loaded_sprite("seek")?;
        let last = sprite.state().number_of_frames() - 1;
        sprite.set_frame(index.min(last))?;
        self.notify();
        Ok(())
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayerState::Playing
    }

    /// Tick this animator is currently waiting for.
    pub fn pending_tick(&self) -> Option<TickHandle> {
        self.pending
    }

    /// Snapshot of the loaded sprite, if any.
    pub fn info(&self) -> Option<AnimationInfo> {
        self.sprite.as_ref().map(Sprite::animation_info)
    }

    pub fn sprite(&self) -> Option<&Sprite<S>> {
        self.sprite.as_ref()
    }

    /// Surface the loaded sprite draws into.
    pub fn surface(&self) -> Option<&S> {
        self.sprite.as_ref().map(Sprite::surface)
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }

    fn require_loaded(&self, op: &str) -> FlipbookResult<()> {
        if !self.state.is_loaded() {
            return Err(FlipbookError::state(format!(
                "{op} needs a loaded sprite, animator is {:?}",
                self.state
            )));
        }
        Ok(())
    }

    fn loaded_sprite(&mut self, op: &str) -> FlipbookResult<&mut Sprite<S>> {
        self.require_loaded(op)?;
        self.sprite
            .as_mut()
            .ok_or_else(|| FlipbookError::state(format!("{op} needs a loaded sprite")))
    }

    fn notify(&mut self) {
        let Some(info) = self.info() else {
            return;
        };
        if let Some(sink) = self.feedback.as_mut() {
            sink.notify(&info);
        }
        if let Some(slider) = self.slider.as_mut() {
            slider.set_value(info.frame_index);
        }
    }
}

impl<S: DrawSurface> Animator<S, ManualScheduler> {
    /// Fire the pending manual tick, if any, and deliver it.
    pub fn pump(&mut self) -> bool {
        match self.scheduler.fire() {
            Some(handle) => self.tick(handle),
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/animator.rs"]
mod tests;
