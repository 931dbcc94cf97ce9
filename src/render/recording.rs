use crate::{
    foundation::core::{Canvas, Rect},
    render::surface::DrawSurface,
};

/// One call made against a [`RecordingSurface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    Blit { src: Rect, dst: Rect },
}

/// A surface with no pixels that logs the commands it receives.
///
/// Used to observe exactly what a sprite draws. The log is unbounded; long runs should drain
/// it with [`RecordingSurface::take_commands`] or use [`NullSurface`] instead.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    canvas: Canvas,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Empty log over `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            commands: Vec::new(),
        }
    }

    /// Commands received since creation, the last resize, or the last drain.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Source rect of the most recent blit, if any.
    pub fn last_blit_src(&self) -> Option<Rect> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Blit { src, .. } => Some(*src),
            DrawCommand::Clear(_) => None,
        })
    }

    /// Number of logged blits.
    pub fn blit_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Blit { .. }))
            .count()
    }

    /// Drains the log, returning what was recorded so far.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(Canvas {
            width: 1,
            height: 1,
        })
    }
}

impl DrawSurface for RecordingSurface {
    type Image = ();

    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn resize(&mut self, canvas: Canvas) {
        self.canvas = canvas;
        self.commands.clear();
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn draw_image(&mut self, _image: &(), src: Rect, dst: Rect) {
        self.commands.push(DrawCommand::Blit { src, dst });
    }
}

/// A surface that draws nothing and keeps nothing but its canvas and a blit counter.
///
/// Memory stays constant however long it plays, which makes it the surface for counter-only
/// headless runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NullSurface {
    canvas: Canvas,
    blits: u64,
}

impl NullSurface {
    pub fn new(canvas: Canvas) -> Self {
        Self { canvas, blits: 0 }
    }

    /// Blits received since creation or the last resize.
    pub fn blit_count(&self) -> u64 {
        self.blits
    }
}

impl Default for NullSurface {
    fn default() -> Self {
        Self::new(Canvas {
            width: 1,
            height: 1,
        })
    }
}

impl DrawSurface for NullSurface {
    type Image = ();

    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn resize(&mut self, canvas: Canvas) {
        self.canvas = canvas;
        self.blits = 0;
    }

    fn clear_rect(&mut self, _rect: Rect) {}

    fn draw_image(&mut self, _image: &(), _src: Rect, _dst: Rect) {
        self.blits = self.blits.saturating_add(1);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/recording.rs"]
mod tests;
