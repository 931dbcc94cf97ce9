use crate::foundation::core::{Canvas, Rect};

/// A 2D drawing target a [`crate::Sprite`] renders into.
///
/// Mirrors the handful of canvas operations sprite playback needs. Rectangles are in pixels,
/// may be fractional, and are clipped by the implementation. `draw_image` scales freely when
/// `src` and `dst` differ in size.
pub trait DrawSurface {
    /// Source image type this surface can blit from.
    type Image;

    /// Current pixel size.
    fn canvas(&self) -> Canvas;

    /// Reallocate to `canvas`. Existing contents are discarded.
    fn resize(&mut self, canvas: Canvas);

    /// Reset every pixel inside `rect` to transparent.
    fn clear_rect(&mut self, rect: Rect);

    /// Copy the `src` region of `image` into the `dst` region of this surface.
    fn draw_image(&mut self, image: &Self::Image, src: Rect, dst: Rect);
}
