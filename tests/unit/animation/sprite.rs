use super::*;
use crate::render::recording::{DrawCommand, RecordingSurface};

fn walker() -> Sprite<RecordingSurface> {
    let sheet = SheetDesc::new(1472, 325, 8).unwrap();
    let cfg = AnimationConfig::new(4, 8, 147, 325).unwrap();
    Sprite::new(RecordingSurface::default(), (), sheet, &cfg).unwrap()
}

#[test]
fn construction_draws_nothing() {
    let s = walker();
    assert!(s.surface().commands().is_empty());
    assert_eq!(s.state().frame_index(), 0);
}

#[test]
fn render_before_update_clears_then_blits_frame_zero() {
    let mut s = walker();
    s.render();
    let dst = Rect::new(0.0, 0.0, 147.0, 325.0);
    assert_eq!(
        s.surface().commands(),
        &[
            DrawCommand::Clear(dst),
            DrawCommand::Blit {
                src: Rect::new(0.0, 0.0, 184.0, 325.0),
                dst,
            },
        ]
    );
}

#[test]
fn update_counts_without_drawing() {
    let mut s = walker();
    for _ in 0..5 {
        s.update();
    }
    assert!(s.surface().commands().is_empty());

    let info = s.animation_info();
    assert_eq!(info.frame_index, 1);
    assert_eq!(info.tick_count, 0);
    assert_eq!(info.total_ticks, 5);
    assert_eq!(info.total_frames, 1);

    s.render();
    assert_eq!(
        s.surface().last_blit_src(),
        Some(Rect::new(184.0, 0.0, 368.0, 325.0))
    );
}

#[test]
fn forty_updates_loop_back_to_start() {
    let mut s = walker();
    for _ in 0..40 {
        s.update();
    }
    let info = s.animation_info();
    assert_eq!(info.frame_index, 0);
    assert_eq!(info.total_loops, 1);
}

#[test]
fn manual_steps_render_immediately() {
    let mut s = walker();
    s.next_frame();
    assert_eq!(s.surface().blit_count(), 1);
    assert_eq!(
        s.surface().last_blit_src(),
        Some(Rect::new(184.0, 0.0, 368.0, 325.0))
    );

    s.prev_frame();
    s.prev_frame();
    assert_eq!(s.surface().blit_count(), 3);
    assert_eq!(
        s.surface().last_blit_src(),
        Some(Rect::new(1288.0, 0.0, 1472.0, 325.0))
    );
    assert_eq!(s.animation_info().total_loops, -1);
}

#[test]
fn set_frame_renders_and_rejects_out_of_range() {
    let mut s = walker();
    s.set_frame(5).unwrap();
    assert_eq!(
        s.surface().last_blit_src(),
        Some(Rect::new(920.0, 0.0, 1104.0, 325.0))
    );

    let before = s.surface().commands().len();
    assert!(matches!(s.set_frame(8), Err(FlipbookError::Frame(_))));
    assert_eq!(s.surface().commands().len(), before);
    assert_eq!(s.state().frame_index(), 5);
}

#[test]
fn mismatched_frame_counts_are_rejected() {
    let sheet = SheetDesc::new(100, 10, 4).unwrap();
    let cfg = AnimationConfig::unscaled(1, 5).unwrap();
    assert!(matches!(
        Sprite::new(RecordingSurface::default(), (), sheet, &cfg),
        Err(FlipbookError::Config(_))
    ));
}

#[test]
fn unscaled_config_renders_at_sheet_size() {
    let sheet = SheetDesc::new(100, 10, 4).unwrap();
    let cfg = AnimationConfig::unscaled(1, 4).unwrap();
    let s = Sprite::new(RecordingSurface::default(), (), sheet, &cfg).unwrap();
    assert_eq!(s.dest_rect(), Rect::new(0.0, 0.0, 100.0, 10.0));
}

#[test]
fn info_snapshot_reports_config_and_serializes_camel_case() {
    let mut s = walker();
    s.toggle_slomo();
    let info = s.animation_info();
    assert_eq!(info.ticks_per_frame, 4);
    assert_eq!(info.current_ticks_per_frame, 12);
    assert!(info.slomo);
    assert_eq!(info.frame_width, 184.0);
    assert_eq!((info.render_width, info.render_height), (147, 325));

    let json = info.to_json().unwrap();
    assert!(json.contains("\"frameIndex\":0"));
    assert!(json.contains("\"currentTicksPerFrame\":12"));

    let back: AnimationInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(back, info);
}

#[test]
fn draining_the_surface_keeps_long_runs_bounded() {
    let mut s = walker();
    assert_eq!(s.sheet(), SheetDesc::new(1472, 325, 8).unwrap());

    let mut blits = 0usize;
    for _ in 0..10_000 {
        s.update();
        s.render();
        let drained = s.surface_mut().take_commands();
        assert_eq!(drained.len(), 2);
        blits += drained
            .iter()
            .filter(|c| matches!(c, DrawCommand::Blit { .. }))
            .count();
        assert!(s.surface().commands().is_empty());
    }
    assert_eq!(blits, 10_000);
    assert_eq!(s.animation_info().total_ticks, 10_000);
}
