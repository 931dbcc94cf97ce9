use super::*;

const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];

/// A 4x1 sheet of two 2px frames: [RED GREEN | BLUE WHITE].
fn strip() -> SheetImage {
    let data = [RED, GREEN, BLUE, WHITE].concat();
    SheetImage::from_rgba8(4, 1, data).unwrap()
}

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

#[test]
fn new_surface_is_transparent() {
    let s = CpuSurface::new(canvas(3, 2));
    assert!(s.to_frame().data.iter().all(|&b| b == 0));
    assert_eq!(s.pixel(3, 0), None);
}

#[test]
fn unscaled_blit_copies_the_frame() {
    let mut s = CpuSurface::new(canvas(2, 1));
    s.draw_image(
        &strip(),
        Rect::new(2.0, 0.0, 4.0, 1.0),
        Rect::new(0.0, 0.0, 2.0, 1.0),
    );
    assert_eq!(s.pixel(0, 0), Some(BLUE));
    assert_eq!(s.pixel(1, 0), Some(WHITE));
}

#[test]
fn upscaled_blit_repeats_nearest_pixels() {
    let mut s = CpuSurface::new(canvas(4, 2));
    s.draw_image(
        &strip(),
        Rect::new(0.0, 0.0, 2.0, 1.0),
        Rect::new(0.0, 0.0, 4.0, 2.0),
    );
    for y in 0..2 {
        assert_eq!(s.pixel(0, y), Some(RED));
        assert_eq!(s.pixel(1, y), Some(RED));
        assert_eq!(s.pixel(2, y), Some(GREEN));
        assert_eq!(s.pixel(3, y), Some(GREEN));
    }
}

#[test]
fn downscaled_blit_never_reads_outside_the_source_rect() {
    let mut s = CpuSurface::new(canvas(1, 1));
    s.draw_image(
        &strip(),
        Rect::new(2.0, 0.0, 4.0, 1.0),
        Rect::new(0.0, 0.0, 1.0, 1.0),
    );
    let px = s.pixel(0, 0).unwrap();
    assert!(px == BLUE || px == WHITE);
}

#[test]
fn blit_is_clipped_to_the_canvas() {
    let mut s = CpuSurface::new(canvas(2, 1));
    s.draw_image(
        &strip(),
        Rect::new(0.0, 0.0, 4.0, 1.0),
        Rect::new(-1.0, 0.0, 3.0, 1.0),
    );
    assert_eq!(s.pixel(0, 0), Some(GREEN));
    assert_eq!(s.pixel(1, 0), Some(BLUE));
}

#[test]
fn clear_rect_only_touches_covered_pixels() {
    let mut s = CpuSurface::new(canvas(2, 1));
    s.draw_image(
        &strip(),
        Rect::new(0.0, 0.0, 2.0, 1.0),
        Rect::new(0.0, 0.0, 2.0, 1.0),
    );
    s.clear_rect(Rect::new(1.0, 0.0, 5.0, 1.0));
    assert_eq!(s.pixel(0, 0), Some(RED));
    assert_eq!(s.pixel(1, 0), Some([0, 0, 0, 0]));
}

#[test]
fn translucent_source_blends_over_opaque_destination() {
    let half_red = SheetImage::from_rgba8(1, 1, vec![255, 0, 0, 128]).unwrap();
    let blue = SheetImage::from_rgba8(1, 1, BLUE.to_vec()).unwrap();
    let unit = Rect::new(0.0, 0.0, 1.0, 1.0);

    let mut s = CpuSurface::new(canvas(1, 1));
    s.draw_image(&blue, unit, unit);
    s.draw_image(&half_red, unit, unit);
    let [r, g, b, a] = s.pixel(0, 0).unwrap();
    assert_eq!(a, 255);
    assert_eq!(g, 0);
    assert!((127..=129).contains(&r));
    assert!((126..=128).contains(&b));
}

#[test]
fn translucent_source_over_clear_keeps_source() {
    let half_red = SheetImage::from_rgba8(1, 1, vec![255, 0, 0, 128]).unwrap();
    let unit = Rect::new(0.0, 0.0, 1.0, 1.0);
    let mut s = CpuSurface::new(canvas(1, 1));
    s.draw_image(&half_red, unit, unit);
    assert_eq!(s.pixel(0, 0), Some([255, 0, 0, 128]));
}

#[test]
fn resize_discards_contents() {
    let mut s = CpuSurface::new(canvas(2, 1));
    s.draw_image(
        &strip(),
        Rect::new(0.0, 0.0, 2.0, 1.0),
        Rect::new(0.0, 0.0, 2.0, 1.0),
    );
    s.resize(canvas(3, 3));
    assert_eq!(s.canvas(), canvas(3, 3));
    assert_eq!(s.to_frame().data.len(), 3 * 3 * 4);
    assert_eq!(s.pixel(0, 0), Some([0, 0, 0, 0]));
}
