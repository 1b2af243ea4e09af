use cgmath::{Matrix3, SquareMatrix};
use flow_dyntex::{Canvas, PixelCanvas, Rgba, canvas::StateGuard};

use crate::common::test_utils::{CLEAR, RED};

mod common;

#[test]
fn should_fill_rect_through_scale() {
    let mut canvas = PixelCanvas::new(8, 8);
    canvas.scale(2.0, 4.0);
    canvas.set_fill_style(RED);
    canvas.fill_rect(1.0, 0.0, 1.0, 1.0);

    assert_eq!(*canvas.image().get_pixel(2, 0), RED);
    assert_eq!(*canvas.image().get_pixel(3, 3), RED);
    assert_eq!(*canvas.image().get_pixel(1, 0), CLEAR);
    assert_eq!(*canvas.image().get_pixel(4, 0), CLEAR);
    assert_eq!(*canvas.image().get_pixel(2, 4), CLEAR);
}

#[test]
fn should_clip_fill_rect_to_buffer() {
    let mut canvas = PixelCanvas::new(4, 4);
    canvas.set_fill_style(RED);
    canvas.translate(-2.0, 2.0);
    canvas.fill_rect(0.0, 0.0, 100.0, 100.0);

    assert_eq!(*canvas.image().get_pixel(0, 2), RED);
    assert_eq!(*canvas.image().get_pixel(3, 3), RED);
    assert_eq!(*canvas.image().get_pixel(0, 1), CLEAR);
}

#[test]
fn should_erase_with_clear_rect() {
    let mut canvas = PixelCanvas::new(4, 4);
    canvas.set_fill_style(RED);
    canvas.fill();
    canvas.clear_rect(0.0, 0.0, 2.0, 4.0);

    assert_eq!(*canvas.image().get_pixel(1, 3), CLEAR);
    assert_eq!(*canvas.image().get_pixel(2, 3), RED);
}

#[test]
fn should_pop_saved_state_on_restore() {
    let mut canvas = PixelCanvas::new(1, 1);
    canvas.save();
    canvas.scale(3.0, 3.0);
    canvas.set_fill_style(RED);
    canvas.restore();

    assert_eq!(canvas.transform(), Matrix3::identity());
    assert_eq!(canvas.fill_style(), Rgba([0, 0, 0, 255]));
    // unbalanced restore is ignored
    canvas.restore();
    assert_eq!(canvas.depth(), 0);
}

#[test]
fn should_restore_when_guard_drops() {
    let mut canvas = PixelCanvas::new(1, 1);
    {
        let mut guard = StateGuard::new(&mut canvas);
        guard.scale(2.0, 2.0);
        assert_eq!(guard.depth(), 1);
    }
    assert_eq!(canvas.depth(), 0);
    assert_eq!(canvas.transform(), Matrix3::identity());
}

#[test]
fn should_reset_pixels_and_state_on_resize() {
    let mut canvas = PixelCanvas::new(2, 2);
    canvas.set_fill_style(RED);
    canvas.fill();
    canvas.save();
    canvas.scale(2.0, 2.0);
    canvas.resize(4, 8);

    assert_eq!((canvas.width(), canvas.height()), (4, 8));
    assert!(canvas.image().pixels().all(|pixel| *pixel == CLEAR));
    assert_eq!(canvas.depth(), 0);
    assert_eq!(canvas.transform(), Matrix3::identity());
}
