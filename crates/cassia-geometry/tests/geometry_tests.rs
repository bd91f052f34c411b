//! Integration tests for the geometry primitives.

use cassia_geometry::Rect;

#[test]
fn test_area_is_width_times_height() {
    let rect = Rect::new(10.0, 20.0);
    assert!((rect.area() - 200.0).abs() < f32::EPSILON);

    let square = Rect::new(7.0, 7.0);
    assert!((square.area() - 49.0).abs() < f32::EPSILON);
}

#[test]
fn test_area_of_degenerate_rect_is_zero() {
    assert!(Rect::new(0.0, 15.0).area().abs() < f32::EPSILON);
    assert!(Rect::new(15.0, 0.0).area().abs() < f32::EPSILON);
    assert!(Rect::default().area().abs() < f32::EPSILON);
}

#[test]
fn test_area_tracks_field_mutation() {
    let mut rect = Rect::new(3.0, 4.0);
    assert!((rect.area() - 12.0).abs() < f32::EPSILON);

    // No stored product: mutating a field is reflected on the next call.
    rect.width = 5.0;
    assert!((rect.area() - 20.0).abs() < f32::EPSILON);
}

#[test]
fn test_fields_are_kept_verbatim() {
    let rect = Rect::new(800.0, 600.0);
    assert!((rect.width - 800.0).abs() < f32::EPSILON);
    assert!((rect.height - 600.0).abs() < f32::EPSILON);
}
