#![allow(clippy::float_cmp)]

use super::*;

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_offset_from_subtracts_components() {
    let a = Point::new(130.0, 95.0);
    let b = Point::new(50.0, 50.0);
    assert_eq!(a.offset_from(b), Point::new(80.0, 45.0));
}

// --- Size ---

#[test]
fn size_aspect_ratio() {
    assert_eq!(Size::new(200.0, 100.0).aspect_ratio(), 2.0);
}

#[test]
fn size_zero_is_not_measurable() {
    assert!(!Size::new(0.0, 300.0).is_measurable());
    assert!(!Size::new(300.0, 0.0).is_measurable());
    assert!(!Size::new(f64::NAN, 10.0).is_measurable());
    assert!(Size::new(1.0, 1.0).is_measurable());
}

// --- clamp_into ---

#[test]
fn clamp_into_leaves_inside_point_alone() {
    let p = clamp_into(Point::new(10.0, 20.0), Size::new(100.0, 100.0), Size::new(500.0, 400.0));
    assert_eq!(p, Point::new(10.0, 20.0));
}

#[test]
fn clamp_into_floors_negative_coordinates() {
    let p = clamp_into(Point::new(-40.0, -1.0), Size::new(100.0, 100.0), Size::new(500.0, 400.0));
    assert_eq!(p, Point::new(0.0, 0.0));
}

#[test]
fn clamp_into_caps_at_far_edge() {
    let p = clamp_into(Point::new(900.0, 900.0), Size::new(100.0, 50.0), Size::new(500.0, 400.0));
    assert_eq!(p, Point::new(400.0, 350.0));
}

#[test]
fn clamp_into_oversized_item_pins_to_origin() {
    let p = clamp_into(Point::new(30.0, 30.0), Size::new(600.0, 500.0), Size::new(500.0, 400.0));
    assert_eq!(p, Point::new(0.0, 0.0));
}
