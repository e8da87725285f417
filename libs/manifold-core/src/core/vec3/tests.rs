//! Tests for the bounding box.

use super::*;

#[test]
fn empty_box_has_no_extent() {
    let bbox = BoundingBox::empty();
    assert!(bbox.is_empty());
    assert_eq!(bbox.scale(), 0.0);
    assert_eq!(BoundingBox::default(), bbox);
}

#[test]
fn single_point_box() {
    let p = Vec3::new(1.0, 2.0, 3.0);
    let bbox = BoundingBox::empty().union(&BoundingBox::new(p, p));
    assert!(!bbox.is_empty());
    assert_eq!(bbox.min, bbox.max);
    assert_eq!(bbox.scale(), 3.0);
}

#[test]
fn scale_uses_absolute_coordinates() {
    let bbox = BoundingBox::new(Vec3::new(-10.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(bbox.scale(), 10.0);
}

#[test]
fn union_of_disjoint_boxes() {
    let a = BoundingBox::new(Vec3::ZERO, Vec3::splat(2.0));
    let b = BoundingBox::new(Vec3::splat(3.0), Vec3::splat(4.0));
    assert_eq!(a.union(&b), BoundingBox::new(Vec3::ZERO, Vec3::splat(4.0)));

    // union with the empty box is the identity
    assert_eq!(a.union(&BoundingBox::empty()), a);
}
