//! The kernel's vector alias and axis-aligned bounding box.

pub use glam::DVec3 as Vec3;

/// Axis-aligned bounding box.
///
/// The empty box has `min = +inf` and `max = -inf`, so it is the identity
/// of [`union`](Self::union).
///
/// # Examples
/// ```
/// use manifold_core::{BoundingBox, Vec3};
/// let a = Vec3::new(1.0, -2.0, 0.0);
/// let b = Vec3::new(-1.0, 3.0, 0.5);
/// let bbox = BoundingBox::empty()
///     .union(&BoundingBox::new(a, a))
///     .union(&BoundingBox::new(b, b));
/// assert_eq!(bbox.min, Vec3::new(-1.0, -2.0, 0.0));
/// assert_eq!(bbox.scale(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl BoundingBox {
    /// Creates a box from two corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates an empty box that contains nothing.
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f64::INFINITY),
            max: Vec3::splat(f64::NEG_INFINITY),
        }
    }

    /// Returns true if no point has been added.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Returns the smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Largest absolute coordinate of either corner; zero for an empty box.
    ///
    /// Precision loss in a coordinate is relative to its magnitude, so this
    /// is the scale epsilons are derived from.
    pub fn scale(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.min.abs().max(self.max.abs()).max_element()
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests;
