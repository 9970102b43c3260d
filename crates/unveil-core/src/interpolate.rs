//! Interpolation between property states.
//!
//! The `Interpolate` trait is the mechanism that produces the intermediate
//! values of a running reveal. Interpolating two `PropertyState`s works over
//! the union of their properties; a side that does not name a property
//! contributes that property's identity value, so a reveal that only
//! declares `opacity` in its final state still starts from full opacity
//! rather than from zero.

use crate::types::PropertyState;

/// Trait for types that can be interpolated between two values.
pub trait Interpolate: Sized {
    /// Interpolate between self and another value.
    ///
    /// When t = 0.0, returns self.
    /// When t = 1.0, returns to.
    /// Values between 0.0 and 1.0 return intermediate values.
    fn interpolate(&self, to: &Self, t: f32) -> Self;
}

/// Linear interpolation helper for f64 values.
#[inline]
pub fn lerp(from: f64, to: f64, t: f32) -> f64 {
    from + (to - from) * t as f64
}

impl Interpolate for f64 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        lerp(*self, *to, t)
    }
}

impl Interpolate for PropertyState {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        let mut out = PropertyState::new();
        for property in self.union_properties(to) {
            let from_value = self.get_or_identity(property);
            let to_value = to.get_or_identity(property);
            out.set(property, lerp(from_value, to_value, t));
        }
        out
    }
}
