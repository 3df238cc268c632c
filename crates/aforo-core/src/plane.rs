//! Projected planar coordinate type.
//!
//! All geometry in the workspace happens in a single metric projection
//! (reference convention: UTM, metres).  `PlanePoint` is double-precision:
//! bearings at a checkpoint node decide direction codes, and the congruence
//! invariants are stated with micrometre tolerances, so `f32` is not enough.

/// A point in the projected plane, coordinates in metres.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

impl PlanePoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in metres.
    #[inline]
    pub fn distance_m(self, other: PlanePoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Bearing of the vector `self → other`, in degrees in `(-180, 180]`.
    ///
    /// Measured counter-clockwise from the positive x axis (`atan2(dy, dx)`),
    /// i.e. 0° points towards +x, 90° towards +y.  The cardinal quadrant
    /// partition in [`crate::sense::Cardinal`] is defined over this angle.
    #[inline]
    pub fn bearing_deg(self, other: PlanePoint) -> f64 {
        (other.y - self.y).atan2(other.x - self.x).to_degrees()
    }
}

impl std::fmt::Display for PlanePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
