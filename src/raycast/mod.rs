use glam::UVec2;

pub mod dda;
pub mod sweep;

pub use dda::cast;
pub use sweep::{SweepHit, sweep};

/// Face of the hit cell through which the ray entered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    North,
    East,
    South,
    West,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    Y,
}

impl Side {
    /// Entered face keyed by the stepped axis and step sign: stepping right
    /// enters through the west face, up through the south face, and so on.
    pub(crate) fn entered(axis: Axis, positive_step: bool) -> Self {
        match (axis, positive_step) {
            (Axis::X, true) => Side::West,
            (Axis::X, false) => Side::East,
            (Axis::Y, true) => Side::South,
            (Axis::Y, false) => Side::North,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the entered face, in cell units
    /// along the normalized ray.
    pub distance: f32,
    /// Face of the hit cell the ray entered through.
    pub side: Side,
    /// Grid cell that contains the hit.
    pub cell: UVec2,
}

impl RayHit {
    /// Extract hit distance, or return `default` on a failed cast.
    pub fn distance_or<E>(hit: Result<Self, E>, default: f32) -> f32 {
        hit.map(|h| h.distance).unwrap_or(default)
    }
}
