pub mod grid;
pub mod raycast;
pub mod types;

pub use grid::GridMap;
pub use raycast::{RayHit, Side, SweepHit, cast, sweep};
pub use types::{GridError, Pose2};
