pub mod occupancy;

pub use occupancy::GridMap;
