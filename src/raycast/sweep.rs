use glam::Vec2;

use crate::grid::GridMap;
use crate::raycast::{RayHit, dda};
use crate::types::{GridError, Pose2};

/// One probe ray of a sweep: the normalized direction it was cast along,
/// the hit, and the hit point in grid coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SweepHit {
    pub dir: Vec2,
    pub hit: RayHit,
    pub point: Vec2,
}

/// Cast a fan of probe rays around `pose.direction`.
///
/// Probes the central direction plus, for each `i` in `1..=half_count`,
/// the pair `direction ± camera * (i / half_count)`, giving
/// `2 * half_count + 1` rays. Probe directions that degenerate to zero
/// length are skipped rather than reported; grid contract violations
/// (out-of-bounds origin, non-solid border) propagate.
pub fn sweep(
    grid: &GridMap,
    pose: &Pose2,
    half_count: u32,
) -> Result<Vec<SweepHit>, GridError> {
    let mut hits = Vec::with_capacity(2 * half_count as usize + 1);
    probe(grid, pose.position, pose.direction, &mut hits)?;
    for i in 1..=half_count {
        let offset = pose.camera * (i as f32 / half_count as f32);
        probe(grid, pose.position, pose.direction + offset, &mut hits)?;
        probe(grid, pose.position, pose.direction - offset, &mut hits)?;
    }
    Ok(hits)
}

fn probe(
    grid: &GridMap,
    origin: Vec2,
    dir: Vec2,
    out: &mut Vec<SweepHit>,
) -> Result<(), GridError> {
    match dda::cast(grid, origin, dir) {
        Ok(hit) => {
            let dir = dir.normalize();
            out.push(SweepHit {
                dir,
                hit,
                point: origin + dir * hit.distance,
            });
            Ok(())
        }
        // No visual update for this ray; the caller did not lose anything.
        Err(GridError::DegenerateDirection) => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_counts_center_plus_pairs() {
        let grid = GridMap::bordered(20, 20).expect("grid should build");
        let pose = Pose2::new(Vec2::new(10.0, 10.0), Vec2::X, Vec2::Y);
        let hits = sweep(&grid, &pose, 25).expect("sweep should cast");
        assert_eq!(hits.len(), 51);
    }

    #[test]
    fn hit_points_lie_on_occupied_cells() {
        let grid = GridMap::bordered(20, 20).expect("grid should build");
        // Camera plane shorter than the facing vector keeps every probe off
        // the exact-corner diagonals.
        let pose = Pose2::new(Vec2::new(10.5, 10.5), Vec2::X, Vec2::new(0.0, 0.8));
        for sweep_hit in sweep(&grid, &pose, 10).expect("sweep should cast") {
            // Nudge past the entered face to land inside the hit cell.
            let inside = sweep_hit.point + sweep_hit.dir * 1e-3;
            assert_eq!(inside.x.floor() as u32, sweep_hit.hit.cell.x);
            assert_eq!(inside.y.floor() as u32, sweep_hit.hit.cell.y);
        }
    }

    #[test]
    fn degenerate_probe_is_skipped() {
        let grid = GridMap::bordered(20, 20).expect("grid should build");
        // direction + camera cancels at the last positive probe.
        let pose = Pose2::new(Vec2::new(10.0, 10.0), Vec2::X, Vec2::NEG_X);
        let hits = sweep(&grid, &pose, 1).expect("sweep should cast");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn contract_violation_propagates() {
        let grid = GridMap::bordered(20, 20).expect("grid should build");
        let pose = Pose2::new(Vec2::new(-5.0, 10.0), Vec2::X, Vec2::Y);
        assert!(matches!(
            sweep(&grid, &pose, 4),
            Err(GridError::OutOfBounds(_))
        ));
    }
}
