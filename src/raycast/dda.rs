use glam::{IVec2, Vec2};

use crate::grid::GridMap;
use crate::raycast::{Axis, RayHit, Side};
use crate::types::GridError;

/// DDA grid traversal that returns the first occupied cell hit.
///
/// `origin` is in continuous grid coordinates and must lie inside the grid;
/// `dir` need not be pre-normalized but must have non-zero length. The
/// returned distance is measured in cell units along the normalized ray.
///
/// At every step the ray advances to whichever of the next vertical or
/// horizontal grid line is nearer along the ray. When both lines are at
/// exactly the same distance the horizontal crossing wins (the y step is
/// taken); this tie-break is deterministic and part of the contract.
///
/// Termination relies on the grid's solid border: a conforming grid stops
/// every ray within `width + height` crossings. A grid that violates the
/// invariant surfaces as [`GridError::OutOfBounds`] when the ray leaves the
/// grid. Behind that check sits a `2 * (width + height)` iteration cap
/// ([`GridError::IterationExhausted`]) as a last-resort net; every crossing
/// advances one cell, so the bounds check fires first on any reachable
/// path.
pub fn cast(grid: &GridMap, origin: Vec2, dir: Vec2) -> Result<RayHit, GridError> {
    if dir.length_squared() < f32::EPSILON {
        return Err(GridError::DegenerateDirection);
    }
    let dir = dir.normalize();

    let (width, height) = (grid.width(), grid.height());
    if origin.x < 0.0
        || origin.y < 0.0
        || origin.x >= width as f32
        || origin.y >= height as f32
    {
        return Err(GridError::OutOfBounds(format!(
            "origin ({}, {}) outside grid {}x{}",
            origin.x, origin.y, width, height
        )));
    }

    // A zero direction component never steps: its cross distance is the
    // infinite sentinel, so the sign chosen here is irrelevant on that axis.
    let step = IVec2::new(
        if dir.x > 0.0 { 1 } else { -1 },
        if dir.y > 0.0 { 1 } else { -1 },
    );
    let (delta_x, mut cross_x) = axis_params(origin.x, dir.x, dir.y);
    let (delta_y, mut cross_y) = axis_params(origin.y, dir.y, dir.x);

    let mut cur = origin.floor().as_ivec2();

    let cap = 2 * (width + height) as usize;
    for _ in 0..cap {
        // Strict comparison: exact ties take the y branch.
        let (probe, axis, t) = if cross_x < cross_y {
            cur.x += step.x;
            let row = (origin.y + cross_x * dir.y).floor() as i32;
            let t = cross_x;
            cross_x += delta_x;
            (IVec2::new(cur.x, row), Axis::X, t)
        } else {
            cur.y += step.y;
            let col = (origin.x + cross_y * dir.x).floor() as i32;
            let t = cross_y;
            cross_y += delta_y;
            (IVec2::new(col, cur.y), Axis::Y, t)
        };

        if probe.x < 0 || probe.y < 0 || probe.x >= width as i32 || probe.y >= height as i32 {
            return Err(GridError::OutOfBounds(format!(
                "ray left grid {}x{} at cell ({}, {}); border is not solid",
                width, height, probe.x, probe.y
            )));
        }

        if grid.is_occupied(probe.x as u32, probe.y as u32) {
            let positive = match axis {
                Axis::X => step.x > 0,
                Axis::Y => step.y > 0,
            };
            return Ok(RayHit {
                distance: t,
                side: Side::entered(axis, positive),
                cell: probe.as_uvec2(),
            });
        }
    }

    Err(GridError::IterationExhausted { steps: cap })
}

/// Per-axis stepping parameters: `(per-crossing increment, distance to the
/// first crossing)`, both measured along the ray.
///
/// The increment is `sqrt(1 + slope^2)` and the first crossing is the
/// orthogonal distance to the next grid line scaled by the same factor, so
/// the two axes' candidates compare directly regardless of ray angle. A
/// zero `dir_along` disables the axis with an infinite sentinel instead of
/// dividing by zero; a subnormal component whose slope overflows is
/// disabled the same way, keeping every cross distance a number.
fn axis_params(start: f32, dir_along: f32, dir_ortho: f32) -> (f32, f32) {
    let slope = dir_ortho / dir_along;
    if !slope.is_finite() {
        return (f32::INFINITY, f32::INFINITY);
    }
    let dist_orth = if dir_along > 0.0 {
        start.floor() + 1.0 - start
    } else {
        start - start.floor()
    };

    let delta = (1.0 + slope * slope).sqrt();
    let cross = (dist_orth * dist_orth + (dist_orth * slope) * (dist_orth * slope)).sqrt();
    (delta, cross)
}
