use glam::Vec2;
use rand::Rng;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::raycast::{self, RayHit};
use crate::types::GridError;

/// 2D boolean occupancy grid, row-major, dimensions fixed at construction.
///
/// Coordinates are cell indices: `0 <= x < width`, `0 <= y < height`.
/// Ray traversal ([`raycast::cast`]) assumes the border cells (row 0, row
/// `height - 1`, column 0, column `width - 1`) are occupied so every ray
/// terminates inside the grid; the grid does not enforce this, but
/// [`GridMap::has_solid_border`] lets callers assert it.
#[derive(Debug, Clone)]
pub struct GridMap {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl GridMap {
    pub fn new(width: u32, height: u32, data: Vec<bool>) -> Result<Self, GridError> {
        let expected_len = (width as usize) * (height as usize);
        if data.len() != expected_len {
            return Err(GridError::InvalidDimensions(format!(
                "data length {} does not match grid size {}",
                data.len(),
                expected_len
            )));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Empty interior with an occupied perimeter.
    pub fn bordered(width: u32, height: u32) -> Result<Self, GridError> {
        if width < 3 || height < 3 {
            return Err(GridError::InvalidDimensions(format!(
                "{width}x{height} grid has no interior inside a solid border"
            )));
        }

        let mut map = Self {
            width,
            height,
            data: vec![false; (width as usize) * (height as usize)],
        };
        map.fill_border();
        Ok(map)
    }

    /// Random interior fill (each cell occupied with `fill_probability`)
    /// plus an occupied perimeter. Deterministic for a given `seed`.
    pub fn random(
        width: u32,
        height: u32,
        fill_probability: f32,
        seed: u64,
    ) -> Result<Self, GridError> {
        let mut map = Self::bordered(width, height)?;
        let mut rng = SmallRng::seed_from_u64(seed);
        for y in 1..height - 1 {
            for x in 1..width - 1 {
                let idx = map.index(x, y);
                map.data[idx] = rng.gen::<f32>() < fill_probability;
            }
        }
        Ok(map)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Occupancy of cell (x, y). Out-of-range cells read as free; traversal
    /// bounds-checks before asking.
    pub fn is_occupied(&self, x: u32, y: u32) -> bool {
        self.get(x, y).unwrap_or(false)
    }

    pub fn set(&mut self, x: u32, y: u32, occupied: bool) -> Result<(), GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds(format!(
                "cell ({}, {}) out of bounds for grid {}x{}",
                x, y, self.width, self.height
            )));
        }
        let idx = self.index(x, y);
        self.data[idx] = occupied;
        Ok(())
    }

    /// True when every perimeter cell is occupied (the invariant ray
    /// traversal's termination depends on).
    pub fn has_solid_border(&self) -> bool {
        let right = self.width - 1;
        let top = self.height - 1;
        (0..self.width).all(|x| self.is_occupied(x, 0) && self.is_occupied(x, top))
            && (0..self.height).all(|y| self.is_occupied(0, y) && self.is_occupied(right, y))
    }

    /// Cast a single ray from `origin` along `dir`; see [`raycast::cast`].
    pub fn cast(&self, origin: Vec2, dir: Vec2) -> Result<RayHit, GridError> {
        raycast::cast(self, origin, dir)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    fn fill_border(&mut self) {
        for x in 0..self.width {
            let bottom = self.index(x, 0);
            self.data[bottom] = true;
            let top = self.index(x, self.height - 1);
            self.data[top] = true;
        }
        for y in 0..self.height {
            let left = self.index(0, y);
            self.data[left] = true;
            let right = self.index(self.width - 1, y);
            self.data[right] = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_length_mismatch() {
        let result = GridMap::new(4, 4, vec![false; 10]);
        assert!(matches!(result, Err(GridError::InvalidDimensions(_))));
    }

    #[test]
    fn bordered_satisfies_border_invariant() {
        let map = GridMap::bordered(5, 7).expect("grid should build");
        assert!(map.has_solid_border());
        assert!(!map.is_occupied(2, 3));
    }

    #[test]
    fn bordered_rejects_degenerate_size() {
        assert!(matches!(
            GridMap::bordered(2, 5),
            Err(GridError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn random_is_deterministic_per_seed() {
        let a = GridMap::random(20, 20, 0.05, 42).expect("grid should build");
        let b = GridMap::random(20, 20, 0.05, 42).expect("grid should build");
        assert_eq!(a.data, b.data);
        assert!(a.has_solid_border());
    }

    #[test]
    fn get_rejects_out_of_range() {
        let map = GridMap::bordered(5, 5).expect("grid should build");
        assert_eq!(map.get(5, 0), None);
        assert_eq!(map.get(0, 5), None);
        assert_eq!(map.get(4, 4), Some(true));
    }

    #[test]
    fn set_updates_cell() {
        let mut map = GridMap::bordered(5, 5).expect("grid should build");
        map.set(2, 2, true).expect("in bounds");
        assert!(map.is_occupied(2, 2));
        assert!(matches!(
            map.set(9, 2, true),
            Err(GridError::OutOfBounds(_))
        ));
    }
}
