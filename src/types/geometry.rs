//! Geometric types shared by the grid and raycast APIs.

use glam::Vec2;

/// Viewer pose in continuous grid coordinates (one unit = one cell).
///
/// `direction` is where the viewer faces; `camera` is the plane vector
/// perpendicular offsets are taken along when sweeping a fan of rays.
/// Neither is required to stay unit length; the caster normalizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose2 {
    pub position: Vec2,
    pub direction: Vec2,
    pub camera: Vec2,
}

impl Pose2 {
    pub fn new(position: Vec2, direction: Vec2, camera: Vec2) -> Self {
        Self {
            position,
            direction,
            camera,
        }
    }

    /// Rotate the facing direction and camera plane by `angle` radians
    /// (counter-clockwise).
    pub fn rotate(&mut self, angle: f32) {
        let rotation = Vec2::from_angle(angle);
        self.direction = rotation.rotate(self.direction);
        self.camera = rotation.rotate(self.camera);
    }

    /// Move `speed` cells along the facing direction. A zero-length
    /// direction leaves the position unchanged.
    pub fn advance(&mut self, speed: f32) {
        self.position += self.direction.normalize_or_zero() * speed;
    }
}
