//! Camera-focus state machine: a wrapping index over the nine bodies,
//! advanced by the secondary pointer button, placing the camera at a fixed
//! offset in the focused body's local frame.

use crate::bodies::BODY_COUNT;
use glam::Vec3;
use orrery_engine::{Camera3D, Entity};

pub struct CameraFocus {
    index: usize,
    /// Offset distance from the focused body.
    distance: f32,
    /// When set, the placement is recomputed every tick so the camera
    /// follows the body along its orbit instead of drifting. Off by
    /// default — the camera then moves only on a focus change.
    pub tracking: bool,
}

impl CameraFocus {
    pub fn new(distance: f32) -> Self {
        Self {
            index: 0,
            distance,
            tracking: false,
        }
    }

    /// Restore a focus state with an arbitrary index; wraps rather than
    /// panics if it is out of range.
    pub fn with_index(distance: f32, index: usize) -> Self {
        Self {
            index: index % BODY_COUNT,
            distance,
            tracking: false,
        }
    }

    /// The currently focused body index, always in [0, BODY_COUNT).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance to the next body, wrapping after the last. Returns the new
    /// index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % BODY_COUNT;
        self.index
    }

    /// Place the camera relative to the focused body: the offset
    /// (0, d, d) is expressed in the body's world orientation frame, then
    /// the camera is aimed straight at the body.
    pub fn apply(&self, body: &Entity, camera: &mut Camera3D) {
        let offset = body.local_to_world(Vec3::new(0.0, self.distance, self.distance));
        camera.look_from(offset);
        camera.look_at(body.pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;
    use orrery_engine::{EntityId, GameConfig};

    fn camera() -> Camera3D {
        let c = GameConfig::default();
        Camera3D::new(c.camera_fov_y, c.camera_aspect, c.camera_near, c.camera_far)
    }

    #[test]
    fn advance_cycles_through_all_bodies() {
        let mut focus = CameraFocus::new(50.0);
        assert_eq!(focus.index(), 0);
        for expected in 1..BODY_COUNT {
            assert_eq!(focus.advance(), expected);
        }
        // Ninth trigger wraps back to the start
        assert_eq!(focus.advance(), 0);
    }

    #[test]
    fn out_of_band_index_wraps() {
        let focus = CameraFocus::with_index(50.0, 25);
        assert!(focus.index() < BODY_COUNT);
        assert_eq!(focus.index(), 25 % BODY_COUNT);
    }

    #[test]
    fn apply_offsets_in_body_frame() {
        let mut cam = camera();
        let body = Entity::new(EntityId(1)).with_pos(Vec3::new(100.0, 0.0, 0.0));

        let focus = CameraFocus::new(50.0);
        focus.apply(&body, &mut cam);
        assert_eq!(cam.pos, Vec3::new(100.0, 50.0, 50.0));
        assert_eq!(cam.target, body.pos);
    }

    #[test]
    fn apply_respects_body_rotation() {
        let mut cam = camera();
        // Half turn about y flips the z component of the offset
        let body = Entity::new(EntityId(1))
            .with_pos(Vec3::new(10.0, 0.0, 0.0))
            .with_rotation(Quat::from_rotation_y(std::f32::consts::PI));

        let focus = CameraFocus::new(50.0);
        focus.apply(&body, &mut cam);
        assert!((cam.pos - Vec3::new(10.0, 50.0, -50.0)).length() < 1e-3, "pos = {:?}", cam.pos);
    }
}
