use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Perspective look-at camera for 3D rendering.
/// Produces a view-projection matrix mapping world units to clip space.
pub struct Camera3D {
    /// Camera position in world space.
    pub pos: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Up vector (normally +Y).
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl Camera3D {
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            pos: Vec3::new(0.0, 500.0, 40.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y,
            aspect,
            near,
            far,
        }
    }

    /// Move the camera to a new position, keeping its current target.
    pub fn look_from(&mut self, pos: Vec3) {
        self.pos = pos;
    }

    /// Point the camera at a world-space target.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Update the aspect ratio (e.g. on viewport resize).
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        if viewport_height > 0.0 {
            self.aspect = viewport_width / viewport_height;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.pos, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: (self.projection_matrix() * self.view_matrix()).to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn test_camera() -> Camera3D {
        Camera3D::new(75.0_f32.to_radians(), 16.0 / 9.0, 0.1, 15000.0)
    }

    #[test]
    fn target_projects_to_viewport_center() {
        let mut cam = test_camera();
        cam.look_from(Vec3::new(0.0, 50.0, 50.0));
        cam.look_at(Vec3::new(100.0, 0.0, 0.0));

        let vp = Mat4::from_cols_array_2d(&cam.uniform().view_proj);
        let clip = vp * Vec4::new(100.0, 0.0, 0.0, 1.0);
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        assert!(ndc_x.abs() < 1e-4 && ndc_y.abs() < 1e-4, "ndc = ({ndc_x}, {ndc_y})");
    }

    #[test]
    fn resize_updates_aspect() {
        let mut cam = test_camera();
        cam.resize(1920.0, 1080.0);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
        // Degenerate viewport leaves aspect untouched
        cam.resize(100.0, 0.0);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn look_from_keeps_target() {
        let mut cam = test_camera();
        cam.look_at(Vec3::new(5.0, 0.0, 5.0));
        cam.look_from(Vec3::new(0.0, 100.0, 0.0));
        assert_eq!(cam.target, Vec3::new(5.0, 0.0, 5.0));
        assert_eq!(cam.pos, Vec3::new(0.0, 100.0, 0.0));
    }
}
