use glam::{Mat4, Vec3, Vec4};

/// Result of a single [`TrackballCamera::update`] tick.
///
/// [`TrackballCamera::update`]: crate::camera::controller::TrackballCamera::update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    /// Right-handed look-at view matrix (column-major).
    pub view: Mat4,
    /// Camera world-space position in homogeneous form (`w = 1`).
    pub eye: Vec4,
}

impl CameraView {
    /// Build the view for a camera at `position` looking at `target`.
    #[must_use]
    pub fn look_at(position: Vec3, target: Vec3, up: Vec3) -> Self {
        Self {
            view: Mat4::look_at_rh(position, target, up),
            eye: position.extend(1.0),
        }
    }

    /// Camera position without the homogeneous component.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.eye.truncate()
    }
}

impl Default for CameraView {
    fn default() -> Self {
        Self::look_at(Vec3::Z, Vec3::ZERO, Vec3::Y)
    }
}

/// Perspective projection parameters a host can pair with the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Projection {
    /// Projection sized to enclose a scene whose bounding-box diagonal is
    /// `size` long.
    #[must_use]
    pub fn for_scene_size(size: f32) -> Self {
        Self {
            fovy: 45.0,
            znear: size / 10.0,
            zfar: size * 10.0,
        }
    }

    /// Right-handed perspective matrix for the given aspect ratio
    /// (width / height).
    #[must_use]
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        // perspective_rh uses the [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(self.fovy.to_radians(), aspect, self.znear, self.zfar)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer layout holding the camera matrices and eye position.
pub struct CameraUniform {
    /// View matrix.
    pub view: [[f32; 4]; 4],
    /// Projection matrix.
    pub proj: [[f32; 4]; 4],
    /// Homogeneous eye position.
    pub eye: [f32; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a uniform with identity matrices and the eye at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            proj: Mat4::IDENTITY.to_cols_array_2d(),
            eye: [0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Copy the latest camera output and projection into the uniform.
    pub fn update(&mut self, view: &CameraView, projection: &Projection, aspect: f32) {
        self.view = view.view.to_cols_array_2d();
        self.proj = projection.matrix(aspect).to_cols_array_2d();
        self.eye = view.eye.to_array();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_at_keeps_homogeneous_eye() {
        let view = CameraView::look_at(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y);
        assert_eq!(view.eye, Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(view.position(), Vec3::new(1.0, 2.0, 3.0));

        // The view matrix maps the eye itself to the view-space origin
        let origin = view.view.transform_point3(view.position());
        assert!(origin.length() < 1e-5);
    }

    #[test]
    fn scene_projection_scales_clip_planes() {
        let proj = Projection::for_scene_size(20.0);
        assert_eq!(proj.znear, 2.0);
        assert_eq!(proj.zfar, 200.0);
        assert_eq!(proj.fovy, 45.0);
    }

    #[test]
    fn uniform_copies_view_and_eye() {
        let view = CameraView::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let mut uniform = CameraUniform::new();
        uniform.update(&view, &Projection::default(), 1.5);
        assert_eq!(uniform.eye, [0.0, 0.0, 5.0, 1.0]);
        assert_eq!(uniform.view, view.view.to_cols_array_2d());
        assert_ne!(uniform.proj, Mat4::IDENTITY.to_cols_array_2d());

        let bytes: &[u8] = bytemuck::bytes_of(&uniform);
        assert_eq!(bytes.len(), (16 + 16 + 4) * 4);
    }
}
