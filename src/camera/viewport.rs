//! Pixel-to-camera coordinate mapping.
//!
//! Two mappings are used by the trackball: a centered `[-1, 1]` mapping
//! onto a virtual unit sphere for rotation, and an origin-relative `[0, 1]`
//! mapping for panning. The sphere mapping only uses the viewport extent,
//! never its origin.

use glam::{Vec2, Vec3};

/// Host render-surface rectangle in pixels.
///
/// Callers must keep `width > 0` and `height > 0`; a zero-area viewport
/// makes every mapping divide by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Left edge in pixels.
    pub x: f32,
    /// Top edge in pixels.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport from its origin and extent.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Width / height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Map a pixel to origin-relative normalized coordinates, roughly
    /// `[0, 1] x [0, 1]` inside the viewport.
    #[must_use]
    pub fn screen_to_normalized(&self, px: f32, py: f32) -> Vec2 {
        Vec2::new((px - self.x) / self.width, (py - self.y) / self.height)
    }

    /// Project a pixel onto the virtual unit trackball, in sphere-local
    /// coordinates (`x` right, `y` down the pixel rows, `z` toward the
    /// viewer).
    ///
    /// Pixels inside the inscribed ellipse land on the front hemisphere;
    /// pixels outside it are pulled onto the equator (`z = 0`).
    #[must_use]
    pub fn trackball_point(&self, px: f32, py: f32) -> Vec3 {
        let half_w = self.width * 0.5;
        let half_h = self.height * 0.5;
        let flat = Vec3::new((px - half_w) / half_w, (py - half_h) / half_h, 0.0);

        let radius = flat.length();
        if radius > 1.0 {
            flat.normalize()
        } else {
            Vec3::new(flat.x, flat.y, (1.0 - radius * radius).sqrt())
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }
}

/// Express a sphere-local trackball point in world space using the
/// camera's current basis.
///
/// `forward` is the viewing direction (`target - position`). The sphere's
/// `z` axis maps onto `forward`, `y` onto `up` and `x` onto
/// `up × forward`.
#[must_use]
pub fn sphere_to_world(point: Vec3, up: Vec3, forward: Vec3) -> Vec3 {
    let side = up.cross(forward).normalize();
    up.normalize() * point.y + side * point.x + forward.normalize() * point.z
}
