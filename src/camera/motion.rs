//! Damped rotate, pan and zoom steps.
//!
//! Each step is applied once per [`TrackballCamera::update`] call. Damping
//! is a fixed fraction per call, so coasting speed follows the host's frame
//! rate rather than wall-clock time. Degenerate input (coincident vectors,
//! zero deltas, non-positive zoom factors) makes a step a no-op for that
//! tick.
//!
//! [`TrackballCamera::update`]: crate::camera::controller::TrackballCamera::update

use glam::{Quat, Vec2, Vec3};

/// Tunable response of the camera to input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    /// Multiplier on the trackball rotation angle.
    pub rotate_speed: f32,
    /// Multiplier on the accumulated zoom amount.
    pub zoom_speed: f32,
    /// Multiplier on pan displacement (also scaled by eye distance).
    pub pan_speed: f32,
    /// Fraction of the residual motion consumed per tick, in `(0, 1]`.
    pub damping_factor: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            rotate_speed: 1.0,
            zoom_speed: 1.2,
            pan_speed: 0.1,
            damping_factor: 0.2,
        }
    }
}

/// Rotation gesture: two world-space points on the virtual trackball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateGesture {
    /// Reference point, chases `end` as the rotation is consumed.
    pub start: Vec3,
    /// Latest pointer projection.
    pub end: Vec3,
}

impl RotateGesture {
    /// Gesture with both ends at `point`.
    #[must_use]
    pub fn at(point: Vec3) -> Self {
        Self {
            start: point,
            end: point,
        }
    }

    /// Angle and unit axis carrying `start` onto `end`, or `None` when the
    /// two are coincident, antiparallel or otherwise degenerate.
    #[must_use]
    pub fn axis_angle(&self) -> Option<(Vec3, f32)> {
        let cos = self.start.dot(self.end) / self.start.length() / self.end.length();
        let angle = cos.acos();
        if angle.is_nan() || angle == 0.0 {
            return None;
        }

        let axis = self.start.cross(self.end).normalize();
        if !axis.is_finite() {
            return None;
        }
        Some((axis, angle))
    }
}

/// Pan gesture: two points in normalized screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanGesture {
    /// Reference point, chases `end` as the pan is consumed.
    pub start: Vec2,
    /// Latest pointer position.
    pub end: Vec2,
}

impl PanGesture {
    /// Gesture with both ends at `point`.
    #[must_use]
    pub fn at(point: Vec2) -> Self {
        Self {
            start: point,
            end: point,
        }
    }
}

/// Apply one tick of trackball rotation to `eye` and `up`.
///
/// The full (speed-scaled) angle between the gesture ends is applied to
/// the camera and to `gesture.end`; `gesture.start` is then rotated back by
/// `1 - damping` of that angle, leaving a residual that decays
/// geometrically over later ticks.
///
/// Returns `false` when the step was skipped.
pub fn rotate(
    gesture: &mut RotateGesture,
    eye: &mut Vec3,
    up: &mut Vec3,
    params: &MotionParams,
) -> bool {
    let Some((axis, angle)) = gesture.axis_angle() else {
        return false;
    };
    let angle = angle * params.rotate_speed;

    let applied = Quat::from_axis_angle(axis, -angle);
    *eye = applied * *eye;
    // Renormalize so repeated application cannot drift the basis
    *up = (applied * *up).normalize();
    gesture.end = applied * gesture.end;

    let residual = Quat::from_axis_angle(axis, angle * (params.damping_factor - 1.0));
    gesture.start = residual * gesture.start;
    true
}

/// Compute one tick of pan displacement and decay the gesture.
///
/// The returned vector must be added to both the camera position and its
/// target, which keeps the eye vector (and so the view direction and
/// distance) unchanged. Returns `None` when there is nothing to pan.
pub fn pan(
    gesture: &mut PanGesture,
    eye: Vec3,
    up: Vec3,
    params: &MotionParams,
) -> Option<Vec3> {
    let change = gesture.end - gesture.start;
    if change.length() == 0.0 {
        return None;
    }

    let change = change * eye.length() * params.pan_speed;
    let side = eye.cross(up).normalize();
    let displacement = side * change.x + up.normalize() * change.y;

    gesture.start += (gesture.end - gesture.start) * params.damping_factor;
    Some(displacement)
}

/// Dolly factor for the given zoom accumulator.
#[must_use]
pub fn zoom_factor(zoom: f32, zoom_speed: f32) -> f32 {
    1.0 + (-zoom) * zoom_speed
}

/// Apply one tick of the accumulated zoom to `eye` and decay the
/// accumulator.
///
/// A factor of exactly one (nothing to do) or a non-positive factor skips
/// the step and leaves `zoom` untouched. Returns `false` when skipped.
pub fn zoom(zoom: &mut f32, eye: &mut Vec3, params: &MotionParams) -> bool {
    let factor = zoom_factor(*zoom, params.zoom_speed);
    if factor == 1.0 || factor <= 0.0 {
        return false;
    }

    *eye *= factor;
    *zoom += (-*zoom) * params.damping_factor;
    true
}
