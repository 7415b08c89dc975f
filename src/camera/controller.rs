use glam::{Vec2, Vec3};

use crate::camera::core::{CameraView, Projection};
use crate::camera::motion::{self, MotionParams, PanGesture, RotateGesture};
use crate::camera::viewport::{sphere_to_world, Viewport};
use crate::input::MouseButton;
use crate::options::CameraOptions;

/// Lines per wheel notch reported by typical windowing back-ends.
const SCROLL_LINES_PER_NOTCH: f32 = 3.0;
/// Zoom accumulated per wheel notch.
const SCROLL_ZOOM_STEP: f32 = 0.05;

/// Released rotations stop coasting below this residual angle (radians).
const ROTATE_SETTLE_ANGLE: f32 = 1e-3;
/// Released pans stop coasting below this residual (normalized screen
/// units).
const PAN_SETTLE_DISTANCE: f32 = 1e-4;

/// Which update branch [`TrackballCamera::update`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// No button held; scroll zoom is applied.
    #[default]
    Idle,
    /// Primary button held; the trackball rotates the eye around the target.
    Rotating,
    /// Secondary button held; the whole rig translates.
    Panning,
}

/// Damped trackball camera.
///
/// Pointer and scroll callbacks only record input. Each call to
/// [`update`](Self::update) consumes a damped fraction of it, so the host
/// must call `update` once per frame for motion to progress. All methods
/// run on the host's UI/render thread; nothing here blocks or allocates.
#[derive(Debug, Clone)]
pub struct TrackballCamera {
    position: Vec3,
    target: Vec3,
    up: Vec3,
    zoom: f32,

    params: MotionParams,
    min_distance: f32,
    max_distance: f32,
    viewport: Viewport,

    mode: InteractionMode,
    /// Gesture still coasting after its button was released.
    released: InteractionMode,
    rotation: RotateGesture,
    pan: PanGesture,

    view: CameraView,
}

impl Default for TrackballCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackballCamera {
    /// Camera with default tuning, one unit in front of the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::from_options(&CameraOptions::default())
    }

    /// Camera built from the tuning and initial pose in `options`.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let position = Vec3::from_array(options.position);
        let target = Vec3::from_array(options.target);
        let up = Vec3::from_array(options.up);

        let mut camera = Self {
            position,
            target,
            up,
            zoom: 0.0,
            params: MotionParams::default(),
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            viewport: Viewport::default(),
            mode: InteractionMode::Idle,
            released: InteractionMode::Idle,
            rotation: RotateGesture::at(Vec3::ZERO),
            pan: PanGesture::at(Vec2::ZERO),
            view: CameraView::look_at(position, target, up),
        };
        camera.apply_options(options);
        camera
    }

    /// Replace the tuning parameters. The current pose is kept.
    ///
    /// Options that fail [`CameraOptions::validate`] are rejected with a
    /// warning and the previous tuning stays in effect.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        if let Err(err) = options.validate() {
            log::warn!("ignoring camera options: {err}");
            return;
        }
        self.params = MotionParams {
            rotate_speed: options.rotate_speed,
            zoom_speed: options.zoom_speed,
            pan_speed: options.pan_speed,
            damping_factor: options.damping_factor,
        };
        self.min_distance = options.min_distance;
        self.max_distance = options.max_distance;
    }

    // ── Host-facing setters ────────────────────────────────────────────

    /// Record the render surface used by subsequent pointer events.
    ///
    /// `viewport.width` and `viewport.height` must be positive.
    pub fn set_screen_dimensions(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Move the look-at point.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Move the camera.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Replace the up vector.
    pub fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    /// Aim the camera at the center of an axis-aligned box, backed off
    /// along `-z` by the box diagonal, and return a matching projection.
    pub fn frame_bounds(&mut self, min: Vec3, max: Vec3) -> Projection {
        let diagonal = max - min;
        let center = min + diagonal * 0.5;
        let size = diagonal.length();

        self.target = center;
        self.position = Vec3::new(center.x, center.y, center.z - size);
        log::debug!("framing bounds {min} .. {max}: target {center}, distance {size}");
        Projection::for_scene_size(size)
    }

    // ── Accessors ──────────────────────────────────────────────────────

    /// Camera position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Look-at point in world space.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Camera up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Offset from the target to the camera (`position - target`).
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.position - self.target
    }

    /// Pending zoom amount (0 at rest).
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Current interaction mode.
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Viewport set by the host.
    #[must_use]
    pub fn screen_dimensions(&self) -> Viewport {
        self.viewport
    }

    /// Tuning currently in effect.
    #[must_use]
    pub fn motion_params(&self) -> &MotionParams {
        &self.params
    }

    /// Output of the most recent [`update`](Self::update).
    #[must_use]
    pub fn view(&self) -> CameraView {
        self.view
    }

    /// Whether another [`update`](Self::update) would move the camera:
    /// a gesture is held or coasting, or zoom is pending.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        let factor = motion::zoom_factor(self.zoom, self.params.zoom_speed);
        self.mode != InteractionMode::Idle
            || self.released != InteractionMode::Idle
            || (factor != 1.0 && factor > 0.0)
    }

    // ── Pointer input ──────────────────────────────────────────────────

    /// Button transition at pixel `(x, y)`.
    ///
    /// A primary press starts rotating and a secondary press starts
    /// panning; anything else (a release, or another button) ends the
    /// active gesture.
    pub fn pointer_down(
        &mut self,
        button: MouseButton,
        pressed: bool,
        x: f32,
        y: f32,
    ) {
        match (button, pressed) {
            (MouseButton::Primary, true) => {
                self.mode = InteractionMode::Rotating;
                self.released = InteractionMode::Idle;
                self.rotation = RotateGesture::at(self.project_to_trackball(x, y));
                log::debug!("rotate gesture started at ({x}, {y})");
            }
            (MouseButton::Secondary, true) => {
                self.mode = InteractionMode::Panning;
                self.released = InteractionMode::Idle;
                self.pan = PanGesture::at(self.viewport.screen_to_normalized(x, y));
                log::debug!("pan gesture started at ({x}, {y})");
            }
            _ => self.release(),
        }
    }

    /// Pointer moved to pixel `(x, y)`. Only the end of the active
    /// gesture changes; without a gesture this does nothing.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        match self.mode {
            InteractionMode::Rotating => {
                self.rotation.end = self.project_to_trackball(x, y);
            }
            InteractionMode::Panning => {
                self.pan.end = self.viewport.screen_to_normalized(x, y);
            }
            InteractionMode::Idle => {}
        }
    }

    /// Button released. The gesture keeps coasting until its residual
    /// motion has decayed.
    pub fn pointer_up(&mut self) {
        self.release();
    }

    /// Scroll wheel input. Only the vertical delta is used; positive
    /// values move the camera toward the target.
    pub fn scroll(&mut self, _delta_x: f32, delta_y: f32) {
        if delta_y != 0.0 {
            self.zoom += (delta_y / SCROLL_LINES_PER_NOTCH) * SCROLL_ZOOM_STEP;
        }
    }

    fn release(&mut self) {
        if self.mode != InteractionMode::Idle {
            log::debug!("{:?} gesture released", self.mode);
            self.released = self.mode;
        }
        self.mode = InteractionMode::Idle;
    }

    /// World-space point on the virtual trackball under pixel `(x, y)`.
    #[must_use]
    pub fn project_to_trackball(&self, x: f32, y: f32) -> Vec3 {
        let point = self.viewport.trackball_point(x, y);
        sphere_to_world(point, self.up, self.target - self.position)
    }

    // ── Per-frame update ───────────────────────────────────────────────

    /// Advance the camera by one tick and return the new view.
    ///
    /// Runs exactly one of the rotate, pan or zoom steps, then applies the
    /// distance limits. `max_distance` bounds the position measured from
    /// the world origin; `min_distance` bounds the eye measured from the
    /// target.
    pub fn update(&mut self) -> CameraView {
        let mut eye = self.position - self.target;

        // A skipped step only matters while coasting, where it ends the gesture
        match self.mode {
            InteractionMode::Rotating => {
                let _ = motion::rotate(
                    &mut self.rotation,
                    &mut eye,
                    &mut self.up,
                    &self.params,
                );
            }
            InteractionMode::Panning => {
                let _ = self.apply_pan(eye);
            }
            InteractionMode::Idle => {
                if !self.coast(&mut eye) {
                    self.apply_zoom(&mut eye);
                }
            }
        }

        self.position = self.target + eye;

        if self.position.length_squared() > self.max_distance * self.max_distance {
            self.position = self.position.normalize() * self.max_distance;
        }

        if eye.length_squared() < self.min_distance * self.min_distance {
            eye = eye.normalize() * self.min_distance;
            self.position = self.target + eye;
        }

        self.view = CameraView::look_at(self.position, self.target, self.up);
        self.view
    }

    /// Continue a released gesture. Returns `false` once it has settled.
    fn coast(&mut self, eye: &mut Vec3) -> bool {
        let moved = match self.released {
            InteractionMode::Rotating => {
                let residual = self
                    .rotation
                    .axis_angle()
                    .map_or(0.0, |(_, angle)| angle * self.params.rotate_speed);
                residual >= ROTATE_SETTLE_ANGLE
                    && motion::rotate(&mut self.rotation, eye, &mut self.up, &self.params)
            }
            InteractionMode::Panning => {
                let residual = (self.pan.end - self.pan.start).length();
                residual >= PAN_SETTLE_DISTANCE && self.apply_pan(*eye)
            }
            InteractionMode::Idle => false,
        };

        if !moved && self.released != InteractionMode::Idle {
            log::trace!("{:?} gesture settled", self.released);
            self.released = InteractionMode::Idle;
        }
        moved
    }

    fn apply_pan(&mut self, eye: Vec3) -> bool {
        match motion::pan(&mut self.pan, eye, self.up, &self.params) {
            Some(displacement) => {
                self.position += displacement;
                self.target += displacement;
                true
            }
            None => false,
        }
    }

    fn apply_zoom(&mut self, eye: &mut Vec3) {
        if !motion::zoom(&mut self.zoom, eye, &self.params) && self.zoom != 0.0 {
            log::trace!(
                "zoom {} stalled: factor {}",
                self.zoom,
                motion::zoom_factor(self.zoom, self.params.zoom_speed)
            );
        }
    }
}
