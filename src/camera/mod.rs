//! Trackball camera.
//!
//! Turns pointer drags and scroll input into a damped orbit around a
//! look-at target: primary-button drags rotate on a virtual trackball,
//! secondary-button drags pan the whole rig, and the scroll wheel dollies
//! toward or away from the target.

/// Trackball state machine and per-frame update.
pub mod controller;
/// View output, projection parameters, and the GPU uniform layout.
pub mod core;
/// Damped rotate, pan, and zoom steps.
pub mod motion;
/// Viewport rectangle and pixel-to-trackball mapping.
pub mod viewport;

pub use controller::{InteractionMode, TrackballCamera};
pub use self::core::{CameraUniform, CameraView, Projection};
pub use motion::MotionParams;
pub use viewport::Viewport;
