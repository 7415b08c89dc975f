// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests compare exact float results and unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::float_cmp))]

//! Damped trackball camera controller for interactive 3D viewers.
//!
//! The crate turns raw pointer input (button press/drag/release and scroll)
//! into a smoothly damped orbit around a look-at target, and produces a
//! right-handed look-at view matrix plus the homogeneous eye position for
//! the host renderer each frame.
//!
//! # Key entry points
//!
//! - [`camera::TrackballCamera`] - the camera state machine
//! - [`input::InputProcessor`] - routes platform events into the camera
//! - [`options::Options`] - tuning and initial pose, with TOML presets
//!
//! # Frame loop
//!
//! Input callbacks only record pointer state. The host calls
//! [`TrackballCamera::update`] once per frame; each call consumes a fixed
//! fraction (`damping_factor`) of the outstanding motion, so released
//! drags coast to a stop over the following frames. Damping is per frame,
//! not per second.
//!
//! ```
//! use glam::Vec3;
//! use trackball::camera::Viewport;
//! use trackball::input::MouseButton;
//! use trackball::TrackballCamera;
//!
//! let mut camera = TrackballCamera::new();
//! camera.set_screen_dimensions(Viewport::new(0.0, 0.0, 800.0, 600.0));
//! camera.set_position(Vec3::new(0.0, 0.0, 5.0));
//!
//! camera.pointer_down(MouseButton::Primary, true, 400.0, 300.0);
//! camera.pointer_move(450.0, 300.0);
//! let view = camera.update();
//! assert!((view.position().length() - 5.0).abs() < 1e-4);
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;

pub use camera::TrackballCamera;
pub use error::TrackballError;
pub use options::Options;
