//! Input handling: platform-agnostic event types and the processor that
//! routes them into the camera.

/// Platform-agnostic input events.
pub mod event;
/// Routes raw events into the camera.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::InputProcessor;
