//! Forwards raw platform events to the camera.
//!
//! The `InputProcessor` owns the transient input state a windowing layer
//! keeps for the camera (last cursor position, held button). It is the
//! only thing that sits between raw window events and the
//! [`TrackballCamera`] input methods.

use super::event::{InputEvent, MouseButton};
use crate::camera::{TrackballCamera, Viewport};

/// Routes [`InputEvent`]s into a [`TrackballCamera`].
///
/// Button events carry no position, so the processor remembers the last
/// cursor position and uses it for presses. Cursor motion is only
/// forwarded while a button is held.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(event) = InputEvent::from_window_event(&window_event) {
///     if input_processor.handle_event(&mut camera, event) {
///         window.request_redraw();
///     }
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Last cursor position in physical pixels.
    cursor: (f32, f32),
    /// Button currently held, if any.
    held: Option<MouseButton>,
}

impl InputProcessor {
    /// Create a processor with no button held and the cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> (f32, f32) {
        self.cursor
    }

    /// Button currently held, if any.
    #[must_use]
    pub fn held_button(&self) -> Option<MouseButton> {
        self.held
    }

    /// Forget the held button without notifying the camera.
    ///
    /// Used when the host grabs the pointer for something else mid-drag
    /// and will not deliver the matching release.
    pub fn release_mouse_state(&mut self) {
        self.held = None;
    }

    /// Apply one event to `camera`.
    ///
    /// Returns `true` when the camera's input state changed and the host
    /// should schedule an [`update`](TrackballCamera::update).
    pub fn handle_event(
        &mut self,
        camera: &mut TrackballCamera,
        event: InputEvent,
    ) -> bool {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = (x, y);
                if self.held.is_none() {
                    return false;
                }
                camera.pointer_move(x, y);
                true
            }
            InputEvent::MouseButton { button, pressed } => {
                let (x, y) = self.cursor;
                if pressed {
                    self.held = Some(button);
                    camera.pointer_down(button, true, x, y);
                } else {
                    self.held = None;
                    camera.pointer_up();
                }
                true
            }
            InputEvent::Scroll { delta_x, delta_y } => {
                camera.scroll(delta_x, delta_y);
                delta_y != 0.0
            }
            InputEvent::Resized {
                x,
                y,
                width,
                height,
            } => {
                if width <= 0.0 || height <= 0.0 {
                    // Minimized windows report a zero-sized surface
                    log::debug!("ignoring degenerate viewport {width}x{height}");
                    return false;
                }
                camera.set_screen_dimensions(Viewport::new(x, y, width, height));
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::InteractionMode;

    fn setup() -> (InputProcessor, TrackballCamera) {
        let mut camera = TrackballCamera::new();
        camera.set_position(Vec3::new(0.0, 0.0, 5.0));
        let mut input = InputProcessor::new();
        let resized = input.handle_event(
            &mut camera,
            InputEvent::Resized {
                x: 0.0,
                y: 0.0,
                width: 800.0,
                height: 600.0,
            },
        );
        assert!(resized);
        (input, camera)
    }

    #[test]
    fn resize_sets_viewport() {
        let (_, camera) = setup();
        assert_eq!(camera.screen_dimensions(), Viewport::new(0.0, 0.0, 800.0, 600.0));
    }

    #[test]
    fn zero_sized_resize_is_ignored() {
        let (mut input, mut camera) = setup();
        let event = InputEvent::Resized {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        };
        assert!(!input.handle_event(&mut camera, event));
        assert_eq!(camera.screen_dimensions().width, 800.0);
    }

    #[test]
    fn hover_does_not_reach_camera() {
        let (mut input, mut camera) = setup();
        let hover = InputEvent::CursorMoved { x: 10.0, y: 20.0 };
        assert!(!input.handle_event(&mut camera, hover));
        assert_eq!(input.cursor(), (10.0, 20.0));
        assert_eq!(camera.mode(), InteractionMode::Idle);
    }

    #[test]
    fn press_uses_last_cursor_position_and_drag_rotates() {
        let (mut input, mut camera) = setup();
        let events = [
            InputEvent::CursorMoved { x: 400.0, y: 300.0 },
            InputEvent::MouseButton {
                button: MouseButton::Primary,
                pressed: true,
            },
            InputEvent::CursorMoved { x: 450.0, y: 300.0 },
        ];
        for event in events {
            let _ = input.handle_event(&mut camera, event);
        }
        assert_eq!(input.held_button(), Some(MouseButton::Primary));
        assert_eq!(camera.mode(), InteractionMode::Rotating);

        let _ = camera.update();
        assert!(camera.eye().x < 0.0);
    }

    #[test]
    fn release_ends_gesture() {
        let (mut input, mut camera) = setup();
        let press = InputEvent::MouseButton {
            button: MouseButton::Secondary,
            pressed: true,
        };
        let release = InputEvent::MouseButton {
            button: MouseButton::Secondary,
            pressed: false,
        };
        assert!(input.handle_event(&mut camera, press));
        assert_eq!(camera.mode(), InteractionMode::Panning);
        assert!(input.handle_event(&mut camera, release));
        assert_eq!(camera.mode(), InteractionMode::Idle);
        assert_eq!(input.held_button(), None);
    }

    #[test]
    fn released_mouse_state_stops_forwarding_moves() {
        let (mut input, mut camera) = setup();
        let press = InputEvent::MouseButton {
            button: MouseButton::Primary,
            pressed: true,
        };
        assert!(input.handle_event(&mut camera, press));
        input.release_mouse_state();

        let drag = InputEvent::CursorMoved { x: 600.0, y: 300.0 };
        assert!(!input.handle_event(&mut camera, drag));
    }

    #[test]
    fn vertical_scroll_requests_update() {
        let (mut input, mut camera) = setup();
        let sideways = InputEvent::Scroll {
            delta_x: 1.0,
            delta_y: 0.0,
        };
        let wheel = InputEvent::Scroll {
            delta_x: 0.0,
            delta_y: 3.0,
        };
        assert!(!input.handle_event(&mut camera, sideways));
        assert!(input.handle_event(&mut camera, wheel));
        assert!(camera.zoom() > 0.0);
    }
}
