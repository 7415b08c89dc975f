/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// forwards them to a [`TrackballCamera`](crate::TrackballCamera).
///
/// # Example
///
/// ```
/// use trackball::input::{InputEvent, InputProcessor, MouseButton};
/// use trackball::TrackballCamera;
///
/// let mut camera = TrackballCamera::new();
/// let mut input = InputProcessor::new();
///
/// let events = [
///     InputEvent::Resized { x: 0.0, y: 0.0, width: 800.0, height: 600.0 },
///     InputEvent::CursorMoved { x: 400.0, y: 300.0 },
///     InputEvent::MouseButton { button: MouseButton::Primary, pressed: true },
/// ];
/// let needs_redraw = events
///     .into_iter()
///     .fold(false, |redraw, event| input.handle_event(&mut camera, event) || redraw);
/// assert!(needs_redraw);
/// let view = camera.update();
/// assert_eq!(view.eye.w, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (downward).
        y: f32,
    },
    /// Mouse button pressed or released at the last cursor position.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel, in lines.
    Scroll {
        /// Horizontal scroll amount (unused by the camera).
        delta_x: f32,
        /// Vertical scroll amount (positive = zoom in).
        delta_y: f32,
    },
    /// Render surface moved or resized.
    Resized {
        /// Left edge in pixels.
        x: f32,
        /// Top edge in pixels.
        y: f32,
        /// Width in pixels.
        width: f32,
        /// Height in pixels.
        height: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (usually left) button: rotates.
    Primary,
    /// Secondary (usually right) button: pans.
    Secondary,
    /// Any other button.
    Other,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Primary,
            winit::event::MouseButton::Right => Self::Secondary,
            _ => Self::Other,
        }
    }
}

/// Pixel-delta scroll distance treated as one line.
#[cfg(feature = "viewer")]
const PIXELS_PER_LINE: f32 = 100.0;

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Translate a winit window event, if the camera cares about it.
    #[must_use]
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};

        match event {
            WindowEvent::CursorMoved { position, .. } => Some(Self::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            WindowEvent::MouseInput { button, state, .. } => Some(Self::MouseButton {
                button: (*button).into(),
                pressed: *state == ElementState::Pressed,
            }),
            WindowEvent::MouseWheel { delta, .. } => {
                let (delta_x, delta_y) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (*x, *y),
                    MouseScrollDelta::PixelDelta(pos) => (
                        pos.x as f32 / PIXELS_PER_LINE,
                        pos.y as f32 / PIXELS_PER_LINE,
                    ),
                };
                Some(Self::Scroll { delta_x, delta_y })
            }
            WindowEvent::Resized(size) => Some(Self::Resized {
                x: 0.0,
                y: 0.0,
                width: size.width as f32,
                height: size.height as f32,
            }),
            _ => None,
        }
    }
}
