//! `trackball` demo viewer.
//!
//! Opens an empty window and drives a [`TrackballCamera`] from its mouse
//! events. The eye position is shown in the window title; run with
//! `RUST_LOG=trackball=debug` to watch gestures start and settle.
//!
//! Usage: `trackball [OPTIONS.toml]`

use std::path::Path;

use glam::Vec3;
use trackball::camera::{CameraUniform, Projection, Viewport};
use trackball::input::{InputEvent, InputProcessor};
use trackball::{Options, TrackballCamera, TrackballError};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

struct ViewerApp {
    window: Option<Window>,
    camera: TrackballCamera,
    input: InputProcessor,
    projection: Projection,
    uniform: CameraUniform,
    error: Option<TrackballError>,
}

impl ViewerApp {
    fn new(options: Option<&Options>) -> Self {
        let (camera, projection) = match options {
            Some(options) => (
                TrackballCamera::from_options(&options.camera),
                Projection::default(),
            ),
            None => {
                let mut camera = TrackballCamera::new();
                let projection =
                    camera.frame_bounds(Vec3::splat(-1.0), Vec3::splat(1.0));
                (camera, projection)
            }
        };

        Self {
            window: None,
            camera,
            input: InputProcessor::new(),
            projection,
            uniform: CameraUniform::new(),
            error: None,
        }
    }

    fn redraw(&mut self) {
        let view = self.camera.update();
        let aspect = self.camera.screen_dimensions().aspect();
        self.uniform.update(&view, &self.projection, aspect);
        log::trace!("camera uniform: {:?}", self.uniform);

        if let Some(window) = &self.window {
            let eye = view.position();
            window.set_title(&format!(
                "trackball - eye ({:.2}, {:.2}, {:.2})",
                eye.x, eye.y, eye.z
            ));
            if self.camera.is_animating() {
                window.request_redraw();
            }
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes().with_title("trackball");
        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                self.camera.set_screen_dimensions(Viewport::new(
                    0.0,
                    0.0,
                    size.width.max(1) as f32,
                    size.height.max(1) as f32,
                ));
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                self.error = Some(TrackballError::Viewer(e.to_string()));
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => self.redraw(),

            event => {
                let Some(input) = InputEvent::from_window_event(&event) else {
                    return;
                };
                if self.input.handle_event(&mut self.camera, input) {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }
        }
    }
}

fn run() -> Result<(), TrackballError> {
    let options = match std::env::args().nth(1) {
        Some(path) => Some(Options::load(Path::new(&path))?),
        None => None,
    };

    let event_loop =
        EventLoop::new().map_err(|e| TrackballError::Viewer(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = ViewerApp::new(options.as_ref());
    event_loop
        .run_app(&mut app)
        .map_err(|e| TrackballError::Viewer(e.to_string()))?;

    app.error.map_or(Ok(()), Err)
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
