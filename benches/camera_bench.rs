//! Per-frame cost of the trackball update.
#![allow(missing_docs, unused_results)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use trackball::camera::Viewport;
use trackball::input::MouseButton;
use trackball::TrackballCamera;

fn scene_camera() -> TrackballCamera {
    let mut camera = TrackballCamera::new();
    camera.set_screen_dimensions(Viewport::new(0.0, 0.0, 1920.0, 1080.0));
    camera.set_position(Vec3::new(0.0, 0.0, 5.0));
    camera
}

fn idle_update_benchmark(c: &mut Criterion) {
    let mut camera = scene_camera();
    c.bench_function("idle_update", |b| {
        b.iter(|| black_box(camera.update()))
    });
}

fn rotate_update_benchmark(c: &mut Criterion) {
    let mut camera = scene_camera();
    camera.pointer_down(MouseButton::Primary, true, 960.0, 540.0);
    let mut x = 960.0;
    c.bench_function("rotate_drag_update", |b| {
        b.iter(|| {
            x = if x > 1400.0 { 500.0 } else { x + 3.0 };
            camera.pointer_move(black_box(x), 540.0);
            black_box(camera.update())
        })
    });
}

fn trackball_projection_benchmark(c: &mut Criterion) {
    let camera = scene_camera();
    c.bench_function("project_to_trackball", |b| {
        b.iter(|| {
            black_box(
                camera.project_to_trackball(black_box(1200.0), black_box(300.0)),
            )
        })
    });
}

criterion_group!(
    benches,
    idle_update_benchmark,
    rotate_update_benchmark,
    trackball_projection_benchmark
);
criterion_main!(benches);
