use winit::{
    event::{ElementState, Event, TouchPhase, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use aimline::input_state::{InputState, MouseButton};
use aimline::logging::{self, debug, warn};
use aimline::{find_intercept, InterceptError, Point2D, Rect};

const TITLE: &str = "Aimline";

/// winit reports positions with the origin at the top-left corner, while the
/// intercept math assumes a bottom-left origin.
fn flip_y(p: Point2D, height: f64) -> Point2D {
    Point2D::new(p.x, height - p.y)
}

/// Fixed sweep of aim points around a mid-screen source, logged on startup.
fn log_sample_sweep() {
    let bounds = Rect::new(Point2D::new(0.0, 0.0), 1024.0, 768.0)
        .expect("sweep bounds are well-formed");
    let source = Point2D::new(500.0, 350.0);
    let touches = [
        Point2D::new(100.0, 100.0),
        Point2D::new(50.0, 400.0),
        Point2D::new(450.0, 800.0),
        Point2D::new(700.0, 25.0),
        Point2D::new(500.0, 400.0),
        Point2D::new(950.0, 350.0),
        Point2D::new(500.0, 350.0),
    ];

    for touch in touches {
        match find_intercept(source, touch, &bounds) {
            Ok(p) => debug!(
                "source ({}, {}), touch ({}, {}) -> intercept ({}, {})",
                source.x, source.y, touch.x, touch.y, p.x, p.y
            ),
            Err(e) => debug!(
                "source ({}, {}), touch ({}, {}) -> {e}",
                source.x, source.y, touch.x, touch.y
            ),
        }
    }
}

pub fn main() {
    logging::init();
    log_sample_sweep();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(TITLE)
        .build(&event_loop)
        .unwrap();

    let mut input_state = InputState::new();
    let mut source: Option<Point2D> = None;
    let mut last_intercept: Option<Point2D> = None;

    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CursorMoved { position, .. } => {
                let height = window.inner_size().height as f64;
                input_state
                    .set_cursor_position(flip_y(Point2D::new(position.x, position.y), height));
            }
            WindowEvent::Touch(e) => {
                let height = window.inner_size().height as f64;
                let location = flip_y(Point2D::new(e.location.x, e.location.y), height);
                match e.phase {
                    TouchPhase::Started | TouchPhase::Moved => {
                        input_state.set_touch_position(e.id, location);
                    }
                    TouchPhase::Ended => {
                        input_state.clear_touch(e.id);
                    }
                    TouchPhase::Cancelled => {
                        warn!("{e:?}");
                        input_state.clear_touch(e.id);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => input_state.set_pressed(button),
                ElementState::Released => input_state.set_released(button),
            },
            WindowEvent::Resized(_) => {
                debug!("Window resized");
                last_intercept = None;
            }
            WindowEvent::CloseRequested => {
                control_flow.set_exit();
            }
            _ => {}
        },
        Event::MainEventsCleared => {
            let size = window.inner_size();
            if size.width == 0 || size.height == 0 {
                return;
            }
            let bounds = Rect::new(Point2D::new(0.0, 0.0), size.width as f64, size.height as f64)
                .expect("window extent is positive");

            // Left click pins the ray's source at the cursor; until then the
            // ray starts at the window centre.
            if input_state.is_pressed(MouseButton::Left) {
                source = input_state.cursor_position();
            }
            let source_point = source.unwrap_or_else(|| bounds.center());

            if let Some(aim) = input_state.aim_point() {
                match find_intercept(source_point, aim, &bounds) {
                    Ok(p) => {
                        if last_intercept != Some(p) {
                            debug!("ray exits viewport at ({:.1}, {:.1})", p.x, p.y);
                            last_intercept = Some(p);
                        }
                    }
                    // Aiming at the source itself leaves the indicator as-is.
                    Err(InterceptError::NoDirection) => {}
                    Err(e) => warn!("{e}"),
                }
            }

            input_state.end_frame();
        }
        _ => {}
    })
}
