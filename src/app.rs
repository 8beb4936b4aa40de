use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes},
};

use crate::{
    config::GestureConfig,
    controller::{GestureController, GestureOutcome},
    error::Result,
    host::SceneHost,
    input::{DeviceOrientation, TouchTracker, TrackerSettings},
    schedule::CadenceTimer,
};

/// Windowed host for the gesture controller.
///
/// Touch and mouse input drive the controller; the on-screen buttons of a
/// phone build are mapped to keys:
///
/// | Key              | Action          |
/// |------------------|-----------------|
/// | Escape           | cancel / exit   |
/// | U, Backspace     | undo last       |
/// | M                | menu            |
/// | A                | archery mode    |
/// | G                | airgun mode     |
/// | Delete           | clear markers   |
pub struct GroupScopeApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    controller: GestureController<SceneHost>,
    tracker: TouchTracker,
    timer: CadenceTimer,
    last_frame: Instant,
    title: String,
}

impl GroupScopeApp {
    /// Create a viewer for the given configuration
    pub fn new(config: GestureConfig) -> Result<Self> {
        let tracker = TouchTracker::new(TrackerSettings::from(&config), config.viewport.height);
        let timer = CadenceTimer::new(config.derived_interval)?;
        let controller = GestureController::new(config, SceneHost::new())?;
        let event_loop = EventLoop::new()?;

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                controller,
                tracker,
                timer,
                last_frame: Instant::now(),
                title: String::new(),
            },
        })
    }

    /// Run the viewer (consumes self and starts the event loop)
    pub fn run(mut self) -> Result<()> {
        let Some(event_loop) = self.event_loop.take() else {
            return Ok(());
        };
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self.app_state)?;
        Ok(())
    }

    pub fn controller(&self) -> &GestureController<SceneHost> {
        &self.app_state.controller
    }
}

impl AppState {
    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.controller.resize(width, height);
        self.tracker.set_viewport_height(height as f32);
        self.tracker
            .set_orientation(DeviceOrientation::from_size(width, height));
    }

    fn handle_key(&mut self, key_code: KeyCode) {
        match key_code {
            KeyCode::Escape => self.tracker.press_cancel(),
            KeyCode::KeyU | KeyCode::Backspace => {
                self.controller.undo_last();
            }
            KeyCode::KeyM => self.controller.toggle_menu(),
            KeyCode::KeyA => self.controller.set_archery(),
            KeyCode::KeyG => self.controller.set_airgun(),
            KeyCode::Delete => self.controller.clear_markers(),
            _ => (),
        }
    }

    /// One frame: snapshot input, run gestures, then the derived-point cadence.
    fn step(&mut self) {
        let now = Instant::now();
        let delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        let frame = self.tracker.frame(delta_time);
        let outcome = self.controller.update(&frame);
        if !matches!(outcome, GestureOutcome::Idle | GestureOutcome::Holding) {
            log::debug!("{:?}", outcome);
        }

        if self.timer.advance(delta_time) > 0 {
            self.controller.recompute_derived_points();
        }
    }

    fn refresh_title(&mut self) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        let view = self.controller.view();
        let mut title = format!(
            "GroupScope - {:?} - zoom {:.2} - {} markers",
            self.controller.overlay().mode(),
            view.zoom_level,
            self.controller.markers().len()
        );
        let derived = self.controller.derived_points();
        if derived.visible {
            title.push_str(&format!(
                " - centroid ({:.2}, {:.2}) aim ({:.2}, {:.2})",
                derived.centroid.x, derived.centroid.y, derived.mirror.x, derived.mirror.y
            ));
        }
        if self.controller.overlay().menu_open() {
            title.push_str(" - [menu]");
        }

        if title != self.title {
            window.set_title(&title);
            self.title = title;
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let viewport = self.controller.config().viewport;
        let attributes = WindowAttributes::default()
            .with_title("GroupScope")
            .with_inner_size(winit::dpi::LogicalSize::new(
                viewport.width / 2.0,
                viewport.height / 2.0,
            ));

        match event_loop.create_window(attributes) {
            Ok(window) => {
                let window_handle = Arc::new(window);
                let PhysicalSize { width, height } = window_handle.inner_size();
                self.resize(width, height);
                self.window = Some(window_handle);
                self.last_frame = Instant::now();
            }
            Err(err) => {
                log::error!("Failed to create window: {}", err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => self.handle_key(key_code),
            WindowEvent::Touch(touch) => {
                self.tracker
                    .ingest(touch.id, touch.location.x, touch.location.y, touch.phase);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.tracker.cursor_moved(position.x, position.y);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.tracker.mouse_button(state == ElementState::Pressed);
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.resize(width, height);
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.step();
                if self.controller.host().exit_requested {
                    event_loop.exit();
                    return;
                }
                self.refresh_title();
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
