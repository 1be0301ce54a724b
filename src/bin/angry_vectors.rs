//! Angry Vectors - Aim and Launch
//!
//! Run with: `cargo run --bin angry_vectors [config.json]`
//!
//! Controls:
//! - W / S: Tilt the arrow up / down
//! - A / D: Turn the arrow left / right
//! - Arrow Up / Down: Charge power up / down
//! - Space: Launch (ignored while the ball is in flight)
//! - R: Reset the ball to its start
//! - ESC: Exit
//!
//! Nothing is drawn; the window is the keyboard source and its title shows
//! the aim and ball state.

use std::path::PathBuf;
use std::time::Instant;

use angry_vectors_engine::game::{DemoConfig, LaunchDemo, init_logging, map_winit_key};
use angry_vectors_engine::input::{InputAction, KeyboardState};
use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowAttributes, WindowId};

/// Longest frame step fed to the simulation (seconds).
const MAX_FRAME_DT: f32 = 0.1;

struct AngryVectorsApp {
    window: Option<Window>,
    demo: LaunchDemo,
    keyboard: KeyboardState,
    last_frame: Instant,
    last_title: String,
}

impl AngryVectorsApp {
    fn new(config: &DemoConfig) -> Self {
        Self {
            window: None,
            demo: LaunchDemo::new(config),
            keyboard: KeyboardState::new(),
            last_frame: Instant::now(),
            last_title: String::new(),
        }
    }

    fn update(&mut self, delta_time: f32) {
        let frame = self.keyboard.take_frame();
        let report = self.demo.tick(&frame, delta_time);

        if report.fire_rejected {
            info!("ball still in flight, press R to reset");
        }

        let title = format!("Angry Vectors | {}", self.demo.hud_line());
        if title != self.last_title {
            if let Some(window) = &self.window {
                window.set_title(&title);
            }
            self.last_title = title;
        }
    }
}

impl ApplicationHandler for AngryVectorsApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = WindowAttributes::default()
                .with_title("Angry Vectors")
                .with_inner_size(PhysicalSize::new(1280, 720));
            match event_loop.create_window(attrs) {
                Ok(window) => {
                    self.window = Some(window);
                    self.last_frame = Instant::now();
                }
                Err(e) => {
                    error!("failed to create window: {e}");
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Focused(false) => self.keyboard.release_all(),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                if let PhysicalKey::Code(key) = event.physical_key {
                    let pressed = event.state == ElementState::Pressed;
                    let action = self.keyboard.handle_key(map_winit_key(key), pressed);
                    if action == Some(InputAction::Exit) && pressed {
                        event_loop.exit();
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let delta_time = now
                    .duration_since(self.last_frame)
                    .as_secs_f32()
                    .min(MAX_FRAME_DT);
                self.last_frame = now;

                self.update(delta_time);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn load_config() -> Result<DemoConfig, Box<dyn std::error::Error>> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            info!("loading config from {}", path.display());
            Ok(DemoConfig::load(&path)?)
        }
        None => Ok(DemoConfig::default()),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = AngryVectorsApp::new(&config);
    event_loop.run_app(&mut app)?;
    Ok(())
}

fn main() {
    init_logging();

    println!("===========================================");
    println!("   Angry Vectors - Aim and Launch");
    println!("===========================================");
    println!();
    println!("W/S: Pitch, A/D: Yaw, Arrow Up/Down: Power");
    println!("Space: Launch, R: Reset ball, ESC: Exit");
    println!();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}
