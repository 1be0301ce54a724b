//! Aim Replay - headless scripted run
//!
//! Run with: `cargo run --bin aim_replay -- <script.json> [config.json]`
//!
//! Expands the input script into fixed-rate ticks, runs them through the
//! demo, and prints a JSON summary (every launch, every landing, and the
//! final tick) to stdout. Logs go to stderr.

use std::path::PathBuf;

use angry_vectors_engine::game::{DemoConfig, InputScript, LaunchDemo, TickReport, init_logging};
use angry_vectors_engine::physics::ProjectileState;
use serde::Serialize;
use tracing::{error, info};

#[derive(Serialize)]
struct ReplaySummary {
    ticks: u64,
    tick_dt: f32,
    /// Ticks that launched, rejected a fire, reset, or landed
    events: Vec<TickReport>,
    final_tick: Option<TickReport>,
}

fn is_event(report: &TickReport) -> bool {
    report.launch_velocity.is_some()
        || report.fire_rejected
        || report.reset
        || matches!(report.projectile_state, ProjectileState::Landed { .. })
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let script_path = args
        .next()
        .ok_or("usage: aim_replay <script.json> [config.json]")?;
    let config = match args.next() {
        Some(path) => DemoConfig::load(&path)?,
        None => DemoConfig::default(),
    };
    let script = InputScript::load(&script_path)?;

    let dt = config.tick_dt();
    let frames = script.frames(dt);
    info!(
        ticks = frames.len(),
        seconds = script.duration(),
        "replaying {}",
        script_path.display()
    );

    let mut demo = LaunchDemo::new(&config);
    let mut events = Vec::new();
    let mut final_tick = None;
    for frame in &frames {
        let report = demo.tick(frame, dt);
        if is_event(&report) {
            events.push(report);
        }
        final_tick = Some(report);
    }

    let summary = ReplaySummary {
        ticks: demo.tick_count(),
        tick_dt: dt,
        events,
        final_tick,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}
