//! Launch Tests - Fire Gating, Power Scaling, Reset, and Full Ticks
//!
//! Tests for the LaunchVectorResolver together with the projectile it feeds
//! and the LaunchDemo tick driver.

use angry_vectors_engine::aim::AimState;
use angry_vectors_engine::game::{DemoConfig, InputScript, LaunchDemo};
use angry_vectors_engine::input::{Axis, InputFrame, InputVector, KeyCode, KeyboardState};
use angry_vectors_engine::physics::{
    BallisticsConfig, LaunchConfig, LaunchVectorResolver, Projectile, ProjectileState,
};
use glam::Vec3;

const EPSILON: f32 = 1e-4;

fn aim(pitch_deg: f32, yaw_deg: f32, power_scale: f32) -> AimState {
    AimState {
        pitch: pitch_deg.to_radians(),
        yaw: yaw_deg.to_radians(),
        power_scale,
    }
}

// ============================================================================
// LaunchVectorResolver Tests
// ============================================================================

#[test]
fn test_fire_scenario_level_aim() {
    let resolver = LaunchVectorResolver::default();
    let state = aim(0.0, 0.0, 2.0);

    let velocity = resolver.try_fire(&state, state.orientation(), Vec3::ZERO);

    assert_eq!(velocity, Some(Vec3::new(0.0, 0.0, 40.0)));
}

#[test]
fn test_fire_gated_on_any_nonzero_velocity() {
    let resolver = LaunchVectorResolver::default();
    let state = aim(30.0, 10.0, 1.0);
    for current in [
        Vec3::new(5.0, 0.0, 0.0),
        Vec3::new(0.0, -1e-7, 0.0),
        Vec3::new(0.0, 0.0, f32::MIN_POSITIVE),
    ] {
        assert_eq!(resolver.try_fire(&state, state.orientation(), current), None);
    }
}

#[test]
fn test_speed_is_power_times_multiplier() {
    let resolver = LaunchVectorResolver::default();
    let mut last_speed = 0.0;
    for step in 0..=29 {
        let power = 0.1 + step as f32 * 0.1;
        let state = aim(40.0, -25.0, power);
        let speed = resolver.launch_velocity(&state, state.orientation()).length();

        assert!((speed - power * 20.0).abs() < EPSILON * 10.0, "power {power}: speed {speed}");
        assert!(speed > last_speed, "speed not increasing at power {power}");
        last_speed = speed;
    }
}

#[test]
fn test_launch_direction_matches_aim_forward() {
    let resolver = LaunchVectorResolver::new(&LaunchConfig {
        speed_multiplier: 7.0,
    });
    let state = aim(55.0, -70.0, 1.3);
    let velocity = resolver.launch_velocity(&state, state.orientation());
    assert!((velocity.normalize() - state.forward()).length() < EPSILON);
}

// ============================================================================
// Projectile Reset Tests
// ============================================================================

#[test]
fn test_reset_scenario() {
    let mut projectile = Projectile::default();
    projectile.velocity = Vec3::new(5.0, 0.0, 0.0);
    projectile.position = Vec3::new(12.0, 3.0, -4.0);
    assert_ne!(projectile.position, projectile.initial_position());

    projectile.reset();

    assert_eq!(projectile.position, projectile.initial_position());
    assert_eq!(projectile.velocity, Vec3::ZERO);
}

#[test]
fn test_landing_reopens_gate() {
    let resolver = LaunchVectorResolver::default();
    let config = BallisticsConfig::default();
    let mut projectile = Projectile::default();
    let state = aim(45.0, 0.0, 1.0);

    let velocity = resolver
        .try_fire(&state, state.orientation(), projectile.velocity)
        .unwrap();
    projectile.launch(velocity);
    assert!(resolver.try_fire(&state, state.orientation(), projectile.velocity).is_none());

    let mut landed = false;
    for _ in 0..2000 {
        if matches!(projectile.integrate(&config, 0.01), ProjectileState::Landed { .. }) {
            landed = true;
            break;
        }
    }
    assert!(landed);

    // Vacuum range for 20 m/s at 45° is about v²/g = 40.8 m
    let travelled = projectile.position.z - projectile.initial_position().z;
    assert!(travelled > 38.0 && travelled < 44.0, "travelled {travelled}");
    assert!(resolver.try_fire(&state, state.orientation(), projectile.velocity).is_some());
}

// ============================================================================
// LaunchDemo Tick Tests
// ============================================================================

#[test]
fn test_keyboard_to_launch() {
    let mut demo = LaunchDemo::new(&DemoConfig::default());
    let mut keyboard = KeyboardState::new();

    // Charge for one second: 1.0 + 1.5 = 2.5
    keyboard.handle_key(KeyCode::ArrowUp, true);
    for _ in 0..60 {
        demo.tick(&keyboard.take_frame(), 1.0 / 60.0);
    }
    keyboard.handle_key(KeyCode::ArrowUp, false);

    keyboard.handle_key(KeyCode::Space, true);
    let report = demo.tick(&keyboard.take_frame(), 1.0 / 60.0);

    let velocity = report.launch_velocity.expect("should launch");
    assert!((velocity.length() - 50.0).abs() < 1e-2, "speed {}", velocity.length());

    // Holding space does not refire
    let report = demo.tick(&keyboard.take_frame(), 1.0 / 60.0);
    assert!(report.launch_velocity.is_none());
    assert!(!report.fire_rejected);
}

#[test]
fn test_reset_does_not_touch_aim() {
    let mut demo = LaunchDemo::new(&DemoConfig::default());
    let up = InputFrame::held(InputVector::new(Axis::Negative, Axis::Positive, Axis::Positive));
    demo.tick(&up, 0.3);
    let before = *demo.aim().state();

    let report = demo.tick(
        &InputFrame {
            reset: true,
            ..Default::default()
        },
        1.0 / 60.0,
    );

    assert!(report.reset);
    assert_eq!(*demo.aim().state(), before);
}

#[test]
fn test_scripted_replay() {
    let script = InputScript::from_json_str(
        r#"{
            "steps": [
                { "duration": 0.25, "pitch": "positive" },
                { "duration": 4.0, "fire": true },
                { "duration": 0.1, "fire": true },
                { "duration": 0.1, "reset": true }
            ]
        }"#,
    )
    .unwrap();

    let config = DemoConfig::default();
    let dt = config.tick_dt();
    let mut demo = LaunchDemo::new(&config);
    let reports: Vec<_> = script.frames(dt).iter().map(|f| demo.tick(f, dt)).collect();

    let launches = reports.iter().filter(|r| r.launch_velocity.is_some()).count();
    let landings = reports
        .iter()
        .filter(|r| matches!(r.projectile_state, ProjectileState::Landed { .. }))
        .count();
    assert_eq!(launches, 2, "fire after landing should launch again");
    assert_eq!(landings, 1);

    let last = reports.last().unwrap();
    assert_eq!(last.projectile_velocity, Vec3::ZERO);
    assert_eq!(last.projectile_position, config.projectile.initial_position);
    // 20° + 90°/s * 0.25 s
    assert!((last.pitch_deg - 42.5).abs() < 0.5);
}
