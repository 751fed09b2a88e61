use serde::{Deserialize, Serialize};

use bonehound_core::geometry::Vector2;

use crate::camera::CameraConfig;

/// Gravity acceleration (units/frame^2, downward; Y grows down).
pub const GRAVITY: f32 = 0.6;
/// Terminal fall speed (units/frame).
pub const MAX_FALL_SPEED: f32 = 15.0;
/// Jump initial velocity (negative = upward).
pub const JUMP_FORCE: f32 = -15.0;
/// Horizontal speed cap (units/frame).
pub const MOVE_SPEED: f32 = 6.0;
/// Horizontal acceleration per frame of held input.
pub const ACCELERATION: f32 = 1.0;
/// Per-frame horizontal velocity retention factor.
pub const FRICTION: f32 = 0.8;
/// Grace period for jumping after leaving a platform (seconds).
pub const COYOTE_TIME: f32 = 0.1;
/// Tolerance below a platform top for landing detection (units).
pub const LANDING_THRESHOLD: f32 = 15.0;
/// Nominal frame rate; converts frame-unit deltas to seconds for the coyote
/// countdown.
pub const FRAMES_PER_SECOND: f32 = 60.0;
/// Horizontal speeds below this magnitude snap to zero under friction.
const FRICTION_STOP_EPSILON: f32 = 0.1;

/// Configurable physics tuning, loadable from TOML.
///
/// The landing threshold and coyote time are tuned against the default
/// sprite scale; retargeting different entity sizes means retuning them
/// here rather than editing constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub jump_force: f32,
    pub move_speed: f32,
    pub acceleration: f32,
    pub friction: f32,
    pub coyote_time: f32,
    pub landing_threshold: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            max_fall_speed: MAX_FALL_SPEED,
            jump_force: JUMP_FORCE,
            move_speed: MOVE_SPEED,
            acceleration: ACCELERATION,
            friction: FRICTION,
            coyote_time: COYOTE_TIME,
            landing_threshold: LANDING_THRESHOLD,
        }
    }
}

/// Top-level game tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    pub physics: PhysicsConfig,
    pub camera: CameraConfig,
    pub tick_rate_hz: f32,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            camera: CameraConfig::default(),
            tick_rate_hz: 60.0,
        }
    }
}

impl WalkConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("BONEHOUND_CONFIG")
            .unwrap_or_else(|_| "config/bonehound.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<WalkConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    WalkConfig::default()
                },
            },
            Err(_) => WalkConfig::default(),
        }
    }
}

/// Accelerate downward, capped at terminal fall speed.
pub fn apply_gravity(velocity: &mut Vector2, dt: f32, config: &PhysicsConfig) {
    velocity.y += config.gravity * dt;
    if velocity.y > config.max_fall_speed {
        velocity.y = config.max_fall_speed;
    }
}

/// Decay horizontal velocity exponentially so repeated calls are
/// frame-rate-independent, snapping to zero below the stop epsilon to
/// prevent asymptotic drift.
pub fn apply_friction(velocity: &mut Vector2, dt: f32, config: &PhysicsConfig) {
    velocity.x *= config.friction.powf(dt);
    if velocity.x.abs() < FRICTION_STOP_EPSILON {
        velocity.x = 0.0;
    }
}
