use serde::{Deserialize, Serialize};

use bonehound_core::geometry::{Rect, Vector2};
use bonehound_core::input::FrameInput;

use crate::entities::Platform;
use crate::physics::{self, PhysicsConfig};

/// Player hitbox width (world units).
pub const PLAYER_WIDTH: f32 = 32.0;
/// Player hitbox height (world units).
pub const PLAYER_HEIGHT: f32 = 40.0;

/// The player character: position, per-frame velocity, and grounding state.
///
/// Created once from the level's start coordinates, mutated every frame by
/// `step`, and reset on restart; never destroyed during a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub velocity: Vector2,
    pub grounded: bool,
    /// Seconds remaining in which a jump is still honored after leaving a
    /// platform. Only decremented while airborne.
    pub coyote_timer: f32,
    pub facing_right: bool,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            velocity: Vector2::ZERO,
            grounded: false,
            coyote_timer: 0.0,
            facing_right: true,
        }
    }

    /// Logical collision rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Advance one frame: input, friction, jump, gravity, position, then
    /// platform landing resolution and the coyote countdown.
    ///
    /// Velocity is in units/frame, so the position advance is not dt-scaled;
    /// dt only scales the accumulation terms (gravity, friction decay, coyote
    /// countdown). Returns true when a jump started this frame.
    pub fn step(
        &mut self,
        dt: f32,
        input: &FrameInput,
        platforms: &[Platform],
        config: &PhysicsConfig,
    ) -> bool {
        // Simultaneous opposite presses favor left.
        if input.left {
            self.velocity.x -= config.acceleration;
            self.facing_right = false;
        } else if input.right {
            self.velocity.x += config.acceleration;
            self.facing_right = true;
        }

        self.velocity.x = self
            .velocity
            .x
            .min(config.move_speed)
            .max(-config.move_speed);

        physics::apply_friction(&mut self.velocity, dt, config);

        let mut jumped = false;
        if input.jump && (self.grounded || self.coyote_timer > 0.0) {
            self.velocity.y = config.jump_force;
            self.grounded = false;
            self.coyote_timer = 0.0;
            jumped = true;
        }

        physics::apply_gravity(&mut self.velocity, dt, config);

        self.x += self.velocity.x;
        self.y += self.velocity.y;

        self.resolve_platform_landings(platforms, config);

        if !self.grounded {
            self.coyote_timer -= dt / physics::FRAMES_PER_SECOND;
        }

        jumped
    }

    /// Top-only landing resolution: snap onto any platform whose top the
    /// player's bottom edge is within the landing threshold of while moving
    /// downward, with horizontal overlap. Later platforms in iteration order
    /// win; valid levels don't stack platforms at matching heights.
    fn resolve_platform_landings(&mut self, platforms: &[Platform], config: &PhysicsConfig) {
        let was_grounded = self.grounded;
        self.grounded = false;

        for platform in platforms {
            // Landing requires downward or stationary movement.
            if self.velocity.y < 0.0 {
                continue;
            }

            let platform_top = platform.y;
            let player_bottom = self.y + PLAYER_HEIGHT;

            // The threshold is generous so a terminal-speed fall can't tunnel
            // through a thin platform in one frame.
            let landing = player_bottom >= platform_top
                && player_bottom <= platform_top + config.landing_threshold
                && self.bounds().overlaps_x(&platform.bounds());

            if landing {
                self.y = platform_top - PLAYER_HEIGHT;
                self.velocity.y = 0.0;
                self.grounded = true;
            }
        }

        // Ground lost this frame: open the coyote window.
        if was_grounded && !self.grounded {
            self.coyote_timer = config.coyote_time;
        }
    }

    /// Return to the given start coordinates with zero velocity, airborne,
    /// and no coyote window.
    pub fn reset(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.velocity = Vector2::ZERO;
        self.grounded = false;
        self.coyote_timer = 0.0;
    }
}
