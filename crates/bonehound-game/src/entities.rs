use serde::{Deserialize, Serialize};

use bonehound_core::geometry::Rect;

use crate::level::EnemySpawn;

/// Collectible hitbox size (square, world units).
pub const COLLECTIBLE_SIZE: f32 = 20.0;
/// Obstacle hitbox size (square, world units).
pub const OBSTACLE_SIZE: f32 = 25.0;
/// Enemy hitbox size (square, world units).
pub const ENEMY_SIZE: f32 = 30.0;
/// Enemy patrol speed (units/frame).
pub const ENEMY_SPEED: f32 = 1.5;
/// Bob animation phase advance per frame unit.
const BOB_SPEED: f32 = 3.0;
/// Bob animation amplitude in world units.
const BOB_AMPLITUDE: f32 = 3.0;

/// Static platform geometry. Immutable after level load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A pickup worth one point. Collected at most once per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub x: f32,
    pub y: f32,
    pub collected: bool,
    bob_phase: f32,
}

impl Collectible {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            collected: false,
            bob_phase: 0.0,
        }
    }

    /// Advance the cosmetic bob animation. Stops once collected.
    pub fn update(&mut self, dt: f32) {
        if self.collected {
            return;
        }
        self.bob_phase += BOB_SPEED * dt;
    }

    /// Vertical display offset from the bob animation, for renderers only.
    /// Never part of the collision bounds.
    pub fn display_offset_y(&self) -> f32 {
        self.bob_phase.sin() * BOB_AMPLITUDE
    }

    /// Logical collision rectangle, independent of the bob animation.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, COLLECTIBLE_SIZE, COLLECTIBLE_SIZE)
    }

    pub fn collect(&mut self) {
        self.collected = true;
    }

    pub fn reset(&mut self) {
        self.collected = false;
    }
}

/// Static hazard. Touching it during play ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
}

impl Obstacle {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, OBSTACLE_SIZE, OBSTACLE_SIZE)
    }
}

/// Hazard that patrols horizontally between two X coordinates, reversing at
/// the ends. Touching it during play ends the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub patrol_start: f32,
    pub patrol_end: f32,
    /// 1.0 = moving right, -1.0 = moving left. Renderers flip the sprite on it.
    pub direction: f32,
    spawn_x: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, patrol_start: f32, patrol_end: f32) -> Self {
        Self {
            x,
            y,
            patrol_start,
            patrol_end,
            direction: 1.0,
            spawn_x: x,
        }
    }

    pub fn from_spawn(spawn: &EnemySpawn) -> Self {
        Self::new(spawn.x, spawn.y, spawn.patrol_start, spawn.patrol_end)
    }

    pub fn update(&mut self, dt: f32) {
        self.x += ENEMY_SPEED * self.direction * dt;

        if self.x <= self.patrol_start {
            self.x = self.patrol_start;
            self.direction = 1.0;
        } else if self.x >= self.patrol_end {
            self.x = self.patrol_end;
            self.direction = -1.0;
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, ENEMY_SIZE, ENEMY_SIZE)
    }

    pub fn reset(&mut self) {
        self.x = self.spawn_x;
        self.direction = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_bounds_match_fields() {
        let platform = Platform::new(10.0, 520.0, 600.0, 80.0);
        let bounds = platform.bounds();
        assert_eq!(bounds, Rect::new(10.0, 520.0, 600.0, 80.0));
    }

    #[test]
    fn collectible_bounds_ignore_bob_animation() {
        let mut collectible = Collectible::new(150.0, 480.0);
        let before = collectible.bounds();
        for _ in 0..100 {
            collectible.update(1.0);
        }
        assert_eq!(
            collectible.bounds(),
            before,
            "Bob animation must never move the collision bounds"
        );
        assert!(collectible.display_offset_y().abs() <= BOB_AMPLITUDE);
    }

    #[test]
    fn collected_collectible_stops_bobbing() {
        let mut collectible = Collectible::new(0.0, 0.0);
        collectible.update(1.0);
        let phase_offset = collectible.display_offset_y();
        collectible.collect();
        collectible.update(1.0);
        assert_eq!(collectible.display_offset_y(), phase_offset);
    }

    #[test]
    fn collect_and_reset_roundtrip() {
        let mut collectible = Collectible::new(0.0, 0.0);
        assert!(!collectible.collected);
        collectible.collect();
        assert!(collectible.collected);
        collectible.reset();
        assert!(!collectible.collected);
    }

    #[test]
    fn enemy_patrols_within_bounds_and_flips() {
        let mut enemy = Enemy::new(100.0, 460.0, 80.0, 120.0);
        let mut seen_left = false;
        let mut seen_right = false;
        for _ in 0..200 {
            enemy.update(1.0);
            assert!(
                enemy.x >= 80.0 && enemy.x <= 120.0,
                "Enemy left its patrol route: x={}",
                enemy.x
            );
            if enemy.direction < 0.0 {
                seen_left = true;
            } else {
                seen_right = true;
            }
        }
        assert!(seen_left && seen_right, "Enemy should reverse at both ends");
    }

    #[test]
    fn enemy_clamps_exactly_at_patrol_end() {
        let mut enemy = Enemy::new(119.0, 0.0, 80.0, 120.0);
        enemy.update(1.0);
        assert_eq!(enemy.x, 120.0);
        assert_eq!(enemy.direction, -1.0);
    }

    #[test]
    fn enemy_reset_returns_to_spawn() {
        let mut enemy = Enemy::new(100.0, 460.0, 80.0, 120.0);
        for _ in 0..50 {
            enemy.update(1.0);
        }
        enemy.reset();
        assert_eq!(enemy.x, 100.0);
        assert_eq!(enemy.direction, 1.0);
    }

    #[test]
    fn obstacle_bounds_are_fixed_size() {
        let obstacle = Obstacle::new(250.0, 490.0);
        let bounds = obstacle.bounds();
        assert_eq!(bounds.width, OBSTACLE_SIZE);
        assert_eq!(bounds.height, OBSTACLE_SIZE);
    }
}
