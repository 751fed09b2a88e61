use serde::{Deserialize, Serialize};

use bonehound_core::geometry::{Rect, Vector2};

/// World extents. Falling past `max_y` ends the run; `max_x` also bounds the
/// camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

/// Patrol route for an enemy placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub x: f32,
    pub y: f32,
    pub patrol_start: f32,
    pub patrol_end: f32,
}

/// Static level descriptor: start point, geometry, pickups, hazards, and
/// goal. Immutable once loaded; no schema versioning or validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub player_start: Vector2,
    pub platforms: Vec<Rect>,
    pub collectibles: Vec<Vector2>,
    pub obstacles: Vec<Vector2>,
    #[serde(default)]
    pub enemies: Vec<EnemySpawn>,
    pub goal_x: f32,
    pub bounds: WorldBounds,
}

impl Level {
    /// The built-in backyard walk: three sidewalk stretches with two small
    /// gaps to practice jumping, a bone after each jump, and an obstacle per
    /// stretch.
    pub fn backyard() -> Self {
        Self {
            player_start: Vector2::new(50.0, 435.0),
            platforms: vec![
                Rect::new(0.0, 520.0, 600.0, 80.0),
                Rect::new(680.0, 520.0, 400.0, 80.0),
                Rect::new(1160.0, 520.0, 600.0, 80.0),
            ],
            collectibles: vec![
                Vector2::new(150.0, 480.0),
                Vector2::new(400.0, 480.0),
                Vector2::new(800.0, 480.0),
                Vector2::new(1000.0, 480.0),
                Vector2::new(1400.0, 480.0),
                Vector2::new(1600.0, 480.0),
            ],
            obstacles: vec![
                Vector2::new(250.0, 490.0),
                Vector2::new(900.0, 490.0),
                Vector2::new(1500.0, 490.0),
            ],
            enemies: Vec::new(),
            goal_x: 1650.0,
            bounds: WorldBounds {
                min_x: 0.0,
                max_x: 1800.0,
                min_y: -100.0,
                max_y: 650.0,
            },
        }
    }

    /// Load a level from a JSON file. Falls back to the built-in level if
    /// the file is missing or unparseable.
    pub fn load() -> Self {
        let path =
            std::env::var("BONEHOUND_LEVEL").unwrap_or_else(|_| "levels/backyard.json".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Level>(&content) {
                Ok(level) => level,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using built-in level");
                    Level::backyard()
                },
            },
            Err(_) => Level::backyard(),
        }
    }
}
