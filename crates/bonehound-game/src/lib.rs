pub mod camera;
pub mod entities;
pub mod level;
pub mod physics;
pub mod player;

use serde::{Deserialize, Serialize};

use bonehound_core::events::{GameEvent, SoundCue};
use bonehound_core::game_trait::BonehoundGame;
use bonehound_core::input::FrameInput;

use camera::Camera;
use entities::{Collectible, Enemy, Obstacle, Platform};
use level::Level;
use physics::WalkConfig;
use player::Player;

/// Run state for a walk session.
///
/// Collecting items never changes the state; the only transitions are
/// Playing→Won (goal reached), Playing→Lost (hazard contact or falling out
/// of bounds), and Won|Lost→Playing via restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

/// Mutable session state, exposed as a snapshot through the game trait.
/// Static level geometry (platforms, obstacles) lives outside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkState {
    pub player: Player,
    pub collectibles: Vec<Collectible>,
    pub enemies: Vec<Enemy>,
    pub score: u32,
    pub state: GameState,
    pub camera: Camera,
}

/// The backyard walk game: a single-player side-scrolling run across a
/// level, collecting bones and dodging hazards on the way to the goal.
pub struct BoneWalk {
    level: Level,
    config: WalkConfig,
    platforms: Vec<Platform>,
    obstacles: Vec<Obstacle>,
    state: WalkState,
}

impl BoneWalk {
    pub fn new(level: Level, config: WalkConfig) -> Self {
        let platforms = level
            .platforms
            .iter()
            .map(|r| Platform::new(r.x, r.y, r.width, r.height))
            .collect();
        let obstacles = level
            .obstacles
            .iter()
            .map(|p| Obstacle::new(p.x, p.y))
            .collect();
        let collectibles = level
            .collectibles
            .iter()
            .map(|p| Collectible::new(p.x, p.y))
            .collect();
        let enemies = level.enemies.iter().map(Enemy::from_spawn).collect();
        let player = Player::new(level.player_start.x, level.player_start.y);

        Self {
            platforms,
            obstacles,
            state: WalkState {
                player,
                collectibles,
                enemies,
                score: 0,
                state: GameState::Playing,
                camera: Camera::default(),
            },
            level,
            config,
        }
    }

    pub fn state(&self) -> GameState {
        self.state.state
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn collectibles(&self) -> &[Collectible] {
        &self.state.collectibles
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.state.enemies
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn camera_offset(&self) -> f32 {
        self.state.camera.offset_x
    }

    /// Win or lose text for the display layer. None while playing.
    pub fn result_message(&self) -> Option<&'static str> {
        match self.state.state {
            GameState::Playing => None,
            GameState::Won => Some("You win! Press restart to play again"),
            GameState::Lost => Some("Game over! Press restart to try again"),
        }
    }

    fn update_gameplay(&mut self, dt: f32, input: &FrameInput) -> Vec<GameEvent> {
        let mut events = Vec::new();

        let jumped = self
            .state
            .player
            .step(dt, input, &self.platforms, &self.config.physics);
        if jumped {
            events.push(GameEvent::Sound(SoundCue::Jump));
        }

        let player_bounds = self.state.player.bounds();

        for collectible in &mut self.state.collectibles {
            collectible.update(dt);

            if !collectible.collected && player_bounds.overlaps(&collectible.bounds()) {
                collectible.collect();
                self.state.score += 1;
                events.push(GameEvent::Sound(SoundCue::Coin));
                events.push(GameEvent::ScoreUpdate {
                    score: self.state.score,
                });
            }
        }

        // Hazard contact ends the run before camera, goal, or fall are
        // considered.
        if self
            .obstacles
            .iter()
            .any(|o| player_bounds.overlaps(&o.bounds()))
        {
            self.lose(&mut events);
            return events;
        }

        for enemy in &mut self.state.enemies {
            enemy.update(dt);
        }
        if self
            .state
            .enemies
            .iter()
            .any(|e| player_bounds.overlaps(&e.bounds()))
        {
            self.lose(&mut events);
            return events;
        }

        let player_x = self.state.player.x;
        self.state
            .camera
            .update(player_x, &self.config.camera, self.level.bounds.max_x);

        if self.state.player.x >= self.level.goal_x {
            self.state.state = GameState::Won;
            tracing::debug!(score = self.state.score, "Goal reached");
            events.push(GameEvent::GameOver { won: true });
            return events;
        }

        if self.state.player.y > self.level.bounds.max_y {
            self.lose(&mut events);
        }

        events
    }

    fn lose(&mut self, events: &mut Vec<GameEvent>) {
        self.state.state = GameState::Lost;
        tracing::debug!(score = self.state.score, "Run lost");
        events.push(GameEvent::Sound(SoundCue::Explosion));
        events.push(GameEvent::GameOver { won: false });
    }
}

impl Default for BoneWalk {
    fn default() -> Self {
        Self::new(Level::backyard(), WalkConfig::default())
    }
}

impl BonehoundGame for BoneWalk {
    fn update(&mut self, dt: f32, input: &FrameInput) -> Vec<GameEvent> {
        match self.state.state {
            GameState::Playing => self.update_gameplay(dt, input),
            GameState::Won | GameState::Lost => {
                if input.restart {
                    self.restart();
                    vec![GameEvent::Restarted]
                } else {
                    Vec::new()
                }
            },
        }
    }

    fn restart(&mut self) {
        self.state.state = GameState::Playing;
        self.state.score = 0;
        self.state
            .player
            .reset(self.level.player_start.x, self.level.player_start.y);
        for collectible in &mut self.state.collectibles {
            collectible.reset();
        }
        for enemy in &mut self.state.enemies {
            enemy.reset();
        }
        self.state.camera.reset();
        tracing::debug!("Session restarted");
    }

    fn score(&self) -> u32 {
        self.state.score
    }

    fn is_over(&self) -> bool {
        self.state.state != GameState::Playing
    }

    fn serialize_state(&self) -> Vec<u8> {
        rmp_serde::to_vec(&self.state).expect("game state serialization must succeed")
    }

    fn apply_state(&mut self, state: &[u8]) {
        if let Ok(s) = rmp_serde::from_slice::<WalkState>(state) {
            self.state = s;
        }
    }
}
