use std::time::Duration;

use tracing_subscriber::EnvFilter;

use bonehound_core::events::GameEvent;
use bonehound_core::game_trait::BonehoundGame;
use bonehound_core::input::FrameInput;
use bonehound_game::BoneWalk;
use bonehound_game::level::Level;
use bonehound_game::physics::WalkConfig;

/// Hard frame cap so a stalled demo script can't run forever.
const MAX_FRAMES: u32 = 7200;
/// Runs to play before exiting; the script restarts after each win or loss.
const MAX_RUNS: u32 = 3;

/// Scripted demo input: hold right and hop once a second; after a game over,
/// hold restart until the session comes back.
fn demo_input(frame: u32, game_over: bool) -> FrameInput {
    if game_over {
        return FrameInput {
            restart: true,
            ..FrameInput::default()
        };
    }
    FrameInput {
        right: true,
        jump: frame % 60 < 2,
        ..FrameInput::default()
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = WalkConfig::load();
    let level = Level::load();
    tracing::info!(
        platforms = level.platforms.len(),
        collectibles = level.collectibles.len(),
        obstacles = level.obstacles.len(),
        enemies = level.enemies.len(),
        goal_x = level.goal_x,
        "Level loaded"
    );

    let tick_interval = Duration::from_secs_f32(1.0 / config.tick_rate_hz);
    let mut interval = tokio::time::interval(tick_interval);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let mut game = BoneWalk::new(level, config);
    let mut runs: u32 = 1;

    for frame in 0..MAX_FRAMES {
        interval.tick().await;

        let input = demo_input(frame, game.is_over());
        for event in game.update(1.0, &input) {
            match event {
                GameEvent::ScoreUpdate { score } => tracing::info!(score, "Item collected"),
                GameEvent::Sound(cue) => tracing::debug!(?cue, "Sound cue"),
                GameEvent::GameOver { won } => {
                    tracing::info!(won, score = game.score(), run = runs, "Run over");
                    if let Some(text) = game.result_message() {
                        tracing::info!(result = text, "Run result");
                    }
                },
                GameEvent::Restarted => {
                    runs += 1;
                    tracing::info!(run = runs, "Session restarted");
                },
            }
        }

        if game.is_over() && runs >= MAX_RUNS {
            break;
        }
    }

    tracing::info!(runs, "Runner finished");
}
