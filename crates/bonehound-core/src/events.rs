use serde::{Deserialize, Serialize};

/// Discrete audio cues emitted by the simulation.
///
/// Fire-and-forget notifications for an external audio layer; no return
/// value or acknowledgment is ever consumed, and a missing or failed audio
/// backend simply drops them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundCue {
    Jump,
    Coin,
    Explosion,
}

/// Events emitted by a game during update (scoring, sound cues, run
/// transitions). The display layer reads these instead of the core writing
/// to UI handles directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ScoreUpdate { score: u32 },
    Sound(SoundCue),
    GameOver { won: bool },
    Restarted,
}
