use crate::events::GameEvent;
use crate::input::FrameInput;

/// Core trait that a headless Bonehound game implements.
///
/// The driver owns the frame clock, input capture, and display; the game
/// only advances simulation state and reports what happened through the
/// returned events.
pub trait BonehoundGame: Send {
    /// Advance the simulation by one frame. `dt` is in frame units at the
    /// 60 fps baseline (1.0 = one nominal frame), not wall-clock seconds.
    fn update(&mut self, dt: f32, input: &FrameInput) -> Vec<GameEvent>;

    /// Reset the session to the start of the level.
    fn restart(&mut self);

    /// Items collected so far in the current run.
    fn score(&self) -> u32;

    /// Whether the current run has ended in a win or a loss.
    fn is_over(&self) -> bool;

    /// Serialize a snapshot of the mutable session state for display layers
    /// and tests.
    fn serialize_state(&self) -> Vec<u8>;

    /// Apply a previously serialized snapshot. Invalid data is ignored.
    fn apply_state(&mut self, state: &[u8]);
}
