pub mod events;
pub mod game_trait;
pub mod geometry;
pub mod input;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::events::GameEvent;
    use crate::game_trait::BonehoundGame;
    use crate::input::FrameInput;

    /// Run N frames with the given held input, returning all accumulated
    /// events.
    pub fn run_game_frames(
        game: &mut dyn BonehoundGame,
        n: usize,
        dt: f32,
        input: &FrameInput,
    ) -> Vec<GameEvent> {
        let mut all_events = Vec::new();
        for _ in 0..n {
            all_events.extend(game.update(dt, input));
        }
        all_events
    }

    /// Assert that the game's serialized state differs from `before`.
    pub fn assert_game_state_changed(game: &dyn BonehoundGame, before: &[u8]) {
        let after = game.serialize_state();
        assert_ne!(
            before,
            &after[..],
            "Game state should have changed after operation"
        );
    }

    // ================================================================
    // Game Trait Contract Tests
    // ================================================================
    // A generic suite every BonehoundGame implementation must pass. Game
    // crates call these from their own #[cfg(test)] modules with a concrete
    // game instance.

    /// update() with held input must change the serialized state.
    pub fn contract_update_changes_state(game: &mut dyn BonehoundGame, held: &FrameInput) {
        let before = game.serialize_state();
        game.update(1.0, held);
        let after = game.serialize_state();
        assert_ne!(before, after, "State must change after update with input");
    }

    /// serialize_state → apply_state roundtrip must be stable: applying the
    /// game's own snapshot and serializing again yields identical bytes.
    pub fn contract_state_roundtrip_stable(game: &mut dyn BonehoundGame) {
        let state_a = game.serialize_state();
        game.apply_state(&state_a);
        let state_b = game.serialize_state();
        assert_eq!(
            state_a, state_b,
            "State must be stable after serialize→apply→serialize roundtrip"
        );
    }

    /// restart() must zero the score and leave the game running.
    pub fn contract_restart_resets(game: &mut dyn BonehoundGame) {
        game.restart();
        assert_eq!(game.score(), 0, "Score must be 0 after restart");
        assert!(!game.is_over(), "Game must not be over after restart");
    }

    /// Garbage snapshot bytes must be ignored without a panic.
    pub fn contract_apply_state_garbage_no_panic(game: &mut dyn BonehoundGame) {
        let before = game.serialize_state();
        game.apply_state(&[0xFF, 0xFE, 0x00, 0x01, 0xAB, 0xCD]);
        let after = game.serialize_state();
        assert_eq!(before, after, "Garbage snapshot must leave state unchanged");
    }
}
