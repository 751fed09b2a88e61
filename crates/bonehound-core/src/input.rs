use serde::{Deserialize, Serialize};

/// Current key state for a single frame, polled once per update call.
///
/// All four flags reflect held state, not edges. Momentary-press semantics
/// (e.g. requiring a key release between jumps) are the input source's
/// concern; the simulation consumes whatever it is handed each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub restart: bool,
}

impl FrameInput {
    /// No keys held.
    pub fn idle() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_input_holds_nothing() {
        let input = FrameInput::idle();
        assert!(!input.left && !input.right && !input.jump && !input.restart);
    }

    #[test]
    fn input_json_roundtrip() {
        let input = FrameInput {
            left: false,
            right: true,
            jump: true,
            restart: false,
        };
        let json = serde_json::to_string(&input).unwrap();
        let back: FrameInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, back);
    }
}
