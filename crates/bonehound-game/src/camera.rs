use serde::{Deserialize, Serialize};

/// Camera follow tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Visible width of the viewport in world units.
    pub viewport_width: f32,
    /// Exponential smoothing factor applied per frame (1.0 = no smoothing).
    pub smoothing: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            smoothing: 0.1,
        }
    }
}

/// Horizontal world offset that places the player roughly one third of the
/// way across the viewport, clamped so the camera never shows past the
/// level's horizontal bounds.
pub fn target_offset(player_x: f32, viewport_width: f32, level_max_x: f32) -> f32 {
    let target = -player_x + viewport_width / 3.0;
    let min_offset = -(level_max_x - viewport_width);
    // min/max instead of clamp: degenerate levels narrower than the viewport
    // invert the range and clamp would panic.
    target.min(0.0).max(min_offset)
}

/// Scalar horizontal camera state, smoothed toward the clamped follow target
/// each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub offset_x: f32,
}

impl Camera {
    pub fn update(&mut self, player_x: f32, config: &CameraConfig, level_max_x: f32) {
        let clamped = target_offset(player_x, config.viewport_width, level_max_x);
        self.offset_x += (clamped - self.offset_x) * config.smoothing;
    }

    pub fn reset(&mut self) {
        self.offset_x = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_clamps_at_level_start() {
        // Player near the left edge: raw target is positive, clamped to 0.
        let offset = target_offset(50.0, 800.0, 1800.0);
        assert_eq!(offset, 0.0);
    }

    #[test]
    fn target_follows_player_mid_level() {
        let offset = target_offset(600.0, 800.0, 1800.0);
        assert!((offset - (-600.0 + 800.0 / 3.0)).abs() < 1e-3);
    }

    #[test]
    fn target_clamps_at_level_end() {
        // Camera must never show past the right edge of the level.
        let offset = target_offset(1790.0, 800.0, 1800.0);
        assert_eq!(offset, -(1800.0 - 800.0));
    }

    #[test]
    fn degenerate_narrow_level_does_not_panic() {
        let offset = target_offset(0.0, 800.0, 400.0);
        assert!(offset.is_finite());
    }

    #[test]
    fn smoothing_converges_toward_target() {
        let config = CameraConfig::default();
        let mut camera = Camera::default();
        let target = target_offset(600.0, config.viewport_width, 1800.0);
        for _ in 0..200 {
            camera.update(600.0, &config, 1800.0);
        }
        assert!(
            (camera.offset_x - target).abs() < 0.01,
            "Camera should converge to {target}, got {}",
            camera.offset_x
        );
    }

    #[test]
    fn smoothing_moves_a_tenth_per_frame() {
        let config = CameraConfig::default();
        let mut camera = Camera::default();
        camera.update(600.0, &config, 1800.0);
        let target = target_offset(600.0, config.viewport_width, 1800.0);
        assert!((camera.offset_x - target * 0.1).abs() < 1e-3);
    }

    #[test]
    fn reset_returns_to_initial_offset() {
        let mut camera = Camera { offset_x: -500.0 };
        camera.reset();
        assert_eq!(camera.offset_x, 0.0);
    }
}
