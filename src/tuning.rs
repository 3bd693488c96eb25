//! Data-driven game balance
//!
//! Every knob the simulation reads lives here. Defaults reproduce the
//! classic feel; a JSON file may override any subset of fields.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Error type for tuning load/validation
#[derive(Debug)]
pub enum TuningError {
    /// JSON could not be parsed
    Parse(String),
    /// Values parsed but violate a precondition
    Invalid(String),
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuningError::Parse(msg) => write!(f, "Tuning parse error: {}", msg),
            TuningError::Invalid(msg) => write!(f, "Invalid tuning: {}", msg),
        }
    }
}

impl std::error::Error for TuningError {}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e.to_string())
    }
}

/// Simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Surface ===
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Movement ===
    pub gravity: f32,
    pub run_speed: f32,
    pub jump_speed: f32,

    // === Generation ===
    /// World-y range new platforms/obstacles are placed in
    pub spawn_band: Range<f32>,
    pub platform_width: Range<f32>,
    pub obstacle_width: Range<f32>,
    /// Frontier advance after a platform spawn
    pub platform_spacing: Range<f32>,
    /// Frontier advance after a successful obstacle spawn
    pub obstacle_spacing: Range<f32>,
    pub ground_extend_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,

            gravity: GRAVITY,
            run_speed: RUN_SPEED,
            jump_speed: JUMP_SPEED,

            spawn_band: 150.0..350.0,
            platform_width: 50.0..150.0,
            obstacle_width: 30.0..80.0,
            platform_spacing: 100.0..250.0,
            obstacle_spacing: 50.0..150.0,
            ground_extend_step: GROUND_EXTEND_STEP,
        }
    }
}

/// Smallest spacing or ground step the frontier loops accept
pub const MIN_FRONTIER_STEP: f32 = 1.0;

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check the preconditions the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("gravity", self.gravity),
            ("run_speed", self.run_speed),
            ("jump_speed", self.jump_speed),
            ("ground_extend_step", self.ground_extend_step),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::Invalid(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }

        let ranges = [
            ("spawn_band", &self.spawn_band),
            ("platform_width", &self.platform_width),
            ("obstacle_width", &self.obstacle_width),
            ("platform_spacing", &self.platform_spacing),
            ("obstacle_spacing", &self.obstacle_spacing),
        ];
        for (name, range) in ranges {
            if !range.start.is_finite()
                || !range.end.is_finite()
                || range.is_empty()
                || range.start < 0.0
            {
                return Err(TuningError::Invalid(format!(
                    "{} must be a non-empty, non-negative finite range, got {:?}",
                    name, range
                )));
            }
        }

        // Anything smaller can vanish into f32 rounding and stall the frontier
        let steps = [
            ("platform_spacing.start", self.platform_spacing.start),
            ("obstacle_spacing.start", self.obstacle_spacing.start),
            ("ground_extend_step", self.ground_extend_step),
        ];
        for (name, value) in steps {
            if value < MIN_FRONTIER_STEP {
                return Err(TuningError::Invalid(format!(
                    "{} must be at least {}, got {}",
                    name, MIN_FRONTIER_STEP, value
                )));
            }
        }

        // The generator needs somewhere to put things that isn't the ground
        let blocked_from = GROUND_TOP - SPAWN_HEIGHT;
        let blocked_to = GROUND_TOP + GROUND_HEIGHT;
        if self.spawn_band.start >= blocked_from && self.spawn_band.end <= blocked_to {
            return Err(TuningError::Invalid(format!(
                "spawn_band {:?} is fully covered by the ground band",
                self.spawn_band
            )));
        }

        Ok(())
    }

    /// Load tuning from a JSON file, falling back to defaults on any error
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default(path: &std::path::Path) -> Self {
        let result = std::fs::read_to_string(path)
            .map_err(|e| TuningError::Parse(e.to_string()))
            .and_then(|json| Self::from_json(&json));

        match result {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("{} ({}), using default tuning", e, path.display());
                Self::default()
            }
        }
    }

    /// Half the viewport width; past this the world scrolls instead of the player
    pub fn scroll_threshold(&self) -> f32 {
        self.viewport_width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.8 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.8);
        assert_eq!(tuning.run_speed, RUN_SPEED);
        assert_eq!(tuning.spawn_band, 150.0..350.0);
    }

    #[test]
    fn test_ranges_parse_from_json() {
        let tuning =
            Tuning::from_json(r#"{ "platform_width": { "start": 60.0, "end": 90.0 } }"#).unwrap();
        assert_eq!(tuning.platform_width, 60.0..90.0);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Tuning::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_covered_spawn_band_rejected() {
        let tuning = Tuning {
            spawn_band: 335.0..395.0,
            ..Default::default()
        };
        let err = tuning.validate().unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));
        assert!(err.to_string().contains("ground band"));
    }

    #[test]
    fn test_non_positive_values_rejected() {
        let tuning = Tuning {
            run_speed: 0.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());

        let tuning = Tuning {
            obstacle_spacing: 10.0..10.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_infinite_values_rejected() {
        // 1e39 overflows f32 to +inf
        let err = Tuning::from_json(r#"{ "viewport_width": 1e39 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));

        let tuning = Tuning {
            platform_width: 50.0..f32::INFINITY,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_tiny_spacing_rejected() {
        let err = Tuning::from_json(
            r#"{ "platform_spacing": { "start": 0.0, "end": 0.00001 } }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("platform_spacing"));

        let tuning = Tuning {
            obstacle_spacing: 0.5..10.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_tiny_ground_step_rejected() {
        let err = Tuning::from_json(r#"{ "ground_extend_step": 0.00001 }"#).unwrap_err();
        assert!(err.to_string().contains("ground_extend_step"));

        let tuning = Tuning {
            ground_extend_step: MIN_FRONTIER_STEP,
            ..Default::default()
        };
        assert!(tuning.validate().is_ok());
    }
}
