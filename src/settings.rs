//! Round settings
//!
//! Loaded from an optional JSON file; defaults match the arcade cabinet tuning.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Fatal misconfiguration detected while setting up a round
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("no holes configured: at least one mole is required")]
    NoHoles,
    #[error("setting `{name}` must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("setting `{name}` must be a non-negative finite number, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Round tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of holes (one mole actor each)
    pub hole_count: usize,

    // === Clock ===
    /// Seconds on the clock when a round starts
    pub starting_time: f32,
    /// Delay between the start cue and the first tick of play
    pub starting_delay: f32,
    /// Seconds added per successful hit
    pub hit_bonus: f32,
    /// Seconds removed when a non-bomb mole escapes
    pub miss_penalty: f32,

    // === Mole timeline ===
    /// Duration of the rise (and of the retract)
    pub rise_duration: f32,
    /// How long a whacked mole stays visible before its hole is freed
    pub hit_feedback_delay: f32,
    /// Local position of a hidden mole
    pub rest_position: Vec3,
    /// Local position of a fully raised mole
    pub raised_position: Vec3,

    // === Input ===
    /// Tag a trigger contact must carry to count as a hit
    pub hand_tag: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hole_count: 9,

            starting_time: 30.0,
            starting_delay: 2.0,
            hit_bonus: 1.0,
            miss_penalty: 2.0,

            rise_duration: 0.5,
            hit_feedback_delay: 0.5,
            rest_position: Vec3::ZERO,
            raised_position: Vec3::new(0.0, -1.5, 0.0),

            hand_tag: "Player".to_string(),
        }
    }
}

impl Settings {
    /// Check that the settings describe a playable round
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.hole_count == 0 {
            return Err(SetupError::NoHoles);
        }

        let positive = [
            ("starting_time", self.starting_time),
            ("rise_duration", self.rise_duration),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SetupError::NonPositive { name, value });
            }
        }

        let non_negative = [
            ("starting_delay", self.starting_delay),
            ("hit_bonus", self.hit_bonus),
            ("miss_penalty", self.miss_penalty),
            ("hit_feedback_delay", self.hit_feedback_delay),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SetupError::Negative { name, value });
            }
        }

        Ok(())
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SetupError> {
        let json = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SetupError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }
}
