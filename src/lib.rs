//! Whack-a-Mole - arcade round logic
//!
//! Core modules:
//! - `sim`: Deterministic simulation (mole actors, round manager, difficulty)
//! - `input`: Contact events to hit attempts
//! - `presenter`: Output interface for HUD, banners and cues
//! - `settings`: Tunable round constants

pub mod input;
pub mod presenter;
pub mod settings;
pub mod sim;

pub use input::{Contact, HitAdapter};
pub use presenter::{LogPresenter, Presenter, present};
pub use settings::{SetupError, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz frame tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Points per difficulty tier
    pub const TIER_SIZE: u32 = 10;

    /// Bomb/armor chance added per tier
    pub const CHANCE_PER_TIER: f32 = 0.025;
    pub const MAX_BOMB_CHANCE: f32 = 0.25;
    pub const MAX_ARMOR_CHANCE: f32 = 1.0;

    /// Exposure window shrinks by this many seconds per tier
    pub const EXPOSURE_SHRINK_PER_TIER: f32 = 0.1;
    pub const EXPOSURE_FLOOR: f32 = 0.01;
    pub const EXPOSURE_MIN_CEIL: f32 = 1.0;
    pub const EXPOSURE_MAX_CEIL: f32 = 2.0;

    /// Hard-hat moles take two hits
    pub const HARD_HAT_LIVES: u8 = 2;

    /// Chance per tick that autoplay whacks a hittable mole
    pub const AUTOPLAY_REACTION: f32 = 0.06;
}

/// Format remaining seconds as `m:ss`, truncating fractional seconds
pub fn format_clock(seconds: f32) -> String {
    let whole = seconds.max(0.0) as u32;
    format!("{}:{:02}", whole / 60, whole % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "0:00");
        assert_eq!(format_clock(5.0), "0:05");
        assert_eq!(format_clock(65.0), "1:05");
        assert_eq!(format_clock(29.99), "0:29");
        assert_eq!(format_clock(-1.0), "0:00");
    }
}
