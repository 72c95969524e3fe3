//! Deterministic simulation module
//!
//! All round logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by hole index)
//! - No rendering, audio or input-device dependencies

pub mod difficulty;
pub mod mole;
pub mod round;
pub mod state;
pub mod tick;

pub use difficulty::{Difficulty, tier_for_score};
pub use mole::{BorderTint, Mole, MoleCue, MoleEvent, MoleKind, MolePhase, MoleTiming};
pub use state::{Banner, Cue, EndReason, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
