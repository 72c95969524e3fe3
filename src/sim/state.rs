//! Round state and core simulation types
//!
//! Everything a round needs lives in `GameState`: the clock, score, the
//! occupied-hole set and the mole actors themselves, indexed by hole.

use std::collections::BTreeSet;

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::mole::{BorderTint, Mole, MoleCue, MoleTiming};
use crate::settings::{SetupError, Settings};

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Clock ran out
    Timeout,
    /// A bomb was hit
    Bomb,
}

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GamePhase {
    /// Waiting for the first start command
    Ready,
    /// Start cue played, waiting out the startup delay
    Starting { remaining: f32 },
    /// Clock running, moles popping
    Playing,
    /// Round ended, waiting for the next start command
    GameOver(EndReason),
}

/// End-of-round messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    OutOfTime,
    Bomb,
}

impl From<EndReason> for Banner {
    fn from(reason: EndReason) -> Self {
        match reason {
            EndReason::Timeout => Banner::OutOfTime,
            EndReason::Bomb => Banner::Bomb,
        }
    }
}

/// Fire-and-forget particle/audio cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    GameStart,
    GameOver,
    Mole { hole: usize, cue: MoleCue },
}

/// Output events for the presentation layer, drained each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    ScoreChanged(u32),
    /// Remaining seconds on the clock
    ClockChanged(f32),
    /// Start control visibility
    StartControl(bool),
    /// In-round HUD visibility
    Hud(bool),
    BannersCleared,
    ShowBanner(Banner),
    BorderChanged { hole: usize, tint: BorderTint },
    Cue(Cue),
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub settings: Settings,
    pub timing: MoleTiming,
    pub phase: GamePhase,
    /// Seconds left on the clock
    pub time_remaining: f32,
    pub score: u32,
    /// Holes whose mole is not idle. Only the round manager writes this.
    pub occupied: BTreeSet<usize>,
    /// One actor per hole, indexed by hole
    pub moles: Vec<Mole>,
    /// Pending output for the presenter
    pub events: Vec<GameEvent>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Set up the holes. Fails on settings that can't produce a round.
    pub fn new(settings: Settings, seed: u64) -> Result<Self, SetupError> {
        settings.validate()?;

        let moles = (0..settings.hole_count).map(Mole::new).collect();
        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            timing: MoleTiming::from(&settings),
            time_remaining: settings.starting_time,
            settings,
            phase: GamePhase::Ready,
            score: 0,
            occupied: BTreeSet::new(),
            moles,
            events: Vec::new(),
            time_ticks: 0,
        })
    }

    /// Clock is running and moles may be activated
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn hole_count(&self) -> usize {
        self.moles.len()
    }

    /// Local position of the mole in `hole`, for the render host
    pub fn mole_position(&self, hole: usize) -> Option<Vec3> {
        self.moles
            .get(hole)
            .map(|m| m.position(self.settings.rest_position, self.settings.raised_position))
    }

    /// Take all pending output events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
