//! Round manager operations
//!
//! The manager is the only writer of the occupied-hole set. Moles report
//! `MoleEvent`s into an outbox; `apply_mole_events` turns them into score,
//! clock and occupancy changes.

use rand::Rng;

use super::difficulty::{Difficulty, tier_for_score};
use super::mole::MoleEvent;
use super::state::{Banner, Cue, EndReason, GameEvent, GamePhase, GameState};

impl GameState {
    /// Reset score, clock and holes and begin the startup delay.
    /// Ignored while a round is already starting or running.
    pub fn start_game(&mut self) -> bool {
        if matches!(self.phase, GamePhase::Starting { .. } | GamePhase::Playing) {
            log::warn!("Start ignored: round already in progress");
            return false;
        }

        self.events.push(GameEvent::StartControl(false));
        self.events.push(GameEvent::BannersCleared);
        self.events.push(GameEvent::Hud(true));

        let mut out = Vec::new();
        for (hole, mole) in self.moles.iter_mut().enumerate() {
            mole.set_index(hole);
            mole.hide(&mut out);
        }
        self.apply_mole_events(out);

        self.occupied.clear();
        self.time_remaining = self.settings.starting_time;
        self.score = 0;
        self.events.push(GameEvent::ScoreChanged(0));
        self.events.push(GameEvent::ClockChanged(self.time_remaining));
        self.events.push(GameEvent::Cue(Cue::GameStart));

        self.phase = GamePhase::Starting {
            remaining: self.settings.starting_delay,
        };
        log::info!(
            "Round starting: {} holes, {:.0}s on the clock",
            self.moles.len(),
            self.time_remaining
        );
        true
    }

    /// Route a whack to the mole in `hole`
    pub fn attempt_hit(&mut self, hole: usize) {
        let Some(mole) = self.moles.get_mut(hole) else {
            log::warn!("Hit on unknown hole {}", hole);
            return;
        };
        let mut out = Vec::new();
        mole.attempt_hit(&self.timing, &mut out);
        self.apply_mole_events(out);
    }

    /// A mole was whacked: one point and a little more time.
    /// The hole stays occupied until the mole releases it.
    pub fn add_score(&mut self, hole: usize) {
        self.score += 1;
        self.time_remaining += self.settings.hit_bonus;
        self.events.push(GameEvent::ScoreChanged(self.score));
        log::debug!("Hole {} scored, total {}", hole, self.score);
    }

    /// A mole escaped. Costs time unless it was a bomb.
    pub fn missed(&mut self, hole: usize, was_mole: bool) {
        if was_mole {
            self.time_remaining -= self.settings.miss_penalty;
        }
        self.occupied.remove(&hole);
        log::debug!("Hole {} missed (penalized: {})", hole, was_mole);
    }

    /// Free a hole after its hit feedback. Safe to call on a free hole.
    pub fn release_mole(&mut self, hole: usize) {
        self.occupied.remove(&hole);
    }

    /// Stop every mole and show the end-of-round message
    pub fn game_over(&mut self, reason: EndReason) {
        if matches!(self.phase, GamePhase::GameOver(_)) {
            return;
        }

        self.phase = GamePhase::GameOver(reason);
        for mole in &mut self.moles {
            mole.stop();
        }
        self.occupied.clear();

        self.events.push(GameEvent::ShowBanner(Banner::from(reason)));
        self.events.push(GameEvent::Cue(Cue::GameOver));
        self.events.push(GameEvent::StartControl(true));
        log::info!("Game over ({:?}) with score {}", reason, self.score);
    }

    /// Open one more hole if the tier allows it. A roll that lands on an
    /// occupied hole is dropped; the next tick tries again.
    pub fn try_activate(&mut self) {
        let tier = tier_for_score(self.score);
        if self.occupied.len() > tier as usize {
            return;
        }

        let hole = self.rng.random_range(0..self.moles.len());
        if self.occupied.contains(&hole) {
            return;
        }
        self.occupied.insert(hole);

        let difficulty = Difficulty::for_tier(tier);
        let mut out = Vec::new();
        self.moles[hole].activate(&difficulty, &mut self.rng, &mut out);
        self.apply_mole_events(out);
    }

    /// Run every mole's timeline forward by `dt`
    pub fn advance_moles(&mut self, dt: f32) {
        let mut out = Vec::new();
        for mole in &mut self.moles {
            mole.advance(dt, &self.timing, &mut out);
        }
        self.apply_mole_events(out);
    }

    fn apply_mole_events(&mut self, out: Vec<MoleEvent>) {
        for event in out {
            match event {
                MoleEvent::Scored { hole } => self.add_score(hole),
                MoleEvent::Missed { hole, was_mole } => self.missed(hole, was_mole),
                MoleEvent::Released { hole } => self.release_mole(hole),
                MoleEvent::Detonated { hole } => {
                    log::debug!("Hole {} was a bomb", hole);
                    self.game_over(EndReason::Bomb);
                }
                MoleEvent::Cue { hole, cue } => {
                    self.events.push(GameEvent::Cue(Cue::Mole { hole, cue }));
                }
                MoleEvent::Border { hole, tint } => {
                    self.events.push(GameEvent::BorderChanged { hole, tint });
                }
            }
        }
    }
}
