//! Fixed timestep simulation tick
//!
//! Order inside one tick:
//! 1. start command
//! 2. hit attempts (before any timer, so a hit on the last frame beats the miss)
//! 3. startup delay
//! 4. clock
//! 5. mole timelines
//! 6. activation

use rand::Rng;

use super::state::{EndReason, GameEvent, GamePhase, GameState};
use crate::consts::AUTOPLAY_REACTION;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start (or restart) a round
    pub start: bool,
    /// Holes whacked this tick, in arrival order
    pub hits: Vec<usize>,
    /// Idle/demo mode - the game whacks its own moles
    pub idle_mode: bool,
}

/// Advance the round by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.start {
        state.start_game();
    }

    state.time_ticks += 1;

    for &hole in &input.hits {
        state.attempt_hit(hole);
    }
    if input.idle_mode && state.is_running() {
        autoplay(state);
    }

    match state.phase {
        GamePhase::Ready | GamePhase::GameOver(_) => return,
        GamePhase::Starting { remaining } => {
            let remaining = remaining - dt;
            if remaining > 0.0 {
                state.phase = GamePhase::Starting { remaining };
                return;
            }
            state.phase = GamePhase::Playing;
            log::info!("Round live");
            // The first playing frame starts on the next tick
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_remaining -= dt;
    if state.time_remaining <= 0.0 {
        state.time_remaining = 0.0;
        state.events.push(GameEvent::ClockChanged(0.0));
        state.game_over(EndReason::Timeout);
        return;
    }
    state.events.push(GameEvent::ClockChanged(state.time_remaining));

    state.advance_moles(dt);
    state.try_activate();
}

/// Whack hittable non-bomb moles with a fixed chance per tick
fn autoplay(state: &mut GameState) {
    let targets: Vec<usize> = state
        .moles
        .iter()
        .filter(|m| m.is_hittable() && m.kind.is_mole())
        .map(|m| m.hole)
        .collect();

    for hole in targets {
        if state.rng.random::<f32>() < AUTOPLAY_REACTION {
            state.attempt_hit(hole);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::settings::Settings;

    fn started(seed: u64) -> GameState {
        let mut state = GameState::new(Settings::default(), seed).unwrap();
        let input = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        state
    }

    fn run_until_playing(state: &mut GameState) {
        let input = TickInput::default();
        while !state.is_running() {
            tick(state, &input, SIM_DT);
        }
    }

    #[test]
    fn test_ready_does_nothing() {
        let mut state = GameState::new(Settings::default(), 1).unwrap();
        for _ in 0..120 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.phase, GamePhase::Ready);
        assert!(state.occupied.is_empty());
    }

    #[test]
    fn test_startup_delay() {
        let mut state = started(12345);
        assert!(matches!(state.phase, GamePhase::Starting { .. }));

        // ~2 seconds of ticks before the round goes live
        let input = TickInput::default();
        for _ in 0..100 {
            tick(&mut state, &input, SIM_DT);
        }
        assert!(!state.is_running());
        assert_eq!(state.time_remaining, 30.0);

        run_until_playing(&mut state);
        assert!(state.is_running());
    }

    #[test]
    fn test_clock_runs_out() {
        let mut state = started(5);
        run_until_playing(&mut state);

        state.time_remaining = SIM_DT * 1.5;
        let input = TickInput::default();
        tick(&mut state, &input, SIM_DT);
        assert!(state.is_running());
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver(EndReason::Timeout));
        assert_eq!(state.time_remaining, 0.0);
        assert!(state.occupied.is_empty());
    }

    #[test]
    fn test_first_playing_tick_opens_a_hole() {
        let mut state = started(9);
        run_until_playing(&mut state);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.occupied.len(), 1);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = started(3);
        run_until_playing(&mut state);
        state.game_over(EndReason::Timeout);

        let input = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert!(matches!(state.phase, GamePhase::Starting { .. }));
        assert_eq!(state.time_remaining, 30.0);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = started(99999);
        let mut state2 = started(99999);

        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        for _ in 0..2000 {
            tick(&mut state1, &input, SIM_DT);
            tick(&mut state2, &input, SIM_DT);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.occupied, state2.occupied);
        assert_eq!(state1.phase, state2.phase);
    }

    #[test]
    fn test_autoplay_scores() {
        let mut state = started(2024);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        for _ in 0..(60 * 20) {
            tick(&mut state, &input, SIM_DT);
        }
        assert!(state.score > 0);
    }
}
