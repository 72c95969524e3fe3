//! Presentation interface
//!
//! The simulation only queues `GameEvent`s. `present` drains them into a
//! `Presenter`, formatting the score and clock on the way out.

use crate::format_clock;
use crate::sim::{Banner, BorderTint, Cue, GameEvent, GameState};

/// Display/audio sink implemented by the host
pub trait Presenter {
    fn show_score(&mut self, text: &str);
    fn show_time(&mut self, text: &str);
    fn show_banner(&mut self, banner: Banner);
    fn clear_banners(&mut self);
    fn set_start_visible(&mut self, visible: bool);
    fn set_hud_visible(&mut self, visible: bool);
    fn set_border(&mut self, hole: usize, tint: BorderTint);
    fn play_cue(&mut self, cue: Cue);
}

/// Drain all pending events from `state` into `presenter`
pub fn present(state: &mut GameState, presenter: &mut impl Presenter) {
    for event in state.drain_events() {
        match event {
            GameEvent::ScoreChanged(score) => presenter.show_score(&score.to_string()),
            GameEvent::ClockChanged(seconds) => presenter.show_time(&format_clock(seconds)),
            GameEvent::StartControl(visible) => presenter.set_start_visible(visible),
            GameEvent::Hud(visible) => presenter.set_hud_visible(visible),
            GameEvent::BannersCleared => presenter.clear_banners(),
            GameEvent::ShowBanner(banner) => presenter.show_banner(banner),
            GameEvent::BorderChanged { hole, tint } => presenter.set_border(hole, tint),
            GameEvent::Cue(cue) => presenter.play_cue(cue),
        }
    }
}

/// Headless presenter that writes the HUD to the log
#[derive(Debug, Default)]
pub struct LogPresenter {
    pub score: String,
    pub time: String,
    pub banner: Option<Banner>,
}

impl Presenter for LogPresenter {
    fn show_score(&mut self, text: &str) {
        if self.score != text {
            log::info!("Score: {}", text);
            self.score = text.to_string();
        }
    }

    fn show_time(&mut self, text: &str) {
        // Clock updates every frame; only log when the readout changes
        if self.time != text {
            log::info!("Time: {}", text);
            self.time = text.to_string();
        }
    }

    fn show_banner(&mut self, banner: Banner) {
        match banner {
            Banner::OutOfTime => log::info!("OUT OF TIME!"),
            Banner::Bomb => log::info!("BOOM! You hit a bomb"),
        }
        self.banner = Some(banner);
    }

    fn clear_banners(&mut self) {
        self.banner = None;
    }

    fn set_start_visible(&mut self, visible: bool) {
        log::debug!("Start control visible: {}", visible);
    }

    fn set_hud_visible(&mut self, visible: bool) {
        log::debug!("HUD visible: {}", visible);
    }

    fn set_border(&mut self, hole: usize, tint: BorderTint) {
        log::trace!("Hole {} border {:?}", hole, tint);
    }

    fn play_cue(&mut self, cue: Cue) {
        log::trace!("Cue {:?}", cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[derive(Default)]
    struct Recorder {
        scores: Vec<String>,
        times: Vec<String>,
        banners: Vec<Banner>,
        start_visible: Option<bool>,
        cues: Vec<Cue>,
    }

    impl Presenter for Recorder {
        fn show_score(&mut self, text: &str) {
            self.scores.push(text.to_string());
        }
        fn show_time(&mut self, text: &str) {
            self.times.push(text.to_string());
        }
        fn show_banner(&mut self, banner: Banner) {
            self.banners.push(banner);
        }
        fn clear_banners(&mut self) {
            self.banners.clear();
        }
        fn set_start_visible(&mut self, visible: bool) {
            self.start_visible = Some(visible);
        }
        fn set_hud_visible(&mut self, _visible: bool) {}
        fn set_border(&mut self, _hole: usize, _tint: BorderTint) {}
        fn play_cue(&mut self, cue: Cue) {
            self.cues.push(cue);
        }
    }

    #[test]
    fn test_present_formats_and_drains() {
        let mut state = GameState::new(Settings::default(), 1).unwrap();
        state.start_game();

        let mut recorder = Recorder::default();
        present(&mut state, &mut recorder);
        assert_eq!(recorder.scores, vec!["0"]);
        assert_eq!(recorder.times, vec!["0:30"]);
        assert_eq!(recorder.start_visible, Some(false));
        assert!(recorder.cues.contains(&Cue::GameStart));
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_log_presenter_tracks_banner() {
        let mut state = GameState::new(Settings::default(), 1).unwrap();
        state.start_game();
        state.game_over(crate::sim::EndReason::Bomb);

        let mut presenter = LogPresenter::default();
        present(&mut state, &mut presenter);
        assert_eq!(presenter.banner, Some(Banner::Bomb));
        assert_eq!(presenter.score, "0");
    }
}
