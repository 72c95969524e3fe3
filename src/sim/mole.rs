//! Per-hole mole actor
//!
//! Each hole owns one `Mole` for the lifetime of the process. An appearance
//! (variant, lives, hold time) is rolled on `activate` and thrown away when the
//! mole goes back to `Idle`. The actor never touches round state; it reports
//! what happened through `MoleEvent`s pushed to an outbox the round manager
//! drains.

use glam::Vec3;
use rand::Rng;

use super::difficulty::Difficulty;
use crate::consts::HARD_HAT_LIVES;
use crate::settings::Settings;

/// Mole variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoleKind {
    #[default]
    Standard,
    /// Armored, takes two hits
    HardHat,
    /// Ends the round when hit, harmless when missed
    Bomb,
}

impl MoleKind {
    pub fn starting_lives(self) -> u8 {
        match self {
            MoleKind::HardHat => HARD_HAT_LIVES,
            MoleKind::Standard | MoleKind::Bomb => 1,
        }
    }

    /// Escaping moles cost time, escaping bombs don't
    pub fn is_mole(self) -> bool {
        self != MoleKind::Bomb
    }
}

/// Lifecycle phase, each timed phase carries its own countdown
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MolePhase {
    /// In the hole, free to be activated
    Idle,
    /// Moving up
    Rising { elapsed: f32 },
    /// Holding at the top
    Exposed { remaining: f32 },
    /// Moving back down; reaching the bottom is a miss
    Hiding { elapsed: f32 },
    /// Whacked, showing hit feedback before the hole is freed
    HitResolving { remaining: f32 },
    /// Bomb went off; waits for the round to stop it
    Detonated,
}

/// Border indicator color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderTint {
    #[default]
    Default,
    /// Green flash on a successful hit
    Hit,
    /// Red flash on a bomb
    Danger,
}

/// One-shot particle/audio cues attached to a hole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoleCue {
    /// Dust burst and pop-up sound
    Appear,
    /// Dust burst as the mole starts to retract
    Dust,
    /// Hit particles and whack sound
    Hit,
    /// Helmet knocked off a hard hat
    Clank,
    /// Bomb particles and explosion sound
    Explosion,
}

/// What a mole reports back to the round manager
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoleEvent {
    Scored { hole: usize },
    Missed { hole: usize, was_mole: bool },
    Released { hole: usize },
    Detonated { hole: usize },
    Cue { hole: usize, cue: MoleCue },
    Border { hole: usize, tint: BorderTint },
}

/// Timeline durations shared by every mole in a round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoleTiming {
    pub rise_duration: f32,
    pub hit_feedback_delay: f32,
}

impl Default for MoleTiming {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for MoleTiming {
    fn from(settings: &Settings) -> Self {
        Self {
            rise_duration: settings.rise_duration,
            hit_feedback_delay: settings.hit_feedback_delay,
        }
    }
}

/// A mole actor bound to one hole
#[derive(Debug, Clone)]
pub struct Mole {
    pub hole: usize,
    pub kind: MoleKind,
    pub lives: u8,
    pub phase: MolePhase,
    /// 0 = resting in the hole, 1 = fully raised
    pub lift: f32,
    pub border: BorderTint,
    /// Body color darkened after a hit
    pub darkened: bool,
    /// Hard hat helmet still on
    pub hat_visible: bool,
    /// Hold time rolled for the current appearance
    exposure: f32,
}

impl Mole {
    pub fn new(hole: usize) -> Self {
        Self {
            hole,
            kind: MoleKind::Standard,
            lives: 1,
            phase: MolePhase::Idle,
            lift: 0.0,
            border: BorderTint::Default,
            darkened: false,
            hat_visible: false,
            exposure: 0.0,
        }
    }

    pub fn set_index(&mut self, hole: usize) {
        self.hole = hole;
    }

    pub fn is_idle(&self) -> bool {
        self.phase == MolePhase::Idle
    }

    /// Whether a whack would land right now
    pub fn is_hittable(&self) -> bool {
        matches!(
            self.phase,
            MolePhase::Rising { .. } | MolePhase::Exposed { .. } | MolePhase::Hiding { .. }
        )
    }

    /// Hold time of the current appearance
    pub fn exposure(&self) -> f32 {
        self.exposure
    }

    /// Interpolated local position for rendering
    pub fn position(&self, rest: Vec3, raised: Vec3) -> Vec3 {
        rest.lerp(raised, self.lift)
    }

    /// Start a new appearance. Cancels whatever timeline was running.
    pub fn activate(
        &mut self,
        difficulty: &Difficulty,
        rng: &mut impl Rng,
        out: &mut Vec<MoleEvent>,
    ) {
        let kind = difficulty.roll_kind(rng);
        self.kind = kind;
        self.lives = kind.starting_lives();
        self.hat_visible = kind == MoleKind::HardHat;
        self.darkened = false;
        self.exposure = difficulty.sample_exposure(rng);
        self.lift = 0.0;
        self.phase = MolePhase::Rising { elapsed: 0.0 };
        self.set_border(BorderTint::Default, out);
        out.push(MoleEvent::Cue {
            hole: self.hole,
            cue: MoleCue::Appear,
        });

        log::debug!(
            "Hole {} up: {:?}, hold {:.2}s (tier {})",
            self.hole,
            kind,
            self.exposure,
            difficulty.tier
        );
    }

    /// Resolve a whack. No-op unless hittable.
    pub fn attempt_hit(&mut self, timing: &MoleTiming, out: &mut Vec<MoleEvent>) {
        if !self.is_hittable() {
            return;
        }

        match self.kind {
            MoleKind::HardHat if self.lives >= HARD_HAT_LIVES => {
                self.lives -= 1;
                self.hat_visible = false;
                out.push(MoleEvent::Cue {
                    hole: self.hole,
                    cue: MoleCue::Clank,
                });
                log::debug!("Hole {} helmet knocked off", self.hole);
            }
            MoleKind::Standard | MoleKind::HardHat => self.hit_success(timing, out),
            MoleKind::Bomb => {
                self.phase = MolePhase::Detonated;
                self.set_border(BorderTint::Danger, out);
                out.push(MoleEvent::Cue {
                    hole: self.hole,
                    cue: MoleCue::Explosion,
                });
                out.push(MoleEvent::Detonated { hole: self.hole });
            }
        }
    }

    fn hit_success(&mut self, timing: &MoleTiming, out: &mut Vec<MoleEvent>) {
        // Freeze in place; the hole stays occupied until the feedback ends
        self.phase = MolePhase::HitResolving {
            remaining: timing.hit_feedback_delay,
        };
        self.darkened = true;
        out.push(MoleEvent::Cue {
            hole: self.hole,
            cue: MoleCue::Hit,
        });
        self.set_border(BorderTint::Hit, out);
        out.push(MoleEvent::Scored { hole: self.hole });
    }

    /// Advance the timeline by `dt`, carrying leftover time into the next phase
    pub fn advance(&mut self, dt: f32, timing: &MoleTiming, out: &mut Vec<MoleEvent>) {
        let rise = timing.rise_duration;
        let mut dt = dt;

        while dt > 0.0 {
            match self.phase {
                MolePhase::Idle | MolePhase::Detonated => return,

                MolePhase::Rising { elapsed } => {
                    let elapsed = elapsed + dt;
                    if elapsed < rise {
                        self.lift = elapsed / rise;
                        self.phase = MolePhase::Rising { elapsed };
                        return;
                    }
                    dt = elapsed - rise;
                    self.lift = 1.0;
                    self.phase = MolePhase::Exposed {
                        remaining: self.exposure,
                    };
                }

                MolePhase::Exposed { remaining } => {
                    if dt < remaining {
                        self.phase = MolePhase::Exposed {
                            remaining: remaining - dt,
                        };
                        return;
                    }
                    dt -= remaining;
                    self.phase = MolePhase::Hiding { elapsed: 0.0 };
                    out.push(MoleEvent::Cue {
                        hole: self.hole,
                        cue: MoleCue::Dust,
                    });
                }

                MolePhase::Hiding { elapsed } => {
                    let elapsed = elapsed + dt;
                    if elapsed < rise {
                        self.lift = 1.0 - elapsed / rise;
                        self.phase = MolePhase::Hiding { elapsed };
                        return;
                    }
                    self.lift = 0.0;
                    self.phase = MolePhase::Idle;
                    out.push(MoleEvent::Missed {
                        hole: self.hole,
                        was_mole: self.kind.is_mole(),
                    });
                    return;
                }

                MolePhase::HitResolving { remaining } => {
                    if dt < remaining {
                        self.phase = MolePhase::HitResolving {
                            remaining: remaining - dt,
                        };
                        return;
                    }
                    self.hide(out);
                    out.push(MoleEvent::Released { hole: self.hole });
                    return;
                }
            }
        }
    }

    /// Drop back into the hole with default colors, cancelling any timeline
    pub fn hide(&mut self, out: &mut Vec<MoleEvent>) {
        self.phase = MolePhase::Idle;
        self.lift = 0.0;
        self.set_border(BorderTint::Default, out);
    }

    /// Round ended: freeze where it is, cancel everything, report nothing
    pub fn stop(&mut self) {
        self.phase = MolePhase::Idle;
    }

    fn set_border(&mut self, tint: BorderTint, out: &mut Vec<MoleEvent>) {
        self.border = tint;
        out.push(MoleEvent::Border {
            hole: self.hole,
            tint,
        });
    }
}
