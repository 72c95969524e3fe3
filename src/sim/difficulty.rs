//! Difficulty curve
//!
//! Everything scales off the tier, `score / TIER_SIZE`. There is no separate
//! level system: more points means more holes open at once, more bombs and
//! hard hats, and shorter exposure.

use rand::Rng;

use super::mole::MoleKind;
use crate::consts::*;

/// Difficulty tier for a score
#[inline]
pub fn tier_for_score(score: u32) -> u32 {
    score / TIER_SIZE
}

/// Activation parameters derived from a tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    pub tier: u32,
    /// Chance that an activation is a bomb
    pub bomb_chance: f32,
    /// Chance that a non-bomb activation wears a hard hat
    pub armor_chance: f32,
    /// Hold time range at the top (seconds)
    pub exposure_min: f32,
    pub exposure_max: f32,
}

impl Difficulty {
    pub fn for_tier(tier: u32) -> Self {
        let level = tier as f32;
        Self {
            tier,
            bomb_chance: (level * CHANCE_PER_TIER).min(MAX_BOMB_CHANCE),
            armor_chance: (level * CHANCE_PER_TIER).min(MAX_ARMOR_CHANCE),
            exposure_min: (EXPOSURE_MIN_CEIL - level * EXPOSURE_SHRINK_PER_TIER)
                .clamp(EXPOSURE_FLOOR, EXPOSURE_MIN_CEIL),
            exposure_max: (EXPOSURE_MAX_CEIL - level * EXPOSURE_SHRINK_PER_TIER)
                .clamp(EXPOSURE_FLOOR, EXPOSURE_MAX_CEIL),
        }
    }

    pub fn for_score(score: u32) -> Self {
        Self::for_tier(tier_for_score(score))
    }

    /// Roll the variant for one appearance
    pub fn roll_kind(&self, rng: &mut impl Rng) -> MoleKind {
        if rng.random::<f32>() < self.bomb_chance {
            return MoleKind::Bomb;
        }
        if rng.random::<f32>() < self.armor_chance {
            return MoleKind::HardHat;
        }
        MoleKind::Standard
    }

    /// Sample how long the mole holds at the top
    pub fn sample_exposure(&self, rng: &mut impl Rng) -> f32 {
        if self.exposure_max > self.exposure_min {
            rng.random_range(self.exposure_min..self.exposure_max)
        } else {
            self.exposure_min
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_tier_zero_is_all_standard() {
        let d = Difficulty::for_tier(0);
        assert_eq!(d.bomb_chance, 0.0);
        assert_eq!(d.armor_chance, 0.0);
        assert_eq!(d.exposure_min, 1.0);
        assert_eq!(d.exposure_max, 2.0);

        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            assert_eq!(d.roll_kind(&mut rng), MoleKind::Standard);
        }
    }

    #[test]
    fn test_chances_clamp() {
        let d = Difficulty::for_tier(40);
        assert_eq!(d.bomb_chance, MAX_BOMB_CHANCE);
        assert!((d.armor_chance - 1.0).abs() < 1e-6);
        assert_eq!(d.exposure_min, EXPOSURE_FLOOR);
        assert_eq!(d.exposure_max, EXPOSURE_FLOOR);

        // Armor is certain once a roll escapes the bomb check
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..200 {
            assert_ne!(d.roll_kind(&mut rng), MoleKind::Standard);
        }
    }

    #[test]
    fn test_tier_for_score() {
        assert_eq!(tier_for_score(0), 0);
        assert_eq!(tier_for_score(9), 0);
        assert_eq!(tier_for_score(10), 1);
        assert_eq!(tier_for_score(25), 2);
    }

    #[test]
    fn test_exposure_sample_in_range() {
        let d = Difficulty::for_score(25);
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..500 {
            let t = d.sample_exposure(&mut rng);
            assert!(t >= d.exposure_min && t < d.exposure_max);
        }

        // Collapsed range returns the bound without panicking
        let d = Difficulty::for_tier(100);
        assert_eq!(d.sample_exposure(&mut rng), EXPOSURE_FLOOR);
    }
}
