//! Per-level difficulty curve.

use crate::config::GameConfig;
use crate::rng::RandomSource;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Parameters derived from a level index. Rebuilt on every level transition.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelParams {
    pub index: u32,
    /// Pixels per tick for obstacles and distance travelled.
    pub speed: f64,
    /// Ticks between obstacle spawns.
    pub spawn_interval: u64,
    /// Distance needed to clear the level.
    pub duration: f64,
    /// Canvas background, `#RRGGBB`.
    pub background: String,
}

impl LevelParams {
    pub fn derive(cfg: &GameConfig, index: u32, rng: &mut impl RandomSource) -> Self {
        Self {
            index,
            speed: speed_for(cfg, index),
            spawn_interval: spawn_interval_for(cfg, index),
            duration: duration_for(cfg, index),
            background: random_color(rng),
        }
    }
}

pub fn speed_for(cfg: &GameConfig, index: u32) -> f64 {
    cfg.base_speed + index as f64
}

pub fn spawn_interval_for(cfg: &GameConfig, index: u32) -> u64 {
    cfg.base_spawn_interval
        .saturating_sub(cfg.spawn_interval_step.saturating_mul(index as u64))
        .max(cfg.min_spawn_interval)
}

pub fn duration_for(cfg: &GameConfig, index: u32) -> f64 {
    cfg.base_level_distance + index as f64 * cfg.level_distance_increase
}

/// `#` followed by six independently drawn uppercase hex digits.
pub fn random_color(rng: &mut impl RandomSource) -> String {
    let mut color = String::with_capacity(7);
    color.push('#');
    for _ in 0..6 {
        let idx = ((rng.next_f64() * 16.0) as usize).min(15);
        color.push(HEX_DIGITS[idx] as char);
    }
    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRandom;

    #[test]
    fn level_curve_matches_formulas() {
        let cfg = GameConfig::default();
        for level in 0..40u32 {
            let l = level as i64;
            assert_eq!(speed_for(&cfg, level), 6.0 + level as f64);
            assert_eq!(spawn_interval_for(&cfg, level), (100 - 10 * l).max(10) as u64);
            assert_eq!(duration_for(&cfg, level), 3000.0 + 200.0 * level as f64);
        }
    }

    #[test]
    fn spawn_interval_floors_from_level_nine() {
        let cfg = GameConfig::default();
        assert_eq!(spawn_interval_for(&cfg, 8), 20);
        assert_eq!(spawn_interval_for(&cfg, 9), 10);
        assert_eq!(spawn_interval_for(&cfg, 10), 10);
        assert_eq!(spawn_interval_for(&cfg, u32::MAX), 10);
    }

    #[test]
    fn curve_is_monotonic() {
        let cfg = GameConfig::default();
        for level in 0..30u32 {
            assert!(speed_for(&cfg, level + 1) > speed_for(&cfg, level));
            assert!(duration_for(&cfg, level + 1) > duration_for(&cfg, level));
            assert!(spawn_interval_for(&cfg, level + 1) <= spawn_interval_for(&cfg, level));
        }
    }

    #[test]
    fn random_color_is_hex_triplet() {
        let mut rng = SeededRandom::new(3);
        for _ in 0..50 {
            let c = random_color(&mut rng);
            assert_eq!(c.len(), 7);
            assert!(c.starts_with('#'));
            assert!(c[1..].chars().all(|ch| ch.is_ascii_digit() || ('A'..='F').contains(&ch)));
        }
    }

    #[test]
    fn derive_fills_every_field() {
        let cfg = GameConfig::default();
        let mut rng = SeededRandom::new(11);
        let p = LevelParams::derive(&cfg, 2, &mut rng);
        assert_eq!(p.index, 2);
        assert_eq!(p.speed, 8.0);
        assert_eq!(p.spawn_interval, 80);
        assert_eq!(p.duration, 3400.0);
        assert_eq!(p.background.len(), 7);
    }
}
