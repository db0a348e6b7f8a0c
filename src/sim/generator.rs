//! Procedural platform generation and the difficulty curve
//!
//! A single difficulty factor `d` in `[0, 1]`, derived from score, drives gap
//! size, platform width, the type mix and moving-platform speed.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Platform, PlatformKind};
use crate::consts::{MIN_GAP_SPREAD, START_OFFSET};
use crate::tuning::Tuning;

/// Normalized difficulty for a score: 0 below the start score, a linear ramp
/// up to the max score, then pinned at 1.
pub fn difficulty_factor(score: u64, tuning: &Tuning) -> f32 {
    let start = tuning.difficulty_start_score;
    if score < start {
        return 0.0;
    }
    let span = tuning.difficulty_max_score.saturating_sub(start).max(1);
    let progress = (score - start) as f64 / span as f64;
    progress.clamp(0.0, 1.0) as f32
}

/// Inclusive-exclusive bounds for the vertical gap to the next platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapBounds {
    pub min: f32,
    pub max: f32,
}

/// Gap range at difficulty `d`
///
/// The max is clamped to the safe ceiling first, then the min is pulled
/// below the clamped max, so the range never inverts.
pub fn gap_bounds(d: f32, tuning: &Tuning) -> GapBounds {
    let scaled_min = tuning.min_gap + d * tuning.gap_growth;
    let scaled_max = tuning.max_gap + d * tuning.gap_growth;

    let max = scaled_max.min(tuning.safe_gap_ceiling());
    let min = scaled_min.min(max - MIN_GAP_SPREAD);
    GapBounds { min, max }
}

/// Platform width at difficulty `d`, never below the floor
pub fn platform_width(d: f32, tuning: &Tuning) -> f32 {
    (tuning.platform_width - d * tuning.platform_width_shrink).max(tuning.min_platform_width)
}

/// Upper edges of the static and moving bands for the type roll
pub fn kind_thresholds(d: f32, tuning: &Tuning) -> (f32, f32) {
    let static_chance = tuning.static_chance - d * tuning.static_chance_drop;
    let moving_chance = static_chance + tuning.moving_band + d * tuning.moving_band_growth;
    (static_chance, moving_chance)
}

/// Discriminant picked by a type roll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindRoll {
    Static,
    Moving,
    Breakable,
}

/// Map a uniform roll in `[0, 1)` to a platform type
pub fn choose_kind(roll: f32, d: f32, tuning: &Tuning) -> KindRoll {
    let (static_chance, moving_chance) = kind_thresholds(d, tuning);
    if roll < static_chance {
        KindRoll::Static
    } else if roll < moving_chance {
        KindRoll::Moving
    } else {
        KindRoll::Breakable
    }
}

/// Horizontal speed of moving platforms at difficulty `d`
pub fn moving_speed(d: f32, tuning: &Tuning) -> f32 {
    tuning.moving_base_speed + d * tuning.moving_speed_growth
}

/// Top up the platform set to the target count, stacking new platforms above
/// the most recently generated one
pub fn generate_platforms(state: &mut GameState) {
    let target = state.tuning.platform_count;
    if state.platforms.len() >= target {
        return;
    }

    let mut current_y = state
        .platforms
        .last()
        .map(|p| p.pos.y)
        .unwrap_or(state.viewport.height - START_OFFSET);

    // Score is fixed for the whole batch
    let d = difficulty_factor(state.stats.score, &state.tuning);
    let gaps = gap_bounds(d, &state.tuning);
    let width = platform_width(d, &state.tuning);
    let speed = moving_speed(d, &state.tuning);
    let span = (state.viewport.width - width).max(0.0);

    let before = state.platforms.len();
    while state.platforms.len() < target {
        let gap = state.rng.random::<f32>() * (gaps.max - gaps.min) + gaps.min;
        current_y -= gap;

        let x = state.rng.random::<f32>() * span;

        let roll = state.rng.random::<f32>();
        let kind = match choose_kind(roll, d, &state.tuning) {
            KindRoll::Static => PlatformKind::Static,
            KindRoll::Moving => PlatformKind::Moving {
                speed,
                direction: if state.rng.random_bool(0.5) { 1.0 } else { -1.0 },
            },
            KindRoll::Breakable => PlatformKind::Breakable,
        };

        let platform = Platform {
            id: state.next_entity_id(),
            pos: Vec2::new(x, current_y),
            width,
            height: state.tuning.platform_height,
            kind,
            broken: false,
        };
        state.platforms.push(platform);
    }

    log::debug!(
        "Generated {} platforms (d={:.3}, gap {:.1}..{:.1}, width {:.1})",
        state.platforms.len() - before,
        d,
        gaps.min,
        gaps.max,
        width
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{GameState, RunPhase};
    use crate::tuning::Viewport;
    use proptest::prelude::*;

    #[test]
    fn test_difficulty_endpoints() {
        let tuning = Tuning::default();
        assert_eq!(difficulty_factor(0, &tuning), 0.0);
        assert_eq!(difficulty_factor(49, &tuning), 0.0);
        assert_eq!(difficulty_factor(50, &tuning), 0.0);
        assert_eq!(difficulty_factor(5000, &tuning), 1.0);
        assert_eq!(difficulty_factor(u64::MAX, &tuning), 1.0);
        let mid = difficulty_factor(2525, &tuning);
        assert!((mid - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_gap_bounds_zero_difficulty() {
        let gaps = gap_bounds(0.0, &Tuning::default());
        assert_eq!(gaps.min, 50.0);
        assert_eq!(gaps.max, 120.0);
    }

    #[test]
    fn test_gap_bounds_max_difficulty_capped() {
        let gaps = gap_bounds(1.0, &Tuning::default());
        assert_eq!(gaps.min, 90.0);
        // 160 would be fine, ceiling is 175
        assert_eq!(gaps.max, 160.0);
        assert!(gaps.max < 187.5);
    }

    #[test]
    fn test_gap_min_clamped_below_capped_max() {
        // Aggressive growth pushes both bounds past the ceiling
        let tuning = Tuning {
            gap_growth: 200.0,
            ..Default::default()
        };
        let gaps = gap_bounds(1.0, &tuning);
        assert!((gaps.max - 175.0).abs() < 1e-3);
        assert!((gaps.min - 165.0).abs() < 1e-3);
        assert!(gaps.min < gaps.max);
    }

    #[test]
    fn test_platform_width_floor() {
        let tuning = Tuning::default();
        assert_eq!(platform_width(0.0, &tuning), 80.0);
        assert_eq!(platform_width(1.0, &tuning), 40.0);

        let tuning = Tuning {
            platform_width_shrink: 100.0,
            ..Default::default()
        };
        assert_eq!(platform_width(1.0, &tuning), 30.0);
    }

    #[test]
    fn test_kind_mix_at_zero_difficulty() {
        let tuning = Tuning::default();
        let (s, m) = kind_thresholds(0.0, &tuning);
        assert!((s - 0.8).abs() < 1e-6);
        assert!((m - 0.95).abs() < 1e-6);

        assert_eq!(choose_kind(0.0, 0.0, &tuning), KindRoll::Static);
        assert_eq!(choose_kind(0.79, 0.0, &tuning), KindRoll::Static);
        assert_eq!(choose_kind(0.8, 0.0, &tuning), KindRoll::Moving);
        assert_eq!(choose_kind(0.94, 0.0, &tuning), KindRoll::Moving);
        assert_eq!(choose_kind(0.96, 0.0, &tuning), KindRoll::Breakable);
    }

    #[test]
    fn test_kind_mix_at_max_difficulty() {
        let tuning = Tuning::default();
        let (s, m) = kind_thresholds(1.0, &tuning);
        assert!((s - 0.3).abs() < 1e-6);
        assert!((m - 0.8).abs() < 1e-6);
        assert_eq!(choose_kind(0.29, 1.0, &tuning), KindRoll::Static);
        assert_eq!(choose_kind(0.5, 1.0, &tuning), KindRoll::Moving);
        assert_eq!(choose_kind(0.85, 1.0, &tuning), KindRoll::Breakable);
    }

    #[test]
    fn test_moving_speed_scales() {
        let tuning = Tuning::default();
        assert_eq!(moving_speed(0.0, &tuning), 2.0);
        assert_eq!(moving_speed(1.0, &tuning), 5.0);
    }

    #[test]
    fn test_generate_fills_to_target_with_rising_platforms() {
        let mut state = GameState::with_defaults(42).unwrap();
        assert_eq!(state.phase, RunPhase::Idle);
        generate_platforms(&mut state);

        assert_eq!(state.platforms.len(), state.tuning.platform_count);
        let mut prev_y = state.viewport.height - START_OFFSET;
        for platform in &state.platforms {
            let gap = prev_y - platform.pos.y;
            assert!(gap > 49.99 && gap < 120.01, "gap {gap} out of range");
            assert!(platform.pos.x >= 0.0);
            assert!(platform.pos.x + platform.width <= state.viewport.width);
            assert_eq!(platform.width, 80.0);
            prev_y = platform.pos.y;
        }
    }

    #[test]
    fn test_generate_is_noop_when_full() {
        let mut state = GameState::with_defaults(42).unwrap();
        generate_platforms(&mut state);
        let ids: Vec<u32> = state.platforms.iter().map(|p| p.id).collect();
        generate_platforms(&mut state);
        let again: Vec<u32> = state.platforms.iter().map(|p| p.id).collect();
        assert_eq!(ids, again);
    }

    #[test]
    fn test_generate_continues_above_last_platform() {
        let mut state = GameState::with_defaults(3).unwrap();
        generate_platforms(&mut state);
        let top = state.platforms.last().unwrap().pos.y;
        state.platforms.remove(0);
        generate_platforms(&mut state);
        let newest = state.platforms.last().unwrap();
        assert!(newest.pos.y < top);
    }

    #[test]
    fn test_generate_at_high_score_uses_hard_params() {
        let mut state = GameState::with_defaults(9).unwrap();
        state.stats.score = 10_000;
        generate_platforms(&mut state);
        for platform in &state.platforms {
            assert_eq!(platform.width, 40.0);
            if let PlatformKind::Moving { speed, direction } = platform.kind {
                assert_eq!(speed, 5.0);
                assert!(direction == 1.0 || direction == -1.0);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_difficulty_monotonic(a in 0u64..20_000, b in 0u64..20_000) {
            let tuning = Tuning::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let d_lo = difficulty_factor(lo, &tuning);
            let d_hi = difficulty_factor(hi, &tuning);
            prop_assert!(d_lo <= d_hi);
            prop_assert!((0.0..=1.0).contains(&d_lo));
            prop_assert!((0.0..=1.0).contains(&d_hi));
        }

        #[test]
        fn prop_gaps_reachable(
            d in 0.0f32..=1.0,
            growth in 0.0f32..400.0,
            min_gap in 0.5f32..200.0,
            max_gap in 11.0f32..400.0,
        ) {
            let tuning = Tuning { gap_growth: growth, min_gap, max_gap, ..Default::default() };
            prop_assert_eq!(tuning.validate(), Ok(()));
            let gaps = gap_bounds(d, &tuning);
            prop_assert!(gaps.min > 0.0);
            prop_assert!(gaps.min < gaps.max);
            prop_assert!(gaps.max <= tuning.safe_gap_ceiling());
            prop_assert!(gaps.max < tuning.max_jump_height());
        }

        #[test]
        fn prop_platforms_climb_for_any_valid_gaps(
            seed in any::<u64>(),
            min_gap in 0.5f32..200.0,
            max_gap in 11.0f32..400.0,
        ) {
            let tuning = Tuning { min_gap, max_gap, ..Default::default() };
            let mut state = GameState::new(seed, tuning, Viewport::default()).unwrap();
            generate_platforms(&mut state);
            let mut prev_y = state.viewport.height - START_OFFSET;
            for platform in &state.platforms {
                prop_assert!(platform.pos.y < prev_y);
                prev_y = platform.pos.y;
            }
        }

        #[test]
        fn prop_width_never_below_floor(d in 0.0f32..=1.0, shrink in 0.0f32..500.0) {
            let tuning = Tuning { platform_width_shrink: shrink, ..Default::default() };
            prop_assert!(platform_width(d, &tuning) >= tuning.min_platform_width);
        }

        #[test]
        fn prop_generated_gaps_within_ceiling(seed in any::<u64>(), score in 0u64..10_000) {
            let mut state = GameState::with_defaults(seed).unwrap();
            state.stats.score = score;
            generate_platforms(&mut state);
            let mut prev_y = state.viewport.height - START_OFFSET;
            for platform in &state.platforms {
                let gap = prev_y - platform.pos.y;
                prop_assert!(gap > 0.0);
                prop_assert!(gap <= state.tuning.safe_gap_ceiling());
                prev_y = platform.pos.y;
            }
        }
    }
}
