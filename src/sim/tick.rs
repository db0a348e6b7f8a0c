//! Per-frame run loop
//!
//! The host owns scheduling: it calls [`tick`] once per display frame while
//! [`GameState::is_running`] is true. Nothing here reschedules itself.

use glam::Vec2;

use super::collision::resolve_collisions;
use super::generator::generate_platforms;
use super::kinematics::{integrate_player, update_particles, update_platform};
use super::scroll::scroll_and_score;
use super::state::{
    GameEvent, GameState, HorizontalIntent, Platform, PlatformKind, Player, RunPhase, RunStats,
    spawn_point,
};
use crate::consts::START_PLATFORM_DROP;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Horizontal steering; jumping is automatic
    pub intent: HorizontalIntent,
}

impl TickInput {
    pub fn steer(intent: HorizontalIntent) -> Self {
        Self { intent }
    }
}

/// Begin a fresh run, discarding everything from the previous one
///
/// Valid from any phase. A viewport resize requested during the previous run
/// is applied here.
pub fn start(state: &mut GameState) {
    if let Some(viewport) = state.take_pending_viewport() {
        state.viewport = viewport;
    }

    let spawn = spawn_point(&state.tuning, &state.viewport);
    state.player = Player::new(spawn, &state.tuning);
    state.stats = RunStats::default();
    state.particles.clear();
    state.platforms.clear();

    // First platform sits just under the player's feet
    let first = Platform {
        id: state.next_entity_id(),
        pos: Vec2::new(
            state.viewport.width / 2.0 - state.tuning.platform_width / 2.0,
            spawn.y + state.tuning.player_height + START_PLATFORM_DROP,
        ),
        width: state.tuning.platform_width,
        height: state.tuning.platform_height,
        kind: PlatformKind::Static,
        broken: false,
    };
    state.platforms.push(first);
    generate_platforms(state);

    state.phase = RunPhase::Running;
    log::info!(
        "Run started (seed {}, viewport {}x{})",
        state.seed,
        state.viewport.width,
        state.viewport.height
    );
}

/// Advance the run by one frame
///
/// Order: integrate player, move platforms, resolve landings, fade
/// particles, scroll and score, prune and replenish platforms, then check
/// for the fall that ends the run. Does nothing unless running.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != RunPhase::Running {
        return events;
    }

    state.stats.ticks += 1;
    let width = state.viewport.width;

    integrate_player(&mut state.player, input.intent, &state.tuning, width);

    for platform in &mut state.platforms {
        update_platform(platform, width);
    }

    events.extend(resolve_collisions(state));

    update_particles(&mut state.particles);

    events.extend(scroll_and_score(state));

    let cutoff = state.viewport.height + state.tuning.prune_margin;
    state.platforms.retain(|p| p.pos.y < cutoff);
    if state.platforms.len() < state.tuning.platform_count {
        generate_platforms(state);
    }

    if state.player.pos.y > state.viewport.height {
        events.push(end_run(state));
    }

    events
}

/// Transition to `Over` and report the final result
fn end_run(state: &mut GameState) -> GameEvent {
    let final_score = state.stats.score;
    let new_best = final_score > state.best_score;
    if new_best {
        state.best_score = final_score;
    }
    state.phase = RunPhase::Over;
    log::info!(
        "Run over after {} ticks: score {} (best {}{})",
        state.stats.ticks,
        final_score,
        state.best_score,
        if new_best { ", new best" } else { "" }
    );
    GameEvent::GameOver {
        final_score,
        new_best,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Viewport;

    #[test]
    fn test_idle_ticks_are_noops() {
        let mut state = GameState::with_defaults(12345).unwrap();
        let events = tick(&mut state, &TickInput::default());
        assert!(events.is_empty());
        assert_eq!(state.stats.ticks, 0);
        assert_eq!(state.phase, RunPhase::Idle);
    }

    #[test]
    fn test_start_builds_world() {
        let mut state = GameState::with_defaults(12345).unwrap();
        start(&mut state);

        assert_eq!(state.phase, RunPhase::Running);
        assert_eq!(state.platforms.len(), state.tuning.platform_count);
        assert_eq!(state.player.pos, Vec2::new(195.0, 600.0));

        let first = &state.platforms[0];
        assert_eq!(first.kind, PlatformKind::Static);
        assert_eq!(first.pos, Vec2::new(185.0, 670.0));
    }

    #[test]
    fn test_player_lands_on_first_platform() {
        let mut state = GameState::with_defaults(5).unwrap();
        start(&mut state);

        let mut bounced = false;
        for _ in 0..30 {
            let events = tick(&mut state, &TickInput::default());
            if events.iter().any(|e| matches!(e, GameEvent::Bounce { .. })) {
                bounced = true;
                break;
            }
        }
        assert!(bounced);
        assert!(state.player.vel.y < 0.0);
        assert!(state.is_running());
    }

    #[test]
    fn test_fall_out_ends_run() {
        let mut state = GameState::with_defaults(12345).unwrap();
        start(&mut state);
        state.platforms.clear();
        state.player.pos.y = 699.0;
        state.player.vel.y = 5.0;

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, RunPhase::Over);
        assert!(matches!(
            events.last(),
            Some(GameEvent::GameOver { final_score: 0, new_best: false })
        ));

        // No further frames are processed
        let ticks = state.stats.ticks;
        let pos = state.player.pos;
        assert!(tick(&mut state, &TickInput::default()).is_empty());
        assert_eq!(state.stats.ticks, ticks);
        assert_eq!(state.player.pos, pos);
    }

    #[test]
    fn test_game_over_reports_new_best() {
        let mut state = GameState::with_defaults(1).unwrap().with_best_score(10);
        start(&mut state);
        state.stats.score = 42;
        state.platforms.clear();
        state.player.pos.y = 720.0;

        let events = tick(&mut state, &TickInput::default());
        assert!(events.contains(&GameEvent::GameOver {
            final_score: 42,
            new_best: true
        }));
        assert_eq!(state.best_score, 42);
    }

    #[test]
    fn test_restart_reinitializes() {
        let mut state = GameState::with_defaults(77).unwrap();
        start(&mut state);
        state.stats.score = 99;
        state.stats.camera_y = -990.0;
        state.player.pos.y = 800.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, RunPhase::Over);

        start(&mut state);
        assert_eq!(state.phase, RunPhase::Running);
        assert_eq!(state.stats.score, 0);
        assert_eq!(state.stats.camera_y, 0.0);
        assert_eq!(state.player.pos, Vec2::new(195.0, 600.0));
        assert_eq!(state.platforms.len(), state.tuning.platform_count);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_resize_applies_on_next_start() {
        let mut state = GameState::with_defaults(4).unwrap();
        start(&mut state);
        state.resize(Viewport::new(600.0, 900.0)).unwrap();
        assert_eq!(state.viewport, Viewport::default());

        start(&mut state);
        assert_eq!(state.viewport, Viewport::new(600.0, 900.0));
        assert_eq!(state.player.pos.y, 800.0);
    }

    #[test]
    fn test_prune_and_replenish() {
        let mut state = GameState::with_defaults(8).unwrap();
        start(&mut state);
        let first_id = state.platforms[0].id;
        state.platforms[0].pos.y = 760.0;
        state.player.pos.y = 300.0;
        state.player.vel.y = -10.0;

        tick(&mut state, &TickInput::default());
        assert!(state.platforms.iter().all(|p| p.id != first_id));
        assert_eq!(state.platforms.len(), state.tuning.platform_count);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::with_defaults(99999).unwrap();
        let mut state2 = GameState::with_defaults(99999).unwrap();
        start(&mut state1);
        start(&mut state2);

        let inputs = [
            TickInput::steer(HorizontalIntent::Left),
            TickInput::steer(HorizontalIntent::None),
            TickInput::steer(HorizontalIntent::Right),
        ];
        for i in 0..300 {
            let input = &inputs[i % inputs.len()];
            let e1 = tick(&mut state1, input);
            let e2 = tick(&mut state2, input);
            assert_eq!(e1, e2);
        }

        assert_eq!(state1.stats.ticks, state2.stats.ticks);
        assert_eq!(state1.player.pos, state2.player.pos);
        let ids1: Vec<u32> = state1.platforms.iter().map(|p| p.id).collect();
        let ids2: Vec<u32> = state2.platforms.iter().map(|p| p.id).collect();
        assert_eq!(ids1, ids2);
    }
}
