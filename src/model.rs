//! Core game model for the whack-a-beaver minigame.
//!
//! Everything in here is pure: time comes in as millisecond timestamps and
//! randomness as pre-drawn rolls in `[0, 1)`, so the whole state machine can
//! be exercised by plain host-side tests. Timer scheduling and the browser
//! RNG live in `engine.rs`.

use serde::{Deserialize, Serialize};

/// Tunable parameters for one game session. Defaults match the shipped game.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid side length; the board has `grid_side * grid_side` holes.
    pub grid_side: u32,
    /// Score at which the session is won and a celebration fires.
    pub max_points: u32,
    /// How long a target stays up at the start of a session, in ms.
    pub base_show_ms: f64,
    /// Lower bound the show duration never drops below.
    pub min_show_ms: f64,
    /// Multiplier applied to the show duration per hit (< 1 speeds up).
    pub speedup: f64,
    /// Forgiveness period after a target hides during which a click on its
    /// cell still counts as a hit.
    pub grace_ms: f64,
    /// Delay before the first target after start.
    pub start_delay_ms: u32,
    /// Gap between a target timing out and the next one appearing.
    pub requeue_delay_ms: u32,
    /// Gap between a successful hit and the next target.
    pub after_hit_delay_ms: u32,
    /// How long the win celebration overlay stays up.
    pub celebration_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_side: 3,
            max_points: 5,
            base_show_ms: 1100.0,
            min_show_ms: 600.0,
            speedup: 0.9,
            grace_ms: 140.0,
            start_delay_ms: 300,
            requeue_delay_ms: 80,
            after_hit_delay_ms: 140,
            celebration_ms: 3200,
        }
    }
}

impl GameConfig {
    pub fn cell_count(&self) -> usize {
        (self.grid_side * self.grid_side) as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// Before the first start and after a reset.
    Idle,
    /// Timers active, targets popping up.
    Running,
    /// Terminal per session; score reached `max_points`.
    Won,
}

/// The most recently shown slot and when it stopped (or will stop) being the
/// active target. Grants the post-hide grace period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityWindow {
    pub slot: i32,
    pub valid_until: f64,
}

impl VisibilityWindow {
    const NONE: Self = Self {
        slot: -1,
        valid_until: 0.0,
    };
}

/// How a click on a hole was judged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Judgement {
    /// Target was up and unlocked on that exact cell.
    Hit,
    /// Target just vanished from that cell but we are inside the grace window.
    GraceHit,
    /// Wrong cell (or right cell, too late).
    Miss,
    /// Not running; clicks outside a session are neither hits nor misses.
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u32,
    pub misses: u32,
    /// Active hole index, or -1 while nothing is up.
    pub active_slot: i32,
    /// Current show duration; shrinks with every hit.
    pub show_ms: f64,
    /// Indices into the fact pool, most recently revealed first.
    pub revealed: Vec<usize>,
    last_visible: VisibilityWindow,
    /// Blocks a second score for the same appearance of a target.
    locked: bool,
}

impl GameState {
    pub fn new(cfg: &GameConfig) -> Self {
        Self {
            phase: GamePhase::Idle,
            score: 0,
            misses: 0,
            active_slot: -1,
            show_ms: cfg.base_show_ms,
            revealed: Vec::new(),
            last_visible: VisibilityWindow::NONE,
            locked: false,
        }
    }

    pub fn running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Resets all per-session counters and enters `Running`. Safe to call
    /// mid-session; the caller is responsible for cancelling stale timers.
    pub fn begin(&mut self, cfg: &GameConfig) {
        *self = Self::new(cfg);
        self.phase = GamePhase::Running;
    }

    /// A new target appears: record its visibility window and unlock hit
    /// detection for this appearance.
    pub fn show_target(&mut self, slot: usize, now: f64) {
        self.active_slot = slot as i32;
        self.last_visible = VisibilityWindow {
            slot: slot as i32,
            valid_until: now + self.show_ms,
        };
        self.locked = false;
    }

    /// The target timed out: lock late hits. Expiring is deliberately not a
    /// miss; only a wrong click is.
    pub fn hide_target(&mut self) {
        self.locked = true;
    }

    /// Judges a click without mutating anything.
    pub fn judge(&self, cfg: &GameConfig, slot: usize, now: f64) -> Judgement {
        if self.phase != GamePhase::Running {
            return Judgement::Ignored;
        }
        if slot >= cfg.cell_count() {
            return Judgement::Miss;
        }
        if !self.locked && slot as i32 == self.active_slot {
            return Judgement::Hit;
        }
        if self.last_visible.slot == slot as i32
            && now <= self.last_visible.valid_until + cfg.grace_ms
        {
            return Judgement::GraceHit;
        }
        Judgement::Miss
    }

    /// Applies a successful hit: locks the appearance, bumps the score,
    /// reveals one random not-yet-revealed fact, speeds the game up, and
    /// detects the win. Returns `true` exactly when this hit won the game.
    ///
    /// `fact_roll` is a uniform draw in `[0, 1)`; `fact_pool` is the number
    /// of facts available this session.
    pub fn register_hit(&mut self, cfg: &GameConfig, fact_roll: f64, fact_pool: usize) -> bool {
        self.locked = true;
        // Invalidate the window so a second click on this appearance cannot
        // score again through the grace branch.
        self.last_visible = VisibilityWindow::NONE;
        self.score += 1;

        let remaining: Vec<usize> = (0..fact_pool)
            .filter(|i| !self.revealed.contains(i))
            .collect();
        if !remaining.is_empty() {
            let pick = ((fact_roll * remaining.len() as f64).floor() as usize)
                .min(remaining.len() - 1);
            self.revealed.insert(0, remaining[pick]);
        }

        // Closed form rather than iterated rounding, so the duration after k
        // hits is exactly max(min, floor(base * speedup^k)).
        self.show_ms = (cfg.base_show_ms * cfg.speedup.powi(self.score as i32))
            .floor()
            .max(cfg.min_show_ms);

        if self.score >= cfg.max_points {
            self.phase = GamePhase::Won;
            self.active_slot = -1;
            return true;
        }
        false
    }

    pub fn register_miss(&mut self) {
        self.misses += 1;
    }
}

/// Picks the next active hole, never repeating `prev` when more than one hole
/// exists. Draws from the full range and resolves a collision by stepping to
/// a uniformly chosen other hole.
pub fn pick_next_slot(prev: i32, total: usize, roll_a: f64, roll_b: f64) -> usize {
    let mut next = (roll_a * total as f64).floor() as usize;
    if next >= total {
        next = total - 1;
    }
    if next as i32 == prev && total > 1 {
        let step = 1 + (roll_b * (total - 1) as f64).floor() as usize;
        next = (next + step.min(total - 1)) % total;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> GameConfig {
        GameConfig::default()
    }

    /// Drives one full appearance-and-hit cycle at time `now`.
    fn hit_once(state: &mut GameState, cfg: &GameConfig, slot: usize, now: f64) -> bool {
        state.show_target(slot, now);
        assert_eq!(state.judge(cfg, slot, now + 10.0), Judgement::Hit);
        state.register_hit(cfg, 0.5, cfg.max_points as usize)
    }

    #[test]
    fn pick_next_never_repeats_previous() {
        for total in 2..=16usize {
            for prev in 0..total {
                for a in 0..50 {
                    for b in 0..7 {
                        let roll_a = a as f64 / 50.0;
                        let roll_b = b as f64 / 7.0;
                        let next = pick_next_slot(prev as i32, total, roll_a, roll_b);
                        assert!(next < total);
                        assert_ne!(next, prev, "repeat for total={total} prev={prev}");
                    }
                }
            }
        }
    }

    #[test]
    fn pick_next_reaches_every_other_slot() {
        let total = 9;
        let prev = 4;
        let mut seen = [false; 9];
        for a in 0..90 {
            for b in 0..90 {
                let next = pick_next_slot(prev, total, a as f64 / 90.0, b as f64 / 90.0);
                seen[next] = true;
            }
        }
        for (i, s) in seen.iter().enumerate() {
            assert_eq!(*s, i as i32 != prev, "slot {i}");
        }
    }

    #[test]
    fn clicks_ignored_while_idle_and_after_win() {
        let c = cfg();
        let state = GameState::new(&c);
        assert_eq!(state.judge(&c, 0, 0.0), Judgement::Ignored);

        let mut state = GameState::new(&c);
        state.begin(&c);
        for k in 0..c.max_points {
            assert_eq!(
                hit_once(&mut state, &c, (k % 9) as usize, k as f64 * 1000.0),
                k + 1 == c.max_points
            );
        }
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(state.judge(&c, 0, 99_999.0), Judgement::Ignored);
    }

    #[test]
    fn active_slot_hit_scores_exactly_one() {
        let c = cfg();
        let mut state = GameState::new(&c);
        state.begin(&c);
        state.show_target(3, 1000.0);
        assert_eq!(state.judge(&c, 3, 1100.0), Judgement::Hit);
        assert!(!state.register_hit(&c, 0.0, 5));
        assert_eq!(state.score, 1);
        assert_eq!(state.misses, 0);
        // Same appearance again: locked and window invalidated.
        assert_eq!(state.judge(&c, 3, 1110.0), Judgement::Miss);
    }

    #[test]
    fn grace_window_boundary_is_inclusive() {
        let c = cfg();
        let mut state = GameState::new(&c);
        state.begin(&c);
        state.show_target(7, 0.0);
        state.hide_target();
        let hidden_at = state.show_ms; // valid_until == show time + show_ms
        assert_eq!(
            state.judge(&c, 7, hidden_at + c.grace_ms),
            Judgement::GraceHit
        );
        assert_eq!(
            state.judge(&c, 7, hidden_at + c.grace_ms + 1.0),
            Judgement::Miss
        );
        // A different cell never benefits from the window.
        assert_eq!(state.judge(&c, 6, hidden_at + 1.0), Judgement::Miss);
    }

    #[test]
    fn wrong_click_increments_misses_only() {
        let c = cfg();
        let mut state = GameState::new(&c);
        state.begin(&c);
        state.show_target(0, 0.0);
        assert_eq!(state.judge(&c, 5, 10.0), Judgement::Miss);
        state.register_miss();
        assert_eq!(state.misses, 1);
        assert_eq!(state.score, 0);
        assert!(state.revealed.is_empty());
    }

    #[test]
    fn out_of_range_click_is_a_plain_miss() {
        let c = cfg();
        let mut state = GameState::new(&c);
        state.begin(&c);
        state.show_target(0, 0.0);
        assert_eq!(state.judge(&c, 42, 1.0), Judgement::Miss);
    }

    #[test]
    fn show_duration_follows_closed_form() {
        let c = cfg();
        let mut state = GameState::new(&c);
        state.begin(&c);
        for k in 1..=c.max_points {
            hit_once(&mut state, &c, 0, k as f64 * 1000.0);
            let expected = (c.base_show_ms * c.speedup.powi(k as i32))
                .floor()
                .max(c.min_show_ms);
            assert_eq!(state.show_ms, expected, "after {k} hits");
            if state.phase == GamePhase::Won {
                break;
            }
        }
    }

    #[test]
    fn show_duration_is_floored() {
        let c = GameConfig {
            max_points: 50,
            ..cfg()
        };
        let mut state = GameState::new(&c);
        state.begin(&c);
        for k in 0..20 {
            hit_once(&mut state, &c, 0, k as f64 * 1000.0);
        }
        assert_eq!(state.show_ms, c.min_show_ms);
    }

    #[test]
    fn score_is_monotonic_and_capped() {
        let c = cfg();
        let mut state = GameState::new(&c);
        state.begin(&c);
        let mut prev = 0;
        for k in 0..c.max_points {
            let won = hit_once(&mut state, &c, 0, k as f64 * 1000.0);
            assert_eq!(state.score, prev + 1);
            prev = state.score;
            assert_eq!(won, state.score == c.max_points);
        }
        assert_eq!(state.score, c.max_points);
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(state.active_slot, -1);
    }

    #[test]
    fn revealed_facts_unique_and_bounded() {
        let c = cfg();
        let mut state = GameState::new(&c);
        state.begin(&c);
        let rolls = [0.99, 0.0, 0.7, 0.3, 0.5];
        for (k, roll) in rolls.iter().enumerate() {
            state.show_target(0, k as f64 * 1000.0);
            state.register_hit(&c, *roll, c.max_points as usize);
        }
        assert_eq!(state.revealed.len(), c.max_points as usize);
        let mut sorted = state.revealed.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(
            sorted.len(),
            c.max_points as usize,
            "duplicate fact revealed"
        );
    }

    #[test]
    fn last_remaining_fact_is_revealed_regardless_of_roll() {
        let c = cfg();
        let mut state = GameState::new(&c);
        state.begin(&c);
        for k in 0..c.max_points {
            state.show_target(0, k as f64 * 1000.0);
            // A roll of ~1.0 must still index inside the remaining pool.
            state.register_hit(&c, 0.999_999, c.max_points as usize);
        }
        assert_eq!(state.revealed.len(), c.max_points as usize);
    }

    #[test]
    fn full_session_scenario() {
        let c = cfg();
        let mut state = GameState::new(&c);
        state.begin(&c);
        let mut now = 300.0;
        let mut won = false;
        for k in 0..c.max_points {
            let slot = pick_next_slot(state.active_slot, c.cell_count(), 0.37, 0.61);
            state.show_target(slot, now);
            assert_eq!(state.judge(&c, slot, now + 50.0), Judgement::Hit);
            won = state.register_hit(&c, 0.42, c.max_points as usize);
            assert_eq!(won, k + 1 == c.max_points);
            now += 1000.0;
        }
        assert!(won);
        assert!(!state.running());
        assert_eq!(state.score, 5);
        assert_eq!(state.revealed.len(), 5);
    }

    #[test]
    fn begin_resets_everything() {
        let c = cfg();
        let mut state = GameState::new(&c);
        state.begin(&c);
        hit_once(&mut state, &c, 0, 0.0);
        state.register_miss();
        state.begin(&c);
        assert_eq!(state.score, 0);
        assert_eq!(state.misses, 0);
        assert_eq!(state.show_ms, c.base_show_ms);
        assert!(state.revealed.is_empty());
        assert_eq!(state.active_slot, -1);
        assert!(state.running());
    }
}
