//! Timer-driven game engine. Owns the session state and the single timeout
//! chain that shows, hides, and requeues targets.
//!
//! Exactly one timer is ever pending: every reschedule clears the previous
//! handle first, and starting over cancels the old chain before resetting
//! state. Scheduled closures hold only a weak reference to the engine, so a
//! disposed engine can never be revived by a stale callback.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::Callback;

use crate::audio::Sfx;
use crate::model::{GameConfig, GameState, Judgement, pick_next_slot};
use crate::util::now_ms;

pub struct GameEngine {
    inner: Rc<RefCell<Inner>>,
}

struct Inner {
    cfg: GameConfig,
    state: GameState,
    /// Number of facts a session can reveal.
    fact_pool: usize,
    sfx: Rc<Sfx>,
    on_change: Callback<GameState>,
    on_win: Callback<()>,
    timer_id: Option<i32>,
    timer_cb: Option<Closure<dyn FnMut()>>,
}

#[derive(Clone, Copy)]
enum Step {
    Show,
    Hide,
}

impl GameEngine {
    pub fn new(
        cfg: GameConfig,
        fact_pool: usize,
        sfx: Rc<Sfx>,
        on_change: Callback<GameState>,
        on_win: Callback<()>,
    ) -> Self {
        let state = GameState::new(&cfg);
        Self {
            inner: Rc::new(RefCell::new(Inner {
                cfg,
                state,
                fact_pool: fact_pool.min(cfg.max_points as usize),
                sfx,
                on_change,
                on_win,
                timer_id: None,
                timer_cb: None,
            })),
        }
    }

    pub fn state(&self) -> GameState {
        self.inner.borrow().state.clone()
    }

    pub fn sfx(&self) -> Rc<Sfx> {
        self.inner.borrow().sfx.clone()
    }

    /// Starts (or restarts) a session. Primes audio — this runs from the
    /// start button's click handler, the user gesture browsers require.
    pub fn start(&self) {
        let (snapshot, on_change, delay) = {
            let mut inner = self.inner.borrow_mut();
            inner.sfx.prime();
            clear_timer(&mut inner);
            let cfg = inner.cfg;
            inner.state.begin(&cfg);
            (
                inner.state.clone(),
                inner.on_change.clone(),
                cfg.start_delay_ms,
            )
        };
        on_change.emit(snapshot);
        schedule(&self.inner, delay as i32, Step::Show);
    }

    /// Player clicked hole `slot`.
    pub fn hit(&self, slot: usize) {
        let mut inner = self.inner.borrow_mut();
        let now = now_ms();
        match inner.state.judge(&inner.cfg, slot, now) {
            Judgement::Ignored => {}
            Judgement::Miss => {
                inner.state.register_miss();
                let sfx = inner.sfx.clone();
                let on_change = inner.on_change.clone();
                let snapshot = inner.state.clone();
                drop(inner);
                sfx.miss();
                on_change.emit(snapshot);
            }
            Judgement::Hit | Judgement::GraceHit => {
                let cfg = inner.cfg;
                let fact_pool = inner.fact_pool;
                let won = inner
                    .state
                    .register_hit(&cfg, js_sys::Math::random(), fact_pool);
                if won {
                    clear_timer(&mut inner);
                }
                let sfx = inner.sfx.clone();
                let on_change = inner.on_change.clone();
                let on_win = inner.on_win.clone();
                let snapshot = inner.state.clone();
                drop(inner);
                sfx.hit();
                on_change.emit(snapshot);
                if won {
                    sfx.win();
                    on_win.emit(());
                } else {
                    schedule(&self.inner, cfg.after_hit_delay_ms as i32, Step::Show);
                }
            }
        }
    }

    /// Cancels any pending timer. Called from the owning component's effect
    /// cleanup; after this the engine is inert until `start` is called again.
    pub fn dispose(&self) {
        clear_timer(&mut self.inner.borrow_mut());
    }
}

impl Drop for GameEngine {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn clear_timer(inner: &mut Inner) {
    if let Some(id) = inner.timer_id.take() {
        if let Some(win) = web_sys::window() {
            win.clear_timeout_with_handle(id);
        }
    }
    inner.timer_cb = None;
}

fn schedule(inner_rc: &Rc<RefCell<Inner>>, delay_ms: i32, step: Step) {
    let weak: Weak<RefCell<Inner>> = Rc::downgrade(inner_rc);
    let cb = Closure::wrap(Box::new(move || {
        if let Some(rc) = weak.upgrade() {
            run_step(&rc, step);
        }
    }) as Box<dyn FnMut()>);

    let mut inner = inner_rc.borrow_mut();
    clear_timer(&mut inner);
    let Some(win) = web_sys::window() else {
        return;
    };
    if let Ok(id) = win
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), delay_ms)
    {
        inner.timer_id = Some(id);
        inner.timer_cb = Some(cb);
    }
}

fn run_step(inner_rc: &Rc<RefCell<Inner>>, step: Step) {
    match step {
        Step::Show => {
            let (snapshot, on_change, show_ms) = {
                let mut inner = inner_rc.borrow_mut();
                if !inner.state.running() {
                    return;
                }
                let cfg = inner.cfg;
                let slot = pick_next_slot(
                    inner.state.active_slot,
                    cfg.cell_count(),
                    js_sys::Math::random(),
                    js_sys::Math::random(),
                );
                inner.state.show_target(slot, now_ms());
                let show_ms = inner.state.show_ms;
                (inner.state.clone(), inner.on_change.clone(), show_ms)
            };
            on_change.emit(snapshot);
            schedule(inner_rc, show_ms as i32, Step::Hide);
        }
        Step::Hide => {
            let (snapshot, on_change, requeue_ms) = {
                let mut inner = inner_rc.borrow_mut();
                if !inner.state.running() {
                    return;
                }
                inner.state.hide_target();
                (
                    inner.state.clone(),
                    inner.on_change.clone(),
                    inner.cfg.requeue_delay_ms,
                )
            };
            on_change.emit(snapshot);
            schedule(inner_rc, requeue_ms as i32, Step::Show);
        }
    }
}
