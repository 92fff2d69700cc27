//! The "fun facts" minigame section: a 3×3 whack-a-beaver board driven by
//! `GameEngine`, with score readout, revealed facts, mute toggle, and the
//! win celebration.

use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlImageElement;
use yew::prelude::*;

use super::celebration::CelebrationOverlay;
use crate::audio::Sfx;
use crate::content::FACTS;
use crate::engine::GameEngine;
use crate::model::{GameConfig, GameState};
use crate::util::clog;

const BEAVER_IMG: &str = "/beaver.png";

#[function_component(GameSection)]
pub fn game_section() -> Html {
    let cfg = GameConfig::default();
    let game = use_state(|| GameState::new(&cfg));
    let muted = use_state(|| false);
    let celebrating = use_state(|| false);
    let engine = use_mut_ref(|| None::<GameEngine>);
    let celebrate_timer = use_mut_ref(|| None::<(i32, Closure<dyn FnMut()>)>);
    let img_ready = use_state(|| false);
    let img_error = use_state(|| false);

    // Build the engine once; dispose it (cancelling any pending timer chain)
    // when the section unmounts.
    {
        let engine = engine.clone();
        let game = game.clone();
        let muted = muted.clone();
        let celebrating = celebrating.clone();
        let celebrate_timer = celebrate_timer.clone();
        use_effect_with((), move |_| {
            let sfx = Rc::new(Sfx::new());
            muted.set(sfx.muted());
            let on_change = {
                let game = game.clone();
                Callback::from(move |s: GameState| game.set(s))
            };
            let on_win = {
                let celebrating = celebrating.clone();
                let celebrate_timer = celebrate_timer.clone();
                Callback::from(move |_| {
                    celebrating.set(true);
                    let mut pending = celebrate_timer.borrow_mut();
                    if let Some((id, _)) = pending.take() {
                        if let Some(win) = web_sys::window() {
                            win.clear_timeout_with_handle(id);
                        }
                    }
                    let celebrating = celebrating.clone();
                    let cb = Closure::wrap(
                        Box::new(move || celebrating.set(false)) as Box<dyn FnMut()>
                    );
                    if let Some(win) = web_sys::window() {
                        if let Ok(id) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                            cb.as_ref().unchecked_ref(),
                            cfg.celebration_ms as i32,
                        ) {
                            *pending = Some((id, cb));
                        }
                    }
                })
            };
            *engine.borrow_mut() = Some(GameEngine::new(cfg, FACTS.len(), sfx, on_change, on_win));

            let engine = engine.clone();
            let celebrate_timer = celebrate_timer.clone();
            move || {
                if let Some(e) = engine.borrow_mut().take() {
                    e.dispose();
                }
                if let Some((id, _)) = celebrate_timer.borrow_mut().take() {
                    if let Some(win) = web_sys::window() {
                        win.clear_timeout_with_handle(id);
                    }
                }
            }
        });
    }

    // Preload the beaver sprite once; a load failure switches the cells to
    // the emoji fallback without touching game logic.
    {
        let img_ready = img_ready.clone();
        let img_error = img_error.clone();
        use_effect_with((), move |_| {
            let mut keep = None;
            if let Ok(img) = HtmlImageElement::new() {
                let ready = Closure::wrap(
                    Box::new(move || img_ready.set(true)) as Box<dyn FnMut()>
                );
                let error = Closure::wrap(Box::new(move || {
                    clog("beaver sprite failed to load, falling back to emoji");
                    img_error.set(true);
                }) as Box<dyn FnMut()>);
                img.set_onload(Some(ready.as_ref().unchecked_ref()));
                img.set_onerror(Some(error.as_ref().unchecked_ref()));
                img.set_src(BEAVER_IMG);
                keep = Some((img, ready, error));
            }
            move || drop(keep)
        });
    }

    let start_game = {
        let engine = engine.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(e) = engine.borrow().as_ref() {
                e.start();
            }
        })
    };
    let toggle_mute = {
        let engine = engine.clone();
        let muted = muted.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(e) = engine.borrow().as_ref() {
                let next = !e.sfx().muted();
                e.sfx().set_muted(next);
                muted.set(next);
            }
        })
    };

    let won = game.score >= cfg.max_points;
    let start_label = if game.running() {
        "Restart"
    } else if game.score > 0 {
        "Play again"
    } else {
        "Start"
    };

    let cells = (0..cfg.cell_count())
        .map(|i| {
            let active = i as i32 == game.active_slot && game.running() && !won;
            let on_hit = {
                let engine = engine.clone();
                Callback::from(move |_: MouseEvent| {
                    if let Some(e) = engine.borrow().as_ref() {
                        e.hit(i);
                    }
                })
            };
            let on_key = {
                let engine = engine.clone();
                Callback::from(move |e: KeyboardEvent| {
                    if e.key() == "Enter" || e.key() == " " {
                        if let Some(eng) = engine.borrow().as_ref() {
                            eng.hit(i);
                        }
                    }
                })
            };
            html! {
                <Hole
                    index={i}
                    active={active}
                    use_image={*img_ready && !*img_error}
                    onactivate={on_hit}
                    onkeyactivate={on_key}
                />
            }
        })
        .collect::<Html>();

    html! {
        <section id="game" class="max-w-6xl mx-auto px-4 py-16 md:py-24">
            <CelebrationOverlay active={*celebrating} />

            <h2 class="text-3xl font-bold tracking-tight text-zinc-900 dark:text-zinc-50 mb-2">
                {"Fun facts (Whack-a-Beaver)"}
            </h2>
            <p class="text-sm text-zinc-600 dark:text-zinc-300 mb-4">
                { format!("Bop the beaver when it pops up. Reach {} to unlock all the facts — it speeds up with every hit.", cfg.max_points) }
            </p>

            <div class="rounded-3xl border border-zinc-200 dark:border-zinc-800 bg-white/60 dark:bg-zinc-900/60 backdrop-blur shadow-[0_10px_35px_-15px_rgba(0,0,0,0.45)] overflow-hidden">
                <div class="flex items-center justify-between px-4 py-3 border-b border-zinc-200 dark:border-zinc-800 bg-gradient-to-r from-indigo-500/10 via-transparent to-fuchsia-500/10">
                    <div class="text-sm font-semibold">
                        { format!("Score: {}/{} · Misses: {} · Speed: {}ms",
                            game.score, cfg.max_points, game.misses, game.show_ms.round() as i64) }
                    </div>
                    <div class="flex items-center gap-2">
                        { if !game.running() && won {
                            html! { <span class="text-xs text-emerald-600 dark:text-emerald-400">{"Nice! You got them all."}</span> }
                        } else { html! {} } }
                        <button
                            onclick={start_game}
                            class="px-3 py-1.5 rounded-lg bg-indigo-600 text-white hover:bg-indigo-500 dark:bg-indigo-500 dark:hover:bg-indigo-400 shadow-[0_6px_20px_-8px_rgba(79,70,229,0.6)] text-sm"
                        >
                            { start_label }
                        </button>
                        <button
                            onclick={toggle_mute}
                            title={ if *muted { "Unmute" } else { "Mute" } }
                            class="px-2 py-1 rounded-lg border border-zinc-300/40 dark:border-zinc-700/50 text-xs hover:bg-zinc-100/50 dark:hover:bg-zinc-800/60"
                        >
                            { if *muted { "🔇" } else { "🔊" } }
                        </button>
                    </div>
                </div>

                <div class="relative p-5 md:p-6 bg-stars">
                    <div class="relative w-full max-w-[22rem] md:max-w-[26rem] lg:max-w-[30rem] mx-auto">
                        <div class="grid grid-cols-3 gap-4 md:gap-5 justify-items-center">
                            { cells }
                        </div>
                    </div>
                </div>

                <div class="border-t border-zinc-200 dark:border-zinc-800 p-4">
                    <div class="text-xs uppercase tracking-wide text-zinc-500 mb-2">{"Facts"}</div>
                    { if game.revealed.is_empty() {
                        html! { <div class="text-sm text-zinc-500">{"Bop a beaver to reveal a fact."}</div> }
                    } else {
                        html! {
                            <ul class="space-y-2">
                                { for game.revealed.iter().filter_map(|&idx| FACTS.get(idx)).map(|fact| html! {
                                    <li class="text-sm rounded-xl px-3 py-2 bg-white/70 dark:bg-zinc-800/60 backdrop-blur border border-zinc-200/70 dark:border-zinc-700/50">
                                        { *fact }
                                    </li>
                                }) }
                            </ul>
                        }
                    } }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct HoleProps {
    pub index: usize,
    pub active: bool,
    pub use_image: bool,
    pub onactivate: Callback<MouseEvent>,
    pub onkeyactivate: Callback<KeyboardEvent>,
}

/// One round hole; the beaver slides up inside it while active and is
/// clipped by the well's overflow otherwise.
#[function_component(Hole)]
fn hole(props: &HoleProps) -> Html {
    let beaver_pos = if props.active {
        "translate-y-[-12%]"
    } else {
        "translate-y-[48%]"
    };
    html! {
        <div
            class="relative w-24 h-24 md:w-28 md:h-28 lg:w-32 lg:h-32 grid place-items-center select-none"
            aria-label={format!("Hole {}", props.index + 1)}
        >
            <div
                onclick={props.onactivate.clone()}
                onkeydown={props.onkeyactivate.clone()}
                role="button"
                tabindex="0"
                class="relative w-20 h-20 md:w-24 md:h-24 lg:w-28 lg:h-28 rounded-full overflow-hidden focus:outline-none ring-0 focus:ring-2 focus:ring-indigo-400/50"
            >
                <div class="absolute inset-0 rounded-full z-[1] bg-[radial-gradient(circle_at_50%_45%,rgba(0,0,0,0.95)_0%,rgba(0,0,0,0.85)_55%,rgba(0,0,0,0.55)_72%,rgba(0,0,0,0.3)_85%)]"></div>

                <div class={classes!(
                    "absolute", "left-1/2", "-translate-x-1/2", "bottom-0", "z-[2]",
                    "transition-transform", "duration-150", "will-change-transform",
                    beaver_pos
                )}>
                    { if props.use_image {
                        html! {
                            <img
                                src={BEAVER_IMG}
                                alt="Beaver"
                                draggable="false"
                                class="w-14 h-14 md:w-16 md:h-16 lg:w-18 lg:h-18 object-contain drop-shadow-[0_10px_14px_rgba(0,0,0,0.35)] pointer-events-none"
                            />
                        }
                    } else {
                        html! {
                            <div class="text-3xl md:text-4xl lg:text-5xl pointer-events-none drop-shadow-[0_10px_14px_rgba(0,0,0,0.35)]">
                                {"🦫"}
                            </div>
                        }
                    } }
                </div>

                <div class="pointer-events-none absolute inset-0 rounded-full z-[3] ring-1 ring-white/8 dark:ring-white/15 shadow-[inset_0_-18px_28px_rgba(0,0,0,0.55),inset_0_10px_14px_rgba(255,255,255,0.04)]"></div>
            </div>
        </div>
    }
}
