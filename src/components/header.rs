//! Sticky top navigation: section links, theme toggle, and a collapsible
//! menu on small screens. Picks up a drop shadow once the page is scrolled.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::util::scroll_to;

const NAV_LINKS: &[(&str, &str)] = &[
    ("about", "About"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("education", "Education"),
    ("game", "Fun facts"),
    ("contact", "Contact"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    pub dark: bool,
    pub ontoggledark: Callback<MouseEvent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let scrolled = use_state(|| false);
    let menu_open = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let mut cleanup: Option<Box<dyn FnOnce()>> = None;
            if let Some(win) = web_sys::window() {
                let cb = {
                    let win = win.clone();
                    Closure::wrap(Box::new(move |_: web_sys::Event| {
                        let y = win.scroll_y().unwrap_or(0.0);
                        scrolled.set(y > 4.0);
                    }) as Box<dyn FnMut(_)>)
                };
                let _ =
                    win.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
                let win = win.clone();
                cleanup = Some(Box::new(move || {
                    let _ = win
                        .remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
                }));
            }
            move || {
                if let Some(c) = cleanup {
                    c();
                }
            }
        });
    }

    let nav_to = |id: &'static str, menu_open: &UseStateHandle<bool>| {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            scroll_to(id);
        })
    };
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let shell = classes!(
        "sticky",
        "top-0",
        "z-50",
        "backdrop-blur",
        "bg-white/75",
        "dark:bg-zinc-950/75",
        "border-b",
        "border-zinc-200/60",
        "dark:border-zinc-800/60",
        "transition-shadow",
        (*scrolled).then_some("shadow-[0_8px_30px_-18px_rgba(0,0,0,0.4)]")
    );

    let link_class = "text-sm text-zinc-600 dark:text-zinc-300 hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors";

    html! {
        <header class={shell}>
            <div class="max-w-6xl mx-auto px-4 h-14 flex items-center justify-between gap-3">
                <button
                    onclick={nav_to("top", &menu_open)}
                    class="font-semibold tracking-tight text-zinc-900 dark:text-zinc-50"
                >
                    {"David Nodine"}
                </button>

                <nav class="hidden md:flex items-center gap-5">
                    { for NAV_LINKS.iter().map(|&(id, label)| html! {
                        <button onclick={nav_to(id, &menu_open)} class={link_class}>{ label }</button>
                    }) }
                </nav>

                <div class="flex items-center gap-2">
                    <button
                        onclick={props.ontoggledark.clone()}
                        title={ if props.dark { "Switch to light mode" } else { "Switch to dark mode" } }
                        class="px-2 py-1 rounded-lg border border-zinc-300/60 dark:border-zinc-700/60 text-sm hover:bg-zinc-100 dark:hover:bg-zinc-800"
                    >
                        { if props.dark { "🌙" } else { "☀️" } }
                    </button>
                    <button
                        onclick={toggle_menu}
                        aria-label="Toggle menu"
                        class="md:hidden px-2 py-1 rounded-lg border border-zinc-300/60 dark:border-zinc-700/60 text-sm"
                    >
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </div>

            { if *menu_open {
                html! {
                    <nav class="md:hidden border-t border-zinc-200/60 dark:border-zinc-800/60 px-4 py-3 flex flex-col gap-3 bg-white/90 dark:bg-zinc-950/90">
                        { for NAV_LINKS.iter().map(|&(id, label)| html! {
                            <button onclick={nav_to(id, &menu_open)} class={format!("{link_class} text-left")}>
                                { label }
                            </button>
                        }) }
                    </nav>
                }
            } else { html! {} } }
        </header>
    }
}
