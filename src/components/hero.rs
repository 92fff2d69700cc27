use yew::prelude::*;

use crate::content::{CV_URL, GITHUB_URL, HERO_TAGS, LINKEDIN_URL};
use crate::util::scroll_to;

#[function_component(Hero)]
pub fn hero() -> Html {
    let to_projects = Callback::from(|_: MouseEvent| scroll_to("projects"));
    let to_contact = Callback::from(|_: MouseEvent| scroll_to("contact"));

    html! {
        <section id="top" class="max-w-6xl mx-auto px-4 pt-16 md:pt-24 pb-12">
            <p class="text-sm uppercase tracking-[0.2em] text-indigo-600 dark:text-indigo-400 mb-3">
                {"Full-stack developer"}
            </p>
            <h1 class="text-4xl md:text-6xl font-bold tracking-tight text-zinc-900 dark:text-zinc-50 max-w-3xl">
                {"I build fast, reliable web and mobile apps."}
            </h1>
            <p class="mt-4 max-w-2xl text-zinc-600 dark:text-zinc-300">
                {"Five years shipping products with React, React Native, and Node.js — from \
                  fintech frontends to offline-tolerant mobile clients. Based in Germany, \
                  working remotely."}
            </p>

            <div class="mt-6 flex flex-wrap gap-2">
                { for HERO_TAGS.iter().map(|tag| html! {
                    <span class="text-xs px-2.5 py-1 rounded-full bg-zinc-100 dark:bg-zinc-800/80 text-zinc-700 dark:text-zinc-300 border border-zinc-200 dark:border-zinc-700">
                        { *tag }
                    </span>
                }) }
            </div>

            <div class="mt-8 flex flex-wrap items-center gap-3">
                <button
                    onclick={to_projects}
                    class="px-4 py-2 rounded-xl bg-indigo-600 text-white hover:bg-indigo-500 dark:bg-indigo-500 dark:hover:bg-indigo-400 shadow-[0_10px_30px_-12px_rgba(79,70,229,0.7)]"
                >
                    {"See projects"}
                </button>
                <button
                    onclick={to_contact}
                    class="px-4 py-2 rounded-xl border border-zinc-300 dark:border-zinc-700 text-zinc-700 dark:text-zinc-200 hover:bg-zinc-100 dark:hover:bg-zinc-800"
                >
                    {"Get in touch"}
                </button>
                <div class="flex items-center gap-3 text-sm text-zinc-500">
                    <a href={GITHUB_URL} target="_blank" rel="noreferrer" class="hover:text-indigo-600 dark:hover:text-indigo-400 underline underline-offset-4">{"GitHub"}</a>
                    <a href={LINKEDIN_URL} target="_blank" rel="noreferrer" class="hover:text-indigo-600 dark:hover:text-indigo-400 underline underline-offset-4">{"LinkedIn"}</a>
                    <a href={CV_URL} target="_blank" rel="noreferrer" class="hover:text-indigo-600 dark:hover:text-indigo-400 underline underline-offset-4">{"CV"}</a>
                </div>
            </div>
        </section>
    }
}
