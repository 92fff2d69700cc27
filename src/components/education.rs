use yew::prelude::*;

use crate::content::EDUCATION;

#[function_component(Education)]
pub fn education() -> Html {
    html! {
        <section id="education" class="max-w-6xl mx-auto px-4 py-16 md:py-24">
            <h2 class="text-3xl font-bold tracking-tight text-zinc-900 dark:text-zinc-50 mb-8">
                {"Education"}
            </h2>
            <div class="grid md:grid-cols-2 gap-5">
                { for EDUCATION.iter().map(|s| html! {
                    <div class="rounded-2xl border border-zinc-200 dark:border-zinc-800 bg-white/70 dark:bg-zinc-900/70 backdrop-blur p-5">
                        <div class="flex flex-wrap items-baseline justify-between gap-2">
                            <h3 class="font-semibold text-zinc-900 dark:text-zinc-50">{ s.school }</h3>
                            <span class="text-xs text-zinc-500">{ s.period }</span>
                        </div>
                        <p class="text-sm text-indigo-600 dark:text-indigo-400 mt-0.5">{ s.degree }</p>
                        <p class="text-sm text-zinc-600 dark:text-zinc-300 mt-2">{ s.desc }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
