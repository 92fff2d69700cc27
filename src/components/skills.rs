use yew::prelude::*;

use crate::content::SKILL_CATEGORIES;

#[function_component(Skills)]
pub fn skills() -> Html {
    html! {
        <section id="skills" class="max-w-6xl mx-auto px-4 py-16 md:py-24">
            <h2 class="text-3xl font-bold tracking-tight text-zinc-900 dark:text-zinc-50 mb-8">
                {"Skills"}
            </h2>
            <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-5">
                { for SKILL_CATEGORIES.iter().map(|cat| html! {
                    <div class="rounded-2xl border border-zinc-200 dark:border-zinc-800 bg-white/70 dark:bg-zinc-900/70 backdrop-blur p-5">
                        <h3 class="font-semibold text-zinc-900 dark:text-zinc-50 mb-3">{ cat.title }</h3>
                        <div class="flex flex-wrap gap-1.5">
                            { for cat.items.iter().map(|item| html! {
                                <span class="text-xs px-2 py-0.5 rounded-full bg-zinc-100 dark:bg-zinc-800 text-zinc-700 dark:text-zinc-300 border border-zinc-200 dark:border-zinc-700">
                                    { *item }
                                </span>
                            }) }
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}
