use yew::prelude::*;

use crate::content::COURSES;

#[function_component(Courses)]
pub fn courses() -> Html {
    html! {
        <section id="courses" class="max-w-6xl mx-auto px-4 pb-16 md:pb-24">
            <h2 class="text-2xl font-bold tracking-tight text-zinc-900 dark:text-zinc-50 mb-6">
                {"Courses & certifications"}
            </h2>
            <div class="grid sm:grid-cols-2 gap-4">
                { for COURSES.iter().map(|c| html! {
                    <div class="rounded-xl border border-zinc-200 dark:border-zinc-800 bg-white/60 dark:bg-zinc-900/60 backdrop-blur p-4">
                        <div class="flex flex-wrap items-baseline justify-between gap-2">
                            <h3 class="text-sm font-semibold text-zinc-900 dark:text-zinc-50">{ c.title }</h3>
                            <span class="text-xs text-zinc-500">{ c.period }</span>
                        </div>
                        <p class="text-xs text-zinc-500 mt-0.5">{ c.provider }</p>
                        <p class="text-sm text-zinc-600 dark:text-zinc-300 mt-1.5">{ c.desc }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
