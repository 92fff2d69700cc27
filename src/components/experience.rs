use yew::prelude::*;

use crate::content::JOBS;

#[function_component(Experience)]
pub fn experience() -> Html {
    html! {
        <section id="experience" class="max-w-6xl mx-auto px-4 py-16 md:py-24">
            <h2 class="text-3xl font-bold tracking-tight text-zinc-900 dark:text-zinc-50 mb-8">
                {"Experience"}
            </h2>
            <ol class="relative border-s border-zinc-200 dark:border-zinc-800 space-y-8 ps-6">
                { for JOBS.iter().map(|job| html! {
                    <li class="relative">
                        <span class="absolute -start-[31px] top-1.5 w-2.5 h-2.5 rounded-full bg-indigo-500"></span>
                        <div class="flex flex-wrap items-baseline gap-x-3 gap-y-1">
                            <h3 class="font-semibold text-zinc-900 dark:text-zinc-50">{ job.role }</h3>
                            <span class="text-sm text-zinc-500">{ job.company }</span>
                        </div>
                        <p class="text-xs text-zinc-500 mt-0.5">{ job.period }</p>
                        <ul class="mt-2 space-y-1">
                            { for job.details.iter().map(|d| html! {
                                <li class="text-sm text-zinc-600 dark:text-zinc-300">{ *d }</li>
                            }) }
                        </ul>
                    </li>
                }) }
            </ol>
        </section>
    }
}
