use yew::prelude::*;

use crate::content::{CV_URL, GITHUB_URL, LINKEDIN_URL};

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <>
            <section id="contact" class="max-w-6xl mx-auto px-4 py-16 md:py-24">
                <div class="rounded-3xl border border-zinc-200 dark:border-zinc-800 bg-gradient-to-br from-indigo-500/10 via-transparent to-fuchsia-500/10 p-8 md:p-12 text-center">
                    <h2 class="text-3xl font-bold tracking-tight text-zinc-900 dark:text-zinc-50">
                        {"Let's build something"}
                    </h2>
                    <p class="mt-3 max-w-xl mx-auto text-zinc-600 dark:text-zinc-300">
                        {"Open to freelance work and interesting full-time roles. The fastest \
                          way to reach me is email or LinkedIn."}
                    </p>
                    <div class="mt-6 flex flex-wrap justify-center items-center gap-3">
                        <a
                            href="mailto:hello@davidnodine.dev"
                            class="px-4 py-2 rounded-xl bg-indigo-600 text-white hover:bg-indigo-500 dark:bg-indigo-500 dark:hover:bg-indigo-400"
                        >
                            {"Email me"}
                        </a>
                        <a href={LINKEDIN_URL} target="_blank" rel="noreferrer"
                            class="px-4 py-2 rounded-xl border border-zinc-300 dark:border-zinc-700 text-zinc-700 dark:text-zinc-200 hover:bg-zinc-100 dark:hover:bg-zinc-800">
                            {"LinkedIn"}
                        </a>
                        <a href={CV_URL} target="_blank" rel="noreferrer"
                            class="px-4 py-2 rounded-xl border border-zinc-300 dark:border-zinc-700 text-zinc-700 dark:text-zinc-200 hover:bg-zinc-100 dark:hover:bg-zinc-800">
                            {"Download CV"}
                        </a>
                    </div>
                </div>
            </section>
            <footer class="border-t border-zinc-200 dark:border-zinc-800">
                <div class="max-w-6xl mx-auto px-4 py-6 flex flex-wrap items-center justify-between gap-3 text-sm text-zinc-500">
                    <span>{"© 2026 David Nodine"}</span>
                    <div class="flex items-center gap-4">
                        <a href={GITHUB_URL} target="_blank" rel="noreferrer" class="hover:text-indigo-600 dark:hover:text-indigo-400">{"GitHub"}</a>
                        <a href={LINKEDIN_URL} target="_blank" rel="noreferrer" class="hover:text-indigo-600 dark:hover:text-indigo-400">{"LinkedIn"}</a>
                    </div>
                </div>
            </footer>
        </>
    }
}
