use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="max-w-6xl mx-auto px-4 py-16 md:py-24">
            <h2 class="text-3xl font-bold tracking-tight text-zinc-900 dark:text-zinc-50 mb-6">
                {"About"}
            </h2>
            <div class="grid md:grid-cols-3 gap-6">
                <div class="md:col-span-2 space-y-4 text-zinc-600 dark:text-zinc-300">
                    <p>
                        {"I'm a software engineer focused on the web platform. I care about \
                          products that stay fast under real-world conditions: flaky networks, \
                          mid-tier phones, and users who never read the manual."}
                    </p>
                    <p>
                        {"Most recently I've been reviewing client sites for performance and \
                          SEO, and building appointment-booking apps end to end — API, web, \
                          and mobile. Before that I spent two and a half years shipping \
                          fintech frontends at Galileo."}
                    </p>
                    <p>
                        {"Outside of work I mentor junior developers and tinker with small \
                          games. One of them is hiding further down this page."}
                    </p>
                </div>
                <div class="rounded-2xl border border-zinc-200 dark:border-zinc-800 bg-white/70 dark:bg-zinc-900/70 backdrop-blur p-5 space-y-3 text-sm">
                    <div>
                        <div class="text-xs uppercase tracking-wide text-zinc-500">{"Location"}</div>
                        <div class="text-zinc-800 dark:text-zinc-200">{"Germany (remote)"}</div>
                    </div>
                    <div>
                        <div class="text-xs uppercase tracking-wide text-zinc-500">{"Languages"}</div>
                        <div class="text-zinc-800 dark:text-zinc-200">{"English, Spanish, German (learning)"}</div>
                    </div>
                    <div>
                        <div class="text-xs uppercase tracking-wide text-zinc-500">{"Currently"}</div>
                        <div class="text-zinc-800 dark:text-zinc-200">{"Technical Project Manager @ Media.ventive"}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
