//! Project cards plus a slide-over detail panel. The open project and the
//! panel tab are mirrored into the `p` and `view` query parameters so a
//! project link can be shared and restored on load.

use yew::prelude::*;

use crate::content::{self, Project, Writeup};
use crate::util::{query_param, set_query_param};

#[derive(Clone, Copy, PartialEq, Eq)]
enum PanelView {
    Demo,
    Writeup,
}

impl PanelView {
    fn as_param(self) -> &'static str {
        match self {
            PanelView::Demo => "demo",
            PanelView::Writeup => "writeup",
        }
    }

    /// Unknown values fall back to the demo tab.
    fn from_param(raw: &str) -> Self {
        match raw {
            "writeup" => PanelView::Writeup,
            _ => PanelView::Demo,
        }
    }
}

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    let open_slug = use_state(|| None::<&'static str>);
    let view = use_state(|| PanelView::Demo);

    // Restore panel state from the URL once, ignoring slugs we don't know.
    {
        let open_slug = open_slug.clone();
        let view = view.clone();
        use_effect_with((), move |_| {
            if let Some(slug) = query_param("p") {
                if let Some(project) = content::project_by_slug(&slug) {
                    open_slug.set(Some(project.slug));
                    let v = query_param("view")
                        .map(|raw| PanelView::from_param(&raw))
                        .unwrap_or(PanelView::Demo);
                    view.set(v);
                }
            }
        });
    }

    let open = {
        let open_slug = open_slug.clone();
        let view = view.clone();
        Callback::from(move |slug: &'static str| {
            open_slug.set(Some(slug));
            view.set(PanelView::Demo);
            set_query_param("p", Some(slug));
            set_query_param("view", Some(PanelView::Demo.as_param()));
        })
    };
    let close = {
        let open_slug = open_slug.clone();
        Callback::from(move |_: MouseEvent| {
            open_slug.set(None);
            set_query_param("p", None);
            set_query_param("view", None);
        })
    };
    let switch_view = {
        let view = view.clone();
        Callback::from(move |v: PanelView| {
            view.set(v);
            set_query_param("view", Some(v.as_param()));
        })
    };

    let panel = (*open_slug)
        .and_then(content::project_by_slug)
        .map(|project| {
            html! {
                <ProjectPanel
                    project={project}
                    view={*view}
                    onclose={close}
                    onview={switch_view}
                />
            }
        })
        .unwrap_or_default();

    html! {
        <section id="projects" class="max-w-6xl mx-auto px-4 py-16 md:py-24">
            <h2 class="text-3xl font-bold tracking-tight text-zinc-900 dark:text-zinc-50 mb-8">
                {"Projects"}
            </h2>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for content::PROJECTS.iter().map(|project| {
                    let slug = project.slug;
                    let onopen = {
                        let open = open.clone();
                        Callback::from(move |_: MouseEvent| open.emit(slug))
                    };
                    html! { <ProjectCard project={project} onopen={onopen} /> }
                }) }
            </div>
            { panel }
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct ProjectCardProps {
    pub project: &'static Project,
    pub onopen: Callback<MouseEvent>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let p = props.project;
    html! {
        <article class="group rounded-2xl border border-zinc-200 dark:border-zinc-800 bg-white/70 dark:bg-zinc-900/70 backdrop-blur p-5 flex flex-col gap-3 shadow-sm hover:shadow-lg hover:-translate-y-0.5 transition">
            <div class="flex items-baseline justify-between gap-2">
                <h3 class="font-semibold text-lg text-zinc-900 dark:text-zinc-50">{ p.title }</h3>
                <span class="text-xs text-zinc-500 shrink-0">{ p.year }</span>
            </div>
            <p class="text-sm text-zinc-600 dark:text-zinc-300 flex-1">{ p.blurb }</p>
            <div class="flex flex-wrap gap-1.5">
                { for p.tags.iter().map(|tag| html! {
                    <span class="text-[11px] px-2 py-0.5 rounded-full bg-indigo-50 dark:bg-indigo-950/60 text-indigo-700 dark:text-indigo-300 border border-indigo-200/60 dark:border-indigo-800/60">
                        { *tag }
                    </span>
                }) }
            </div>
            <p class="text-xs text-zinc-500 italic">{ p.note }</p>
            <div class="flex items-center gap-3 pt-1">
                <button
                    onclick={props.onopen.clone()}
                    class="text-sm px-3 py-1.5 rounded-lg bg-indigo-600 text-white hover:bg-indigo-500 dark:bg-indigo-500 dark:hover:bg-indigo-400"
                >
                    {"Details"}
                </button>
                <a
                    href={p.code_url}
                    target="_blank"
                    rel="noreferrer"
                    class="text-sm text-zinc-600 dark:text-zinc-300 hover:text-indigo-600 dark:hover:text-indigo-400 underline underline-offset-4"
                >
                    {"Code"}
                </a>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct ProjectPanelProps {
    pub project: &'static Project,
    pub view: PanelView,
    pub onclose: Callback<MouseEvent>,
    pub onview: Callback<PanelView>,
}

#[function_component(ProjectPanel)]
fn project_panel(props: &ProjectPanelProps) -> Html {
    let p = props.project;
    let tab = |label: &'static str, v: PanelView, current: PanelView, onview: &Callback<PanelView>| {
        let onclick = {
            let onview = onview.clone();
            Callback::from(move |_: MouseEvent| onview.emit(v))
        };
        let class = if v == current {
            "px-3 py-1.5 rounded-lg text-sm bg-indigo-600 text-white"
        } else {
            "px-3 py-1.5 rounded-lg text-sm border border-zinc-300 dark:border-zinc-700 text-zinc-600 dark:text-zinc-300 hover:bg-zinc-100 dark:hover:bg-zinc-800"
        };
        html! { <button {onclick} class={class}>{ label }</button> }
    };

    html! {
        <div class="fixed inset-0 z-[60]">
            <div
                onclick={props.onclose.clone()}
                class="absolute inset-0 bg-black/40 backdrop-blur-sm"
            ></div>
            <aside class="absolute right-0 top-0 h-full w-full max-w-xl bg-white dark:bg-zinc-950 border-l border-zinc-200 dark:border-zinc-800 shadow-2xl overflow-y-auto">
                <div class="sticky top-0 flex items-center justify-between gap-3 px-5 py-4 bg-white/90 dark:bg-zinc-950/90 backdrop-blur border-b border-zinc-200 dark:border-zinc-800">
                    <div>
                        <h3 class="font-semibold text-zinc-900 dark:text-zinc-50">{ p.title }</h3>
                        <span class="text-xs text-zinc-500">{ p.year }</span>
                    </div>
                    <button
                        onclick={props.onclose.clone()}
                        aria-label="Close"
                        class="px-2.5 py-1 rounded-lg border border-zinc-300 dark:border-zinc-700 text-zinc-500 hover:text-zinc-900 dark:hover:text-zinc-100"
                    >
                        {"✕"}
                    </button>
                </div>

                <div class="px-5 py-4 space-y-4">
                    <div class="flex items-center gap-2">
                        { tab("Demo", PanelView::Demo, props.view, &props.onview) }
                        { tab("Write-up", PanelView::Writeup, props.view, &props.onview) }
                    </div>

                    { match props.view {
                        PanelView::Demo => html! {
                            <div class="space-y-3">
                                <p class="text-sm text-zinc-600 dark:text-zinc-300">{ p.blurb }</p>
                                <div class="rounded-xl border border-zinc-200 dark:border-zinc-800 overflow-hidden aspect-video bg-zinc-100 dark:bg-zinc-900">
                                    <iframe
                                        src={p.demo_url}
                                        title={format!("{} demo", p.title)}
                                        class="w-full h-full"
                                    />
                                </div>
                                <div class="flex items-center gap-3">
                                    <a href={p.demo_url} target="_blank" rel="noreferrer"
                                        class="text-sm text-indigo-600 dark:text-indigo-400 underline underline-offset-4">
                                        {"Open demo in a new tab"}
                                    </a>
                                    <a href={p.code_url} target="_blank" rel="noreferrer"
                                        class="text-sm text-zinc-600 dark:text-zinc-300 underline underline-offset-4">
                                        {"Source"}
                                    </a>
                                </div>
                            </div>
                        },
                        PanelView::Writeup => html! { <WriteupView writeup={&p.writeup} /> },
                    } }
                </div>
            </aside>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct WriteupViewProps {
    pub writeup: &'static Writeup,
}

#[function_component(WriteupView)]
fn writeup_view(props: &WriteupViewProps) -> Html {
    let w = props.writeup;
    let block = |title: &'static str, items: &'static [&'static str]| {
        html! {
            <div>
                <h4 class="text-xs uppercase tracking-wide text-zinc-500 mb-1.5">{ title }</h4>
                <ul class="space-y-1">
                    { for items.iter().map(|item| html! {
                        <li class="text-sm text-zinc-700 dark:text-zinc-300 flex gap-2">
                            <span class="text-indigo-500 shrink-0">{"•"}</span>
                            <span>{ *item }</span>
                        </li>
                    }) }
                </ul>
            </div>
        }
    };
    html! {
        <div class="space-y-4">
            <div>
                <h4 class="text-xs uppercase tracking-wide text-zinc-500 mb-1.5">{"Problem"}</h4>
                <p class="text-sm text-zinc-700 dark:text-zinc-300">{ w.problem }</p>
            </div>
            { block("Architecture", w.architecture) }
            { block("Trade-offs", w.tradeoffs) }
            { block("Results", w.results) }
            { block("Future work", w.future) }
        </div>
    }
}
