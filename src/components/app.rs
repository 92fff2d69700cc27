//! Page root: theme handling plus section ordering.
//!
//! The theme is a `dark` class on the document element (Tailwind's class
//! strategy), persisted under the `theme` localStorage key so a reload keeps
//! the choice.

use yew::prelude::*;

use super::about::About;
use super::contact::Contact;
use super::courses::Courses;
use super::education::Education;
use super::experience::Experience;
use super::game_view::GameSection;
use super::header::Header;
use super::hero::Hero;
use super::projects::ProjectsSection;
use super::skills::Skills;

const THEME_KEY: &str = "theme";

fn stored_dark_preference() -> bool {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|store| store.get_item(THEME_KEY).ok().flatten())
        .map(|v| v == "dark")
        .unwrap_or(false)
}

fn apply_theme(dark: bool) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(root) = doc.document_element() {
        let _ = root.class_list().toggle_with_force("dark", dark);
    }
    if let Some(store) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let theme = if dark { "dark" } else { "light" };
        let _ = store.set_item(THEME_KEY, theme);
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let dark = use_state(stored_dark_preference);

    {
        let dark = *dark;
        use_effect_with(dark, move |_| apply_theme(dark));
    }

    let toggle_dark = {
        let dark = dark.clone();
        Callback::from(move |_: MouseEvent| dark.set(!*dark))
    };

    html! {
        <div class="min-h-screen bg-zinc-50 dark:bg-zinc-950 text-zinc-900 dark:text-zinc-50 antialiased">
            <Header dark={*dark} ontoggledark={toggle_dark} />
            <main>
                <Hero />
                <About />
                <ProjectsSection />
                <Skills />
                <Experience />
                <Education />
                <Courses />
                <GameSection />
                <Contact />
            </main>
        </div>
    }
}
