mod audio;
mod components;
mod content;
mod engine;
mod model;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
