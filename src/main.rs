// Demo page: a scrollable panel with a touch trigger, its options and a log of slides.
mod components;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
