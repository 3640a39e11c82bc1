mod app;
mod components;
mod config;
mod content;
mod countdown;
mod dom;
mod form;
mod state;

use app::App;

fn main() {
    gloo::console::log!(concat!("global-innovation-summit v", env!("CARGO_PKG_VERSION")));
    yew::Renderer::<App>::new().render();
}
