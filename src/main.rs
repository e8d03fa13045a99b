mod app;
mod browser;
mod components;
mod contact;
mod profile;
mod projects;

use app::{App, AppProps};

fn main() {
    let year = browser::current_year();
    yew::Renderer::<App>::with_props(AppProps { year }).render();
}
