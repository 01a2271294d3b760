use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod image_grid;
mod preview_sheet;
mod router;

fn main() {
    yew::Renderer::<App>::new().render();
}
