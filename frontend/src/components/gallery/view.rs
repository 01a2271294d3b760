use common::model::gallery::Gallery;
use yew::prelude::*;

use super::{GalleryPage, Msg};
use crate::components::controls::{file_input, submit_button};
use crate::image_grid::ImageGrid;

pub fn view<G: Gallery>(page: &GalleryPage<G>, ctx: &Context<GalleryPage<G>>) -> Html {
    let link = ctx.link();
    let busy = page.coordinator.is_busy();
    let errors = page.form.errors();

    let tiles = page.list.items().iter().map(|record| {
        let id = record.id.clone();
        let src = record.image.clone().unwrap_or_default();
        html! {
            <div class="card shadow-sm">
                <img src={src} class="card-img-top" style="height: 200px; object-fit: cover;" alt={G::TITLE} />
                <div class="card-body text-center">
                    <button type="button" class="btn btn-sm btn-outline-danger" disabled={busy}
                        onclick={link.callback(move |_| Msg::Delete(id.clone()))}>{ "Delete" }</button>
                </div>
            </div>
        }
    });

    html! {
        <div class="container">
            <h2 class="mb-4">{ format!("Upload {}", G::TITLE) }</h2>
            <div class="card p-4 mb-4 shadow-sm" key={page.input_generation.to_string()}>
                { file_input(G::TITLE, &page.form.value().image, errors.get(G::FIELD), busy,
                    link.callback(Msg::Picked)) }
                { submit_button("Upload", busy, link.callback(|_| Msg::Submit)) }
            </div>
            if !page.list.is_loaded() {
                <div class="text-center"><div class="spinner-border text-danger"></div></div>
            } else if page.list.items().is_empty() {
                <p class="text-muted">{ "Nothing uploaded yet." }</p>
            } else {
                <ImageGrid columns={4}>{ for tiles }</ImageGrid>
            }
        </div>
    }
}
