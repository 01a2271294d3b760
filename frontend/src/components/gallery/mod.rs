//! Image galleries (certificates, about-us images). One required image per
//! upload; images are never edited, only added and deleted. `G` selects the
//! route, the multipart field and the list order.

use common::error::ApiError;
use common::forms::{FieldStore, ListView, SubmissionCoordinator, SubmitTicket};
use common::model::FileRef;
use common::model::gallery::{Gallery, GalleryForm, GalleryRecord};
use web_sys::File;
use yew::prelude::*;

mod view;

use super::helpers::{begin_submit, confirm, fetch_into, report_error, report_outcome, send_into, show_toast};
use super::PageProps;

pub enum Msg<G> {
    Loaded(Result<Vec<GalleryRecord<G>>, ApiError>),
    Picked(File),
    Submit,
    Submitted(SubmitTicket, Result<(), ApiError>),
    Delete(String),
    Deleted(Result<String, ApiError>),
}

pub struct GalleryPage<G: Gallery> {
    pub form: FieldStore<GalleryForm<G, File>>,
    pub coordinator: SubmissionCoordinator,
    pub list: ListView<GalleryRecord<G>>,
    /// Bumped after each upload so the file input is recreated empty.
    pub input_generation: u32,
}

impl<G: Gallery> Component for GalleryPage<G> {
    type Message = Msg<G>;
    type Properties = PageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: FieldStore::new(),
            coordinator: SubmissionCoordinator::new(),
            list: ListView::new(G::ROUTE),
            input_generation: 0,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            fetch_into(ctx.link(), &ctx.props().client, G::ROUTE, Msg::Loaded);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let client = &ctx.props().client;
        match msg {
            Msg::Loaded(Ok(records)) => {
                self.list.replace(records);
                true
            }
            Msg::Loaded(Err(err)) => {
                report_error(&format!("Error fetching {}s", G::TITLE.to_lowercase()), &err);
                false
            }
            Msg::Picked(file) => {
                self.form.set_field(FileRef::LocalFile(file));
                true
            }
            Msg::Submit => {
                if self.coordinator.is_busy() || !self.form.check() {
                    return true;
                }
                begin_submit(ctx.link(), client, &mut self.coordinator, &self.form, Msg::Submitted);
                true
            }
            Msg::Submitted(ticket, result) => {
                let link = ctx.link();
                let outcome = self.coordinator.complete(ticket, result, &mut self.form, || {
                    fetch_into(link, client, G::ROUTE, Msg::Loaded)
                });
                match outcome {
                    Some(outcome) => {
                        if !self.form.value().image.is_set() {
                            self.input_generation += 1;
                        }
                        report_outcome(&outcome, G::TITLE, "This image has already been uploaded.");
                        true
                    }
                    None => false,
                }
            }
            Msg::Delete(id) => {
                if confirm(&format!("Are you sure you want to delete this {}?", G::TITLE.to_lowercase())) {
                    send_into(ctx.link(), client, self.list.delete_request(&id), Msg::Deleted);
                }
                false
            }
            Msg::Deleted(Ok(_)) => {
                show_toast(&format!("🗑️ {} deleted", G::TITLE));
                fetch_into(ctx.link(), client, self.list.route(), Msg::Loaded);
                false
            }
            Msg::Deleted(Err(err)) => {
                report_error(&format!("Failed to delete {}", G::TITLE.to_lowercase()), &err);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
