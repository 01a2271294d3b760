use common::forms::Reset;
use common::model::testimonial::MAX_REVIEW_WORDS;
use common::requests::EntityRoute;
use yew::prelude::*;

use super::messages::Msg;
use super::state::TestimonialsPage;
use crate::components::helpers::{
    begin_submit, confirm, fetch_into, report_error, report_outcome, scroll_to_top, send_into,
    show_toast,
};

pub fn update(page: &mut TestimonialsPage, ctx: &Context<TestimonialsPage>, msg: Msg) -> bool {
    let client = &ctx.props().client;
    match msg {
        Msg::Loaded(Ok(records)) => {
            page.list.replace(records);
            true
        }
        Msg::Loaded(Err(err)) => {
            report_error("Error fetching testimonials", &err);
            false
        }
        Msg::Field(field) => {
            if !page.form.set_field(field) {
                page.restore_review();
                show_toast(&format!("⚠️ Review is limited to {MAX_REVIEW_WORDS} words"));
            }
            true
        }
        Msg::Submit => {
            if page.coordinator.is_busy() || !page.form.check() {
                return true;
            }
            begin_submit(ctx.link(), client, &mut page.coordinator, &page.form, Msg::Submitted);
            true
        }
        Msg::Submitted(ticket, result) => {
            let link = ctx.link();
            let outcome = page.coordinator.complete(ticket, result, &mut page.form, || {
                fetch_into(link, client, EntityRoute::Testimonials, Msg::Loaded)
            });
            if let Some(outcome) = &outcome {
                report_outcome(outcome, "Testimonial", "This testimonial already exists.");
            }
            outcome.is_some()
        }
        Msg::Edit(id) => {
            if !page.coordinator.is_busy() && page.list.request_edit(&id, &mut page.form) {
                scroll_to_top();
            }
            true
        }
        Msg::CancelEdit => {
            page.form.reset();
            true
        }
        Msg::Delete(id) => {
            if confirm("Are you sure you want to delete this testimonial?") {
                send_into(ctx.link(), client, page.list.delete_request(&id), Msg::Deleted);
            }
            false
        }
        Msg::Deleted(Ok(_)) => {
            show_toast("🗑️ Testimonial deleted");
            fetch_into(ctx.link(), client, page.list.route(), Msg::Loaded);
            false
        }
        Msg::Deleted(Err(err)) => {
            report_error("Failed to delete testimonial", &err);
            false
        }
    }
}
