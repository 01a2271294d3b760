use common::model::FileRef;
use common::model::testimonial::{MAX_REVIEW_WORDS, TestimonialField, word_count};
use yew::prelude::*;

use super::messages::Msg;
use super::state::TestimonialsPage;
use crate::components::controls::{error_line, file_input, submit_button, text_input, thumbnail};
use crate::components::helpers::textarea_value;

pub fn view(page: &TestimonialsPage, ctx: &Context<TestimonialsPage>) -> Html {
    let link = ctx.link();
    let busy = page.coordinator.is_busy();
    let form = page.form.value();
    let errors = page.form.errors();
    let editing = form.id.is_some();
    let words = word_count(&form.description);

    html! {
        <div class="container">
            <h2 class="mb-4">{ if editing { "Edit Testimonial" } else { "Add Testimonial" } }</h2>
            <div class="card p-4 mb-4 shadow-sm">
                { text_input("Customer Name", &form.name, errors.get("name"), busy,
                    link.callback(|v| Msg::Field(TestimonialField::Name(v)))) }
                <div class="mb-3">
                    <label class="form-label fw-bold">{ "Review" }</label>
                    <textarea
                        ref={page.review_ref.clone()}
                        rows="3"
                        class={if errors.contains("description") { "form-control border-danger" } else { "form-control border-secondary" }}
                        value={form.description.clone()}
                        disabled={busy}
                        oninput={link.callback(|e: InputEvent| Msg::Field(TestimonialField::Description(textarea_value(&e))))}
                    />
                    <small class={if words >= MAX_REVIEW_WORDS { "text-warning" } else { "text-muted" }}>
                        { format!("{words} / {MAX_REVIEW_WORDS} words") }
                    </small>
                    { error_line(errors.get("description")) }
                </div>
                { file_input("Customer Image", &form.image, errors.get("CustomerImage"), busy,
                    link.callback(|f| Msg::Field(TestimonialField::Image(FileRef::LocalFile(f))))) }
                <div class="d-flex gap-2">
                    { submit_button(if editing { "Update Testimonial" } else { "Add Testimonial" }, busy,
                        link.callback(|_| Msg::Submit)) }
                    if editing {
                        <button type="button" class="btn btn-secondary" disabled={busy}
                            onclick={link.callback(|_| Msg::CancelEdit)}>{ "Cancel Edit" }</button>
                    }
                </div>
            </div>

            <table class="table table-bordered table-hover custom-table">
                <thead>
                    <tr>
                        <th>{ "Sr. No" }</th>
                        <th>{ "Image" }</th>
                        <th>{ "Name" }</th>
                        <th>{ "Review" }</th>
                        <th>{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for page.list.items().iter().enumerate().map(|(index, record)| {
                        let edit_id = record.id.clone();
                        let delete_id = record.id.clone();
                        html! {
                            <tr>
                                <td>{ index + 1 }</td>
                                <td>{ thumbnail(record.image.as_deref()) }</td>
                                <td>{ record.name.clone() }</td>
                                <td>{ record.description.clone() }</td>
                                <td>
                                    <button type="button" class="btn btn-sm btn-outline-primary me-1" disabled={busy}
                                        onclick={link.callback(move |_| Msg::Edit(edit_id.clone()))}>{ "Edit" }</button>
                                    <button type="button" class="btn btn-sm btn-outline-danger" disabled={busy}
                                        onclick={link.callback(move |_| Msg::Delete(delete_id.clone()))}>{ "Delete" }</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}
