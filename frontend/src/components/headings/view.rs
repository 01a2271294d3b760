use common::model::heading::HeadingField;
use yew::prelude::*;

use super::messages::Msg;
use super::state::HeadingsPage;
use crate::components::controls::{product_options, select_input, submit_button, text_input};

pub fn view(page: &HeadingsPage, ctx: &Context<HeadingsPage>) -> Html {
    let link = ctx.link();
    let busy = page.coordinator.is_busy();
    let form = page.form.value();
    let errors = page.form.errors();
    let editing = form.id.is_some();

    let rows = page.list.items().iter().enumerate().map(|(index, record)| {
        let edit_id = record.id.clone();
        let delete_id = record.id.clone();
        html! {
            <tr>
                <td>{ index + 1 }</td>
                <td>{ page.product_name(record).to_string() }</td>
                <td>{ record.subproduct_title.clone() }</td>
                <td>
                    <button type="button" class="btn btn-sm btn-outline-primary me-1" disabled={busy}
                        onclick={link.callback(move |_| Msg::Edit(edit_id.clone()))}>{ "Edit" }</button>
                    <button type="button" class="btn btn-sm btn-outline-danger" disabled={busy}
                        onclick={link.callback(move |_| Msg::Delete(delete_id.clone()))}>{ "Delete" }</button>
                </td>
            </tr>
        }
    });

    html! {
        <div class="container">
            <h2 class="mb-4">{ "Sub Product Headings" }</h2>
            <div class="card p-4 mb-4 shadow-sm">
                { select_input("Product", "-- Select Product --", product_options(page.products.items()),
                    &form.product_id, errors.get("productId"), busy,
                    link.callback(|v| Msg::Field(HeadingField::Product(v)))) }
                { text_input("Subproduct Title", &form.title, errors.get("subproductTitle"), busy,
                    link.callback(|v| Msg::Field(HeadingField::Title(v)))) }
                <div class="d-flex gap-2">
                    { submit_button(if editing { "Update Heading" } else { "Add Heading" }, busy,
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
                        <th>{ "Product" }</th>
                        <th>{ "Subproduct Title" }</th>
                        <th>{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody>{ for rows }</tbody>
            </table>
        </div>
    }
}
