use common::model::FileRef;
use common::model::extra_subproduct::ExtraSubProductField;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ExtraSubProductsPage;
use crate::components::controls::{
    file_input, number_input, product_options, select_input, submit_button, text_area, text_input,
    thumbnail,
};

pub fn view(page: &ExtraSubProductsPage, ctx: &Context<ExtraSubProductsPage>) -> Html {
    let link = ctx.link();
    let busy = page.coordinator.is_busy();
    let form = page.form.value();
    let errors = page.form.errors();
    let editing = form.id.is_some();

    html! {
        <div class="container">
            <h2 class="mb-4">{ if editing { "Edit Extra Subproduct" } else { "Add Extra Subproduct" } }</h2>
            <div class="card p-4 mb-4 shadow-sm">
                { select_input("Product", "-- Select Product --", product_options(page.products.items()),
                    &form.product_id, errors.get("productId"), busy,
                    link.callback(|v| Msg::Field(ExtraSubProductField::Product(v)))) }
                <div class="row">
                    <div class="col-md-6">
                        { text_input("Subproduct Name", &form.name, errors.get("subproductName"), busy,
                            link.callback(|v| Msg::Field(ExtraSubProductField::Name(v)))) }
                    </div>
                    <div class="col-md-6">
                        { number_input("Weight (g)", &form.weight, errors.get("weight"), busy,
                            link.callback(|v| Msg::Field(ExtraSubProductField::Weight(v)))) }
                    </div>
                </div>
                { text_area("Description", &form.description, errors.get("description"), busy,
                    link.callback(|v| Msg::Field(ExtraSubProductField::Description(v)))) }
                { file_input("Subproduct Image", &form.image, errors.get("subproductImg"), busy,
                    link.callback(|f| Msg::Field(ExtraSubProductField::Image(FileRef::LocalFile(f))))) }
                <div class="d-flex gap-2">
                    { submit_button(if editing { "Update Subproduct" } else { "Add Subproduct" }, busy,
                        link.callback(|_| Msg::Submit)) }
                    if editing {
                        <button type="button" class="btn btn-secondary" disabled={busy}
                            onclick={link.callback(|_| Msg::CancelEdit)}>{ "Cancel Edit" }</button>
                    }
                </div>
            </div>
            { records(page, link, busy) }
        </div>
    }
}

fn records(page: &ExtraSubProductsPage, link: &Scope<ExtraSubProductsPage>, busy: bool) -> Html {
    if !page.list.is_loaded() {
        return html! { <div class="text-center"><div class="spinner-border text-danger"></div></div> };
    }
    html! {
        <table class="table table-bordered table-hover custom-table">
            <thead>
                <tr>
                    <th>{ "Sr. No" }</th>
                    <th>{ "Image" }</th>
                    <th>{ "Product" }</th>
                    <th>{ "Subproduct" }</th>
                    <th>{ "Weight" }</th>
                    <th>{ "Actions" }</th>
                </tr>
            </thead>
            <tbody>
                { for page.list.items().iter().enumerate().map(|(index, record)| {
                    let entry = record.entry();
                    let edit_id = record.id.clone();
                    let delete_id = record.id.clone();
                    html! {
                        <tr>
                            <td>{ index + 1 }</td>
                            <td>{ thumbnail(entry.and_then(|e| e.subproduct_img.as_deref())) }</td>
                            <td>{ page.product_name(record).to_string() }</td>
                            <td>{ entry.map(|e| e.subproduct_name.clone()).unwrap_or_default() }</td>
                            <td>{ entry.map(|e| e.weight.clone()).unwrap_or_default() }</td>
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
    }
}
