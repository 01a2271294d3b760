//! View rendering for the product page.
//!
//! Layout, top to bottom: product fields, the sub-product editor with the
//! committed sub-products, the recipe editor with the committed recipes, the
//! submit row, then the list of saved products. In read-only mode only the
//! list and the preview sheet are rendered.

use common::forms::FormErrors;
use common::model::FileRef;
use common::model::product::{ProductField, ProductRecipeField, ProductRecord, SubProductField};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ProductsPage;
use crate::components::controls::{
    error_line, file_hint, file_input, multi_file_input, number_input, submit_button, text_area,
    text_input, thumbnail,
};
use crate::components::helpers::input_value;
use crate::image_grid::ImageGrid;
use crate::preview_sheet::PreviewSheet;

pub fn view(page: &ProductsPage, ctx: &Context<ProductsPage>) -> Html {
    let link = ctx.link();
    if ctx.props().read_only {
        return html! {
            <div class="container">
                <h2 class="mb-4">{ "Product Data" }</h2>
                { product_table(page, link, true) }
                { preview(page, link) }
            </div>
        };
    }

    let busy = page.coordinator.is_busy();
    let editing = page.workspace.fields.value().id.is_some();
    html! {
        <div class="container">
            <h2 class="mb-4">{ if editing { "Edit Product" } else { "Add Product" } }</h2>
            <div class="card p-4 mb-4 shadow-sm">
                { product_fields(page, link, busy) }
                { subproduct_editor(page, link, busy) }
                { recipe_editor(page, link, busy) }
                <div class="d-flex gap-2 mt-3">
                    { submit_button(if editing { "Update Product" } else { "Add Product" }, busy, link.callback(|_| Msg::Submit)) }
                    if editing {
                        <button type="button" class="btn btn-secondary" disabled={busy} onclick={link.callback(|_| Msg::CancelEdit)}>
                            { "Cancel Edit" }
                        </button>
                    }
                </div>
            </div>
            { product_table(page, link, false) }
        </div>
    }
}

fn product_fields(page: &ProductsPage, link: &Scope<ProductsPage>, busy: bool) -> Html {
    let product = page.workspace.fields.value();
    let errors = page.workspace.fields.errors();
    html! {
        <>
            { text_input("Product Name", &product.name, errors.get("productName"), busy,
                link.callback(|v| Msg::Field(ProductField::Name(v)))) }
            { text_input("Product Sizes (comma separated)", &product.sizes.join(","), errors.get("productSizes"), busy,
                link.callback(|v| Msg::Field(ProductField::Sizes(v)))) }
            <div class="row">
                <div class="col-md-4">
                    { file_input("Product Banner", &product.banner, errors.get("productBanner"), busy,
                        link.callback(|f| Msg::Field(ProductField::Banner(FileRef::LocalFile(f))))) }
                </div>
                <div class="col-md-4">
                    { file_input("Banner 2", &product.banner2, errors.get("banner2"), busy,
                        link.callback(|f| Msg::Field(ProductField::Banner2(FileRef::LocalFile(f))))) }
                </div>
                <div class="col-md-4">
                    { file_input("How To Make Banner", &product.how_to_make_banner, errors.get("howToMakeBanner"), busy,
                        link.callback(|f| Msg::Field(ProductField::HowToMakeBanner(FileRef::LocalFile(f))))) }
                </div>
            </div>
            { multi_file_input("Product Images", errors.get("productImages"), busy,
                link.callback(|files| Msg::Field(ProductField::AddImages(files)))) }
            <div class="d-flex flex-wrap gap-2 mb-3">
                { for product.images.iter().enumerate().map(|(index, image)| html! {
                    <div class="border rounded p-1 text-center">
                        { file_hint(image) }
                        <button type="button" class="btn btn-sm btn-link text-danger d-block" disabled={busy}
                            onclick={link.callback(move |_| Msg::Field(ProductField::RemoveImage(index)))}>
                            { "Remove" }
                        </button>
                    </div>
                }) }
            </div>
        </>
    }
}

fn subproduct_editor(page: &ProductsPage, link: &Scope<ProductsPage>, busy: bool) -> Html {
    let editor = &page.workspace.subproducts;
    let staged = editor.staging();
    let errors = editor.errors();
    let committed = &page.workspace.fields.value().subproducts;
    html! {
        <fieldset class="border rounded p-3 mb-3">
            <legend class="float-none w-auto px-2 fs-5">{ "Subproducts" }</legend>
            <div class="row">
                <div class="col-md-6">
                    { text_input("Subproduct Name", &staged.name, errors.get("subproductName"), busy,
                        link.callback(|v| Msg::SubProduct(SubProductField::Name(v)))) }
                </div>
                <div class="col-md-6">
                    { number_input("Weight (g)", &staged.weight, errors.get("weight"), busy,
                        link.callback(|v| Msg::SubProduct(SubProductField::Weight(v)))) }
                </div>
            </div>
            { text_area("Description", &staged.description, errors.get("description"), busy,
                link.callback(|v| Msg::SubProduct(SubProductField::Description(v)))) }
            { file_input("Subproduct Image", &staged.image, errors.get("subproductImg"), busy,
                link.callback(|f| Msg::SubProduct(SubProductField::Image(FileRef::LocalFile(f))))) }
            { editor_buttons(editor.slot().is_some(), "Subproduct", busy,
                link.callback(|_| Msg::CommitSubProduct), link.callback(|_| Msg::CancelSubProduct)) }

            if !committed.is_empty() {
                <table class="table table-sm table-bordered mt-3">
                    <thead><tr><th>{ "#" }</th><th>{ "Image" }</th><th>{ "Name" }</th><th>{ "Weight" }</th><th>{ "Actions" }</th></tr></thead>
                    <tbody>
                        { for committed.iter().enumerate().map(|(index, sub)| html! {
                            <tr class={classes!((editor.slot() == Some(index)).then_some("table-warning"))}>
                                <td>{ index + 1 }</td>
                                <td>{ file_hint(&sub.image) }</td>
                                <td>{ sub.name.clone() }</td>
                                <td>{ sub.weight.clone() }</td>
                                <td>{ row_actions(busy, link.callback(move |_| Msg::EditSubProduct(index)),
                                    link.callback(move |_| Msg::RemoveSubProduct(index))) }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            }
        </fieldset>
    }
}

fn recipe_editor(page: &ProductsPage, link: &Scope<ProductsPage>, busy: bool) -> Html {
    let editor = &page.workspace.recipes;
    let staged = editor.staging();
    let errors = editor.errors();
    let committed = &page.workspace.fields.value().recipes;
    html! {
        <fieldset class="border rounded p-3 mb-3">
            <legend class="float-none w-auto px-2 fs-5">{ "Recipes" }</legend>
            { text_input("Recipe Name", &staged.name, errors.get("recipeName"), busy,
                link.callback(|v| Msg::Recipe(ProductRecipeField::Name(v)))) }
            <div class="row">
                <div class="col-md-6">
                    { file_input("Main Recipe Image", &staged.main_image, errors.get("recipeMainImg"), busy,
                        link.callback(|f| Msg::Recipe(ProductRecipeField::MainImage(FileRef::LocalFile(f))))) }
                </div>
                <div class="col-md-6">
                    { file_input("Sub Recipe Image", &staged.sub_image, errors.get("recipeSubImg"), busy,
                        link.callback(|f| Msg::Recipe(ProductRecipeField::SubImage(FileRef::LocalFile(f))))) }
                </div>
            </div>
            { steps(&staged.steps, errors, link, busy) }
            { editor_buttons(editor.slot().is_some(), "Recipe", busy,
                link.callback(|_| Msg::CommitRecipe), link.callback(|_| Msg::CancelRecipe)) }

            if !committed.is_empty() {
                <table class="table table-sm table-bordered mt-3">
                    <thead><tr><th>{ "#" }</th><th>{ "Main" }</th><th>{ "Name" }</th><th>{ "Steps" }</th><th>{ "Actions" }</th></tr></thead>
                    <tbody>
                        { for committed.iter().enumerate().map(|(index, recipe)| html! {
                            <tr class={classes!((editor.slot() == Some(index)).then_some("table-warning"))}>
                                <td>{ index + 1 }</td>
                                <td>{ file_hint(&recipe.main_image) }</td>
                                <td>{ recipe.name.clone() }</td>
                                <td>{ recipe.steps.len() }</td>
                                <td>{ row_actions(busy, link.callback(move |_| Msg::EditRecipe(index)),
                                    link.callback(move |_| Msg::RemoveRecipe(index))) }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            }
        </fieldset>
    }
}

fn steps(steps: &[String], errors: &FormErrors, link: &Scope<ProductsPage>, busy: bool) -> Html {
    html! {
        <div class="mb-3">
            <label class="form-label fw-bold">{ "Steps" }</label>
            { for steps.iter().enumerate().map(|(index, step)| html! {
                <div class="input-group mb-2">
                    <span class="input-group-text">{ index + 1 }</span>
                    <input type="text" class="form-control" value={step.clone()} disabled={busy}
                        oninput={link.callback(move |e: InputEvent| Msg::UpdateStep(index, input_value(&e)))} />
                    <button type="button" class="btn btn-outline-danger" disabled={busy}
                        onclick={link.callback(move |_| Msg::RemoveStep(index))}>{ "✕" }</button>
                </div>
            }) }
            <button type="button" class="btn btn-sm btn-outline-secondary" disabled={busy}
                onclick={link.callback(|_| Msg::AddStep)}>{ "+ Add Step" }</button>
            { error_line(errors.get("steps")) }
        </div>
    }
}

fn editor_buttons(editing: bool, noun: &str, busy: bool, on_commit: Callback<MouseEvent>, on_cancel: Callback<MouseEvent>) -> Html {
    let label = if editing { format!("Update {noun}") } else { format!("Add {noun}") };
    html! {
        <div class="d-flex gap-2">
            <button type="button" class="btn btn-outline-danger" disabled={busy} onclick={on_commit}>{ label }</button>
            if editing {
                <button type="button" class="btn btn-outline-secondary" disabled={busy} onclick={on_cancel}>{ "Cancel" }</button>
            }
        </div>
    }
}

fn row_actions(busy: bool, on_edit: Callback<MouseEvent>, on_delete: Callback<MouseEvent>) -> Html {
    html! {
        <div class="d-flex gap-1">
            <button type="button" class="btn btn-sm btn-outline-primary" disabled={busy} onclick={on_edit}>{ "Edit" }</button>
            <button type="button" class="btn btn-sm btn-outline-danger" disabled={busy} onclick={on_delete}>{ "Delete" }</button>
        </div>
    }
}

fn product_table(page: &ProductsPage, link: &Scope<ProductsPage>, read_only: bool) -> Html {
    if !page.list.is_loaded() {
        return html! { <div class="text-center"><div class="spinner-border text-danger"></div></div> };
    }
    if page.list.items().is_empty() {
        return html! { <p class="text-muted">{ "No products yet." }</p> };
    }
    let busy = page.coordinator.is_busy();
    html! {
        <table class="table table-bordered table-hover custom-table">
            <thead>
                <tr>
                    <th>{ "Sr. No" }</th>
                    <th>{ "Banner" }</th>
                    <th>{ "Product Name" }</th>
                    <th>{ "Sizes" }</th>
                    <th>{ "Subproducts" }</th>
                    <th>{ "Recipes" }</th>
                    <th>{ "Actions" }</th>
                </tr>
            </thead>
            <tbody>
                { for page.list.items().iter().enumerate().map(|(index, product)| {
                    let id = product.id.clone();
                    let actions = if read_only {
                        html! {
                            <button type="button" class="btn btn-sm btn-outline-dark"
                                onclick={link.callback(move |_| Msg::Preview(Some(id.clone())))}>{ "👁 View" }</button>
                        }
                    } else {
                        let delete_id = id.clone();
                        row_actions(busy, link.callback(move |_| Msg::Edit(id.clone())),
                            link.callback(move |_| Msg::Delete(delete_id.clone())))
                    };
                    html! {
                        <tr>
                            <td>{ index + 1 }</td>
                            <td>{ thumbnail(product.product_banner.as_deref()) }</td>
                            <td>{ product.product_name.clone() }</td>
                            <td>{ product.product_sizes.join(", ") }</td>
                            <td>{ product.subproducts.len() }</td>
                            <td>{ product.recipes.len() }</td>
                            <td>{ actions }</td>
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}

fn preview(page: &ProductsPage, link: &Scope<ProductsPage>) -> Html {
    let product = page.previewing.as_deref().and_then(|id| page.list.find(id));
    html! {
        <PreviewSheet open={product.is_some()} on_close={link.callback(|_| Msg::Preview(None))}>
            { product.map(preview_images).unwrap_or_default() }
        </PreviewSheet>
    }
}

fn preview_images(product: &ProductRecord) -> Html {
    let urls = product
        .product_banner
        .iter()
        .chain(product.banner2.iter())
        .chain(product.how_to_make_banner.iter())
        .chain(product.product_images.iter())
        .chain(product.subproducts.iter().filter_map(|sub| sub.subproduct_img.as_ref()))
        .filter(|url| !url.is_empty());
    html! {
        <div class="bg-white rounded p-4 w-75" style="max-height: 85vh; overflow-y: auto;">
            <h4 class="mb-3">{ product.product_name.clone() }</h4>
            <ImageGrid columns={3}>
                { for urls.map(|url| html! { <img src={url.clone()} class="img-fluid rounded" alt="" /> }) }
            </ImageGrid>
        </div>
    }
}
