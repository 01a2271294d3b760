use common::model::FileRef;
use common::model::blog::{BlogField, BlogRecipeField, BlogRecipeList, Difficulty};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::BlogsPage;
use crate::components::controls::{
    error_line, file_hint, file_input, number_input, submit_button, text_area, text_input,
    thumbnail,
};
use crate::components::helpers::{input_value, select_value};

pub fn view(page: &BlogsPage, ctx: &Context<BlogsPage>) -> Html {
    let link = ctx.link();
    let busy = page.coordinator.is_busy();
    let blog = page.workspace.fields.value();
    let errors = page.workspace.fields.errors();
    let editing = blog.id.is_some();

    html! {
        <div class="container">
            <h2 class="mb-4">{ if editing { "Edit Blog" } else { "Add Blog" } }</h2>
            <div class="card p-4 mb-4 shadow-sm">
                { text_input("Title", &blog.title, errors.get("title"), busy,
                    link.callback(|v| Msg::Field(BlogField::Title(v)))) }
                { text_area("Description", &blog.description, errors.get("description"), busy,
                    link.callback(|v| Msg::Field(BlogField::Description(v)))) }
                { text_input("Category", &blog.category, errors.get("category"), busy,
                    link.callback(|v| Msg::Field(BlogField::Category(v)))) }
                <div class="row">
                    <div class="col-md-4">
                        { file_input("Blog Image", &blog.image, errors.get("blogImage"), busy,
                            link.callback(|f| Msg::Field(BlogField::Image(FileRef::LocalFile(f))))) }
                    </div>
                    <div class="col-md-4">
                        { file_input("Blog Banner", &blog.banner, errors.get("blogBanner"), busy,
                            link.callback(|f| Msg::Field(BlogField::Banner(FileRef::LocalFile(f))))) }
                    </div>
                    <div class="col-md-4">
                        { file_input("Blog Banner (mobile)", &blog.banner_mobile, errors.get("blogBannerMobile"), busy,
                            link.callback(|f| Msg::Field(BlogField::BannerMobile(FileRef::LocalFile(f))))) }
                    </div>
                </div>
                { recipe_editor(page, link, busy) }
                { error_line(errors.get("recipes")) }
                <div class="d-flex gap-2 mt-3">
                    { submit_button(if editing { "Update Blog" } else { "Add Blog" }, busy, link.callback(|_| Msg::Submit)) }
                    if editing {
                        <button type="button" class="btn btn-secondary" disabled={busy} onclick={link.callback(|_| Msg::CancelEdit)}>
                            { "Cancel Edit" }
                        </button>
                    }
                </div>
            </div>
            { blog_table(page, link) }
        </div>
    }
}

fn recipe_editor(page: &BlogsPage, link: &Scope<BlogsPage>, busy: bool) -> Html {
    let editor = &page.workspace.recipes;
    let recipe = editor.staging();
    let errors = editor.errors();
    let committed = &page.workspace.fields.value().recipes;
    let editing = editor.slot().is_some();

    html! {
        <fieldset class="border rounded p-3 mb-2">
            <legend class="float-none w-auto px-2 fs-5">{ "Recipes" }</legend>
            { text_input("Recipe Name", &recipe.name, errors.get("recipeName"), busy,
                link.callback(|v| Msg::Recipe(BlogRecipeField::Name(v)))) }
            { text_area("Recipe Description", &recipe.description, errors.get("description"), busy,
                link.callback(|v| Msg::Recipe(BlogRecipeField::Description(v)))) }
            <div class="row">
                <div class="col-md-3">
                    { number_input("Serving", &recipe.serving, errors.get("serving"), busy,
                        link.callback(|v| Msg::Recipe(BlogRecipeField::Serving(v)))) }
                </div>
                <div class="col-md-3">
                    { number_input("Prep Time (min)", &recipe.prep_time, errors.get("prep_time"), busy,
                        link.callback(|v| Msg::Recipe(BlogRecipeField::PrepTime(v)))) }
                </div>
                <div class="col-md-3">
                    { number_input("Cook Time (min)", &recipe.cook_time, errors.get("cook_time"), busy,
                        link.callback(|v| Msg::Recipe(BlogRecipeField::CookTime(v)))) }
                </div>
                <div class="col-md-3 mb-3">
                    <label class="form-label fw-bold">{ "Difficulty" }</label>
                    <select class="form-select border-secondary" disabled={busy}
                        onchange={link.callback(|e: Event| Msg::Recipe(BlogRecipeField::Difficulty(Difficulty::from_label(&select_value(&e)))))}>
                        { for Difficulty::ALL.into_iter().map(|difficulty| html! {
                            <option value={difficulty.as_str()} selected={difficulty == recipe.difficulty}>
                                { difficulty.as_str() }
                            </option>
                        }) }
                    </select>
                </div>
            </div>
            { item_list("Ingredients", BlogRecipeList::Ingredients, &recipe.ingredients, errors.get("ingredients"), link, busy) }
            { item_list("Cooking Instructions", BlogRecipeList::Instructions, &recipe.instructions,
                errors.get("cooking_instructions"), link, busy) }
            { file_input("Recipe Image", &recipe.image, errors.get("recipeImage"), busy,
                link.callback(|f| Msg::Recipe(BlogRecipeField::Image(FileRef::LocalFile(f))))) }

            <div class="d-flex gap-2">
                <button type="button" class="btn btn-outline-danger" disabled={busy}
                    onclick={link.callback(|_| Msg::CommitRecipe)}>
                    { if editing { "Update Recipe" } else { "Add Recipe" } }
                </button>
                if editing {
                    <button type="button" class="btn btn-outline-secondary" disabled={busy}
                        onclick={link.callback(|_| Msg::CancelRecipe)}>{ "Cancel" }</button>
                }
            </div>

            if !committed.is_empty() {
                <ul class="list-group mt-3">
                    { for committed.iter().enumerate().map(|(index, recipe)| html! {
                        <li class={classes!("list-group-item", "d-flex", "align-items-center", "gap-3",
                            (editor.slot() == Some(index)).then_some("list-group-item-warning"))}>
                            { file_hint(&recipe.image) }
                            <div class="flex-grow-1">
                                <strong>{ recipe.name.clone() }</strong>
                                <small class="text-muted d-block">
                                    { format!("{} · serves {} · {} + {} min", recipe.difficulty.as_str(),
                                        recipe.serving, recipe.prep_time, recipe.cook_time) }
                                </small>
                            </div>
                            <button type="button" class="btn btn-sm btn-outline-primary" disabled={busy}
                                onclick={link.callback(move |_| Msg::EditRecipe(index))}>{ "Edit" }</button>
                            <button type="button" class="btn btn-sm btn-outline-danger" disabled={busy}
                                onclick={link.callback(move |_| Msg::RemoveRecipe(index))}>{ "Delete" }</button>
                        </li>
                    }) }
                </ul>
            }
        </fieldset>
    }
}

fn item_list(
    label: &str,
    list: BlogRecipeList,
    items: &[String],
    error: Option<&str>,
    link: &Scope<BlogsPage>,
    busy: bool,
) -> Html {
    html! {
        <div class="mb-3">
            <label class="form-label fw-bold">{ label.to_string() }</label>
            { for items.iter().enumerate().map(|(index, item)| html! {
                <div class="input-group mb-2">
                    <input type="text" class="form-control" value={item.clone()} disabled={busy}
                        oninput={link.callback(move |e: InputEvent| Msg::UpdateItem(list, index, input_value(&e)))} />
                    <button type="button" class="btn btn-outline-danger" disabled={busy}
                        onclick={link.callback(move |_| Msg::RemoveItem(list, index))}>{ "✕" }</button>
                </div>
            }) }
            <button type="button" class="btn btn-sm btn-outline-secondary" disabled={busy}
                onclick={link.callback(move |_| Msg::AddItem(list))}>{ "+ Add" }</button>
            { error_line(error) }
        </div>
    }
}

fn blog_table(page: &BlogsPage, link: &Scope<BlogsPage>) -> Html {
    if !page.list.is_loaded() {
        return html! { <div class="text-center"><div class="spinner-border text-danger"></div></div> };
    }
    let busy = page.coordinator.is_busy();
    html! {
        <table class="table table-bordered table-hover custom-table">
            <thead>
                <tr>
                    <th>{ "Sr. No" }</th>
                    <th>{ "Image" }</th>
                    <th>{ "Title" }</th>
                    <th>{ "Category" }</th>
                    <th>{ "Recipes" }</th>
                    <th>{ "Actions" }</th>
                </tr>
            </thead>
            <tbody>
                { for page.list.items().iter().enumerate().map(|(index, blog)| {
                    let edit_id = blog.id.clone();
                    let delete_id = blog.id.clone();
                    html! {
                        <tr>
                            <td>{ index + 1 }</td>
                            <td>{ thumbnail(blog.blog_image.as_deref()) }</td>
                            <td>{ blog.title.clone() }</td>
                            <td>{ blog.category.clone() }</td>
                            <td>{ blog.recipes.len() }</td>
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
