//! Update function for the product page.
//!
//! Local edits go straight into the `ProductWorkspace`. The submit path is
//! split in two messages: `Submit` validates and dispatches the request,
//! `Submitted` hands the answer to the coordinator, which resets the
//! workspace and reloads the list on success.

use common::error::EditorError;
use common::forms::Reset;
use common::model::product::RecipeList;
use common::requests::EntityRoute;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ProductsPage;
use crate::components::helpers::{
    begin_submit, confirm, fetch_into, report_error, report_outcome, scroll_to_top, send_into,
    show_toast,
};

pub fn update(page: &mut ProductsPage, ctx: &Context<ProductsPage>, msg: Msg) -> bool {
    let client = &ctx.props().client;
    match msg {
        Msg::Loaded(Ok(records)) => {
            page.list.replace(records);
            true
        }
        Msg::Loaded(Err(err)) => {
            report_error("Error fetching products", &err);
            false
        }
        Msg::Field(field) => {
            page.workspace.fields.set_field(field);
            true
        }

        Msg::SubProduct(field) => {
            page.workspace.subproducts.update_field(field);
            true
        }
        Msg::CommitSubProduct => {
            // Validation errors stay on the editor and are rendered inline.
            let _ = page.workspace.commit_subproduct();
            true
        }
        Msg::EditSubProduct(index) => {
            log_editor(page.workspace.edit_subproduct(index));
            true
        }
        Msg::RemoveSubProduct(index) => {
            if !confirm("Remove this subproduct?") {
                return false;
            }
            log_editor(page.workspace.remove_subproduct(index).map(|_| ()));
            true
        }
        Msg::CancelSubProduct => {
            page.workspace.subproducts.start_new();
            true
        }

        Msg::Recipe(field) => {
            page.workspace.recipes.update_field(field);
            true
        }
        Msg::AddStep => {
            page.workspace.recipes.append_item(RecipeList::Steps);
            true
        }
        Msg::UpdateStep(index, value) => {
            log_editor(page.workspace.recipes.update_item(RecipeList::Steps, index, value));
            true
        }
        Msg::RemoveStep(index) => {
            log_editor(page.workspace.recipes.remove_item(RecipeList::Steps, index));
            true
        }
        Msg::CommitRecipe => {
            let _ = page.workspace.commit_recipe();
            true
        }
        Msg::EditRecipe(index) => {
            log_editor(page.workspace.edit_recipe(index));
            true
        }
        Msg::RemoveRecipe(index) => {
            if !confirm("Remove this recipe?") {
                return false;
            }
            log_editor(page.workspace.remove_recipe(index).map(|_| ()));
            true
        }
        Msg::CancelRecipe => {
            page.workspace.recipes.start_new();
            true
        }

        Msg::Submit => {
            if page.coordinator.is_busy() || !page.workspace.check() {
                return true;
            }
            begin_submit(ctx.link(), client, &mut page.coordinator, &page.workspace, Msg::Submitted);
            true
        }
        Msg::Submitted(ticket, result) => {
            let link = ctx.link();
            let outcome = page.coordinator.complete(ticket, result, &mut page.workspace, || {
                fetch_into(link, client, EntityRoute::Products, Msg::Loaded)
            });
            match outcome {
                Some(outcome) => {
                    report_outcome(&outcome, "Product", "A product with this name already exists.");
                    true
                }
                None => false,
            }
        }

        Msg::Edit(id) => {
            if page.coordinator.is_busy() {
                return false;
            }
            if page.list.request_edit(&id, &mut page.workspace) {
                scroll_to_top();
            }
            true
        }
        Msg::CancelEdit => {
            page.workspace.reset();
            true
        }
        Msg::Delete(id) => {
            if !confirm("Are you sure you want to delete this product?") {
                return false;
            }
            send_into(ctx.link(), client, page.list.delete_request(&id), Msg::Deleted);
            false
        }
        Msg::Deleted(Ok(_)) => {
            show_toast("🗑️ Product deleted");
            fetch_into(ctx.link(), client, page.list.route(), Msg::Loaded);
            false
        }
        Msg::Deleted(Err(err)) => {
            report_error("Failed to delete product", &err);
            false
        }

        Msg::Preview(id) => {
            page.previewing = id;
            true
        }
    }
}

fn log_editor(result: Result<(), EditorError>) {
    if let Err(err) = result {
        gloo_console::warn!(err.to_string());
    }
}
