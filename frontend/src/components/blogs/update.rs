use common::forms::Reset;
use common::requests::EntityRoute;
use yew::prelude::*;

use super::messages::Msg;
use super::state::BlogsPage;
use crate::components::helpers::{
    begin_submit, confirm, fetch_into, report_error, report_outcome, scroll_to_top, send_into,
    show_toast,
};

pub fn update(page: &mut BlogsPage, ctx: &Context<BlogsPage>, msg: Msg) -> bool {
    let client = &ctx.props().client;
    match msg {
        Msg::Loaded(Ok(records)) => {
            page.list.replace(records);
            true
        }
        Msg::Loaded(Err(err)) => {
            report_error("Error fetching blogs", &err);
            false
        }
        Msg::Field(field) => {
            page.workspace.fields.set_field(field);
            true
        }

        Msg::Recipe(field) => {
            page.workspace.recipes.update_field(field);
            true
        }
        Msg::AddItem(list) => {
            page.workspace.recipes.append_item(list);
            true
        }
        Msg::UpdateItem(list, index, value) => {
            if let Err(err) = page.workspace.recipes.update_item(list, index, value) {
                gloo_console::warn!(err.to_string());
            }
            true
        }
        Msg::RemoveItem(list, index) => {
            if let Err(err) = page.workspace.recipes.remove_item(list, index) {
                gloo_console::warn!(err.to_string());
            }
            true
        }
        Msg::CommitRecipe => {
            let _ = page.workspace.commit_recipe();
            true
        }
        Msg::EditRecipe(index) => {
            if let Err(err) = page.workspace.edit_recipe(index) {
                gloo_console::warn!(err.to_string());
            }
            true
        }
        Msg::RemoveRecipe(index) => {
            if !confirm("Remove this recipe?") {
                return false;
            }
            if let Err(err) = page.workspace.remove_recipe(index) {
                gloo_console::warn!(err.to_string());
            }
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
                fetch_into(link, client, EntityRoute::Blogs, Msg::Loaded)
            });
            if let Some(outcome) = &outcome {
                report_outcome(outcome, "Blog", "A blog with this title already exists.");
            }
            outcome.is_some()
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
            if confirm("Are you sure you want to delete this blog?") {
                send_into(ctx.link(), client, page.list.delete_request(&id), Msg::Deleted);
            }
            false
        }
        Msg::Deleted(Ok(_)) => {
            show_toast("🗑️ Blog deleted");
            fetch_into(ctx.link(), client, page.list.route(), Msg::Loaded);
            false
        }
        Msg::Deleted(Err(err)) => {
            report_error("Failed to delete blog", &err);
            false
        }
    }
}
