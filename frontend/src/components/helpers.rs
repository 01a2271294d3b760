//! Helpers shared by the console pages.
//!
//! - **User feedback**: toasts, confirmation prompts and scrolling the form
//!   back into view when a record is opened for editing.
//! - **Input extraction**: reading values and picked files out of DOM events.
//! - **Dispatch**: running an `ApiRequest` or a list fetch in the background
//!   and handing the result back to the component as a message.

use common::error::ApiError;
use common::forms::{ListRecord, SaveKind, SubmissionCoordinator, SubmitOutcome, SubmitTicket, Submittable};
use common::requests::{ApiClient, ApiRequest, EntityRoute, fetch_records};
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, ScrollBehavior, ScrollToOptions};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::GlooClient;

/// Shows a message at the bottom of the page for three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Blocking browser confirmation. A missing window counts as "cancel".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn input_value(event: &InputEvent) -> String {
    event.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn textarea_value(event: &InputEvent) -> String {
    event.target_unchecked_into::<HtmlTextAreaElement>().value()
}

pub fn select_value(event: &Event) -> String {
    event.target_unchecked_into::<HtmlSelectElement>().value()
}

/// Files picked in an `<input type="file">`, in selection order.
pub fn selected_files(event: &Event) -> Vec<File> {
    let input: HtmlInputElement = event.target_unchecked_into();
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|index| list.get(index)).collect()
}

/// Fetches `route` and delivers the decoded list as a message.
pub fn fetch_into<COMP, T, F>(link: &Scope<COMP>, client: &GlooClient, route: EntityRoute, to_msg: F)
where
    COMP: Component,
    T: ListRecord + 'static,
    F: FnOnce(Result<Vec<T>, ApiError>) -> COMP::Message + 'static,
{
    let link = link.clone();
    let client = client.clone();
    spawn_local(async move {
        let result = fetch_records(&client, route).await;
        link.send_message(to_msg(result));
    });
}

/// Sends `request` and delivers the raw outcome as a message.
pub fn send_into<COMP, F>(link: &Scope<COMP>, client: &GlooClient, request: ApiRequest<File>, to_msg: F)
where
    COMP: Component,
    F: FnOnce(Result<String, ApiError>) -> COMP::Message + 'static,
{
    let link = link.clone();
    let client = client.clone();
    spawn_local(async move {
        let result = client.send(request).await;
        link.send_message(to_msg(result));
    });
}

/// Starts the single create/update request for `record`.
///
/// Refused while another submission of the same form is in flight. The
/// answer comes back as `to_msg(ticket, result)` and must be handed to
/// `SubmissionCoordinator::complete`.
pub fn begin_submit<COMP, S>(
    link: &Scope<COMP>,
    client: &GlooClient,
    coordinator: &mut SubmissionCoordinator,
    record: &S,
    to_msg: fn(SubmitTicket, Result<(), ApiError>) -> COMP::Message,
) where
    COMP: Component,
    S: Submittable<File = File>,
{
    match coordinator.begin(record) {
        Ok((ticket, request)) => {
            send_into(link, client, request, move |result| {
                to_msg(ticket, result.map(|_| ()))
            });
        }
        Err(err) => {
            gloo_console::warn!(format!("Submission not started: {err}"));
            show_toast(&format!("❌ {err}"));
        }
    }
}

/// Toast for a finished submission. `duplicate` is shown when the backend
/// rejected the record as a duplicate.
pub fn report_outcome(outcome: &SubmitOutcome, entity: &str, duplicate: &str) {
    match outcome {
        SubmitOutcome::Saved(SaveKind::Created) => show_toast(&format!("✅ {entity} added successfully!")),
        SubmitOutcome::Saved(SaveKind::Updated) => show_toast(&format!("✅ {entity} updated successfully!")),
        SubmitOutcome::Duplicate(err) => {
            gloo_console::warn!(err.to_string());
            show_toast(&format!("⚠️ {duplicate}"));
        }
        SubmitOutcome::Failed(err) => report_error(&format!("Failed to save {entity}"), err),
    }
}

pub fn report_error(context: &str, err: &ApiError) {
    gloo_console::error!(format!("{context}: {err}"));
    let detail = match err {
        ApiError::Status { message, .. } if !message.is_empty() => message.as_str(),
        _ => "please try again",
    };
    show_toast(&format!("❌ {context}: {detail}"));
}
