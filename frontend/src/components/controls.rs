//! Labelled inputs with their validation message underneath.
//!
//! Each control takes the error for its own key (`errors.get("productName")`)
//! and a callback with the already extracted value, so the pages only map
//! values to their field messages.

use common::model::FileRef;
use common::model::product::ProductRecord;
use web_sys::File;
use yew::prelude::*;

use super::helpers::{input_value, select_value, selected_files, textarea_value};

fn control_class(error: Option<&str>) -> &'static str {
    if error.is_some() {
        "form-control border-danger"
    } else {
        "form-control border-secondary"
    }
}

pub fn error_line(error: Option<&str>) -> Html {
    match error {
        Some(message) => html! { <small class="text-danger">{ message.to_string() }</small> },
        None => html! {},
    }
}

pub fn text_input(
    label: &str,
    value: &str,
    error: Option<&str>,
    disabled: bool,
    oninput: Callback<String>,
) -> Html {
    html! {
        <div class="mb-3">
            <label class="form-label fw-bold">{ label.to_string() }</label>
            <input
                type="text"
                class={control_class(error)}
                value={value.to_string()}
                disabled={disabled}
                oninput={Callback::from(move |e: InputEvent| oninput.emit(input_value(&e)))}
            />
            { error_line(error) }
        </div>
    }
}

pub fn number_input(
    label: &str,
    value: &str,
    error: Option<&str>,
    disabled: bool,
    oninput: Callback<String>,
) -> Html {
    html! {
        <div class="mb-3">
            <label class="form-label fw-bold">{ label.to_string() }</label>
            <input
                type="number"
                class={control_class(error)}
                value={value.to_string()}
                disabled={disabled}
                oninput={Callback::from(move |e: InputEvent| oninput.emit(input_value(&e)))}
            />
            { error_line(error) }
        </div>
    }
}

pub fn text_area(
    label: &str,
    value: &str,
    error: Option<&str>,
    disabled: bool,
    oninput: Callback<String>,
) -> Html {
    html! {
        <div class="mb-3">
            <label class="form-label fw-bold">{ label.to_string() }</label>
            <textarea
                rows="3"
                class={control_class(error)}
                value={value.to_string()}
                disabled={disabled}
                oninput={Callback::from(move |e: InputEvent| oninput.emit(textarea_value(&e)))}
            />
            { error_line(error) }
        </div>
    }
}

/// Single image picker. Shows the persisted image or the picked file name.
pub fn file_input(
    label: &str,
    current: &FileRef<File>,
    error: Option<&str>,
    disabled: bool,
    onchange: Callback<File>,
) -> Html {
    html! {
        <div class="mb-3">
            <label class="form-label fw-bold">{ label.to_string() }</label>
            <input
                type="file"
                accept="image/*"
                class={control_class(error)}
                disabled={disabled}
                onchange={Callback::from(move |e: Event| {
                    if let Some(file) = selected_files(&e).into_iter().next() {
                        onchange.emit(file);
                    }
                })}
            />
            { file_hint(current) }
            { error_line(error) }
        </div>
    }
}

pub fn multi_file_input(label: &str, error: Option<&str>, disabled: bool, onchange: Callback<Vec<File>>) -> Html {
    html! {
        <div class="mb-3">
            <label class="form-label fw-bold">{ label.to_string() }</label>
            <input
                type="file"
                accept="image/*"
                multiple={true}
                class={control_class(error)}
                disabled={disabled}
                onchange={Callback::from(move |e: Event| {
                    let files = selected_files(&e);
                    if !files.is_empty() {
                        onchange.emit(files);
                    }
                })}
            />
            { error_line(error) }
        </div>
    }
}

pub fn file_hint(current: &FileRef<File>) -> Html {
    match current {
        FileRef::Empty => html! {},
        FileRef::PersistedUrl(url) => html! {
            <img src={url.clone()} class="thumb rounded mt-2" alt="current" />
        },
        FileRef::LocalFile(file) => html! {
            <small class="text-muted d-block mt-1">{ format!("Selected: {}", file.name()) }</small>
        },
    }
}

/// A `<select>` over `(value, label)` pairs with an empty placeholder option.
pub fn select_input(
    label: &str,
    placeholder: &str,
    options: Vec<(String, String)>,
    selected: &str,
    error: Option<&str>,
    disabled: bool,
    onchange: Callback<String>,
) -> Html {
    let class = if error.is_some() {
        "form-select border-danger"
    } else {
        "form-select border-secondary"
    };
    html! {
        <div class="mb-3">
            <label class="form-label fw-bold">{ label.to_string() }</label>
            <select
                class={class}
                disabled={disabled}
                onchange={Callback::from(move |e: Event| onchange.emit(select_value(&e)))}
            >
                <option value="" selected={selected.is_empty()}>{ placeholder.to_string() }</option>
                { for options.into_iter().map(|(value, text)| {
                    let is_selected = value == selected;
                    html! { <option value={value} selected={is_selected}>{ text }</option> }
                }) }
            </select>
            { error_line(error) }
        </div>
    }
}

/// Submit button that turns into a spinner while the request is in flight.
pub fn submit_button(label: &str, busy: bool, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <button type="button" class="btn btn-danger" disabled={busy} onclick={onclick}>
            if busy {
                <span class="spinner-border spinner-border-sm me-2" role="status"></span>
                { "Saving..." }
            } else {
                { label.to_string() }
            }
        </button>
    }
}

pub fn thumbnail(url: Option<&str>) -> Html {
    match url {
        Some(url) if !url.is_empty() => html! {
            <img src={url.to_string()} class="thumb rounded" alt="" />
        },
        _ => html! { <span class="text-muted">{ "No image" }</span> },
    }
}

/// `(id, name)` pairs for the product dropdowns.
pub fn product_options(products: &[ProductRecord]) -> Vec<(String, String)> {
    products
        .iter()
        .map(|product| (product.id.clone(), product.product_name.clone()))
        .collect()
}
