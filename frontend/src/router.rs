//! History-based routing for the console pages.
//!
//! The current location is the single source of truth: `App` reads it on
//! start, `push` changes it when a sidebar link is followed, and the
//! `PopStateListener` reports back/forward navigation.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::Callback;

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn push(path: &str) {
    let history = web_sys::window().and_then(|window| window.history().ok());
    if let Some(history) = history {
        if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
            gloo_console::error!(format!("Navigation to {path} failed: {err:?}"));
        }
    }
}

/// Keeps the `popstate` handler registered for as long as it is alive.
pub struct PopStateListener {
    closure: Closure<dyn FnMut()>,
}

impl PopStateListener {
    pub fn register(on_change: Callback<String>) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::<dyn FnMut()>::new(move || on_change.emit(current_path()));
        window
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { closure })
    }
}

impl Drop for PopStateListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "popstate",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
