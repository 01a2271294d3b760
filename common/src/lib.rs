//! Shared pieces of the admin console.
//!
//! Everything in this crate is free of browser dependencies so the form-state
//! workflow (field stores, nested collection editors, validation, submission)
//! can be unit-tested natively. The `frontend` crate plugs a browser `File`
//! handle and a `gloo-net` client into the generic types defined here.

pub mod auth;
pub mod config;
pub mod error;
pub mod forms;
pub mod model;
pub mod navigation;
pub mod requests;
