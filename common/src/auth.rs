//! Login state of the console.
//!
//! The session is a single "logged in" flag persisted by a `FlagStore`
//! (`localStorage` in the browser). It only gates which screens are rendered;
//! the remote API does its own authorization.

use serde::Serialize;

use crate::forms::validator::require_text;
use crate::forms::{Form, FormErrors, Validate, ValidationContext};
use crate::requests::{ApiRequest, Method, RequestBody};

/// `localStorage` key of the flag.
pub const LOGIN_FLAG_KEY: &str = "login";

pub const LOGIN_PATH: &str = "/api/login";

/// Persistence of the logged-in flag.
pub trait FlagStore {
    fn read(&self) -> bool;
    fn write(&self, logged_in: bool);
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthContext<S> {
    store: S,
    logged_in: bool,
}

impl<S: FlagStore> AuthContext<S> {
    /// Picks up a session left by a previous page load.
    pub fn restore(store: S) -> Self {
        let logged_in = store.read();
        Self { store, logged_in }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn login(&mut self) {
        self.store.write(true);
        self.logged_in = true;
    }

    pub fn logout(&mut self) {
        self.store.write(false);
        self.logged_in = false;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

pub enum LoginField {
    Username(String),
    Password(String),
}

impl Form for LoginForm {
    type Field = LoginField;

    fn apply(&mut self, field: LoginField) -> &'static str {
        match field {
            LoginField::Username(username) => {
                self.username = username;
                "username"
            }
            LoginField::Password(password) => {
                self.password = password;
                "password"
            }
        }
    }
}

impl Validate for LoginForm {
    fn validate(&self, _ctx: &ValidationContext) -> FormErrors {
        let mut errors = FormErrors::new();
        require_text(&mut errors, "username", &self.username, "Username is required");
        require_text(&mut errors, "password", &self.password, "Password is required");
        errors
    }
}

impl LoginForm {
    pub fn to_request<F>(&self) -> Result<ApiRequest<F>, serde_json::Error> {
        Ok(ApiRequest {
            method: Method::Post,
            path: LOGIN_PATH.to_string(),
            body: Some(RequestBody::Json(serde_json::to_value(self)?)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FieldStore;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryFlag(Rc<Cell<bool>>);

    impl FlagStore for MemoryFlag {
        fn read(&self) -> bool {
            self.0.get()
        }

        fn write(&self, logged_in: bool) {
            self.0.set(logged_in);
        }
    }

    #[test]
    fn login_and_logout_persist_the_flag() {
        let flag = MemoryFlag::default();
        let mut auth = AuthContext::restore(flag.clone());
        assert!(!auth.is_logged_in());

        auth.login();
        assert!(flag.read());
        assert!(AuthContext::restore(flag.clone()).is_logged_in());

        auth.logout();
        assert!(!auth.is_logged_in());
        assert!(!flag.read());
    }

    #[test]
    fn login_form_requires_both_fields() {
        let mut store = FieldStore::<LoginForm>::new();
        store.set_field(LoginField::Username("admin".into()));
        assert!(!store.check_with(&ValidationContext::default()));
        assert_eq!(store.errors().keys().collect::<Vec<_>>(), vec!["password"]);
    }

    #[test]
    fn login_request_is_json() {
        let form = LoginForm {
            username: "admin".into(),
            password: "secret".into(),
        };
        let request = form.to_request::<()>().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/api/login");
        assert_eq!(
            request.body.as_ref().and_then(RequestBody::as_json),
            Some(&serde_json::json!({"username": "admin", "password": "secret"}))
        );
    }
}
