use common::auth::{LoginField, LoginForm};
use common::error::ApiError;
use common::forms::{FieldStore, ValidationContext};
use yew::prelude::*;

use super::controls::{error_line, submit_button};
use super::helpers::{input_value, report_error, send_into};
use crate::api::GlooClient;

#[derive(Properties, PartialEq, Clone)]
pub struct LoginProps {
    pub client: GlooClient,
    pub on_login: Callback<()>,
}

pub enum Msg {
    Field(LoginField),
    Submit,
    Finished(Result<String, ApiError>),
}

pub struct LoginPage {
    form: FieldStore<LoginForm>,
    busy: bool,
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: FieldStore::new(),
            busy: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Field(field) => {
                self.form.set_field(field);
                true
            }
            Msg::Submit => {
                if self.busy || !self.form.check_with(&ValidationContext::default()) {
                    return true;
                }
                match self.form.value().to_request() {
                    Ok(request) => {
                        self.busy = true;
                        send_into(ctx.link(), &ctx.props().client, request, Msg::Finished);
                    }
                    Err(err) => gloo_console::error!(format!("Could not encode login: {err}")),
                }
                true
            }
            Msg::Finished(Ok(_)) => {
                self.busy = false;
                ctx.props().on_login.emit(());
                false
            }
            Msg::Finished(Err(err)) => {
                self.busy = false;
                report_error("Login failed", &err);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let errors = self.form.errors();
        let value = self.form.value();
        html! {
            <div class="d-flex justify-content-center align-items-center vh-100 bg-light">
                <div class="card shadow p-4" style="width: 360px;">
                    <h3 class="text-center mb-4">{ "Admin Login" }</h3>
                    <div class="mb-3">
                        <input
                            type="text"
                            class="form-control"
                            placeholder="Username"
                            value={value.username.clone()}
                            disabled={self.busy}
                            oninput={link.callback(|e: InputEvent| Msg::Field(LoginField::Username(input_value(&e))))}
                        />
                        { error_line(errors.get("username")) }
                    </div>
                    <div class="mb-3">
                        <input
                            type="password"
                            class="form-control"
                            placeholder="Password"
                            value={value.password.clone()}
                            disabled={self.busy}
                            oninput={link.callback(|e: InputEvent| Msg::Field(LoginField::Password(input_value(&e))))}
                        />
                        { error_line(errors.get("password")) }
                    </div>
                    { submit_button("Login", self.busy, link.callback(|_| Msg::Submit)) }
                </div>
            </div>
        }
    }
}
