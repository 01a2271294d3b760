//! Root component: loads the runtime config, restores the login flag and
//! renders either the login page or the sidebar plus the page for the
//! current path.

use common::auth::{AuthContext, FlagStore, LOGIN_FLAG_KEY};
use common::config::ConsoleConfig;
use common::model::gallery::{AboutImages, Certificates};
use common::navigation::Page;
use web_sys::Storage;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::GlooClient;
use crate::components::blogs::BlogsPage;
use crate::components::dashboard::Dashboard;
use crate::components::extra_subproducts::ExtraSubProductsPage;
use crate::components::gallery::GalleryPage;
use crate::components::headings::HeadingsPage;
use crate::components::helpers::{confirm, show_toast};
use crate::components::login::LoginPage;
use crate::components::products::ProductsPage;
use crate::components::sidebar::Sidebar;
use crate::components::testimonials::TestimonialsPage;
use crate::config;
use crate::router::{self, PopStateListener};

/// `localStorage` backed login flag.
pub struct LocalStorageFlag;

impl LocalStorageFlag {
    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl FlagStore for LocalStorageFlag {
    fn read(&self) -> bool {
        Self::storage()
            .and_then(|storage| storage.get_item(LOGIN_FLAG_KEY).ok().flatten())
            .is_some_and(|value| !value.is_empty())
    }

    fn write(&self, logged_in: bool) {
        let Some(storage) = Self::storage() else {
            gloo_console::warn!("localStorage unavailable, login flag not persisted");
            return;
        };
        let result = if logged_in {
            storage.set_item(LOGIN_FLAG_KEY, "true")
        } else {
            storage.remove_item(LOGIN_FLAG_KEY)
        };
        if let Err(err) = result {
            gloo_console::error!(format!("Could not persist login flag: {err:?}"));
        }
    }
}

pub enum Msg {
    Configured(ConsoleConfig),
    Navigate(Page),
    PathChanged(String),
    LoggedIn,
    Logout,
}

pub struct App {
    client: Option<GlooClient>,
    auth: AuthContext<LocalStorageFlag>,
    path: String,
    _popstate: Option<PopStateListener>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Configured(config::load().await));
        });

        Self {
            client: None,
            auth: AuthContext::restore(LocalStorageFlag),
            path: router::current_path(),
            _popstate: PopStateListener::register(ctx.link().callback(Msg::PathChanged)),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Configured(config) => {
                gloo_console::log!(format!("Console API base: '{}'", config.api_base_url));
                self.client = Some(GlooClient::new(config));
                true
            }
            Msg::Navigate(page) => {
                if Page::from_path(&self.path) == Some(page) {
                    return false;
                }
                router::push(page.path());
                self.path = page.path().to_string();
                true
            }
            Msg::PathChanged(path) => {
                self.path = path;
                true
            }
            Msg::LoggedIn => {
                self.auth.login();
                show_toast("✅ Login successful");
                true
            }
            Msg::Logout => {
                if !confirm("Are you sure you want to logout?") {
                    return false;
                }
                self.auth.logout();
                router::push("/");
                self.path = "/".to_string();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(client) = &self.client else {
            return html! {
                <div class="d-flex justify-content-center align-items-center vh-100">
                    <div class="spinner-border text-danger" role="status"></div>
                </div>
            };
        };

        if !self.auth.is_logged_in() {
            return html! {
                <LoginPage client={client.clone()} on_login={ctx.link().callback(|_| Msg::LoggedIn)} />
            };
        }

        html! {
            <div class="d-flex">
                <Sidebar
                    path={self.path.clone()}
                    on_navigate={ctx.link().callback(Msg::Navigate)}
                    on_logout={ctx.link().callback(|_| Msg::Logout)}
                />
                <main class="flex-grow-1 p-4 main_form">
                    { self.page(ctx, client) }
                </main>
            </div>
        }
    }
}

impl App {
    fn page(&self, ctx: &Context<Self>, client: &GlooClient) -> Html {
        let client = client.clone();
        match Page::from_path(&self.path) {
            Some(Page::Dashboard) => html! {
                <Dashboard on_navigate={ctx.link().callback(Msg::Navigate)} />
            },
            Some(Page::Testimonials) => html! { <TestimonialsPage {client} /> },
            Some(Page::Certificates) => html! { <GalleryPage<Certificates> {client} /> },
            Some(Page::Blogs) => html! { <BlogsPage {client} /> },
            Some(Page::About) => html! { <GalleryPage<AboutImages> {client} /> },
            Some(Page::Products) => html! {
                <ProductsPage key="products" {client} read_only={false} />
            },
            Some(Page::ProductData) => html! {
                <ProductsPage key="product-data" {client} read_only={true} />
            },
            Some(Page::ExtraSubProducts) => html! { <ExtraSubProductsPage {client} /> },
            Some(Page::Headings) => html! { <HeadingsPage {client} /> },
            None => html! {
                <div class="text-center mt-5">
                    <h3>{ "Page not found" }</h3>
                    <button class="btn btn-danger" onclick={ctx.link().callback(|_| Msg::Navigate(Page::Dashboard))}>
                        { "Back to dashboard" }
                    </button>
                </div>
            },
        }
    }
}
