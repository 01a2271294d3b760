//! Sidebar with the three collapsible sections.
//!
//! A section starts expanded when the current path belongs to it
//! (`NavigationState::from_path`); clicking its header toggles it until the
//! path changes again.

use common::navigation::{NavigationState, Page};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SidebarProps {
    pub path: String,
    pub on_navigate: Callback<Page>,
    pub on_logout: Callback<()>,
}

#[derive(Clone, Copy)]
pub enum Section {
    Home,
    About,
    Product,
}

pub enum Msg {
    Toggle(Section),
}

pub struct Sidebar {
    open: NavigationState,
}

const HOME_PAGES: [Page; 4] = [Page::Dashboard, Page::Testimonials, Page::Certificates, Page::Blogs];
const ABOUT_PAGES: [Page; 1] = [Page::About];
const PRODUCT_PAGES: [Page; 4] = [Page::Products, Page::ProductData, Page::ExtraSubProducts, Page::Headings];

impl Component for Sidebar {
    type Message = Msg;
    type Properties = SidebarProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            open: NavigationState::from_path(&ctx.props().path),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().path != old_props.path {
            self.open = NavigationState::from_path(&ctx.props().path);
        }
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Toggle(Section::Home) => self.open.home = !self.open.home,
            Msg::Toggle(Section::About) => self.open.about = !self.open.about,
            Msg::Toggle(Section::Product) => self.open.product = !self.open.product,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_logout = ctx.props().on_logout.reform(|_: MouseEvent| ());
        html! {
            <nav class="sidebar d-flex flex-column">
                <h4 class="text-center py-3 border-bottom border-secondary">{ "Admin Panel" }</h4>
                { self.section(ctx, "Home", Section::Home, self.open.home, &HOME_PAGES) }
                { self.section(ctx, "About", Section::About, self.open.about, &ABOUT_PAGES) }
                { self.section(ctx, "Product", Section::Product, self.open.product, &PRODUCT_PAGES) }
                <button class="btn btn-outline-light m-3 mt-auto" onclick={on_logout}>{ "Logout" }</button>
            </nav>
        }
    }
}

impl Sidebar {
    fn section(&self, ctx: &Context<Self>, title: &str, section: Section, open: bool, pages: &[Page]) -> Html {
        let current = Page::from_path(&ctx.props().path);
        html! {
            <div>
                <button class="section-toggle" onclick={ctx.link().callback(move |_| Msg::Toggle(section))}>
                    { format!("{} {}", if open { "▾" } else { "▸" }, title) }
                </button>
                if open {
                    { for pages.iter().map(|page| link(*page, current == Some(*page), &ctx.props().on_navigate)) }
                }
            </div>
        }
    }
}

fn link(page: Page, active: bool, on_navigate: &Callback<Page>) -> Html {
    let on_navigate = on_navigate.clone();
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_navigate.emit(page);
    });
    html! {
        <a href={page.path()} class={classes!(active.then_some("active"))} {onclick}>
            { page.title() }
        </a>
    }
}
