//! Extra sub-products: one sub-product attached to an existing product
//! outside of the product form. The product dropdown is filled from the
//! product list, fetched alongside the page's own records.

use common::requests::EntityRoute;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

use super::helpers::fetch_into;
use super::PageProps;
pub use messages::Msg;
pub use state::ExtraSubProductsPage;

impl Component for ExtraSubProductsPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ExtraSubProductsPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let client = &ctx.props().client;
            fetch_into(ctx.link(), client, EntityRoute::Products, Msg::ProductsLoaded);
            fetch_into(ctx.link(), client, EntityRoute::ExtraSubProducts, Msg::Loaded);
        }
    }
}
