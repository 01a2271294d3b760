//! Sub-product headings: a title per product, sent as JSON. A title that
//! already exists for the product is reported with `DUPLICATE_MESSAGE`.

use common::requests::EntityRoute;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

use super::helpers::fetch_into;
use super::PageProps;
pub use messages::Msg;
pub use state::HeadingsPage;

impl Component for HeadingsPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        HeadingsPage::new()
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
            fetch_into(ctx.link(), client, EntityRoute::Headings, Msg::Loaded);
        }
    }
}
