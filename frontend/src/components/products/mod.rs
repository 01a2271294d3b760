//! Product page: the product form with its two nested editors (sub-products
//! and recipes) above the list of saved products.
//!
//! Mounted twice by the router. On `/productAdminToggle` the whole page is
//! editable; on `/ProductData` (`read_only`) only the list is shown, with an
//! image preview per product.

use common::requests::EntityRoute;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

use super::helpers::fetch_into;
pub use messages::Msg;
pub use props::ProductsProps;
pub use state::ProductsPage;

impl Component for ProductsPage {
    type Message = Msg;
    type Properties = ProductsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ProductsPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            fetch_into(ctx.link(), &ctx.props().client, EntityRoute::Products, Msg::Loaded);
        }
    }
}
