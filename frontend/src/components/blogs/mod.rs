//! Blog page: blog fields, the recipe editor and the list of saved blogs.

use common::requests::EntityRoute;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

use super::helpers::fetch_into;
use super::PageProps;
pub use messages::Msg;
pub use state::BlogsPage;

impl Component for BlogsPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BlogsPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            fetch_into(ctx.link(), &ctx.props().client, EntityRoute::Blogs, Msg::Loaded);
        }
    }
}
