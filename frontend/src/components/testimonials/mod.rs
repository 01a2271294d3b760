//! Customer testimonials: name, a review of at most `MAX_REVIEW_WORDS` words
//! and a customer photo.

use common::requests::EntityRoute;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

use super::helpers::fetch_into;
use super::PageProps;
pub use messages::Msg;
pub use state::TestimonialsPage;

impl Component for TestimonialsPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TestimonialsPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            fetch_into(ctx.link(), &ctx.props().client, EntityRoute::Testimonials, Msg::Loaded);
        }
    }
}
