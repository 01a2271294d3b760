use common::navigation::Page;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardProps {
    pub on_navigate: Callback<Page>,
}

/// Landing page: one card per managed collection.
pub struct Dashboard;

impl Component for Dashboard {
    type Message = ();
    type Properties = DashboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Dashboard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let cards = Page::ALL
            .into_iter()
            .filter(|page| *page != Page::Dashboard)
            .map(|page| {
                let on_navigate = ctx.props().on_navigate.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(page));
                html! {
                    <div class="col-md-4 mb-3">
                        <div class="card shadow-sm h-100" role="button" {onclick}>
                            <div class="card-body">
                                <h5 class="card-title">{ page.title() }</h5>
                                <small class="text-muted">{ page.path() }</small>
                            </div>
                        </div>
                    </div>
                }
            });

        html! {
            <div class="container">
                <h2 class="mb-4">{ "Dashboard" }</h2>
                <div class="row">{ for cards }</div>
            </div>
        }
    }
}
