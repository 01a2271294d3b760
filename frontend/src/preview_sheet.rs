use web_sys::MouseEvent;
use yew::{classes, html, Callback, Component, Context, Html, Properties};

/// Full-screen overlay used to look at a record's images at full size.
pub struct PreviewSheet;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    pub on_close: Callback<()>,
}

impl Component for PreviewSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_close = props.on_close.reform(|_: MouseEvent| ());
        html! {
            <div class={classes!("top-sheet", props.open.then_some("show"))}>
                <button class="close-btn" onclick={on_close}>{ "✕" }</button>
                { props.children.clone() }
            </div>
        }
    }
}
