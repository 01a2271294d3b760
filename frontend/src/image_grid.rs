use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct ImageGridProps {
    pub columns: usize,
    pub children: Children,
}

pub struct ImageGrid;

impl Component for ImageGrid {
    type Message = ();
    type Properties = ImageGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ImageGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat({}, 1fr);
             gap: 16px;
             width: 100%;
             margin: auto;",
            props.columns.max(1)
        );

        html! {
            <div style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
