//! Home page component.

use yew::prelude::*;

use crate::components::{
    Button, Card, CardActions, CardText, CardTitle, CardTitleText, Icon, mdl,
};
use crate::update::ShouldUpdate;

/// Static landing page.
pub struct HomePage;

impl ShouldUpdate for HomePage {
    fn should_update(_prev: &(), _next: &()) -> bool {
        false
    }
}

impl Component for HomePage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        Self::should_update(old_props, ctx.props())
    }

    // Pages mount after the shell's own upgrade pass, on every route change.
    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            mdl::upgrade_dom();
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <Card shadow={4_u8}>
                <CardTitle class="graphic">
                    <CardTitleText>{"Home"}</CardTitleText>
                </CardTitle>
                <CardText style="text-align:center">
                    <Icon icon="person" style="display:block; font-size:100px;" />
                    <p>{"Nothing to see here."}</p>
                </CardText>
                <CardActions style="text-align:right">
                    <Button primary={true}>{"Click Me"}</Button>
                </CardActions>
            </Card>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_never_updates() {
        assert!(!HomePage::should_update(&(), &()));
    }

    #[tokio::test]
    async fn test_home_renders_static_card() {
        let html = yew::ServerRenderer::<HomePage>::new()
            .hydratable(false)
            .render()
            .await;

        assert!(html.contains("mdl-shadow--4dp"));
        assert!(html.contains("Nothing to see here."));
        assert!(html.contains("Click Me"));
        assert!(html.contains(">person</i>"));
    }
}
