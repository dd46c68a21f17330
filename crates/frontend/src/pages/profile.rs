//! Profile page component.

use yew::prelude::*;

use crate::components::{Card, CardText, CardTitle, CardTitleText, mdl};
use crate::update::ShouldUpdate;

/// Properties for ProfilePage.
#[derive(Properties, PartialEq, Debug, Clone, Default)]
pub struct ProfilePageProps {
    /// User identifier; empty means the current user.
    #[prop_or_default]
    pub id: AttrValue,
}

/// Profile page for a single user.
pub struct ProfilePage;

impl ShouldUpdate for ProfilePage {
    fn should_update(prev: &ProfilePageProps, next: &ProfilePageProps) -> bool {
        prev.id != next.id
    }
}

impl Component for ProfilePage {
    type Message = ();
    type Properties = ProfilePageProps;

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

    fn view(&self, ctx: &Context<Self>) -> Html {
        let id = &ctx.props().id;

        html! {
            <div class="profile">
                <Card shadow={3_u8} class="wide">
                    <CardTitle class="graphic">
                        <CardTitleText>{ format!("User: {id}") }</CardTitleText>
                    </CardTitle>
                    <CardText>
                        <p>{ format!("This is a profile for the user {id}.") }</p>
                    </CardText>
                </Card>
            </div>
        }
    }
}
