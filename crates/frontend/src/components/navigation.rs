//! Navigation list components.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Properties for Navigation.
#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    #[prop_or_default]
    pub children: Children,
}

/// Navigation list.
#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    html! {
        <nav class="mdl-navigation">
            { props.children.clone() }
        </nav>
    }
}

/// Properties for NavLink.
#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub to: Route,
    #[prop_or_default]
    pub children: Children,
}

/// Client-side navigation link styled as an MDL navigation entry.
#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    html! {
        <Link<Route> to={props.to.clone()} classes="mdl-navigation__link">
            { props.children.clone() }
        </Link<Route>>
    }
}
