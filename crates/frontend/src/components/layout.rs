//! Layout shell components (MDL `mdl-layout`).

use yew::prelude::*;

/// Properties for Layout.
#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub fixed_header: bool,
    #[prop_or_default]
    pub fixed_drawer: bool,
    /// Filled with the layout element once it is mounted.
    #[prop_or_default]
    pub layout_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

/// Outer layout element holding header, drawer and content.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let classes = classes!(
        "mdl-layout",
        "mdl-js-layout",
        props.fixed_header.then_some("mdl-layout--fixed-header"),
        props.fixed_drawer.then_some("mdl-layout--fixed-drawer")
    );

    html! {
        <div class={classes} ref={props.layout_ref.clone()}>
            { props.children.clone() }
        </div>
    }
}

/// Properties for the plain layout pieces.
#[derive(Properties, PartialEq)]
pub struct LayoutPartProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LayoutHeader)]
pub fn layout_header(props: &LayoutPartProps) -> Html {
    html! {
        <header class="mdl-layout__header">
            { props.children.clone() }
        </header>
    }
}

#[function_component(LayoutHeaderRow)]
pub fn layout_header_row(props: &LayoutPartProps) -> Html {
    html! {
        <div class="mdl-layout__header-row">
            { props.children.clone() }
        </div>
    }
}

#[function_component(LayoutTitle)]
pub fn layout_title(props: &LayoutPartProps) -> Html {
    html! {
        <span class="mdl-layout-title">
            { props.children.clone() }
        </span>
    }
}

/// Pushes following header items to the right.
#[function_component(LayoutSpacer)]
pub fn layout_spacer() -> Html {
    html! { <div class="mdl-layout-spacer"></div> }
}

/// Main content area.
#[function_component(LayoutContent)]
pub fn layout_content(props: &LayoutPartProps) -> Html {
    html! {
        <main class="mdl-layout__content">
            { props.children.clone() }
        </main>
    }
}

/// Properties for LayoutDrawer.
#[derive(Properties, PartialEq)]
pub struct LayoutDrawerProps {
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// Side drawer.
#[function_component(LayoutDrawer)]
pub fn layout_drawer(props: &LayoutDrawerProps) -> Html {
    html! {
        <div class="mdl-layout__drawer" onclick={props.onclick.clone()}>
            { props.children.clone() }
        </div>
    }
}
