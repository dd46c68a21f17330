//! Main application component with routing.

use web_sys::Element;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{
    Button, Icon, Layout, LayoutContent, LayoutDrawer, LayoutHeader, LayoutHeaderRow,
    LayoutSpacer, LayoutTitle, NavLink, Navigation, TextField, mdl,
};
use crate::error::{AppError, Result};
use crate::handler::Handler;
use crate::pages::{HomePage, ProfilePage};
use crate::update::ShouldUpdate;

/// Identifier shown on `/profile`.
pub const OWN_PROFILE_ID: &str = "me";

/// Application routes.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[not_found]
    #[at("/")]
    Home,
    #[at("/profile")]
    OwnProfile,
    #[at("/profile/:id")]
    Profile { id: String },
}

/// Route switch function.
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::OwnProfile => html! { <ProfilePage id={OWN_PROFILE_ID} /> },
        Route::Profile { id } => html! { <ProfilePage {id} /> },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Shell />
        </BrowserRouter>
    }
}

/// Event slots wired into the shell.
#[derive(Clone, PartialEq, Debug)]
pub struct ShellHandlers {
    pub on_search: Handler<String>,
    pub on_fab: Handler<()>,
    pub on_drawer_click: Handler<()>,
}

impl ShellHandlers {
    /// Search and FAB have no behavior yet; the drawer toggles itself.
    pub fn new(toggle_drawer: Callback<()>) -> Self {
        Self {
            on_search: Handler::unimplemented("search"),
            on_fab: Handler::unimplemented("fab"),
            on_drawer_click: Handler::bound(toggle_drawer),
        }
    }
}

/// Toggle the drawer inside the mounted layout.
///
/// Returns whether the drawer is now visible.
pub fn toggle_drawer(layout: &NodeRef) -> Result<bool> {
    let layout = layout
        .cast::<Element>()
        .ok_or(AppError::LayoutNotMounted)?;
    let drawer = layout
        .query_selector(".mdl-layout__drawer")
        .map_err(AppError::dom)?
        .ok_or(AppError::DrawerMissing)?;
    let visible = drawer.class_list().toggle("is-visible").map_err(AppError::dom)?;

    // MDL inserts the obfuscator on upgrade; it is absent before that.
    if let Some(obfuscator) = layout
        .query_selector(".mdl-layout__obfuscator")
        .map_err(AppError::dom)?
    {
        obfuscator
            .class_list()
            .toggle_with_force("is-visible", visible)
            .map_err(AppError::dom)?;
    }

    Ok(visible)
}

pub enum ShellMsg {
    ToggleDrawer,
}

/// Top-level layout: header, drawer, FAB and the routed page.
///
/// Must be rendered inside a router.
pub struct Shell {
    layout: NodeRef,
    handlers: ShellHandlers,
}

impl Component for Shell {
    type Message = ShellMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            layout: NodeRef::default(),
            handlers: ShellHandlers::new(ctx.link().callback(|()| ShellMsg::ToggleDrawer)),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ShellMsg::ToggleDrawer => match toggle_drawer(&self.layout) {
                Ok(visible) => log::debug!("drawer visible: {visible}"),
                Err(err) => log::warn!("cannot toggle drawer: {err}"),
            },
        }
        false
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let handlers = &self.handlers;

        html! {
            <Layout fixed_header={true} fixed_drawer={true} layout_ref={self.layout.clone()}>
                <Header on_search={handlers.on_search.clone()} />
                <Sidebar on_drawer_click={handlers.on_drawer_click.clone()} />

                <Fab on_click={handlers.on_fab.clone()} />

                <LayoutContent>
                    <Switch<Route> render={switch} />
                </LayoutContent>
            </Layout>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            mdl::upgrade_dom();
        }
    }
}

/// Properties for Header.
#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_search: Handler<String>,
}

/// Header bar with site title and search field.
#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    html! {
        <LayoutHeader>
            <LayoutHeaderRow>
                <LayoutTitle>
                    <a href="/">{"Example"}</a>
                </LayoutTitle>
                <LayoutSpacer />
                <TextField
                    placeholder="Search"
                    input_type="search"
                    on_search={props.on_search.clone()}
                    style="background-color:#FFF; color:#000; padding:10px;"
                />
            </LayoutHeaderRow>
        </LayoutHeader>
    }
}

/// Properties for Sidebar.
#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub on_drawer_click: Handler<()>,
}

/// Drawer navigation. Static, so it never re-renders once mounted.
struct Sidebar;

impl ShouldUpdate for Sidebar {
    fn should_update(_prev: &SidebarProps, _next: &SidebarProps) -> bool {
        false
    }
}

impl Component for Sidebar {
    type Message = ();
    type Properties = SidebarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        Self::should_update(old_props, ctx.props())
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.props().on_drawer_click.reform(|_: MouseEvent| ());

        html! {
            <LayoutDrawer {onclick}>
                <LayoutTitle>{"Example App"}</LayoutTitle>
                <Navigation>
                    <NavLink to={Route::Home}>{"Home"}</NavLink>
                    <NavLink to={Route::OwnProfile}>{"Profile"}</NavLink>
                    <NavLink to={Route::Profile { id: "john".to_string() }}>{"John"}</NavLink>
                </Navigation>
            </LayoutDrawer>
        }
    }
}

/// Properties for Fab.
#[derive(Properties, PartialEq)]
pub struct FabProps {
    pub on_click: Handler<()>,
}

/// Floating action button.
#[function_component(Fab)]
fn fab(props: &FabProps) -> Html {
    let onclick = props.on_click.reform(|_: MouseEvent| ());

    html! {
        <Button id="fab" fab={true} colored={true} {onclick}>
            <Icon icon="create" />
        </Button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::Dispatch;
    use std::cell::Cell;
    use std::rc::Rc;
    use yew_router::history::{AnyHistory, MemoryHistory};

    #[derive(Properties, PartialEq)]
    struct AtPathProps {
        path: AttrValue,
    }

    /// Renders the shell as if the browser were at `path`.
    #[function_component(AtPath)]
    fn at_path(props: &AtPathProps) -> Html {
        let history = AnyHistory::from(MemoryHistory::with_entries(vec![props.path.to_string()]));

        html! {
            <Router {history}>
                <Shell />
            </Router>
        }
    }

    async fn render_at(path: &'static str) -> String {
        yew::ServerRenderer::<AtPath>::with_props(move || AtPathProps { path: path.into() })
            .hydratable(false)
            .render()
            .await
    }

    #[test]
    fn test_recognize_routes() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/profile"), Some(Route::OwnProfile));
        assert_eq!(
            Route::recognize("/profile/alice"),
            Some(Route::Profile { id: "alice".to_string() })
        );
    }

    #[test]
    fn test_unmatched_path_falls_back_to_home() {
        assert_eq!(Route::recognize("/settings"), Some(Route::Home));
        assert_eq!(Route::recognize("/profile/alice/extra"), Some(Route::Home));
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::OwnProfile.to_path(), "/profile");
        assert_eq!(Route::Profile { id: "john".to_string() }.to_path(), "/profile/john");
    }

    #[test]
    fn test_stub_handlers_report_unimplemented() {
        let handlers = ShellHandlers::new(Callback::from(|()| ()));

        assert_eq!(handlers.on_fab.emit(()), Dispatch::Unimplemented("fab"));
        assert_eq!(
            handlers.on_search.emit("query".to_string()),
            Dispatch::Unimplemented("search")
        );
    }

    #[test]
    fn test_drawer_handler_is_bound() {
        let toggled = Rc::new(Cell::new(0));
        let handlers = {
            let toggled = toggled.clone();
            ShellHandlers::new(Callback::from(move |()| toggled.set(toggled.get() + 1)))
        };

        assert!(handlers.on_drawer_click.is_bound());
        assert_eq!(handlers.on_drawer_click.emit(()), Dispatch::Handled);
        assert_eq!(toggled.get(), 1);
    }

    #[test]
    fn test_toggle_drawer_before_mount() {
        assert_eq!(toggle_drawer(&NodeRef::default()), Err(AppError::LayoutNotMounted));
    }

    #[test]
    fn test_sidebar_never_updates() {
        let props = SidebarProps {
            on_drawer_click: Handler::unimplemented("drawer"),
        };

        assert!(!Sidebar::should_update(&props, &props));
    }

    #[tokio::test]
    async fn test_profile_path_renders_user() {
        let html = render_at("/profile/alice").await;

        assert!(html.contains("User: alice"));
    }

    #[tokio::test]
    async fn test_own_profile_renders_me() {
        let html = render_at("/profile").await;

        assert!(html.contains("User: me"));
    }

    #[tokio::test]
    async fn test_root_and_unknown_paths_render_home() {
        for path in ["/", "/does/not/exist"] {
            let html = render_at(path).await;

            assert!(html.contains("Nothing to see here."), "{path}");
            assert!(!html.contains("User:"), "{path}");
        }
    }

    #[tokio::test]
    async fn test_shell_chrome() {
        let html = render_at("/").await;

        assert!(html.contains("mdl-layout--fixed-header"));
        assert!(html.contains("mdl-layout--fixed-drawer"));
        assert!(html.contains("Example App"));
        assert!(html.contains(r#"placeholder="Search""#));
        assert!(html.contains(r#"id="fab""#));
        assert!(html.contains(r#"href="/profile/john""#));
    }
}
