//! Material Design Lite building blocks.
//!
//! Thin wrappers that emit MDL markup; styling and behavior come from the MDL
//! stylesheet and script loaded by `index.html`.

mod button;
mod card;
mod layout;
pub mod mdl;
mod navigation;
mod text_field;

pub use button::{Button, Icon};
pub use card::{Card, CardActions, CardText, CardTitle, CardTitleText};
pub use layout::{
    Layout, LayoutContent, LayoutDrawer, LayoutHeader, LayoutHeaderRow, LayoutSpacer, LayoutTitle,
};
pub use navigation::{NavLink, Navigation};
pub use text_field::TextField;
