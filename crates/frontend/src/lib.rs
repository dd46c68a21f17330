//! Example App - Yew WASM Frontend
//!
//! A single-page shell: header with search, navigation drawer, floating
//! action button, and routed Home and Profile pages styled with Material
//! Design Lite.

mod app;
mod boot;
mod components;
mod config;
mod error;
mod handler;
mod hot_reload;
mod offline;
mod pages;
mod update;

pub use app::{App, OWN_PROFILE_ID, Route, Shell, ShellHandlers, switch, toggle_drawer};
pub use boot::{Controller, MountTarget, find_mount_target, select_mount_target};
pub use config::{AppConfig, BuildMode, HOT_RELOAD_EVENT, MOUNT_ELEMENT_ID};
pub use error::{AppError, Result};
pub use handler::{Dispatch, Handler};
pub use pages::{HomePage, ProfilePage, ProfilePageProps};
pub use update::ShouldUpdate;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let (config, config_err) = AppConfig::from_build_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    if let Some(err) = config_err {
        log::warn!("{err}, production and development features are off");
    }
    log::info!("booting in {} mode", config.mode);

    let controller = Rc::new(RefCell::new(Controller::new(config)));
    if let Err(err) = controller.borrow_mut().boot() {
        log::error!("boot failed: {err}");
        return;
    }

    if config.mode.is_production() {
        offline::register();
    }

    if config.mode.is_development()
        && let Err(err) = hot_reload::install(controller)
    {
        log::warn!("hot reload unavailable: {err}");
    }
}
