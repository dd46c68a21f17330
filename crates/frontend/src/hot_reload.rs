//! Development re-render hook.
//!
//! Dev tooling signals a reload by dispatching [`HOT_RELOAD_EVENT`] on the
//! window; the controller then re-renders into its existing target.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;

use crate::boot::Controller;
use crate::config::HOT_RELOAD_EVENT;
use crate::error::{AppError, Result};

/// Listen for reload signals for the lifetime of the page.
pub fn install(controller: Rc<RefCell<Controller>>) -> Result<()> {
    let window = web_sys::window().ok_or(AppError::NoWindow)?;

    EventListener::new(&window, HOT_RELOAD_EVENT, move |_| {
        let controller = controller.clone();
        // Defer so the reload never runs inside another render.
        Timeout::new(0, move || {
            log::info!("hot reload");
            if let Err(err) = controller.borrow_mut().boot() {
                log::error!("hot reload failed: {err}");
            }
        })
        .forget();
    })
    .forget();

    log::debug!("listening for {HOT_RELOAD_EVENT}");
    Ok(())
}
