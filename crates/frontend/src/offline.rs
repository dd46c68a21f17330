//! Offline support for production builds.

/// Service worker registration. Not implemented yet; only logs.
pub fn register() {
    log::info!("offline support is not implemented, skipping service worker registration");
}
