//! Error types for the app shell.

use thiserror::Error;

/// Errors raised while booting or driving the shell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("no global window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("failed to create element: {0}")]
    ElementCreation(String),

    #[error("layout shell is not mounted yet")]
    LayoutNotMounted,

    #[error("layout shell has no drawer")]
    DrawerMissing,

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("unknown build mode: {0}")]
    UnknownBuildMode(String),
}

impl AppError {
    /// Wrap a JS exception thrown by a DOM call.
    pub fn dom(err: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{err:?}"))
    }
}

/// Result type for shell operations.
pub type Result<T> = std::result::Result<T, AppError>;
