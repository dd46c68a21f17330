//! Build-time configuration.
//!
//! The build mode comes from the `APP_ENV` variable seen by the compiler.
//! When it is unset the build profile decides: debug builds are treated as
//! development, release builds as production.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Id of the host element the app mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

/// Window event that asks a development build to re-render.
pub const HOT_RELOAD_EVENT: &str = "app:hot-reload";

/// Which environment the bundle was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Production,
    Development,
    /// `APP_ENV` held something else; neither production nor development
    /// behavior is enabled.
    Unspecified,
}

impl BuildMode {
    /// Resolve the mode from a raw `APP_ENV` value and the build profile.
    ///
    /// Unknown values resolve to [`BuildMode::Unspecified`] and the parse
    /// error is handed back so the caller can report it.
    pub fn resolve(raw: Option<&str>, debug_build: bool) -> (Self, Option<AppError>) {
        match raw.map(str::parse::<Self>) {
            Some(Ok(mode)) => (mode, None),
            Some(Err(err)) => (Self::Unspecified, Some(err)),
            None if debug_build => (Self::Development, None),
            None => (Self::Production, None),
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }

    pub fn is_development(self) -> bool {
        self == Self::Development
    }
}

impl FromStr for BuildMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "development" => Ok(Self::Development),
            _ => Err(AppError::UnknownBuildMode(s.to_string())),
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Production => "production",
            Self::Development => "development",
            Self::Unspecified => "unspecified",
        };
        f.write_str(name)
    }
}

/// Settings the bootstrap routine runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: BuildMode,
    pub mount_id: &'static str,
}

impl AppConfig {
    /// Config for the given mode, mounting at [`MOUNT_ELEMENT_ID`].
    pub fn new(mode: BuildMode) -> Self {
        Self {
            mode,
            mount_id: MOUNT_ELEMENT_ID,
        }
    }

    /// Config baked in at compile time.
    ///
    /// Returns the parse error alongside the config when `APP_ENV` was set to
    /// something unrecognised, since logging is not initialised yet.
    pub fn from_build_env() -> (Self, Option<AppError>) {
        let (mode, err) = BuildMode::resolve(option_env!("APP_ENV"), cfg!(debug_assertions));
        (Self::new(mode), err)
    }

    /// Log level for the browser console.
    pub fn log_level(&self) -> log::Level {
        if self.mode.is_development() {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_modes() {
        assert_eq!("production".parse::<BuildMode>(), Ok(BuildMode::Production));
        assert_eq!("Development".parse::<BuildMode>(), Ok(BuildMode::Development));
        assert_eq!(" PRODUCTION ".parse::<BuildMode>(), Ok(BuildMode::Production));
    }

    #[test]
    fn test_parse_unknown_mode() {
        assert_eq!(
            "staging".parse::<BuildMode>(),
            Err(AppError::UnknownBuildMode("staging".to_string()))
        );
    }

    #[test]
    fn test_resolve_falls_back_to_build_profile() {
        assert_eq!(BuildMode::resolve(None, true), (BuildMode::Development, None));
        assert_eq!(BuildMode::resolve(None, false), (BuildMode::Production, None));
    }

    #[test]
    fn test_resolve_explicit_value_wins() {
        assert_eq!(
            BuildMode::resolve(Some("production"), true),
            (BuildMode::Production, None)
        );
    }

    #[test]
    fn test_resolve_unknown_value_is_unspecified() {
        let (mode, err) = BuildMode::resolve(Some("test"), true);

        assert_eq!(mode, BuildMode::Unspecified);
        assert!(!mode.is_production());
        assert!(!mode.is_development());
        assert_eq!(err, Some(AppError::UnknownBuildMode("test".to_string())));
    }

    #[test]
    fn test_log_level_by_mode() {
        assert_eq!(AppConfig::new(BuildMode::Development).log_level(), log::Level::Debug);
        assert_eq!(AppConfig::new(BuildMode::Production).log_level(), log::Level::Info);
        assert_eq!(AppConfig::new(BuildMode::Unspecified).mount_id, "app");
    }
}
