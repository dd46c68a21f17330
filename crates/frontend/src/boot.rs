//! Bootstrap: mount target selection and the render controller.

use web_sys::Element;
use yew::AppHandle;

use crate::app::App;
use crate::config::AppConfig;
use crate::error::{AppError, Result};

/// Where the app is rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum MountTarget<E> {
    /// The host page's element.
    Existing(E),
    /// Fallback element outside the document; renders but is not visible.
    Detached(E),
}

impl<E> MountTarget<E> {
    pub fn element(&self) -> &E {
        match self {
            Self::Existing(element) | Self::Detached(element) => element,
        }
    }

    pub fn is_detached(&self) -> bool {
        matches!(self, Self::Detached(_))
    }
}

/// Prefer the existing element, else create a detached one.
pub fn select_mount_target<E, F>(existing: Option<E>, create_detached: F) -> Result<MountTarget<E>>
where
    F: FnOnce() -> Result<E>,
{
    match existing {
        Some(element) => Ok(MountTarget::Existing(element)),
        None => create_detached().map(MountTarget::Detached),
    }
}

/// Look up `#mount_id` in the current document.
pub fn find_mount_target(mount_id: &str) -> Result<MountTarget<Element>> {
    let document = web_sys::window()
        .ok_or(AppError::NoWindow)?
        .document()
        .ok_or(AppError::NoDocument)?;

    select_mount_target(document.get_element_by_id(mount_id), || {
        document
            .create_element("div")
            .map_err(|err| AppError::ElementCreation(format!("{err:?}")))
    })
}

/// Owns the mount target and the handle of the rendered app.
///
/// The target is resolved on the first boot and reused afterwards, so a
/// re-render lands in the same place even on the detached fallback.
pub struct Controller {
    config: AppConfig,
    target: Option<MountTarget<Element>>,
    mount: Option<AppHandle<App>>,
    renders: u32,
}

impl Controller {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            target: None,
            mount: None,
            renders: 0,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.is_some()
    }

    /// Number of completed boots.
    pub fn renders(&self) -> u32 {
        self.renders
    }

    pub fn target(&self) -> Option<&MountTarget<Element>> {
        self.target.as_ref()
    }

    /// Render the app, replacing any previous mount.
    ///
    /// Yew cannot diff a new render against an old root, so the previous
    /// handle is destroyed rather than reused; the mount target is kept.
    pub fn boot(&mut self) -> Result<()> {
        let root = match &self.target {
            Some(target) => target.element().clone(),
            None => {
                let target = find_mount_target(self.config.mount_id)?;
                if target.is_detached() {
                    log::warn!(
                        "#{} not found, rendering into a detached element",
                        self.config.mount_id
                    );
                }
                let root = target.element().clone();
                self.target = Some(target);
                root
            }
        };

        if let Some(previous) = self.mount.take() {
            previous.destroy();
        }

        self.mount = Some(yew::Renderer::<App>::with_root(root).render());
        self.renders += 1;
        log::debug!("render #{} in {} mode", self.renders, self.config.mode);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildMode;

    #[test]
    fn test_existing_element_is_used() {
        let target = select_mount_target(Some("app"), || -> Result<&str> {
            panic!("fallback must not be created")
        })
        .unwrap();

        assert_eq!(target, MountTarget::Existing("app"));
        assert!(!target.is_detached());
    }

    #[test]
    fn test_missing_element_falls_back_to_detached() {
        let target = select_mount_target(None, || Ok("div")).unwrap();

        assert!(target.is_detached());
        assert_eq!(*target.element(), "div");
    }

    #[test]
    fn test_fallback_creation_error_propagates() {
        let result = select_mount_target::<&str, _>(None, || Err(AppError::NoDocument));

        assert_eq!(result, Err(AppError::NoDocument));
    }

    #[test]
    fn test_new_controller_is_unmounted() {
        let controller = Controller::new(AppConfig::new(BuildMode::Development));

        assert!(!controller.is_mounted());
        assert!(controller.target().is_none());
        assert_eq!(controller.renders(), 0);
        assert_eq!(controller.config().mount_id, "app");
    }
}
