//! DesktopPlatform - platform intents on a machine without a package manager
//!
//! Intents are logged and acknowledged; packages the manifest does not list
//! have no launch target.

use std::sync::Arc;

use crate::application::ports::{AppLauncher, AppUninstaller, PlatformError, SystemSettingsOpener};
use crate::domain::repositories::InstalledAppRepository;

pub struct DesktopPlatform {
    apps: Arc<dyn InstalledAppRepository>,
}

impl DesktopPlatform {
    pub fn new(apps: Arc<dyn InstalledAppRepository>) -> Self {
        Self { apps }
    }
}

impl AppLauncher for DesktopPlatform {
    fn launch(&self, package_id: &str) -> Result<(), PlatformError> {
        if !self.apps.is_installed(package_id) {
            return Err(PlatformError::NoLaunchTarget(package_id.to_string()));
        }
        log::info!("Launch intent for {}", package_id);
        Ok(())
    }
}

impl AppUninstaller for DesktopPlatform {
    fn uninstall(&self, package_id: &str) -> Result<(), PlatformError> {
        log::info!("Uninstall intent for {}", package_id);
        Ok(())
    }
}

impl SystemSettingsOpener for DesktopPlatform {
    fn open_app_details(&self, package_id: &str) -> Result<(), PlatformError> {
        Err(PlatformError::NoHandler {
            action: "app details".to_string(),
            package: package_id.to_string(),
        })
    }
}
