//! LaunchAppUseCase - launch, inspect or uninstall an application
//!
//! Every platform intent goes through a capability port; this use case only
//! decides whether the request makes sense.

use std::sync::Arc;

use thiserror::Error;

use crate::application::ports::{AppLauncher, AppUninstaller, PlatformError, SystemSettingsOpener};
use crate::domain::repositories::InstalledAppRepository;

/// Error for launch operations
#[derive(Error, Debug)]
pub enum LaunchError {
    /// Package id was empty
    #[error("Package id is missing")]
    MissingPackage,
    /// Application not installed
    #[error("Application not found: {0}")]
    NotFound(String),
    /// Platform refused the request
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

/// Use case for package-level platform actions
pub struct LaunchAppUseCase<A>
where
    A: InstalledAppRepository + ?Sized,
{
    apps: Arc<A>,
    launcher: Arc<dyn AppLauncher>,
    uninstaller: Arc<dyn AppUninstaller>,
    settings_opener: Arc<dyn SystemSettingsOpener>,
}

impl<A> LaunchAppUseCase<A>
where
    A: InstalledAppRepository + ?Sized,
{
    pub fn new(
        apps: Arc<A>,
        launcher: Arc<dyn AppLauncher>,
        uninstaller: Arc<dyn AppUninstaller>,
        settings_opener: Arc<dyn SystemSettingsOpener>,
    ) -> Self {
        Self {
            apps,
            launcher,
            uninstaller,
            settings_opener,
        }
    }

    /// Launch an installed application
    pub fn launch(&self, package_id: &str) -> Result<(), LaunchError> {
        self.require_installed(package_id)?;
        log::info!("Launching {}", package_id);
        self.launcher.launch(package_id)?;
        Ok(())
    }

    /// Open the system details screen for an application
    pub fn show_info(&self, package_id: &str) -> Result<(), LaunchError> {
        Self::require_package(package_id)?;
        self.settings_opener.open_app_details(package_id)?;
        Ok(())
    }

    /// Ask the platform to uninstall an application
    pub fn uninstall(&self, package_id: &str) -> Result<(), LaunchError> {
        self.require_installed(package_id)?;
        self.uninstaller.uninstall(package_id)?;
        log::info!("Requested uninstall of {}", package_id);
        Ok(())
    }

    fn require_package(package_id: &str) -> Result<(), LaunchError> {
        if package_id.trim().is_empty() {
            return Err(LaunchError::MissingPackage);
        }
        Ok(())
    }

    fn require_installed(&self, package_id: &str) -> Result<(), LaunchError> {
        Self::require_package(package_id)?;
        if !self.apps.is_installed(package_id) {
            return Err(LaunchError::NotFound(package_id.to_string()));
        }
        Ok(())
    }
}
