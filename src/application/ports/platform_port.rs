//! Platform capability ports
//!
//! Launching, uninstalling and opening system settings for a package are
//! platform intents. Each is its own capability so consumers only receive
//! what they use.

use thiserror::Error;

/// Platform operation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// No launchable entry point for the package
    #[error("No launch target for {0}")]
    NoLaunchTarget(String),
    /// Nothing on the device handles the request
    #[error("No handler for {action} on {package}")]
    NoHandler { action: String, package: String },
    /// Query against the package manager failed
    #[error("Package query failed: {0}")]
    QueryFailed(String),
    /// Permission denied
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}

/// Starts an app
pub trait AppLauncher: Send + Sync {
    fn launch(&self, package_id: &str) -> Result<(), PlatformError>;
}

/// Requests removal of an app (the platform asks the user to confirm)
pub trait AppUninstaller: Send + Sync {
    fn uninstall(&self, package_id: &str) -> Result<(), PlatformError>;
}

/// Opens the system "app details" screen
pub trait SystemSettingsOpener: Send + Sync {
    fn open_app_details(&self, package_id: &str) -> Result<(), PlatformError>;
}

/// A null platform for testing; every request succeeds and does nothing
pub struct NullPlatform;

impl AppLauncher for NullPlatform {
    fn launch(&self, _package_id: &str) -> Result<(), PlatformError> {
        Ok(())
    }
}

impl AppUninstaller for NullPlatform {
    fn uninstall(&self, _package_id: &str) -> Result<(), PlatformError> {
        Ok(())
    }
}

impl SystemSettingsOpener for NullPlatform {
    fn open_app_details(&self, _package_id: &str) -> Result<(), PlatformError> {
        Ok(())
    }
}
