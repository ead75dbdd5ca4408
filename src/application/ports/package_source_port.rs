//! PackageSourcePort - interface to the platform package manager

use crate::application::ports::platform_port::PlatformError;
use crate::domain::entities::{InstalledApp, LaunchCategory};

/// Port interface for querying launchable packages
pub trait PackageSourcePort: Send + Sync {
    /// Apps exposing an entry point of the given category.
    /// No ordering guarantee; a package may appear in several categories.
    fn query(&self, category: LaunchCategory) -> Result<Vec<InstalledApp>, PlatformError>;
}

/// A null package source for testing
pub struct NullPackageSource;

impl PackageSourcePort for NullPackageSource {
    fn query(&self, _category: LaunchCategory) -> Result<Vec<InstalledApp>, PlatformError> {
        Ok(Vec::new())
    }
}
