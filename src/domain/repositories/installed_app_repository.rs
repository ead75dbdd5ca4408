//! InstalledAppRepository - interface to the live set of installed apps

use crate::domain::entities::InstalledApp;
use crate::domain::errors::DomainError;
use crate::shared::observable::Observable;

/// Repository interface for installed applications
pub trait InstalledAppRepository: Send + Sync {
    /// Live app list; `None` until the first refresh completes
    fn apps(&self) -> Observable<Option<Vec<InstalledApp>>>;

    /// Re-query the platform and publish the result
    fn refresh(&self) -> Result<(), DomainError>;

    /// Check if a package is currently installed
    fn is_installed(&self, package_id: &str) -> bool;

    /// Current list (empty before the first refresh)
    fn snapshot(&self) -> Vec<InstalledApp> {
        self.apps().get().unwrap_or_default()
    }
}

/// A null implementation for testing
pub struct NullInstalledAppRepository {
    apps: Observable<Option<Vec<InstalledApp>>>,
}

impl NullInstalledAppRepository {
    pub fn new() -> Self {
        Self {
            apps: Observable::new(Some(Vec::new())),
        }
    }
}

impl Default for NullInstalledAppRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InstalledAppRepository for NullInstalledAppRepository {
    fn apps(&self) -> Observable<Option<Vec<InstalledApp>>> {
        self.apps.clone()
    }

    fn refresh(&self) -> Result<(), DomainError> {
        Ok(())
    }

    fn is_installed(&self, package_id: &str) -> bool {
        self.snapshot().iter().any(|a| a.package_id == package_id)
    }
}
