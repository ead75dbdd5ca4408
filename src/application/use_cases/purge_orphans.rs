//! PurgeOrphansUseCase - delete preferences of uninstalled packages
//!
//! Orphaned records are kept by default so settings survive a reinstall;
//! this is the explicit way to drop them.

use std::sync::Arc;

use crate::application::services::MutationLock;
use crate::domain::errors::DomainError;
use crate::domain::repositories::{InstalledAppRepository, PreferenceRepository};

pub struct PurgeOrphansUseCase<A, P>
where
    A: InstalledAppRepository + ?Sized,
    P: PreferenceRepository + ?Sized,
{
    apps: Arc<A>,
    preferences: Arc<P>,
    lock: MutationLock,
}

impl<A, P> PurgeOrphansUseCase<A, P>
where
    A: InstalledAppRepository + ?Sized,
    P: PreferenceRepository + ?Sized,
{
    pub fn new(apps: Arc<A>, preferences: Arc<P>, lock: MutationLock) -> Self {
        Self {
            apps,
            preferences,
            lock,
        }
    }

    /// Delete orphaned records; returns the purged package ids
    pub fn execute(&self) -> Result<Vec<String>, DomainError> {
        // An unloaded app list would make every record look orphaned
        if self.apps.apps().get().is_none() {
            return Err(DomainError::InvalidState(
                "installed apps have not been loaded".to_string(),
            ));
        }

        let _guard = self.lock.lock();
        let orphans: Vec<String> = self
            .preferences
            .get_all()?
            .into_iter()
            .filter(|p| !self.apps.is_installed(&p.package_id))
            .map(|p| p.package_id)
            .collect();

        for package_id in &orphans {
            self.preferences.delete(package_id)?;
        }
        if !orphans.is_empty() {
            log::info!("Purged {} orphaned preferences", orphans.len());
        }
        Ok(orphans)
    }
}
