//! UpdatePreferenceUseCase - favorite / visibility / lock edits
//!
//! Create-default-then-update: a package without a record gets one at the
//! next free order index before the change is applied. Positions the
//! reconciler has handed out but not yet stored are persisted first, so a
//! new record never lands ahead of an app already on screen.

use std::sync::Arc;

use crate::application::services::{reconcile_stored, MutationLock};
use crate::domain::entities::AppPreference;
use crate::domain::errors::DomainError;
use crate::domain::repositories::{InstalledAppRepository, PreferenceRepository};
use crate::domain::services::PreferenceReconciler;
use crate::domain::value_objects::PreferenceChange;

pub struct UpdatePreferenceUseCase<A, P>
where
    A: InstalledAppRepository + ?Sized,
    P: PreferenceRepository + ?Sized,
{
    apps: Arc<A>,
    preferences: Arc<P>,
    lock: MutationLock,
    reconciler: PreferenceReconciler,
}

impl<A, P> UpdatePreferenceUseCase<A, P>
where
    A: InstalledAppRepository + ?Sized,
    P: PreferenceRepository + ?Sized,
{
    pub fn new(apps: Arc<A>, preferences: Arc<P>, lock: MutationLock, reconciler: PreferenceReconciler) -> Self {
        Self {
            apps,
            preferences,
            lock,
            reconciler,
        }
    }

    /// Apply `change` to the package's preference and return the stored record
    pub fn execute(
        &self,
        package_id: &str,
        change: PreferenceChange,
    ) -> Result<AppPreference, DomainError> {
        if package_id.trim().is_empty() {
            return Err(DomainError::InvalidState("package id is missing".to_string()));
        }

        let _guard = self.lock.lock();
        let mut preference = match self.preferences.get(package_id)? {
            Some(existing) => existing,
            None => self.create_default(package_id)?,
        };

        change.apply(&mut preference);
        self.preferences.upsert(preference.clone())?;
        log::debug!("Updated {}: {:?}", package_id, change);
        Ok(preference)
    }

    pub fn set_favorite(&self, package_id: &str, favorite: bool) -> Result<AppPreference, DomainError> {
        self.execute(package_id, PreferenceChange::Favorite(favorite))
    }

    pub fn set_visible(&self, package_id: &str, visible: bool) -> Result<AppPreference, DomainError> {
        self.execute(package_id, PreferenceChange::Visible(visible))
    }

    pub fn set_locked(&self, package_id: &str, locked: bool) -> Result<AppPreference, DomainError> {
        self.execute(package_id, PreferenceChange::Locked(locked))
    }

    /// Caller holds the mutation lock
    fn create_default(&self, package_id: &str) -> Result<AppPreference, DomainError> {
        let pending = reconcile_stored(&self.reconciler, &*self.apps, &*self.preferences)?;
        if pending.needs_writes() {
            log::debug!("Persisting {} order indices before creating {}", pending.writes.len(), package_id);
            self.preferences.upsert_many(pending.writes)?;
            if let Some(assigned) = self.preferences.get(package_id)? {
                return Ok(assigned);
            }
        }

        let next = self
            .preferences
            .max_order_index()?
            .map_or(0, |max| max.saturating_add(1));
        Ok(AppPreference::new(package_id).with_order(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gateways::{FilePreferenceGateway, PackageAppGateway};
    use crate::application::ports::ManualExecutor;
    use crate::application::services::AppListService;
    use crate::domain::entities::InstalledApp;
    use crate::infrastructure::manifest_package_source::ManifestPackageSource;

    type Apps = PackageAppGateway<ManifestPackageSource>;

    fn installed(apps: Vec<InstalledApp>) -> Arc<Apps> {
        let gateway = Arc::new(PackageAppGateway::new(Arc::new(ManifestPackageSource::from_apps(apps))));
        gateway.refresh().unwrap();
        gateway
    }

    fn use_case(
        prefs: Vec<AppPreference>,
    ) -> (Arc<FilePreferenceGateway>, UpdatePreferenceUseCase<Apps, FilePreferenceGateway>) {
        let store = Arc::new(FilePreferenceGateway::with_preferences(prefs));
        let use_case = UpdatePreferenceUseCase::new(
            installed(Vec::new()),
            Arc::clone(&store),
            MutationLock::new(),
            PreferenceReconciler::default(),
        );
        (store, use_case)
    }

    #[test]
    fn test_missing_record_created_at_next_index() {
        let (store, use_case) = use_case(vec![
            AppPreference::new("a").with_order(0),
            AppPreference::new("b").with_order(4),
            AppPreference::new("unplaced"),
        ]);

        let created = use_case.set_favorite("new.app", true).unwrap();

        assert_eq!(created.order_index, 5);
        assert!(created.is_favorite);
        assert_eq!(store.get("new.app").unwrap(), Some(created));
    }

    #[test]
    fn test_first_record_starts_at_zero() {
        let (_, use_case) = use_case(Vec::new());
        assert_eq!(use_case.set_locked("a", true).unwrap().order_index, 0);
    }

    #[test]
    fn test_existing_record_keeps_other_fields() {
        let (store, use_case) = use_case(vec![AppPreference::new("a").with_order(2).with_favorite(true)]);

        use_case.set_visible("a", false).unwrap();
        use_case.set_locked("a", true).unwrap();

        let stored = store.get("a").unwrap().unwrap();
        assert_eq!(stored.order_index, 2);
        assert!(stored.is_favorite);
        assert!(!stored.is_visible);
        assert!(stored.is_locked);
    }

    #[test]
    fn test_set_favorite_is_not_a_toggle() {
        let (store, use_case) = use_case(Vec::new());
        use_case.set_favorite("a", true).unwrap();
        use_case.set_favorite("a", true).unwrap();
        assert!(store.get("a").unwrap().unwrap().is_favorite);

        use_case.set_favorite("a", false).unwrap();
        assert!(!store.get("a").unwrap().unwrap().is_favorite);
    }

    #[test]
    fn test_blank_package_rejected() {
        let (_, use_case) = use_case(Vec::new());
        assert!(matches!(
            use_case.set_visible("  ", false),
            Err(DomainError::InvalidState(_))
        ));
    }

    #[test]
    fn test_favorite_before_indices_persisted_keeps_order() {
        let apps = installed(vec![
            InstalledApp::new("Alpha", "a"),
            InstalledApp::new("Beta", "b"),
            InstalledApp::new("Gamma", "c"),
        ]);
        let store = Arc::new(FilePreferenceGateway::in_memory());
        let executor = Arc::new(ManualExecutor::new());
        let lock = MutationLock::new();
        let service = AppListService::new(
            Arc::clone(&apps),
            Arc::clone(&store),
            executor.clone(),
            lock.clone(),
            PreferenceReconciler::default(),
        );
        let use_case = UpdatePreferenceUseCase::new(apps, Arc::clone(&store), lock, PreferenceReconciler::default());

        // The favorite lands before the queued index job has run
        assert_eq!(executor.pending(), 1);
        let favorite = use_case.set_favorite("c", true).unwrap();
        executor.run_pending();

        assert_eq!(favorite.order_index, 2);
        let names: Vec<String> = service.current().items.into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
        assert_eq!(store.get("a").unwrap().unwrap().order_index, 0);
    }
}
