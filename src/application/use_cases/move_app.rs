//! MoveAppUseCase - move an app one position earlier or later
//!
//! Works on the freshly reconciled full list and rewrites every order index,
//! so stored order and displayed order cannot drift apart.

use std::sync::Arc;

use crate::application::services::{reconcile_stored, MutationLock};
use crate::domain::errors::DomainError;
use crate::domain::repositories::{InstalledAppRepository, PreferenceRepository};
use crate::domain::services::{plan_move, PreferenceReconciler};
use crate::domain::value_objects::MoveDirection;

pub struct MoveAppUseCase<A, P>
where
    A: InstalledAppRepository + ?Sized,
    P: PreferenceRepository + ?Sized,
{
    apps: Arc<A>,
    preferences: Arc<P>,
    lock: MutationLock,
    reconciler: PreferenceReconciler,
}

impl<A, P> MoveAppUseCase<A, P>
where
    A: InstalledAppRepository + ?Sized,
    P: PreferenceRepository + ?Sized,
{
    pub fn new(
        apps: Arc<A>,
        preferences: Arc<P>,
        lock: MutationLock,
        reconciler: PreferenceReconciler,
    ) -> Self {
        Self {
            apps,
            preferences,
            lock,
            reconciler,
        }
    }

    /// Move `package_id`; returns false when it is already at that edge
    pub fn execute(&self, package_id: &str, direction: MoveDirection) -> Result<bool, DomainError> {
        let _guard = self.lock.lock();
        let current = reconcile_stored(&self.reconciler, &*self.apps, &*self.preferences)?;

        if !current.items.iter().any(|i| i.package_id == package_id) {
            return Err(DomainError::NotFound(package_id.to_string()));
        }

        match plan_move(&current.items, package_id, direction) {
            Some(renumbered) => {
                log::debug!("Moving {} {:?}", package_id, direction);
                self.preferences.upsert_many(renumbered)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gateways::{FilePreferenceGateway, PackageAppGateway};
    use crate::domain::entities::{AppPreference, InstalledApp};
    use crate::infrastructure::manifest_package_source::ManifestPackageSource;

    type Source = ManifestPackageSource;

    fn use_case(
        prefs: Vec<AppPreference>,
    ) -> (Arc<FilePreferenceGateway>, MoveAppUseCase<PackageAppGateway<Source>, FilePreferenceGateway>) {
        let source = Arc::new(ManifestPackageSource::from_apps(vec![
            InstalledApp::new("A", "a"),
            InstalledApp::new("B", "b"),
            InstalledApp::new("C", "c"),
        ]));
        let apps = Arc::new(PackageAppGateway::new(source));
        apps.refresh().unwrap();
        let store = Arc::new(FilePreferenceGateway::with_preferences(prefs));
        let use_case = MoveAppUseCase::new(
            apps,
            Arc::clone(&store),
            MutationLock::new(),
            PreferenceReconciler::default(),
        );
        (store, use_case)
    }

    fn stored_order(store: &FilePreferenceGateway) -> Vec<String> {
        store
            .get_all()
            .unwrap()
            .into_iter()
            .map(|p| p.package_id)
            .collect()
    }

    #[test]
    fn test_edges_are_noops() {
        let (store, use_case) = use_case(Vec::new());

        assert!(!use_case.execute("a", MoveDirection::Earlier).unwrap());
        assert!(!use_case.execute("c", MoveDirection::Later).unwrap());
        assert!(store.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_move_writes_whole_list() {
        let (store, use_case) = use_case(Vec::new());

        assert!(use_case.execute("a", MoveDirection::Later).unwrap());

        assert_eq!(stored_order(&store), vec!["b", "a", "c"]);
        let indices: Vec<i32> = store.get_all().unwrap().iter().map(|p| p.order_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_move_keeps_flags_and_hidden_items() {
        let (store, use_case) = use_case(vec![
            AppPreference::new("a").with_order(0).with_favorite(true),
            AppPreference::new("b").with_order(1).with_visible(false),
            AppPreference::new("c").with_order(2),
        ]);

        use_case.execute("c", MoveDirection::Earlier).unwrap();

        assert_eq!(stored_order(&store), vec!["a", "c", "b"]);
        assert!(store.get("a").unwrap().unwrap().is_favorite);
        assert!(!store.get("b").unwrap().unwrap().is_visible);
    }

    #[test]
    fn test_later_then_earlier_restores() {
        let (store, use_case) = use_case(Vec::new());
        use_case.execute("b", MoveDirection::Earlier).unwrap();
        let moved = stored_order(&store);

        use_case.execute("b", MoveDirection::Later).unwrap();
        use_case.execute("b", MoveDirection::Earlier).unwrap();

        assert_eq!(stored_order(&store), moved);
    }

    #[test]
    fn test_unknown_package() {
        let (_, use_case) = use_case(Vec::new());
        assert!(matches!(
            use_case.execute("zzz", MoveDirection::Later),
            Err(DomainError::NotFound(_))
        ));
    }
}
