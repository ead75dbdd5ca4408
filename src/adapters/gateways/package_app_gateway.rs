//! PackageAppGateway - installed-app repository backed by a package source
//!
//! Queries the TV (leanback) entry points first, then the standard launcher
//! ones. A package listed by both keeps its leanback entry.

use std::collections::HashSet;
use std::sync::Arc;

use crate::application::ports::PackageSourcePort;
use crate::domain::entities::{InstalledApp, LaunchCategory};
use crate::domain::errors::DomainError;
use crate::domain::repositories::InstalledAppRepository;
use crate::shared::observable::Observable;

pub struct PackageAppGateway<S: PackageSourcePort> {
    source: Arc<S>,
    apps: Observable<Option<Vec<InstalledApp>>>,
}

impl<S: PackageSourcePort> PackageAppGateway<S> {
    /// Create a gateway; nothing is loaded until [`InstalledAppRepository::refresh`]
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            apps: Observable::new(None),
        }
    }

    fn load(&self) -> Vec<InstalledApp> {
        let mut seen = HashSet::new();
        let mut apps = Vec::new();

        for category in LaunchCategory::QUERY_ORDER {
            match self.source.query(category) {
                Ok(found) => {
                    log::debug!("Found {} {:?} entries", found.len(), category);
                    apps.extend(
                        found
                            .into_iter()
                            .filter(|app| seen.insert(app.package_id.clone()))
                            .map(|app| app.with_category(category)),
                    );
                }
                // One failed query must not hide the other category's apps
                Err(e) => log::warn!("Error querying {:?} apps: {}", category, e),
            }
        }

        apps.sort_by_cached_key(|app| app.name.to_lowercase());
        apps
    }
}

impl<S: PackageSourcePort> InstalledAppRepository for PackageAppGateway<S> {
    fn apps(&self) -> Observable<Option<Vec<InstalledApp>>> {
        self.apps.clone()
    }

    fn refresh(&self) -> Result<(), DomainError> {
        log::debug!("Starting app refresh");
        let apps = self.load();
        log::info!("Finished refreshing apps, found {}", apps.len());
        self.apps.set(Some(apps));
        Ok(())
    }

    fn is_installed(&self, package_id: &str) -> bool {
        self.apps
            .get()
            .is_some_and(|apps| apps.iter().any(|a| a.package_id == package_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::package_source_port::NullPackageSource;
    use crate::application::ports::PlatformError;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct FakeSource {
        leanback: Mutex<Vec<InstalledApp>>,
        launcher: Mutex<Vec<InstalledApp>>,
        fail_leanback: bool,
    }

    impl PackageSourcePort for FakeSource {
        fn query(&self, category: LaunchCategory) -> Result<Vec<InstalledApp>, PlatformError> {
            match category {
                LaunchCategory::Leanback if self.fail_leanback => {
                    Err(PlatformError::QueryFailed("boom".to_string()))
                }
                LaunchCategory::Leanback => Ok(self.leanback.lock().clone()),
                LaunchCategory::Launcher => Ok(self.launcher.lock().clone()),
            }
        }
    }

    #[test]
    fn test_nothing_loaded_before_refresh() {
        let gateway = PackageAppGateway::new(Arc::new(NullPackageSource));
        assert_eq!(gateway.apps().get(), None);
        assert!(gateway.snapshot().is_empty());

        // An empty device still counts as loaded
        gateway.refresh().unwrap();
        assert_eq!(gateway.apps().get(), Some(Vec::new()));
    }

    #[test]
    fn test_refresh_dedups_and_sorts() {
        let source = FakeSource::default();
        *source.leanback.lock() = vec![InstalledApp::new("YouTube TV", "com.youtube")];
        *source.launcher.lock() = vec![
            InstalledApp::new("YouTube", "com.youtube"),
            InstalledApp::new("chrome", "com.chrome"),
            InstalledApp::new("Aptoide", "com.aptoide"),
        ];
        let gateway = PackageAppGateway::new(Arc::new(source));

        gateway.refresh().unwrap();
        let apps = gateway.snapshot();

        let names: Vec<&str> = apps.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Aptoide", "chrome", "YouTube TV"]);
        assert_eq!(apps[2].category, LaunchCategory::Leanback);
        assert!(gateway.is_installed("com.chrome"));
        assert!(!gateway.is_installed("com.netflix"));
    }

    #[test]
    fn test_failed_query_keeps_other_category() {
        let source = FakeSource {
            fail_leanback: true,
            ..Default::default()
        };
        *source.launcher.lock() = vec![InstalledApp::new("Files", "com.files")];
        let gateway = PackageAppGateway::new(Arc::new(source));

        gateway.refresh().unwrap();
        assert_eq!(gateway.snapshot().len(), 1);
    }
}
