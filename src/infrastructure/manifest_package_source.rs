//! ManifestPackageSource - package source read from a TOML manifest
//!
//! Stands in for the platform package manager on desktop builds:
//!
//! ```toml
//! [[app]]
//! name = "Kodi"
//! package = "org.xbmc.kodi"
//! category = "leanback"
//! ```

use std::path::Path;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::application::ports::{PackageSourcePort, PlatformError};
use crate::domain::entities::{InstalledApp, LaunchCategory};
use crate::domain::errors::DomainError;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Manifest {
    #[serde(default, rename = "app")]
    apps: Vec<ManifestEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ManifestEntry {
    name: String,
    package: String,
    #[serde(default)]
    category: LaunchCategory,
}

pub struct ManifestPackageSource {
    apps: Mutex<Vec<InstalledApp>>,
}

impl ManifestPackageSource {
    /// Read a manifest file
    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let content = std::fs::read_to_string(path)?;
        let source = Self::parse(&content)?;
        log::info!(
            "Loaded {} apps from {}",
            source.apps.lock().len(),
            path.display()
        );
        Ok(source)
    }

    pub fn parse(content: &str) -> Result<Self, DomainError> {
        let manifest: Manifest = toml::from_str(content)?;
        let apps = manifest
            .apps
            .into_iter()
            .filter(|entry| !entry.package.trim().is_empty())
            .map(|entry| InstalledApp::new(entry.name, entry.package).with_category(entry.category))
            .collect();
        Ok(Self::from_apps(apps))
    }

    pub fn from_apps(apps: Vec<InstalledApp>) -> Self {
        Self {
            apps: Mutex::new(apps),
        }
    }

    /// Add or replace an app; a refresh picks the change up
    pub fn install(&self, app: InstalledApp) {
        let mut apps = self.apps.lock();
        apps.retain(|a| a.package_id != app.package_id);
        apps.push(app);
    }

    /// Returns whether the package was present
    pub fn remove(&self, package_id: &str) -> bool {
        let mut apps = self.apps.lock();
        let before = apps.len();
        apps.retain(|a| a.package_id != package_id);
        apps.len() != before
    }
}

impl PackageSourcePort for ManifestPackageSource {
    fn query(&self, category: LaunchCategory) -> Result<Vec<InstalledApp>, PlatformError> {
        Ok(self
            .apps
            .lock()
            .iter()
            .filter(|a| a.category == category)
            .cloned()
            .collect())
    }
}
