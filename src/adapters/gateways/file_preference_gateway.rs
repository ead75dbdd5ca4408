//! FilePreferenceGateway - JSON-file-backed preference repository
//!
//! Keeps every record in memory, rewrites the file on each write and then
//! publishes the new record set. Without a path it is purely in-memory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::domain::entities::AppPreference;
use crate::domain::errors::DomainError;
use crate::domain::repositories::PreferenceRepository;
use crate::shared::observable::Observable;

/// On-disk layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(default)]
    preferences: Vec<AppPreference>,
}

/// File-based preference repository
pub struct FilePreferenceGateway {
    path: Option<PathBuf>,
    records: Mutex<BTreeMap<String, AppPreference>>,
    published: Observable<Vec<AppPreference>>,
}

impl FilePreferenceGateway {
    /// Open (or start) the preference file at `path`
    pub fn open(path: PathBuf) -> Result<Self, DomainError> {
        let records = Self::load(&path)?;
        log::debug!("Loaded {} preferences from {:?}", records.len(), path);
        Ok(Self::from_records(Some(path), records))
    }

    /// Repository that never touches the disk
    pub fn in_memory() -> Self {
        Self::from_records(None, BTreeMap::new())
    }

    /// In-memory repository seeded with `preferences`
    pub fn with_preferences(preferences: Vec<AppPreference>) -> Self {
        let records = preferences
            .into_iter()
            .map(|p| (p.package_id.clone(), p))
            .collect();
        Self::from_records(None, records)
    }

    /// Get the preference file path
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn from_records(path: Option<PathBuf>, records: BTreeMap<String, AppPreference>) -> Self {
        let published = Observable::new(Self::ordered(&records));
        Self {
            path,
            records: Mutex::new(records),
            published,
        }
    }

    fn load(path: &Path) -> Result<BTreeMap<String, AppPreference>, DomainError> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        let file: PreferenceFile = serde_json::from_str(&content)?;
        Ok(file
            .preferences
            .into_iter()
            .map(|p| (p.package_id.clone(), p))
            .collect())
    }

    /// Records ascending by order index, then package id
    fn ordered(records: &BTreeMap<String, AppPreference>) -> Vec<AppPreference> {
        let mut list: Vec<AppPreference> = records.values().cloned().collect();
        list.sort_by(|a, b| {
            a.order_index
                .cmp(&b.order_index)
                .then_with(|| a.package_id.cmp(&b.package_id))
        });
        list
    }

    fn persist(&self, list: &[AppPreference]) -> Result<(), DomainError> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = PreferenceFile {
            preferences: list.to_vec(),
        };
        let content = serde_json::to_string_pretty(&file)?;

        // Write-then-rename so a crash never leaves a half-written file
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Apply `change` to a copy of the records, persist, then publish.
    /// The lock is held through publication so emissions stay in write order.
    fn write<F>(&self, change: F) -> Result<(), DomainError>
    where
        F: FnOnce(&mut BTreeMap<String, AppPreference>),
    {
        let mut records = self.records.lock();
        let mut updated = records.clone();
        change(&mut updated);
        if updated == *records {
            return Ok(());
        }

        let list = Self::ordered(&updated);
        self.persist(&list).map_err(|e| {
            log::warn!("Failed to persist preferences: {}", e);
            e
        })?;

        *records = updated;
        self.published.set(list);
        Ok(())
    }
}

impl PreferenceRepository for FilePreferenceGateway {
    fn get(&self, package_id: &str) -> Result<Option<AppPreference>, DomainError> {
        Ok(self.records.lock().get(package_id).cloned())
    }

    fn get_all(&self) -> Result<Vec<AppPreference>, DomainError> {
        Ok(Self::ordered(&self.records.lock()))
    }

    fn observe(&self) -> Observable<Vec<AppPreference>> {
        self.published.clone()
    }

    fn upsert(&self, preference: AppPreference) -> Result<(), DomainError> {
        self.write(|records| {
            records.insert(preference.package_id.clone(), preference);
        })
    }

    fn upsert_many(&self, preferences: Vec<AppPreference>) -> Result<(), DomainError> {
        if preferences.is_empty() {
            return Ok(());
        }
        self.write(|records| {
            for preference in preferences {
                records.insert(preference.package_id.clone(), preference);
            }
        })
    }

    fn delete(&self, package_id: &str) -> Result<(), DomainError> {
        self.write(|records| {
            records.remove(package_id);
        })
    }

    fn max_order_index(&self) -> Result<Option<i32>, DomainError> {
        Ok(self
            .records
            .lock()
            .values()
            .filter(|p| p.is_assigned())
            .map(|p| p.order_index)
            .max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_upsert_and_get() {
        let gateway = FilePreferenceGateway::in_memory();
        gateway
            .upsert(AppPreference::new("com.a").with_order(1))
            .unwrap();
        gateway
            .upsert(AppPreference::new("com.a").with_order(4))
            .unwrap();

        assert_eq!(gateway.get("com.a").unwrap().unwrap().order_index, 4);
        assert_eq!(gateway.get_all().unwrap().len(), 1);
        assert!(gateway.get("com.b").unwrap().is_none());
    }

    #[test]
    fn test_get_all_sorted_by_order() {
        let gateway = FilePreferenceGateway::with_preferences(vec![
            AppPreference::new("z").with_order(0),
            AppPreference::new("a"),
            AppPreference::new("m").with_order(1),
        ]);

        let ids: Vec<String> = gateway
            .get_all()
            .unwrap()
            .into_iter()
            .map(|p| p.package_id)
            .collect();
        assert_eq!(ids, vec!["z", "m", "a"]);
    }

    #[test]
    fn test_max_order_index_ignores_unassigned() {
        let gateway = FilePreferenceGateway::in_memory();
        assert_eq!(gateway.max_order_index().unwrap(), None);

        gateway
            .upsert_many(vec![
                AppPreference::new("a"),
                AppPreference::new("b").with_order(6),
            ])
            .unwrap();
        assert_eq!(gateway.max_order_index().unwrap(), Some(6));
    }

    #[test]
    fn test_writes_publish_once_and_skip_noops() {
        let gateway = FilePreferenceGateway::in_memory();
        let emissions = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&emissions);
        let _sub = gateway.observe().subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        gateway
            .upsert_many(vec![
                AppPreference::new("a").with_order(0),
                AppPreference::new("b").with_order(1),
            ])
            .unwrap();
        gateway
            .upsert(AppPreference::new("a").with_order(0))
            .unwrap();
        gateway.delete("missing").unwrap();

        // Initial delivery plus the single real change
        assert_eq!(emissions.load(Ordering::SeqCst), 2);
        assert_eq!(gateway.observe().get().len(), 2);
    }

    #[test]
    fn test_save_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        {
            let gateway = FilePreferenceGateway::open(path.clone()).unwrap();
            gateway
                .upsert(AppPreference::new("com.a").with_order(0).with_favorite(true))
                .unwrap();
            gateway
                .upsert(AppPreference::new("com.b").with_order(1))
                .unwrap();
            gateway.delete("com.b").unwrap();
        }

        let gateway = FilePreferenceGateway::open(path).unwrap();
        let all = gateway.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].is_favorite);
        assert_eq!(gateway.observe().get(), all);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            FilePreferenceGateway::open(path),
            Err(DomainError::Serialization(_))
        ));
    }
}
