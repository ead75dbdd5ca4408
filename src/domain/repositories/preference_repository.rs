//! PreferenceRepository - interface to persisted per-app preferences
//!
//! One record per package id. Every write publishes the full record set
//! through [`PreferenceRepository::observe`].

use crate::domain::entities::AppPreference;
use crate::domain::errors::DomainError;
use crate::shared::observable::Observable;

/// Repository interface for app preferences
pub trait PreferenceRepository: Send + Sync {
    /// Preference for one package
    fn get(&self, package_id: &str) -> Result<Option<AppPreference>, DomainError>;

    /// All preferences, ascending by order index
    fn get_all(&self) -> Result<Vec<AppPreference>, DomainError>;

    /// Live view of [`PreferenceRepository::get_all`]
    fn observe(&self) -> Observable<Vec<AppPreference>>;

    /// Insert or replace one record
    fn upsert(&self, preference: AppPreference) -> Result<(), DomainError>;

    /// Insert or replace several records as one write
    fn upsert_many(&self, preferences: Vec<AppPreference>) -> Result<(), DomainError>;

    /// Delete a record (missing keys are ignored)
    fn delete(&self, package_id: &str) -> Result<(), DomainError>;

    /// Highest assigned order index, ignoring unassigned records
    fn max_order_index(&self) -> Result<Option<i32>, DomainError>;
}

/// A null implementation for testing
pub struct NullPreferenceRepository {
    preferences: Observable<Vec<AppPreference>>,
}

impl NullPreferenceRepository {
    pub fn new() -> Self {
        Self {
            preferences: Observable::new(Vec::new()),
        }
    }
}

impl Default for NullPreferenceRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceRepository for NullPreferenceRepository {
    fn get(&self, _package_id: &str) -> Result<Option<AppPreference>, DomainError> {
        Ok(None)
    }

    fn get_all(&self) -> Result<Vec<AppPreference>, DomainError> {
        Ok(Vec::new())
    }

    fn observe(&self) -> Observable<Vec<AppPreference>> {
        self.preferences.clone()
    }

    fn upsert(&self, _preference: AppPreference) -> Result<(), DomainError> {
        Ok(())
    }

    fn upsert_many(&self, _preferences: Vec<AppPreference>) -> Result<(), DomainError> {
        Ok(())
    }

    fn delete(&self, _package_id: &str) -> Result<(), DomainError> {
        Ok(())
    }

    fn max_order_index(&self) -> Result<Option<i32>, DomainError> {
        Ok(None)
    }
}
