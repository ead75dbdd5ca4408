//! SettingsRepository - interface to launcher-wide settings

use crate::domain::entities::LauncherSettings;
use crate::domain::errors::DomainError;
use crate::shared::observable::Observable;

/// Repository interface for launcher settings
pub trait SettingsRepository: Send + Sync {
    /// Live settings
    fn observe(&self) -> Observable<LauncherSettings>;

    fn current(&self) -> LauncherSettings {
        self.observe().get()
    }

    fn save_location(&self, location: &str) -> Result<(), DomainError>;

    /// Store a custom weather API key; blank or `None` reverts to the default
    fn save_api_key(&self, api_key: Option<&str>) -> Result<(), DomainError>;

    fn save_wallpaper(&self, identifier: &str) -> Result<(), DomainError>;

    /// Store the PIN; blank or `None` removes it
    fn save_pin(&self, pin: Option<&str>) -> Result<(), DomainError>;
}

/// A null implementation for testing
pub struct NullSettingsRepository {
    settings: Observable<LauncherSettings>,
}

impl NullSettingsRepository {
    pub fn new() -> Self {
        Self {
            settings: Observable::new(LauncherSettings::default()),
        }
    }
}

impl Default for NullSettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsRepository for NullSettingsRepository {
    fn observe(&self) -> Observable<LauncherSettings> {
        self.settings.clone()
    }

    fn save_location(&self, _location: &str) -> Result<(), DomainError> {
        Ok(())
    }

    fn save_api_key(&self, _api_key: Option<&str>) -> Result<(), DomainError> {
        Ok(())
    }

    fn save_wallpaper(&self, _identifier: &str) -> Result<(), DomainError> {
        Ok(())
    }

    fn save_pin(&self, _pin: Option<&str>) -> Result<(), DomainError> {
        Ok(())
    }
}
