//! TomlSettingsGateway - settings persisted as a small TOML file

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::domain::entities::settings::non_blank;
use crate::domain::entities::LauncherSettings;
use crate::domain::errors::DomainError;
use crate::domain::repositories::SettingsRepository;
use crate::shared::observable::Observable;

/// File-based settings repository
pub struct TomlSettingsGateway {
    path: Option<PathBuf>,
    /// Serializes read-modify-write cycles
    write_lock: Mutex<()>,
    settings: Observable<LauncherSettings>,
}

impl TomlSettingsGateway {
    /// Open the settings file, using defaults when it does not exist
    pub fn open(path: PathBuf) -> Result<Self, DomainError> {
        let settings = if path.exists() {
            toml::from_str(&fs::read_to_string(&path)?)?
        } else {
            LauncherSettings::default()
        };

        Ok(Self {
            path: Some(path),
            write_lock: Mutex::new(()),
            settings: Observable::new(settings),
        })
    }

    /// Settings kept only in memory
    pub fn in_memory(settings: LauncherSettings) -> Self {
        Self {
            path: None,
            write_lock: Mutex::new(()),
            settings: Observable::new(settings),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn edit<F>(&self, change: F) -> Result<(), DomainError>
    where
        F: FnOnce(&mut LauncherSettings),
    {
        let _guard = self.write_lock.lock();
        let mut settings = self.settings.get();
        change(&mut settings);

        if let Some(path) = self.path.as_ref() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, toml::to_string_pretty(&settings)?)?;
        }

        self.settings.set(settings);
        Ok(())
    }
}

impl SettingsRepository for TomlSettingsGateway {
    fn observe(&self) -> Observable<LauncherSettings> {
        self.settings.clone()
    }

    fn save_location(&self, location: &str) -> Result<(), DomainError> {
        let location = location.trim().to_string();
        self.edit(|s| s.location = location)
    }

    fn save_api_key(&self, api_key: Option<&str>) -> Result<(), DomainError> {
        let api_key = non_blank(api_key);
        self.edit(|s| s.weather_api_key = api_key)
    }

    fn save_wallpaper(&self, identifier: &str) -> Result<(), DomainError> {
        let identifier = identifier.to_string();
        self.edit(|s| s.wallpaper_id = identifier)
    }

    fn save_pin(&self, pin: Option<&str>) -> Result<(), DomainError> {
        let pin = non_blank(pin);
        self.edit(|s| s.pin = pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_clear_optional_settings() {
        let gateway = TomlSettingsGateway::in_memory(LauncherSettings::default());
        gateway.save_api_key(Some("abc")).unwrap();
        gateway.save_pin(Some("1234")).unwrap();
        assert_eq!(gateway.current().weather_api_key.as_deref(), Some("abc"));
        assert!(gateway.current().has_pin());

        gateway.save_api_key(Some("   ")).unwrap();
        gateway.save_pin(None).unwrap();
        assert_eq!(gateway.current().weather_api_key, None);
        assert!(!gateway.current().has_pin());
    }

    #[test]
    fn test_save_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        {
            let gateway = TomlSettingsGateway::open(path.clone()).unwrap();
            gateway.save_location(" Tirana ").unwrap();
            gateway.save_wallpaper("bundled/3").unwrap();
        }

        let gateway = TomlSettingsGateway::open(path).unwrap();
        let settings = gateway.current();
        assert_eq!(settings.location, "Tirana");
        assert_eq!(settings.wallpaper_id, "bundled/3");
        assert_eq!(settings.pin, None);
    }
}
