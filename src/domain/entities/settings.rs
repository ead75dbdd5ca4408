//! LauncherSettings - small key/value settings outside the app list

use serde::{Deserialize, Serialize};

/// Default weather location
pub const DEFAULT_LOCATION: &str = "London";

/// Identifier of the wallpaper used until the user picks one
pub const DEFAULT_WALLPAPER_ID: &str = "bundled/0";

/// Launcher-wide settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherSettings {
    /// City used by the weather widget
    #[serde(default = "default_location")]
    pub location: String,
    /// User-supplied weather API key (None = use the built-in key)
    #[serde(default)]
    pub weather_api_key: Option<String>,
    /// Identifier of the selected wallpaper
    #[serde(default = "default_wallpaper")]
    pub wallpaper_id: String,
    /// PIN protecting locked apps and settings
    #[serde(default)]
    pub pin: Option<String>,
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

fn default_wallpaper() -> String {
    DEFAULT_WALLPAPER_ID.to_string()
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            location: default_location(),
            weather_api_key: None,
            wallpaper_id: default_wallpaper(),
            pin: None,
        }
    }
}

impl LauncherSettings {
    /// Whether a PIN has been configured
    pub fn has_pin(&self) -> bool {
        self.pin.is_some()
    }
}

/// Normalize optional user input: blank means "unset"
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
