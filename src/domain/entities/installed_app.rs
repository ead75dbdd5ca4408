//! InstalledApp entity - a launchable application reported by the OS
//!
//! Installed apps are never persisted; they are rebuilt on every refresh.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Unique identifier for an application package
pub type PackageId = String;

/// Which launcher query surfaced the app
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchCategory {
    /// TV-optimized (leanback) entry point
    Leanback,
    /// Standard launcher entry point
    #[default]
    Launcher,
}

impl LaunchCategory {
    /// Query order used when building the app list
    pub const QUERY_ORDER: [LaunchCategory; 2] = [LaunchCategory::Leanback, LaunchCategory::Launcher];
}

/// A loaded icon or banner (platform-independent representation)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconData {
    /// Icon width in pixels
    pub width: u32,
    /// Icon height in pixels
    pub height: u32,
    /// RGBA pixel data (4 bytes per pixel)
    pub pixels: Vec<u8>,
}

impl IconData {
    /// Create a new icon from RGBA data
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height * 4) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a solid-color icon
    pub fn solid(width: u32, height: u32, r: u8, g: u8, b: u8) -> Self {
        let pixels = (0..width * height).flat_map(|_| [r, g, b, 255]).collect();
        Self::new(width, height, pixels)
    }
}

/// An installed, launchable application
#[derive(Clone, Debug, PartialEq)]
pub struct InstalledApp {
    /// Display label
    pub name: String,
    /// Package identifier (unique)
    pub package_id: PackageId,
    /// Launcher query that reported the app
    pub category: LaunchCategory,
    /// Banner or icon, when one could be loaded
    pub icon: Option<Arc<IconData>>,
}

impl InstalledApp {
    /// Create a new app with no icon
    pub fn new(name: impl Into<String>, package_id: impl Into<PackageId>) -> Self {
        Self {
            name: name.into(),
            package_id: package_id.into(),
            category: LaunchCategory::default(),
            icon: None,
        }
    }

    /// Builder: set category
    pub fn with_category(mut self, category: LaunchCategory) -> Self {
        self.category = category;
        self
    }

    /// Builder: set icon
    pub fn with_icon(mut self, icon: IconData) -> Self {
        self.icon = Some(Arc::new(icon));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installed_app_builder() {
        let app = InstalledApp::new("Kodi", "org.xbmc.kodi")
            .with_category(LaunchCategory::Leanback)
            .with_icon(IconData::solid(2, 2, 10, 20, 30));

        assert_eq!(app.name, "Kodi");
        assert_eq!(app.package_id, "org.xbmc.kodi");
        assert_eq!(app.category, LaunchCategory::Leanback);
        assert_eq!(app.icon.as_ref().map(|i| i.pixels.len()), Some(16));
    }
}
