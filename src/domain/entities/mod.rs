//! Domain Entities - Core business objects
//!
//! Entities are objects with a distinct identity that persists over time.
//! They represent the core business concepts of the launcher.

pub mod app_preference;
pub mod app_view_item;
pub mod installed_app;
pub mod settings;
pub mod wallpaper;

pub use app_preference::{AppPreference, UNASSIGNED_ORDER};
pub use app_view_item::AppViewItem;
pub use installed_app::{IconData, InstalledApp, LaunchCategory, PackageId};
pub use settings::LauncherSettings;
pub use wallpaper::{WallpaperItem, WallpaperSource};
