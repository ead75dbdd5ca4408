//! SelectWallpaperUseCase - choose the background wallpaper

use std::sync::Arc;

use crate::domain::entities::WallpaperItem;
use crate::domain::errors::DomainError;
use crate::domain::repositories::SettingsRepository;

pub struct SelectWallpaperUseCase<S>
where
    S: SettingsRepository + ?Sized,
{
    settings: Arc<S>,
    bundled: Vec<WallpaperItem>,
}

impl<S> SelectWallpaperUseCase<S>
where
    S: SettingsRepository + ?Sized,
{
    pub fn new(settings: Arc<S>) -> Self {
        Self {
            settings,
            bundled: WallpaperItem::bundled_catalog(),
        }
    }

    /// Wallpapers shipped with the launcher
    pub fn bundled(&self) -> &[WallpaperItem] {
        &self.bundled
    }

    /// The selected wallpaper, looked up in the bundled catalog and `online`.
    /// Unknown identifiers still resolve to a usable placeholder item.
    pub fn selected(&self, online: &[WallpaperItem]) -> WallpaperItem {
        let identifier = self.settings.current().wallpaper_id;
        self.bundled
            .iter()
            .chain(online)
            .find(|w| w.identifier() == identifier)
            .cloned()
            .unwrap_or_else(|| WallpaperItem::from_identifier(&identifier))
    }

    pub fn select(&self, wallpaper: &WallpaperItem) -> Result<(), DomainError> {
        self.select_identifier(wallpaper.identifier())
    }

    pub fn select_identifier(&self, identifier: &str) -> Result<(), DomainError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(DomainError::InvalidState("wallpaper identifier is empty".to_string()));
        }
        log::info!("Selected wallpaper {}", identifier);
        self.settings.save_wallpaper(identifier)
    }
}
