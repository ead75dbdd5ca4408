//! WallpaperItem - a selectable background image
//!
//! Bundled wallpapers ship with the launcher; online ones come from a photo
//! service. Either kind is identified by a single string persisted in settings.

/// Prefix of identifiers that refer to bundled wallpapers
pub const BUNDLED_PREFIX: &str = "bundled/";

/// Number of wallpapers shipped with the launcher
pub const BUNDLED_COUNT: usize = 11;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallpaperSource {
    Bundled,
    Online,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallpaperItem {
    pub id: String,
    pub thumbnail_url: String,
    pub full_image_url: String,
    pub source: WallpaperSource,
    pub description: Option<String>,
}

impl WallpaperItem {
    /// The bundled catalog, in display order
    pub fn bundled_catalog() -> Vec<WallpaperItem> {
        (0..BUNDLED_COUNT)
            .map(|n| {
                let id = format!("{}{}", BUNDLED_PREFIX, n);
                WallpaperItem {
                    thumbnail_url: id.clone(),
                    full_image_url: id.clone(),
                    id,
                    source: WallpaperSource::Bundled,
                    description: Some(format!("Bundled wallpaper {}", n + 1)),
                }
            })
            .collect()
    }

    /// An online wallpaper returned by the photo service
    pub fn online(
        id: impl Into<String>,
        thumbnail_url: impl Into<String>,
        full_image_url: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            thumbnail_url: thumbnail_url.into(),
            full_image_url: full_image_url.into(),
            source: WallpaperSource::Online,
            description,
        }
    }

    /// Build an item from a persisted identifier that no catalog knows about
    pub fn from_identifier(identifier: &str) -> Self {
        let source = if identifier.starts_with(BUNDLED_PREFIX) {
            WallpaperSource::Bundled
        } else {
            WallpaperSource::Online
        };
        let description = match source {
            WallpaperSource::Bundled => "Bundled wallpaper",
            WallpaperSource::Online => "Online wallpaper",
        };

        Self {
            id: identifier.to_string(),
            thumbnail_url: identifier.to_string(),
            full_image_url: identifier.to_string(),
            source,
            description: Some(description.to_string()),
        }
    }

    /// Identifier persisted when this wallpaper is selected
    pub fn identifier(&self) -> &str {
        &self.full_image_url
    }

    pub fn is_bundled(&self) -> bool {
        self.source == WallpaperSource::Bundled
    }
}
