//! AppPreference entity - persisted per-app user preferences
//!
//! One record per package. Records outlive the app they describe unless
//! they are purged explicitly.

use serde::{Deserialize, Serialize};

use super::installed_app::PackageId;

/// Order index of a record that has not been given a position yet
pub const UNASSIGNED_ORDER: i32 = i32::MAX;

/// Persisted preferences for a single package
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppPreference {
    pub package_id: PackageId,
    #[serde(default = "default_true")]
    pub is_visible: bool,
    #[serde(default = "default_order")]
    pub order_index: i32,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default)]
    pub is_favorite: bool,
}

fn default_true() -> bool {
    true
}

fn default_order() -> i32 {
    UNASSIGNED_ORDER
}

impl AppPreference {
    /// Default preferences: visible, unlocked, not a favorite, no position
    pub fn new(package_id: impl Into<PackageId>) -> Self {
        Self {
            package_id: package_id.into(),
            is_visible: true,
            order_index: UNASSIGNED_ORDER,
            is_locked: false,
            is_favorite: false,
        }
    }

    /// Builder: set order index
    pub fn with_order(mut self, order_index: i32) -> Self {
        self.order_index = order_index;
        self
    }

    /// Builder: set visibility
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.is_visible = visible;
        self
    }

    /// Builder: set favorite flag
    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.is_favorite = favorite;
        self
    }

    /// Builder: set lock flag
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.is_locked = locked;
        self
    }

    /// Whether this record has a real position
    pub fn is_assigned(&self) -> bool {
        self.order_index != UNASSIGNED_ORDER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let pref = AppPreference::new("com.example");
        assert!(pref.is_visible);
        assert!(!pref.is_locked);
        assert!(!pref.is_favorite);
        assert!(!pref.is_assigned());
        assert!(pref.clone().with_order(0).is_assigned());
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let pref: AppPreference =
            serde_json::from_str(r#"{"package_id":"com.example","is_favorite":true}"#).unwrap();

        assert_eq!(pref.order_index, UNASSIGNED_ORDER);
        assert!(pref.is_visible);
        assert!(pref.is_favorite);
    }
}
