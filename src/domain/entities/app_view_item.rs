//! AppViewItem - the reconciled, UI-facing projection of an app
//!
//! Combines an [`InstalledApp`] with its [`AppPreference`] (or the defaults).
//! Never stored; rebuilt on every reconciliation.

use std::sync::Arc;

use super::app_preference::AppPreference;
use super::installed_app::{IconData, InstalledApp, PackageId};

#[derive(Clone, Debug, PartialEq)]
pub struct AppViewItem {
    pub name: String,
    pub package_id: PackageId,
    pub icon: Option<Arc<IconData>>,
    pub is_visible: bool,
    pub order_index: i32,
    pub is_locked: bool,
    pub is_favorite: bool,
    /// False only for placeholders built from an orphaned preference
    pub is_installed: bool,
}

impl AppViewItem {
    /// Project an installed app, using defaults when it has no preference yet
    pub fn from_app(app: &InstalledApp, preference: Option<&AppPreference>) -> Self {
        let defaults;
        let pref = match preference {
            Some(p) => p,
            None => {
                defaults = AppPreference::new(app.package_id.clone());
                &defaults
            }
        };

        Self {
            name: app.name.clone(),
            package_id: app.package_id.clone(),
            icon: app.icon.clone(),
            is_visible: pref.is_visible,
            order_index: pref.order_index,
            is_locked: pref.is_locked,
            is_favorite: pref.is_favorite,
            is_installed: true,
        }
    }

    /// Placeholder for a preference whose package is no longer installed
    pub fn from_preference_only(preference: &AppPreference) -> Self {
        Self {
            name: preference.package_id.clone(),
            package_id: preference.package_id.clone(),
            icon: None,
            is_visible: preference.is_visible,
            order_index: preference.order_index,
            is_locked: preference.is_locked,
            is_favorite: preference.is_favorite,
            is_installed: false,
        }
    }

    /// Preference record carrying every flag of this item
    pub fn to_preference(&self) -> AppPreference {
        AppPreference {
            package_id: self.package_id.clone(),
            is_visible: self.is_visible,
            order_index: self.order_index,
            is_locked: self.is_locked,
            is_favorite: self.is_favorite,
        }
    }

    /// Case-insensitive sort key for the name tiebreak
    pub(crate) fn sort_name(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UNASSIGNED_ORDER;

    #[test]
    fn test_from_app_without_preference_uses_defaults() {
        let app = InstalledApp::new("Netflix", "com.netflix");
        let item = AppViewItem::from_app(&app, None);

        assert!(item.is_visible);
        assert!(item.is_installed);
        assert!(!item.is_favorite);
        assert_eq!(item.order_index, UNASSIGNED_ORDER);
    }

    #[test]
    fn test_round_trip_keeps_favorite_flag() {
        let app = InstalledApp::new("Netflix", "com.netflix");
        let pref = AppPreference::new("com.netflix")
            .with_order(3)
            .with_favorite(true)
            .with_locked(true);

        let item = AppViewItem::from_app(&app, Some(&pref));
        assert_eq!(item.to_preference(), pref);
    }

    #[test]
    fn test_placeholder_for_orphan() {
        let pref = AppPreference::new("gone.app").with_order(1);
        let item = AppViewItem::from_preference_only(&pref);

        assert_eq!(item.name, "gone.app");
        assert!(!item.is_installed);
        assert!(item.icon.is_none());
    }
}
