//! PreferenceChange - a single-flag edit to an app preference

use crate::domain::entities::AppPreference;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreferenceChange {
    Favorite(bool),
    Visible(bool),
    Locked(bool),
}

impl PreferenceChange {
    /// Apply the change in place
    pub fn apply(self, preference: &mut AppPreference) {
        match self {
            PreferenceChange::Favorite(flag) => preference.is_favorite = flag,
            PreferenceChange::Visible(flag) => preference.is_visible = flag,
            PreferenceChange::Locked(flag) => preference.is_locked = flag,
        }
    }
}
