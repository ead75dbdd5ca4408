//! AppSettingsPresenter - per-app settings screen
//!
//! Lists every app, hidden ones included, and tracks which app has its
//! action menu open.

use crate::application::services::AppList;
use crate::domain::entities::AppViewItem;
use crate::shared::observable::{combine_latest, Combined, Observable};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppsSettingsState {
    pub items: Vec<AppViewItem>,
    pub is_loading: bool,
    /// Package whose action menu is open
    pub actions_for: Option<String>,
}

pub struct AppSettingsPresenter {
    actions_for: Observable<Option<String>>,
    state: Combined<AppsSettingsState>,
}

impl AppSettingsPresenter {
    pub fn new(list: &Observable<AppList>) -> Self {
        let actions_for = Observable::new(None);
        let state = combine_latest(list, &actions_for, |list: &AppList, actions_for: &Option<String>| {
            AppsSettingsState {
                items: list.items.clone(),
                is_loading: !list.loaded,
                // A menu for an app that disappeared is closed
                actions_for: actions_for
                    .clone()
                    .filter(|pkg| list.get(pkg).is_some()),
            }
        });
        Self { actions_for, state }
    }

    pub fn state(&self) -> Observable<AppsSettingsState> {
        self.state.output().clone()
    }

    pub fn current(&self) -> AppsSettingsState {
        self.state.get()
    }

    /// Open the action menu for a package
    pub fn show_actions_for(&self, package_id: &str) {
        self.actions_for.set(Some(package_id.to_string()));
    }

    pub fn dismiss_actions(&self) {
        self.actions_for.set(None);
    }

    /// Item whose menu is open
    pub fn selected_item(&self) -> Option<AppViewItem> {
        let state = self.current();
        let package_id = state.actions_for?;
        state.items.into_iter().find(|i| i.package_id == package_id)
    }
}
