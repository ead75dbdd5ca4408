//! HomePresenter - state of the home screen

use crate::application::services::AppList;
use crate::domain::entities::{AppViewItem, LauncherSettings};
use crate::shared::observable::{combine_latest, Combined, Observable};

/// View model for the home screen
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HomeViewState {
    pub favorite_apps: Vec<AppViewItem>,
    pub visible_apps: Vec<AppViewItem>,
    pub wallpaper_id: String,
    pub is_loading: bool,
}

impl HomeViewState {
    fn present(list: &AppList, settings: &LauncherSettings) -> Self {
        Self {
            favorite_apps: list.favorites(),
            visible_apps: list.visible(),
            wallpaper_id: settings.wallpaper_id.clone(),
            is_loading: !list.loaded,
        }
    }
}

/// Presenter for the home screen
pub struct HomePresenter {
    state: Combined<HomeViewState>,
}

impl HomePresenter {
    pub fn new(list: &Observable<AppList>, settings: &Observable<LauncherSettings>) -> Self {
        Self {
            state: combine_latest(list, settings, HomeViewState::present),
        }
    }

    /// Live view state
    pub fn state(&self) -> Observable<HomeViewState> {
        self.state.output().clone()
    }

    pub fn current(&self) -> HomeViewState {
        self.state.get()
    }
}
