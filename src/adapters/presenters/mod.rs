//! Presenters - turn application state into view state

pub mod app_settings_presenter;
pub mod home_presenter;
pub mod menu;

pub use app_settings_presenter::{AppSettingsPresenter, AppsSettingsState};
pub use home_presenter::{HomePresenter, HomeViewState};
pub use menu::{menu_actions, permits, MenuAction, MenuContext};
