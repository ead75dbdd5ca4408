//! Controllers - translate user and platform input into application calls

pub mod app_actions_controller;

pub use app_actions_controller::{ActionError, AppActionsController, LockSession, PackageEvent};
