//! Application Services - long-lived coordination services

pub mod app_list_service;
pub mod mutation_lock;

pub use app_list_service::{reconcile_stored, AppList, AppListService};
pub use mutation_lock::MutationLock;
