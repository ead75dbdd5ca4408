//! Domain Repository Interfaces
//!
//! These are trait definitions only - no implementations.
//! Implementations belong in the adapters/gateways layer.

pub mod installed_app_repository;
pub mod preference_repository;
pub mod settings_repository;

pub use installed_app_repository::InstalledAppRepository;
pub use preference_repository::PreferenceRepository;
pub use settings_repository::SettingsRepository;
