//! Gateways - repository implementations

pub mod file_preference_gateway;
pub mod package_app_gateway;
pub mod toml_settings_gateway;

pub use file_preference_gateway::FilePreferenceGateway;
pub use package_app_gateway::PackageAppGateway;
pub use toml_settings_gateway::TomlSettingsGateway;
