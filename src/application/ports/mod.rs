//! Application Ports - Interfaces for external dependencies
//!
//! Ports define the interfaces that infrastructure must implement.
//! They keep the application layer free of platform calls.

pub mod package_source_port;
pub mod platform_port;
pub mod task_port;

pub use package_source_port::PackageSourcePort;
pub use platform_port::{AppLauncher, AppUninstaller, PlatformError, SystemSettingsOpener};
pub use task_port::{ManualExecutor, TaskExecutor};
