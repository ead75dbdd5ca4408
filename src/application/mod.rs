//! Application Layer - Use Cases and Business Workflows
//!
//! This layer orchestrates domain entities and defines application-specific workflows.
//! It contains:
//! - **Use Cases**: Single-purpose operations (UpdatePreference, MoveApp, LaunchApp)
//! - **Ports**: Interfaces for external dependencies (platform, package source, executor)
//! - **Services**: The live reconciled app list
//!
//! # Clean Architecture Rules
//! - Depends only on the domain layer
//! - Defines ports that infrastructure implements
//! - Contains no platform-specific code

pub mod ports;
pub mod services;
pub mod use_cases;

// Re-export commonly used types
pub use ports::*;
pub use services::*;
pub use use_cases::*;
