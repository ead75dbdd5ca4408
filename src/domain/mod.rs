//! Domain Layer - Pure business logic
//!
//! This layer contains:
//! - **Entities**: Core business objects (InstalledApp, AppPreference, AppViewItem)
//! - **Value Objects**: Immutable values (MoveDirection, OrphanPolicy, PreferenceChange)
//! - **Repository Interfaces**: Abstractions for data access (no implementations)
//! - **Domain Services**: The preference reconciler
//! - **Domain Errors**: Error types for domain operations

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
