//! Infrastructure Layer - Frameworks and Drivers
//!
//! Concrete implementations of application ports:
//! - Worker threads for background jobs
//! - The app manifest standing in for the package manager
//! - Desktop platform intents
//! - The composition root that wires everything together

pub mod composition_root;
pub mod desktop_platform;
pub mod manifest_package_source;
pub mod worker_pool;

pub use composition_root::CompositionRoot;
pub use worker_pool::WorkerPool;
