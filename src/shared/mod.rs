//! Shared Utilities Module
//!
//! Contains utilities that are shared across layers.

pub mod config;
pub mod observable;

pub use config::{Config, ConfigError};
pub use observable::{combine_latest, Observable, Subscription};
