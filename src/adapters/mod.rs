//! Adapters Layer - Interface adapters
//!
//! Converts data between the form most convenient for use cases and the form
//! most convenient for the outside world:
//! - **Gateways**: Persistence and package queries behind repository traits
//! - **Presenters**: Home and settings view state, long-press menus
//! - **Controllers**: Menu actions and package broadcasts

pub mod controllers;
pub mod gateways;
pub mod presenters;
