//! Nisi - home-screen launcher core
//!
//! Keeps the launcher's view of installed apps in step with the user's
//! per-app preferences (order, visibility, favorites, locks) and exposes
//! the resulting lists to the home and settings screens.
//!
//! Layout follows clean architecture:
//! - `domain`: entities, the reconciler and repository traits
//! - `application`: use cases, ports and the live app list service
//! - `adapters`: gateways, presenters and controllers
//! - `infrastructure`: worker pool, app manifest and the composition root

pub mod log;

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
