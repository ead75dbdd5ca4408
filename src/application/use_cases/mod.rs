//! Application Use Cases - Single-purpose business operations
//!
//! Each use case encapsulates a single business operation.

pub mod launch_app;
pub mod move_app;
pub mod purge_orphans;
pub mod select_wallpaper;
pub mod update_preference;

pub use launch_app::{LaunchAppUseCase, LaunchError};
pub use move_app::MoveAppUseCase;
pub use purge_orphans::PurgeOrphansUseCase;
pub use select_wallpaper::SelectWallpaperUseCase;
pub use update_preference::UpdatePreferenceUseCase;
