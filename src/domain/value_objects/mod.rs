//! Domain Value Objects - Immutable values with no identity

pub mod move_direction;
pub mod orphan_policy;
pub mod preference_change;

pub use move_direction::MoveDirection;
pub use orphan_policy::OrphanPolicy;
pub use preference_change::PreferenceChange;
