//! Domain Services - Complex operations that don't belong to a single entity
//!
//! Domain services contain business logic that operates on multiple entities
//! or doesn't naturally fit within a single entity.

pub mod reconciler;

pub use reconciler::{next_order_index, plan_move, PreferenceReconciler, Reconciliation};
