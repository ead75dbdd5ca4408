//! OrphanPolicy - what to do with preferences of uninstalled packages

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrphanPolicy {
    /// Leave orphaned records out of the reconciled list
    #[default]
    Hide,
    /// Show them as `is_installed = false` placeholders
    Placeholder,
}
