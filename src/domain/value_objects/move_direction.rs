//! MoveDirection - which way a user moves an app in the ordered list

use std::str::FromStr;

use crate::domain::errors::DomainError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    /// Towards the start of the list (left / up)
    Earlier,
    /// Towards the end of the list (right / down)
    Later,
}

impl MoveDirection {
    /// Position offset applied to the moved item
    pub fn offset(self) -> isize {
        match self {
            MoveDirection::Earlier => -1,
            MoveDirection::Later => 1,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            MoveDirection::Earlier => MoveDirection::Later,
            MoveDirection::Later => MoveDirection::Earlier,
        }
    }
}

impl FromStr for MoveDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "earlier" | "left" | "up" => Ok(MoveDirection::Earlier),
            "later" | "right" | "down" => Ok(MoveDirection::Later),
            other => Err(DomainError::InvalidState(format!(
                "unknown move direction '{}'",
                other
            ))),
        }
    }
}
