//! Two-state cell.

use serde::{Deserialize, Serialize};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    /// Background cell.
    #[default]
    Inactive,
    /// Painted cell.
    Active,
}

impl CellState {
    /// Whether the cell is painted.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl From<bool> for CellState {
    fn from(active: bool) -> Self {
        if active {
            Self::Active
        } else {
            Self::Inactive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_inactive() {
        assert_eq!(CellState::default(), CellState::Inactive);
        assert!(!CellState::default().is_active());
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(CellState::from(true), CellState::Active);
        assert_eq!(CellState::from(false), CellState::Inactive);
    }
}
