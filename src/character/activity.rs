use serde::{Deserialize, Serialize};

use crate::square::Corner;
use crate::table::TableKind;

/// Where a marker (cipher or lacuna letter) was found across both squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "squares", rename_all = "snake_case")]
pub enum Activity {
    /// Present in neither square.
    None,
    /// Present in exactly one square.
    One { kind: TableKind, corner: Corner },
    /// Present in both squares.
    Both { even: Corner, mixed: Corner },
}

impl Activity {
    /// Combines the per-square markers.
    pub fn from_markers(even: Option<Corner>, mixed: Option<Corner>) -> Activity {
        match (even, mixed) {
            (None, None) => Activity::None,
            (Some(corner), None) => Activity::One {
                kind: TableKind::Even,
                corner,
            },
            (None, Some(corner)) => Activity::One {
                kind: TableKind::Mixed,
                corner,
            },
            (Some(even), Some(mixed)) => Activity::Both { even, mixed },
        }
    }

    /// Marker in the even square.
    pub fn even(self) -> Option<Corner> {
        match self {
            Activity::One {
                kind: TableKind::Even,
                corner,
            } => Some(corner),
            Activity::Both { even, .. } => Some(even),
            _ => None,
        }
    }

    /// Marker in the mixed square.
    pub fn mixed(self) -> Option<Corner> {
        match self {
            Activity::One {
                kind: TableKind::Mixed,
                corner,
            } => Some(corner),
            Activity::Both { mixed, .. } => Some(mixed),
            _ => None,
        }
    }

    /// Present in at least one square.
    pub fn any(self) -> bool {
        !matches!(self, Activity::None)
    }

    /// Present in both squares.
    pub fn all(self) -> bool {
        matches!(self, Activity::Both { .. })
    }
}
