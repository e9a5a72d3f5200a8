//! Sort direction and algorithm selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseNameError;

// ============================================================
// SORT ORDER
// ============================================================

/// Comparison direction applied throughout one sort run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest value first.
    Ascending,
    /// Largest value first (the classic default of the visualizer).
    #[default]
    Descending,
}

impl SortOrder {
    /// Builds an order from the "descending" checkbox value.
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            Self::Descending
        } else {
            Self::Ascending
        }
    }

    /// Returns true for [`SortOrder::Descending`].
    pub fn is_descending(self) -> bool {
        matches!(self, Self::Descending)
    }

    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Strict direction predicate: `a` must be placed before `b`.
    ///
    /// `a < b` for ascending, `a > b` for descending.
    #[inline]
    pub fn precedes(self, a: i32, b: i32) -> bool {
        match self {
            Self::Ascending => a < b,
            Self::Descending => a > b,
        }
    }

    /// Merge predicate: take the left head over the right head.
    ///
    /// Uses `<=` / `>=` so that equal elements keep left-run precedence.
    #[inline]
    pub fn keeps_left(self, left: i32, right: i32) -> bool {
        !self.precedes(right, left)
    }

    /// Checks whether `values` is sorted in this direction.
    pub fn is_sorted(self, values: &[i32]) -> bool {
        values.windows(2).all(|pair| !self.precedes(pair[1], pair[0]))
    }

    /// Short lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" | "up" => Ok(Self::Ascending),
            "desc" | "descending" | "down" => Ok(Self::Descending),
            _ => Err(ParseNameError {
                kind: "order",
                value: s.to_string(),
                expected: "ascending, descending",
            }),
        }
    }
}

// ============================================================
// ALGORITHM
// ============================================================

/// The sorting algorithms the runner can animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Adjacent-swap passes, one step per comparison.
    Bubble,
    /// Extreme-element selection, one step per outer iteration.
    Selection,
    /// Top-down merge sort, one step per element written back.
    Merge,
}

impl Algorithm {
    /// All algorithms in menu order.
    pub const ALL: [Algorithm; 3] = [Self::Bubble, Self::Selection, Self::Merge];

    /// Machine-friendly identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Merge => "merge",
        }
    }

    /// Human-readable name shown in the UI.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Merge => "Merge Sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '_'], "-");
        match normalized.trim_end_matches("-sort") {
            "bubble" => Ok(Self::Bubble),
            "selection" => Ok(Self::Selection),
            "merge" => Ok(Self::Merge),
            _ => Err(ParseNameError {
                kind: "algorithm",
                value: s.to_string(),
                expected: "bubble, selection, merge",
            }),
        }
    }
}
