//! Rows of a month window.

use kalends_calendar::CalendarDay;

/// One month row: either a realized month or a cheap text placeholder.
///
/// The variant is the only thing that distinguishes the two; label strings
/// are never inspected to decide what a row is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowRow {
    /// A month near the viewport, rendered as a full grid.
    Realized {
        /// Month anchor (`open_date + offset` months).
        anchor: CalendarDay,
        /// Bumped on every focus change so dependent views refresh.
        generation: u32,
    },
    /// A month far from the viewport, rendered as its label.
    Placeholder {
        /// Formatted month label, e.g. `Jun 2024`.
        label: String,
    },
}

impl WindowRow {
    /// Returns `true` for [`WindowRow::Realized`].
    pub fn is_realized(&self) -> bool {
        matches!(self, Self::Realized { .. })
    }

    /// Returns the anchor of a realized row.
    pub fn anchor(&self) -> Option<CalendarDay> {
        match self {
            Self::Realized { anchor, .. } => Some(*anchor),
            Self::Placeholder { .. } => None,
        }
    }

    /// Returns the generation of a realized row.
    pub fn generation(&self) -> Option<u32> {
        match self {
            Self::Realized { generation, .. } => Some(*generation),
            Self::Placeholder { .. } => None,
        }
    }

    /// Returns the label of a placeholder row.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Realized { .. } => None,
            Self::Placeholder { label } => Some(label),
        }
    }
}
