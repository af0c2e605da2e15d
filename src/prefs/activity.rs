use serde::{Deserialize, Serialize};
use std::fmt;

/// Columns available in the activity table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityColumn {
    /// Event name.
    Event,
    /// Current URL of the event.
    Url,
    /// Person the event belongs to.
    Person,
    /// When the event occurred.
    Timestamp,
}

/// Display mode for the activity table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityDisplayMode {
    /// Condensed rows.
    Compact,
    /// Full rows with all detail (default).
    #[default]
    Full,
}

impl fmt::Display for ActivityColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityColumn::Event => write!(f, "event"),
            ActivityColumn::Url => write!(f, "url"),
            ActivityColumn::Person => write!(f, "person"),
            ActivityColumn::Timestamp => write!(f, "timestamp"),
        }
    }
}

impl fmt::Display for ActivityDisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityDisplayMode::Compact => write!(f, "compact"),
            ActivityDisplayMode::Full => write!(f, "full"),
        }
    }
}
