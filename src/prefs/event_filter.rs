use serde::{Deserialize, Serialize};
use std::fmt;

/// Event-definition filter applied to the activity page.
///
/// Encodes as a plain string: the sentinel `all` means no filtering,
/// anything else is an event definition id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum EventFilter {
    /// No filtering, show every event.
    #[default]
    All,
    /// Only events matching this event definition.
    Definition(String),
}

impl From<String> for EventFilter {
    fn from(value: String) -> Self {
        if value == "all" {
            EventFilter::All
        } else {
            EventFilter::Definition(value)
        }
    }
}

impl From<EventFilter> for String {
    fn from(filter: EventFilter) -> Self {
        match filter {
            EventFilter::All => "all".to_string(),
            EventFilter::Definition(id) => id,
        }
    }
}

impl fmt::Display for EventFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventFilter::All => write!(f, "all"),
            EventFilter::Definition(id) => write!(f, "{id}"),
        }
    }
}
