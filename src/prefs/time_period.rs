use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative time period token understood by the PostHog query API.
///
/// Tokens travel to the API verbatim (`-7d`, `-1dStart`, ...). Tokens this
/// version does not know about decode as [`TimePeriod::Custom`] and round
/// trip untouched, so a persisted record from a newer client still loads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum TimePeriod {
    /// The last 24 hours.
    Last24Hours,
    /// Since the start of the current day.
    DayStart,
    /// The last 7 days.
    Last7Days,
    /// The last 14 days.
    Last14Days,
    /// The last 30 days.
    Last30Days,
    /// The last 90 days.
    Last90Days,
    /// Since the start of the current month.
    MonthStart,
    /// Since the start of the current year.
    YearStart,
    /// All time.
    All,
    /// Any other token, passed through as-is.
    Custom(String),
}

impl TimePeriod {
    /// The wire token for this period.
    pub fn as_str(&self) -> &str {
        match self {
            TimePeriod::Last24Hours => "-24h",
            TimePeriod::DayStart => "-1dStart",
            TimePeriod::Last7Days => "-7d",
            TimePeriod::Last14Days => "-14d",
            TimePeriod::Last30Days => "-30d",
            TimePeriod::Last90Days => "-90d",
            TimePeriod::MonthStart => "mStart",
            TimePeriod::YearStart => "yStart",
            TimePeriod::All => "all",
            TimePeriod::Custom(token) => token,
        }
    }
}

impl From<String> for TimePeriod {
    fn from(token: String) -> Self {
        match token.as_str() {
            "-24h" => TimePeriod::Last24Hours,
            "-1dStart" => TimePeriod::DayStart,
            "-7d" => TimePeriod::Last7Days,
            "-14d" => TimePeriod::Last14Days,
            "-30d" => TimePeriod::Last30Days,
            "-90d" => TimePeriod::Last90Days,
            "mStart" => TimePeriod::MonthStart,
            "yStart" => TimePeriod::YearStart,
            "all" => TimePeriod::All,
            _ => TimePeriod::Custom(token),
        }
    }
}

impl From<&str> for TimePeriod {
    fn from(token: &str) -> Self {
        TimePeriod::from(token.to_string())
    }
}

impl From<TimePeriod> for String {
    fn from(period: TimePeriod) -> Self {
        period.as_str().to_string()
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
