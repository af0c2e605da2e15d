//! Preference snapshot schema.
//!
//! Defines the complete set of user preferences and session-scoped UI
//! state held by the store, together with their default values and the
//! serde encoding used for the persisted record.

mod activity;
mod app_icon;
mod event_filter;
mod theme;
mod time_period;

#[cfg(test)]
mod tests;

pub use activity::{ActivityColumn, ActivityDisplayMode};
pub use app_icon::AppIcon;
pub use event_filter::EventFilter;
pub use theme::Theme;
pub use time_period::TimePeriod;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// PostHog US cloud endpoint.
pub const US_CLOUD_ENDPOINT: &str = "https://us.posthog.com";

/// PostHog EU cloud endpoint.
pub const EU_CLOUD_ENDPOINT: &str = "https://eu.posthog.com";

/// How long after first use the review prompt becomes due.
const REVIEW_PROMPT_DELAY_MS: i64 = 3 * 24 * 60 * 60 * 1000;

/// Complete snapshot of user preferences at one instant.
///
/// The field set is fixed; every field has a well-defined default so a
/// fresh snapshot is usable without any persisted state. Per-field serde
/// defaults make restoration forward-compatible: a persisted record
/// written before a field existed simply leaves that field at its
/// default, and unknown fields in old records are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// The selected app icon.
    pub app_icon: AppIcon,
    /// Whether dev mode is active.
    pub dev_mode: bool,
    /// The selected color theme.
    pub theme: Theme,
    /// The project id currently being viewed.
    pub project: Option<String>,
    /// The organization id currently being viewed.
    pub organization: Option<String>,
    /// The dashboard currently being viewed.
    pub dashboard: Option<String>,
    /// Display mode for the activity table.
    pub activity_display_mode: ActivityDisplayMode,
    /// Columns shown in the activity table.
    pub activity_columns: Vec<ActivityColumn>,
    /// The PostHog endpoint to query.
    pub posthog_endpoint: String,
    /// Time period queried on the activity page.
    pub activity_time_period: TimePeriod,
    /// Event definition the activity page is filtered by.
    pub activity_event_definition: EventFilter,
    /// Time period queried on the insights page.
    pub insights_time_period: TimePeriod,
    /// Whether internal/test accounts are filtered out of queries.
    pub filter_test_accounts: bool,
    /// When the user should be asked to leave a review, in milliseconds
    /// since the epoch.
    pub review_prompt_time: Option<i64>,
    /// Whether the activity page onboarding has been shown.
    pub has_seen_activity_onboarding: bool,
    /// Whether the insights page onboarding has been shown.
    pub has_seen_insights_onboarding: bool,
    /// Whether the exceptions page onboarding has been shown.
    pub has_seen_exceptions_onboarding: bool,
    /// Whether update alerts are disabled.
    pub disable_update_alerts: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            app_icon: AppIcon::default(),
            dev_mode: false,
            theme: Theme::Light,
            project: None,
            organization: None,
            dashboard: None,
            activity_display_mode: ActivityDisplayMode::Full,
            activity_columns: vec![
                ActivityColumn::Event,
                ActivityColumn::Url,
                ActivityColumn::Timestamp,
            ],
            posthog_endpoint: US_CLOUD_ENDPOINT.to_string(),
            activity_time_period: TimePeriod::DayStart,
            activity_event_definition: EventFilter::All,
            insights_time_period: TimePeriod::Last7Days,
            filter_test_accounts: false,
            // 3 days after first use, show the 'please review us' prompt
            review_prompt_time: Some(Utc::now().timestamp_millis() + REVIEW_PROMPT_DELAY_MS),
            has_seen_activity_onboarding: false,
            has_seen_insights_onboarding: false,
            has_seen_exceptions_onboarding: false,
            disable_update_alerts: false,
        }
    }
}
