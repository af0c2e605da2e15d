use crate::prefs::{
    ActivityColumn, ActivityDisplayMode, AppIcon, EventFilter, Preferences, Theme, TimePeriod,
};

/// A single-field update to the preference snapshot.
///
/// One variant per recognized field, each carrying that field's typed
/// payload. Dispatching through a closed union keeps the setter
/// exhaustive at compile time: there is no way to name an unknown field
/// or hand a field a value outside its domain.
#[derive(Debug, Clone, PartialEq)]
pub enum PrefUpdate {
    /// Replace the selected app icon.
    AppIcon(AppIcon),
    /// Toggle dev mode.
    DevMode(bool),
    /// Replace the color theme.
    Theme(Theme),
    /// Replace the viewed project id.
    Project(Option<String>),
    /// Replace the viewed organization id.
    Organization(Option<String>),
    /// Replace the viewed dashboard.
    Dashboard(Option<String>),
    /// Replace the activity table display mode.
    ActivityDisplayMode(ActivityDisplayMode),
    /// Replace the activity table columns.
    ActivityColumns(Vec<ActivityColumn>),
    /// Replace the PostHog endpoint.
    PosthogEndpoint(String),
    /// Replace the activity page time period.
    ActivityTimePeriod(TimePeriod),
    /// Replace the activity page event filter.
    ActivityEventDefinition(EventFilter),
    /// Replace the insights page time period.
    InsightsTimePeriod(TimePeriod),
    /// Toggle filtering of internal/test accounts.
    FilterTestAccounts(bool),
    /// Replace the review prompt due time.
    ReviewPromptTime(Option<i64>),
    /// Mark the activity onboarding as seen or unseen.
    HasSeenActivityOnboarding(bool),
    /// Mark the insights onboarding as seen or unseen.
    HasSeenInsightsOnboarding(bool),
    /// Mark the exceptions onboarding as seen or unseen.
    HasSeenExceptionsOnboarding(bool),
    /// Toggle update alerts.
    DisableUpdateAlerts(bool),
}

impl PrefUpdate {
    /// Name of the snapshot field this update replaces.
    pub fn field(&self) -> &'static str {
        match self {
            PrefUpdate::AppIcon(_) => "app_icon",
            PrefUpdate::DevMode(_) => "dev_mode",
            PrefUpdate::Theme(_) => "theme",
            PrefUpdate::Project(_) => "project",
            PrefUpdate::Organization(_) => "organization",
            PrefUpdate::Dashboard(_) => "dashboard",
            PrefUpdate::ActivityDisplayMode(_) => "activity_display_mode",
            PrefUpdate::ActivityColumns(_) => "activity_columns",
            PrefUpdate::PosthogEndpoint(_) => "posthog_endpoint",
            PrefUpdate::ActivityTimePeriod(_) => "activity_time_period",
            PrefUpdate::ActivityEventDefinition(_) => "activity_event_definition",
            PrefUpdate::InsightsTimePeriod(_) => "insights_time_period",
            PrefUpdate::FilterTestAccounts(_) => "filter_test_accounts",
            PrefUpdate::ReviewPromptTime(_) => "review_prompt_time",
            PrefUpdate::HasSeenActivityOnboarding(_) => "has_seen_activity_onboarding",
            PrefUpdate::HasSeenInsightsOnboarding(_) => "has_seen_insights_onboarding",
            PrefUpdate::HasSeenExceptionsOnboarding(_) => "has_seen_exceptions_onboarding",
            PrefUpdate::DisableUpdateAlerts(_) => "disable_update_alerts",
        }
    }

    /// Replaces the target field's value in `prefs`. All other fields are
    /// left untouched.
    pub(crate) fn apply(self, prefs: &mut Preferences) {
        match self {
            PrefUpdate::AppIcon(value) => prefs.app_icon = value,
            PrefUpdate::DevMode(value) => prefs.dev_mode = value,
            PrefUpdate::Theme(value) => prefs.theme = value,
            PrefUpdate::Project(value) => prefs.project = value,
            PrefUpdate::Organization(value) => prefs.organization = value,
            PrefUpdate::Dashboard(value) => prefs.dashboard = value,
            PrefUpdate::ActivityDisplayMode(value) => prefs.activity_display_mode = value,
            PrefUpdate::ActivityColumns(value) => prefs.activity_columns = value,
            PrefUpdate::PosthogEndpoint(value) => prefs.posthog_endpoint = value,
            PrefUpdate::ActivityTimePeriod(value) => prefs.activity_time_period = value,
            PrefUpdate::ActivityEventDefinition(value) => prefs.activity_event_definition = value,
            PrefUpdate::InsightsTimePeriod(value) => prefs.insights_time_period = value,
            PrefUpdate::FilterTestAccounts(value) => prefs.filter_test_accounts = value,
            PrefUpdate::ReviewPromptTime(value) => prefs.review_prompt_time = value,
            PrefUpdate::HasSeenActivityOnboarding(value) => {
                prefs.has_seen_activity_onboarding = value;
            }
            PrefUpdate::HasSeenInsightsOnboarding(value) => {
                prefs.has_seen_insights_onboarding = value;
            }
            PrefUpdate::HasSeenExceptionsOnboarding(value) => {
                prefs.has_seen_exceptions_onboarding = value;
            }
            PrefUpdate::DisableUpdateAlerts(value) => prefs.disable_update_alerts = value,
        }
    }
}
