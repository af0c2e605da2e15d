//! Unit tests for the preference snapshot schema
//!
//! Tests defaults, wire spellings, and forward-compatible decoding.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use chrono::Utc;
use serde_json::json;

use crate::prefs::{
    ActivityColumn, ActivityDisplayMode, AppIcon, EventFilter, Preferences, Theme, TimePeriod,
    US_CLOUD_ENDPOINT,
};

const THREE_DAYS_MS: i64 = 3 * 24 * 60 * 60 * 1000;

#[test]
fn defaults_match_documented_values() {
    let prefs = Preferences::default();

    assert_eq!(prefs.app_icon, AppIcon::Default);
    assert!(!prefs.dev_mode);
    assert_eq!(prefs.theme, Theme::Light);
    assert_eq!(prefs.project, None);
    assert_eq!(prefs.organization, None);
    assert_eq!(prefs.dashboard, None);
    assert_eq!(prefs.activity_display_mode, ActivityDisplayMode::Full);
    assert_eq!(
        prefs.activity_columns,
        vec![
            ActivityColumn::Event,
            ActivityColumn::Url,
            ActivityColumn::Timestamp,
        ]
    );
    assert_eq!(prefs.posthog_endpoint, US_CLOUD_ENDPOINT);
    assert_eq!(prefs.activity_time_period, TimePeriod::DayStart);
    assert_eq!(prefs.activity_event_definition, EventFilter::All);
    assert_eq!(prefs.insights_time_period, TimePeriod::Last7Days);
    assert!(!prefs.filter_test_accounts);
    assert!(!prefs.has_seen_activity_onboarding);
    assert!(!prefs.has_seen_insights_onboarding);
    assert!(!prefs.has_seen_exceptions_onboarding);
    assert!(!prefs.disable_update_alerts);
}

#[test]
fn review_prompt_defaults_to_three_days_from_now() {
    let before = Utc::now().timestamp_millis();
    let prefs = Preferences::default();
    let after = Utc::now().timestamp_millis();

    let due = prefs.review_prompt_time.unwrap();
    assert!(due >= before + THREE_DAYS_MS);
    assert!(due <= after + THREE_DAYS_MS);
}

#[test]
fn each_fresh_snapshot_computes_its_own_review_prompt() {
    let first = Preferences::default();
    let second = Preferences::default();

    assert!(first.review_prompt_time.is_some());
    assert!(second.review_prompt_time.is_some());
    assert!(second.review_prompt_time >= first.review_prompt_time);
}

#[test]
fn snapshot_encodes_with_wire_spellings() {
    let prefs = Preferences::default();
    let encoded = serde_json::to_value(&prefs).unwrap();

    assert_eq!(encoded["app_icon"], json!("default"));
    assert_eq!(encoded["theme"], json!("light"));
    assert_eq!(encoded["activity_display_mode"], json!("full"));
    assert_eq!(
        encoded["activity_columns"],
        json!(["event", "url", "timestamp"])
    );
    assert_eq!(encoded["activity_time_period"], json!("-1dStart"));
    assert_eq!(encoded["insights_time_period"], json!("-7d"));
    assert_eq!(encoded["activity_event_definition"], json!("all"));
    assert_eq!(encoded["project"], json!(null));
}

#[test]
fn app_icon_uses_kebab_case_spellings() {
    let encoded = serde_json::to_value(AppIcon::HappyOrange).unwrap();
    assert_eq!(encoded, json!("happy-orange"));

    let decoded: AppIcon = serde_json::from_value(json!("happy-blue")).unwrap();
    assert_eq!(decoded, AppIcon::HappyBlue);
}

#[test]
fn record_missing_fields_takes_defaults() {
    let decoded: Preferences =
        serde_json::from_str(r#"{"theme":"dark","activity_columns":["event","person"]}"#).unwrap();

    assert_eq!(decoded.theme, Theme::Dark);
    assert_eq!(
        decoded.activity_columns,
        vec![ActivityColumn::Event, ActivityColumn::Person]
    );
    assert_eq!(decoded.posthog_endpoint, US_CLOUD_ENDPOINT);
    assert_eq!(decoded.activity_display_mode, ActivityDisplayMode::Full);
    assert!(decoded.review_prompt_time.is_some());
}

#[test]
fn record_with_unknown_fields_is_tolerated() {
    let decoded: Preferences =
        serde_json::from_str(r#"{"dev_mode":true,"retired_flag":"whatever"}"#).unwrap();

    assert!(decoded.dev_mode);
}

#[test]
fn snapshot_roundtrip_preserves_every_field() {
    let mut prefs = Preferences::default();
    prefs.theme = Theme::Dark;
    prefs.project = Some("proj-42".to_string());
    prefs.activity_event_definition = EventFilter::Definition("pageview".to_string());
    prefs.activity_time_period = TimePeriod::Custom("-3d".to_string());

    let encoded = serde_json::to_string(&prefs).unwrap();
    let decoded: Preferences = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded, prefs);
}

#[test]
fn time_period_tokens_roundtrip() {
    for (period, token) in [
        (TimePeriod::Last24Hours, "-24h"),
        (TimePeriod::DayStart, "-1dStart"),
        (TimePeriod::Last7Days, "-7d"),
        (TimePeriod::Last14Days, "-14d"),
        (TimePeriod::Last30Days, "-30d"),
        (TimePeriod::Last90Days, "-90d"),
        (TimePeriod::MonthStart, "mStart"),
        (TimePeriod::YearStart, "yStart"),
        (TimePeriod::All, "all"),
    ] {
        assert_eq!(period.as_str(), token);
        assert_eq!(TimePeriod::from(token), period);
    }
}

#[test]
fn unrecognized_time_period_survives_as_custom() {
    let period = TimePeriod::from("-42d");
    assert_eq!(period, TimePeriod::Custom("-42d".to_string()));

    let encoded = serde_json::to_string(&period).unwrap();
    assert_eq!(encoded, r#""-42d""#);

    let decoded: TimePeriod = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, period);
}

#[test]
fn event_filter_distinguishes_sentinel_from_ids() {
    assert_eq!(EventFilter::from("all".to_string()), EventFilter::All);
    assert_eq!(
        EventFilter::from("$pageview".to_string()),
        EventFilter::Definition("$pageview".to_string())
    );

    assert_eq!(String::from(EventFilter::All), "all");
    assert_eq!(
        String::from(EventFilter::Definition("$pageview".to_string())),
        "$pageview"
    );
}
