//! Hogbar Store - client-side preference and session state for the
//! Hogbar analytics client.
//!
//! The store holds a typed snapshot of every user preference (selected
//! project and organization, activity table layout, time-period filters,
//! onboarding flags, cosmetic settings) and keeps it durable across
//! restarts through a pluggable storage backend. The main features
//! include:
//!
//! - Synchronous reads and single-field updates over a fixed snapshot
//! - Change broadcast to any number of subscribers
//! - Best-effort asynchronous persistence with coalesced writes
//! - Forward-compatible restoration of older persisted snapshots
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use hogbar_store::prefs::Theme;
//! use hogbar_store::storage::JsonFileStorage;
//! use hogbar_store::store::{ClientStore, PrefUpdate};
//!
//! # async fn example() {
//! // Restore persisted preferences (or fall back to defaults)
//! let backend = Arc::new(JsonFileStorage::new("/var/lib/hogbar"));
//! let store = ClientStore::load(backend).await;
//!
//! // Read and mutate the snapshot
//! let prefs = store.get_current();
//! println!("endpoint: {}", prefs.posthog_endpoint);
//! store.update(PrefUpdate::Theme(Theme::Dark));
//! # }
//! ```

/// Core error types and result aliases.
pub mod core;

/// Preference snapshot schema and field domains.
pub mod prefs;

/// Persistence collaborator seam and the shipped backends.
pub mod storage;

/// The preference store with change broadcast and persistence.
pub mod store;

/// Re-exported core types for convenience.
pub use crate::core::{Result, StoreError};
