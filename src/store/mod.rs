//! The preference store: synchronous reads and mutations, change
//! broadcast, and asynchronous best-effort persistence.

mod changes;
mod update;
mod writer;


pub use changes::{ChangeCause, PrefsChange};
pub use update::PrefUpdate;

use std::sync::{Arc, RwLock};

use futures::Stream;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::core::Result;
use crate::prefs::Preferences;
use crate::storage::StorageBackend;

use writer::PersistenceWriter;

/// Namespace key the snapshot is persisted under.
pub const STORAGE_KEY: &str = "client-storage";

/// Single authoritative holder of the current preference snapshot.
///
/// Reads return clones of the snapshot; mutations replace one whole field
/// (or the whole snapshot, for [`clear`](Self::clear)), broadcast a
/// [`PrefsChange`] to subscribers and enqueue the full snapshot for
/// asynchronous persistence. The store is a cheap cloneable handle; the
/// application's composition root is expected to construct exactly one
/// per process and share it.
#[derive(Clone)]
pub struct ClientStore {
    prefs: Arc<RwLock<Preferences>>,

    change_sender: broadcast::Sender<PrefsChange>,

    writer: PersistenceWriter,

    backend: Arc<dyn StorageBackend>,
}

impl ClientStore {
    /// Creates a store holding a freshly computed default snapshot,
    /// without touching the backend.
    ///
    /// Prefer [`ClientStore::load`] at application startup so previously
    /// persisted preferences are restored. Must be called from within a
    /// tokio runtime; the persistence writer task is spawned here.
    pub fn with_defaults(backend: Arc<dyn StorageBackend>) -> Self {
        let (change_sender, _) = broadcast::channel(256);

        Self {
            prefs: Arc::new(RwLock::new(Preferences::default())),
            change_sender,
            writer: PersistenceWriter::spawn(backend.clone()),
            backend,
        }
    }

    /// Creates a store and restores the persisted snapshot, if one exists.
    ///
    /// Persisted fields win over defaults; fields absent from the record
    /// (written before they existed) keep their defaults, and unknown
    /// fields in the record are ignored. The restore completes before the
    /// store is returned, so no mutation can race the startup merge. A
    /// missing record, an unreachable backend or a corrupt record all
    /// leave the defaults in place; failures are logged, never surfaced.
    pub async fn load(backend: Arc<dyn StorageBackend>) -> Self {
        let store = Self::with_defaults(backend);
        store.restore().await;
        store
    }

    async fn restore(&self) {
        let raw = match self.backend.get(STORAGE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no persisted preferences, keeping defaults");
                return;
            }
            Err(e) => {
                warn!("failed to read persisted preferences, keeping defaults: {e}");
                return;
            }
        };

        match serde_json::from_str::<Preferences>(&raw) {
            Ok(restored) => {
                self.replace(restored, ChangeCause::Restore);
                info!("restored persisted preferences");
            }
            Err(e) => {
                warn!("corrupt persisted preferences, keeping defaults: {e}");
            }
        }
    }

    /// Returns a clone of the current snapshot, handling poisoned locks
    /// gracefully.
    pub fn get_current(&self) -> Preferences {
        match self.prefs.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Applies one field update, broadcasts the change, then requests
    /// persistence of the full snapshot.
    ///
    /// The snapshot update and the broadcast are synchronous; persistence
    /// is queued and not awaited. A failed write is logged and dropped —
    /// the in-memory snapshot stays authoritative for the rest of the
    /// process lifetime.
    pub fn update(&self, update: PrefUpdate) {
        let field = update.field();

        let snapshot = {
            let mut guard = match self.prefs.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            update.apply(&mut guard);
            guard.clone()
        };

        let change = PrefsChange::new(ChangeCause::Update { field }, snapshot.clone());
        let _ = self.change_sender.send(change);
        self.writer.enqueue(snapshot);
    }

    /// Resets every preference to a freshly computed default snapshot and
    /// persists it.
    ///
    /// Time-relative defaults (the review prompt) are recomputed, so a
    /// reset behaves like a fresh install.
    pub fn clear(&self) {
        let snapshot = Preferences::default();
        self.replace(snapshot.clone(), ChangeCause::Reset);
        self.writer.enqueue(snapshot);
    }

    /// Subscribes to change events.
    ///
    /// Every successful mutation delivers exactly one [`PrefsChange`]
    /// carrying the post-mutation snapshot. Dropping the receiver
    /// unsubscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<PrefsChange> {
        self.change_sender.subscribe()
    }

    /// Creates a stream of change events for consumers that prefer
    /// `futures` streams over broadcast receivers.
    pub fn changes(&self) -> impl Stream<Item = PrefsChange> {
        let receiver = self.change_sender.subscribe();

        futures::stream::unfold(receiver, |mut receiver| async move {
            loop {
                match receiver.recv().await {
                    Ok(change) => return Some((change, receiver)),
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        })
    }

    /// Waits until every persistence request made so far has been handed
    /// to the backend.
    ///
    /// Useful for orderly shutdown; individual write failures remain
    /// best-effort and do not fail the flush.
    ///
    /// # Errors
    /// Returns [`StoreError::WriterUnavailable`](crate::StoreError) if the
    /// background writer task is gone.
    pub async fn flush(&self) -> Result<()> {
        self.writer.flush().await
    }

    /// Removes the persisted snapshot record from the backend.
    ///
    /// The in-memory snapshot is untouched; the next mutation persists it
    /// again.
    ///
    /// # Errors
    /// Returns a storage error if the backend fails the removal.
    pub async fn clear_persisted(&self) -> Result<()> {
        self.backend.remove(STORAGE_KEY).await
    }

    fn replace(&self, snapshot: Preferences, cause: ChangeCause) {
        {
            let mut guard = match self.prefs.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            *guard = snapshot.clone();
        }

        let _ = self.change_sender.send(PrefsChange::new(cause, snapshot));
    }
}
