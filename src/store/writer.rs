use std::sync::Arc;

use tokio::{
    sync::{
        mpsc::{self, UnboundedReceiver, UnboundedSender},
        oneshot,
    },
    task::JoinHandle,
};
use tracing::{debug, warn};

use crate::core::{Result, StoreError};
use crate::prefs::Preferences;
use crate::storage::StorageBackend;

use super::STORAGE_KEY;

/// Commands sent to the persistence writer task
enum WriterCommand {
    /// Persist a snapshot; superseded by any newer pending snapshot
    Persist(Preferences),
    /// Acknowledge once everything enqueued before it has been handled
    Flush(oneshot::Sender<()>),
}

/// Handle to the background persistence writer.
///
/// A dedicated task owns the storage backend and processes commands via
/// message passing, so writes are serialized: at most one write is in
/// flight, and a burst of snapshots coalesces into a single write of the
/// newest one.
#[derive(Clone)]
pub(super) struct PersistenceWriter {
    command_tx: UnboundedSender<WriterCommand>,
    _handle: Arc<JoinHandle<()>>,
}

impl PersistenceWriter {
    /// Spawns the writer task for `backend`.
    pub(super) fn spawn(backend: Arc<dyn StorageBackend>) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(async move {
            writer_loop(command_rx, backend).await;
        });

        Self {
            command_tx,
            _handle: Arc::new(handle),
        }
    }

    /// Queues `snapshot` for persistence. Never blocks; if the writer task
    /// is gone the snapshot is dropped (durability is best-effort).
    pub(super) fn enqueue(&self, snapshot: Preferences) {
        let _ = self.command_tx.send(WriterCommand::Persist(snapshot));
    }

    /// Resolves once every snapshot queued before the call has been
    /// handed to the backend.
    pub(super) async fn flush(&self) -> Result<()> {
        let (ack_tx, ack_rx) = oneshot::channel();

        self.command_tx
            .send(WriterCommand::Flush(ack_tx))
            .map_err(|_| StoreError::WriterUnavailable {
                details: "writer task is not running".to_string(),
            })?;

        ack_rx.await.map_err(|_| StoreError::WriterUnavailable {
            details: "writer task exited before acknowledging".to_string(),
        })
    }
}

/// The writer loop. Drains the queue before each write so rapid mutations
/// collapse into one write of the newest snapshot; flush acks are released
/// only after that write completes.
async fn writer_loop(
    mut command_rx: UnboundedReceiver<WriterCommand>,
    backend: Arc<dyn StorageBackend>,
) {
    while let Some(command) = command_rx.recv().await {
        let mut pending = None;
        let mut acks = Vec::new();

        absorb(command, &mut pending, &mut acks);
        while let Ok(next) = command_rx.try_recv() {
            absorb(next, &mut pending, &mut acks);
        }

        if let Some(snapshot) = pending {
            write_snapshot(backend.as_ref(), &snapshot).await;
        }

        for ack in acks {
            let _ = ack.send(());
        }
    }
}

fn absorb(
    command: WriterCommand,
    pending: &mut Option<Preferences>,
    acks: &mut Vec<oneshot::Sender<()>>,
) {
    match command {
        WriterCommand::Persist(snapshot) => *pending = Some(snapshot),
        WriterCommand::Flush(ack) => acks.push(ack),
    }
}

async fn write_snapshot(backend: &dyn StorageBackend, snapshot: &Preferences) {
    let encoded = match serde_json::to_string(snapshot) {
        Ok(encoded) => encoded,
        Err(e) => {
            warn!("failed to encode preferences, dropping write: {e}");
            return;
        }
    };

    match backend.set(STORAGE_KEY, encoded).await {
        Ok(()) => debug!("persisted preferences"),
        Err(e) => warn!("failed to persist preferences, dropping write: {e}"),
    }
}
