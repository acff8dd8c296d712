//! Ordered background writer for cart snapshots.

use cart_kv::{Cache, KeyValueStore};
use tokio::sync::{mpsc, oneshot};

use crate::cart::Cart;

enum WriteCommand {
    Persist(Cart),
    Flush(oneshot::Sender<()>),
}

/// FIFO queue of snapshots drained by a single writer task.
///
/// Snapshots are written in the order they were enqueued. Dropping the
/// queue lets the writer finish what is pending and exit.
#[derive(Debug)]
pub(crate) struct WriteQueue {
    tx: mpsc::UnboundedSender<WriteCommand>,
}

impl WriteQueue {
    /// Spawn the writer task on the current tokio runtime.
    pub(crate) fn spawn<S: KeyValueStore>(cache: Cache<S>, key: String) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_writer(cache, key, rx));
        Self { tx }
    }

    /// Queue a full snapshot. Never blocks.
    pub(crate) fn enqueue(&self, cart: Cart) {
        if self.tx.send(WriteCommand::Persist(cart)).is_err() {
            tracing::warn!("cart writer has stopped; snapshot dropped");
        }
    }

    /// Wait until everything queued before this call has been written.
    pub(crate) async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(WriteCommand::Flush(done_tx)).is_ok() {
            let _ = done_rx.await;
        }
    }
}

async fn run_writer<S: KeyValueStore>(
    cache: Cache<S>,
    key: String,
    mut rx: mpsc::UnboundedReceiver<WriteCommand>,
) {
    while let Some(command) = rx.recv().await {
        match command {
            WriteCommand::Persist(cart) => match cache.set_json(&key, &cart).await {
                Ok(()) => tracing::debug!(key = %key, items = cart.len(), "stored cart"),
                Err(e) => tracing::warn!(key = %key, error = %e, "failed to store cart"),
            },
            WriteCommand::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
    tracing::debug!(key = %key, "cart writer stopped");
}
