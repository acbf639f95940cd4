use memcity_model::Snapshot;
use tokio::sync::watch;

/// Where the supervisor publishes each rebuilt snapshot (spec §5: "delivered
/// to the hub through a buffered channel of capacity 1 with latest-wins
/// semantics"). The hub itself is out of scope; this is the boundary the
/// core hands snapshots across.
pub trait SnapshotSink: Send + Sync {
    fn publish(&self, snapshot: Snapshot);
}

/// Backed by a [`tokio::sync::watch`] channel, which natively has the
/// capacity-1, latest-wins semantics spec §5 asks for: a send overwrites
/// whatever the receiver hasn't yet observed, and every subscriber always
/// sees the most recent value rather than replaying a queue.
pub struct WatchSink {
    tx: watch::Sender<Option<Snapshot>>,
}

impl WatchSink {
    #[must_use]
    pub fn new() -> (Self, watch::Receiver<Option<Snapshot>>) {
        let (tx, rx) = watch::channel(None);
        (Self { tx }, rx)
    }
}

impl SnapshotSink for WatchSink {
    fn publish(&self, snapshot: Snapshot) {
        // A closed receiver just means no one is currently listening; the
        // supervisor keeps rebuilding regardless (spec §5's hub is a
        // separate, external consumer).
        let _ = self.tx.send(Some(snapshot));
    }
}

/// Discards every snapshot. Used by tests and by any caller that only
/// wants the Graph Store's side effects, not publication.
#[derive(Debug, Default)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn publish(&self, _snapshot: Snapshot) {}
}
