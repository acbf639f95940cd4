use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::mpsc;

use crate::events::{PathEvent, ReadRequest};

/// Coalesces rapid-fire events for the same path into a single read
/// request after a quiet window (spec §4.4 step 2): "if a later event for
/// the same path arrives inside that window, reset the timer." Each event
/// bumps a per-path generation counter in a shared `DashMap`; the spawned
/// timer for an event only forwards if its generation is still the latest
/// when the window expires, which is exactly "reset the timer" without
/// needing to cancel and respawn a task.
///
/// Deletions are the exception spec §4.4 step 1 carves out: "if the event
/// is a deletion, drop the document's hash; schedule a full rebuild" names
/// no debounce window, unlike the following step's change handling. A
/// `PathEvent::Removed` is therefore forwarded to the reader immediately,
/// bumping the generation counter first so any still-pending `Changed`
/// timer for the same path finds itself superseded and never also fires.
pub async fn run_debouncer(
    mut rx: mpsc::Receiver<PathEvent>,
    reader_tx: mpsc::Sender<ReadRequest>,
    debounce: Duration,
) {
    let generations: Arc<DashMap<PathBuf, u64>> = Arc::new(DashMap::new());

    while let Some(event) = rx.recv().await {
        let path = event.path().clone();
        {
            let mut entry = generations.entry(path.clone()).or_insert(0);
            *entry += 1;
        }

        if let PathEvent::Removed(path) = event {
            if reader_tx.send(ReadRequest { path, removed: true }).await.is_err() {
                return;
            }
            continue;
        }

        let generation = *generations.get(&path).expect("just inserted above");
        let generations = Arc::clone(&generations);
        let reader_tx = reader_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            let is_latest = generations.get(&path).is_some_and(|g| *g == generation);
            if is_latest {
                let _ = reader_tx.send(ReadRequest { path, removed: false }).await;
            }
        });
    }
    // `rx` closed because the watcher task exited; `reader_tx` is dropped
    // when this function returns, which closes the reader's channel once
    // every in-flight timer above has also finished and dropped its clone.
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn later_event_suppresses_an_earlier_pending_one() {
        let (tx, rx) = mpsc::channel(8);
        let (reader_tx, mut reader_rx) = mpsc::channel(8);
        let debounce = Duration::from_millis(100);

        tokio::spawn(run_debouncer(rx, reader_tx, debounce));

        let path = PathBuf::from("SOUL.md");
        tx.send(PathEvent::Changed(path.clone())).await.unwrap();
        tokio::time::sleep(Duration::from_millis(40)).await;
        tx.send(PathEvent::Changed(path.clone())).await.unwrap();
        drop(tx);

        tokio::time::sleep(Duration::from_millis(200)).await;

        let first = reader_rx.recv().await.unwrap();
        assert_eq!(first.path, path);
        assert!(reader_rx.try_recv().is_err(), "the superseded event must not also forward");
    }

    #[tokio::test(start_paused = true)]
    async fn removal_events_bypass_the_debounce_window() {
        let (tx, rx) = mpsc::channel(8);
        let (reader_tx, mut reader_rx) = mpsc::channel(8);

        // A debounce window long enough that the paused clock would never
        // auto-advance past it on its own within this test: if the removal
        // went through the timer path, `reader_rx.recv()` below would hang
        // forever instead of returning with `removed == true`.
        tokio::spawn(run_debouncer(rx, reader_tx, Duration::from_secs(3600)));

        tx.send(PathEvent::Removed(PathBuf::from("memory/old.md"))).await.unwrap();
        drop(tx);

        let request = tokio::time::timeout(Duration::from_millis(500), reader_rx.recv())
            .await
            .expect("a removal must not wait for the debounce window")
            .unwrap();
        assert!(request.removed);
        assert_eq!(request.path, PathBuf::from("memory/old.md"));
    }

    #[tokio::test(start_paused = true)]
    async fn removal_suppresses_a_pending_change_on_the_same_path() {
        let (tx, rx) = mpsc::channel(8);
        let (reader_tx, mut reader_rx) = mpsc::channel(8);
        let debounce = Duration::from_millis(100);
        let path = PathBuf::from("SOUL.md");

        tokio::spawn(run_debouncer(rx, reader_tx, debounce));

        tx.send(PathEvent::Changed(path.clone())).await.unwrap();
        tx.send(PathEvent::Removed(path.clone())).await.unwrap();
        drop(tx);

        let first = tokio::time::timeout(Duration::from_millis(500), reader_rx.recv())
            .await
            .expect("the removal must forward without waiting for the debounce window")
            .unwrap();
        assert_eq!(first.path, path);
        assert!(first.removed);

        // Let the superseded `Changed` timer's window fully elapse; it must
        // never also forward.
        tokio::time::sleep(debounce * 2).await;
        assert!(reader_rx.try_recv().is_err(), "the superseded change must not also forward");
    }
}
