//! Pending-reservation poller
//!
//! Periodically re-fetches a restaurant's reservation inbox and
//! publishes the pending count. A cancellable scheduled task with
//! explicit start/stop tied to component lifecycle — no leaked timers.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;

use shared::models::ReservationStatus;
use tavolo_client::HttpClient;
use tavolo_client::api::reservations;

/// Polls the operator inbox and publishes the pending count
pub struct ReservationPoller {
    period: Duration,
    shutdown: CancellationToken,
    handle: Option<JoinHandle<()>>,
    tx: watch::Sender<usize>,
}

impl ReservationPoller {
    pub fn new(period: Duration) -> Self {
        let (tx, _rx) = watch::channel(0);
        Self {
            period,
            shutdown: CancellationToken::new(),
            handle: None,
            tx,
        }
    }

    /// Subscribe to pending-count updates
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.tx.subscribe()
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Start polling. A second start without a stop is a no-op.
    pub fn start<C>(&mut self, client: Arc<C>, restaurant_id: impl Into<String>)
    where
        C: HttpClient + 'static,
    {
        if self.is_running() {
            tracing::warn!("reservation poller already running");
            return;
        }

        let restaurant_id = restaurant_id.into();
        let token = CancellationToken::new();
        self.shutdown = token.clone();
        let tx = self.tx.clone();
        let period = self.period;

        self.handle = Some(tokio::spawn(async move {
            let mut ticker = interval(period);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        match reservations::list_for_restaurant(client.as_ref(), &restaurant_id).await {
                            Ok(history) => {
                                let pending = history
                                    .iter()
                                    .filter(|r| r.status == ReservationStatus::Pending)
                                    .count();
                                tx.send_replace(pending);
                            }
                            Err(e) => tracing::warn!("pending poll failed: {e}"),
                        }
                    }
                }
            }
            tracing::debug!("reservation poller stopped");
        }));
    }

    /// Cancel the task and wait for it to finish
    pub async fn stop(&mut self) {
        self.shutdown.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for ReservationPoller {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
