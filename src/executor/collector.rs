//! Fan-out/fan-in of one round's probes under a single deadline

use crate::{
    client::Prober,
    models::{ProbeResult, RoundOutcome},
    types::AbandonPolicy,
};
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Runs one probe per URL concurrently and gathers what arrives in time
pub struct RoundCollector<P: Prober> {
    prober: Arc<P>,
    policy: AbandonPolicy,
}

impl<P: Prober> RoundCollector<P> {
    pub fn new(prober: Arc<P>, policy: AbandonPolicy) -> Self {
        Self { prober, policy }
    }

    pub fn policy(&self) -> AbandonPolicy {
        self.policy
    }

    /// Probe every URL and collect results in arrival order until all have
    /// reported or `timeout` elapses, whichever comes first.
    pub async fn collect(&self, urls: &[String], timeout: Duration) -> RoundOutcome {
        let deadline = tokio::time::sleep(timeout);
        tokio::pin!(deadline);

        let mut handles = Vec::with_capacity(urls.len());
        let mut pending = FuturesUnordered::new();
        for url in urls {
            let (handle, receiver) = self.spawn_probe(url.clone());
            handles.push(handle);
            pending.push(receiver);
        }

        let mut results = Vec::with_capacity(urls.len());
        while results.len() < urls.len() {
            tokio::select! {
                _ = &mut deadline => {
                    warn!(
                        arrived = results.len(),
                        expected = urls.len(),
                        ?timeout,
                        "round timed out"
                    );
                    break;
                }
                received = pending.next() => match received {
                    Some(Ok(result)) => results.push(result),
                    Some(Err(_)) => warn!("probe task ended without reporting"),
                    None => break,
                },
            }
        }

        if results.len() < urls.len() {
            self.abandon(handles);
        }

        RoundOutcome::new(results, urls.len())
    }

    fn spawn_probe(&self, url: String) -> (JoinHandle<()>, oneshot::Receiver<ProbeResult>) {
        let (sender, receiver) = oneshot::channel();
        let prober = Arc::clone(&self.prober);
        let handle = tokio::spawn(async move {
            let result = prober.probe(&url).await;
            // The collector may have stopped listening; the send never blocks.
            let _ = sender.send(result);
        });
        (handle, receiver)
    }

    fn abandon(&self, handles: Vec<JoinHandle<()>>) {
        let in_flight = handles.iter().filter(|h| !h.is_finished()).count();
        match self.policy {
            AbandonPolicy::Cancel => {
                debug!(in_flight, "aborting unfinished probes");
                for handle in handles {
                    handle.abort();
                }
            }
            AbandonPolicy::Detach => {
                debug!(in_flight, "leaving unfinished probes to run in the background");
            }
        }
    }
}
