use crate::domain::model::{ProbeOutcome, ProbeReport, ProbeResult};
use crate::domain::ports::UrlProber;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Probes a list of URLs with bounded concurrency. Results come back in
/// configuration order regardless of completion order.
pub struct ProbeEngine<P: UrlProber + 'static> {
    prober: Arc<P>,
    concurrent_requests: usize,
}

impl<P: UrlProber + 'static> ProbeEngine<P> {
    pub fn new(prober: P, concurrent_requests: usize) -> Self {
        Self {
            prober: Arc::new(prober),
            concurrent_requests: concurrent_requests.max(1),
        }
    }

    pub async fn run(&self, urls: &[String]) -> ProbeReport {
        let semaphore = Arc::new(Semaphore::new(self.concurrent_requests));
        let mut tasks = JoinSet::new();

        for (index, url) in urls.iter().cloned().enumerate() {
            let prober = Arc::clone(&self.prober);
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                // The semaphore is never closed; a failed acquire only
                // means we proceed without throttling.
                let _permit = semaphore.acquire_owned().await.ok();
                tracing::debug!("Probing {}", url);
                (index, prober.probe(&url).await)
            });
        }

        let mut slots: Vec<Option<ProbeResult>> = vec![None; urls.len()];
        while let Some(joined) = tasks.join_next().await {
            if let Ok((index, result)) = joined {
                slots[index] = Some(result);
            }
        }

        let results = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| ProbeResult {
                    url: urls[index].clone(),
                    outcome: ProbeOutcome::Unreachable {
                        reason: "probe task failed".to_string(),
                    },
                })
            })
            .collect();

        ProbeReport::new(results)
    }
}
