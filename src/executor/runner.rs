//! Sequential round driver

use crate::{
    client::Prober,
    error::Result,
    executor::{collector::RoundCollector, RunSettings},
    output::ReportWriter,
    stats::StatsReporter,
};
use futures::FutureExt;
use std::io::Write;
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Drives a fixed number of rounds and feeds their outcomes into the stats
pub struct RoundRunner<P: Prober> {
    collector: RoundCollector<P>,
    urls: Vec<String>,
    settings: RunSettings,
}

impl<P: Prober> RoundRunner<P> {
    pub fn new(collector: RoundCollector<P>, urls: Vec<String>, settings: RunSettings) -> Self {
        Self {
            collector,
            urls,
            settings,
        }
    }

    /// Run every round, print per-request and periodic lines, then the
    /// final summary. Returns the accumulated statistics.
    pub async fn run<W: Write>(&self, output: &mut ReportWriter<W>) -> Result<StatsReporter> {
        let mut stats = StatsReporter::new();

        // `interval_at` panics on a zero period. A first tick past the clock's
        // range can never come due, so no ticker is armed at all.
        let period = self.settings.report_interval.max(Duration::from_millis(1));
        let mut report_ticker = Instant::now().checked_add(period).map(|start| {
            let mut ticker = interval_at(start, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            ticker
        });

        info!(
            rounds = self.settings.round_count,
            urls = self.urls.len(),
            policy = self.collector.policy().as_str(),
            "starting rounds"
        );

        for round in 0..self.settings.round_count {
            let outcome = self
                .collector
                .collect(&self.urls, self.settings.round_timeout)
                .await;

            if !self.settings.quiet {
                for result in outcome.results() {
                    output.probe_line(result)?;
                }
            }

            let status = stats.record_round(&outcome);
            debug!(
                round = round + 1,
                ?status,
                arrived = outcome.results().len(),
                expected = outcome.url_count(),
                "round finished"
            );

            let report_due = report_ticker
                .as_mut()
                .is_some_and(|ticker| ticker.tick().now_or_never().is_some());
            if report_due {
                output.stats_line(&stats.snapshot())?;
            }

            if round + 1 < self.settings.round_count {
                tokio::time::sleep(self.settings.wait).await;
            }
        }

        output.summary(&stats.snapshot())?;

        Ok(stats)
    }
}
