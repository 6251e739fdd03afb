use std::time::Duration;

use tokio::time::{sleep, Instant};

use crate::core::diff::changed;
use crate::core::report::render;
use crate::domain::model::PackageRecord;
use crate::domain::ports::{Notifier, StatusFetcher};

/// Longest single sleep during the wait step. The wait re-checks the
/// deadline at this grain, so the task never sleeps more than a minute past
/// an abort.
const WAIT_SLICE: Duration = Duration::from_secs(60);

/// What a single fetch-compare-notify cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The carrier request or parse failed; nothing was adopted and the
    /// cycle will be retried after the normal interval.
    FetchFailed,
    /// The snapshot matched the previous one; no notification.
    Unchanged,
    /// The snapshot differed and was adopted as the new "last seen".
    /// `notified` is the channel's verdict; a failed push does not undo
    /// the adoption.
    Updated { notified: bool },
}

/// Summary returned once the shipment reports completion.
#[derive(Debug, Clone)]
pub struct MonitorReport {
    pub cycles: u64,
    pub notifications: u64,
    pub final_record: Option<PackageRecord>,
}

/// Drives the poll loop for one package: fetch, compare, notify on change,
/// sleep, repeat until the carrier reports the delivery complete.
///
/// One engine instance monitors one package on one sequential task; to
/// watch several packages, run several independent engines.
pub struct MonitorEngine<F: StatusFetcher, N: Notifier> {
    fetcher: F,
    notifier: N,
    package_number: String,
    interval: Duration,
    last_seen: Option<PackageRecord>,
    cycles: u64,
    notifications: u64,
}

impl<F: StatusFetcher, N: Notifier> MonitorEngine<F, N> {
    pub fn new(
        fetcher: F,
        notifier: N,
        package_number: impl Into<String>,
        interval: Duration,
    ) -> Self {
        Self {
            fetcher,
            notifier,
            package_number: package_number.into(),
            interval,
            last_seen: None,
            cycles: 0,
            notifications: 0,
        }
    }

    /// Runs the loop to completion. The only normal exit is the carrier
    /// reporting the delivery finished; fetch and notification failures are
    /// logged and retried or dropped, never fatal.
    pub async fn run(mut self) -> MonitorReport {
        tracing::info!("start: {}", self.package_number);

        loop {
            match self.run_cycle().await {
                CycleOutcome::FetchFailed => {
                    tracing::info!("cycle {}: no usable snapshot, retrying", self.cycles);
                }
                CycleOutcome::Unchanged => {
                    tracing::debug!("cycle {}: no change", self.cycles);
                }
                CycleOutcome::Updated { notified } => {
                    tracing::info!("cycle {}: update (notified: {})", self.cycles, notified);
                }
            }

            if self.last_seen.as_ref().is_some_and(|r| r.is_finished) {
                tracing::info!("finish: {}", self.package_number);
                break;
            }

            self.wait_for_next_cycle().await;
        }

        MonitorReport {
            cycles: self.cycles,
            notifications: self.notifications,
            final_record: self.last_seen,
        }
    }

    /// One fetch-compare-notify cycle. Exposed separately so the state
    /// machine can be exercised without the wait step.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        self.cycles += 1;

        let record = match self.fetcher.fetch(&self.package_number).await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("fetch failed: {}", e);
                return CycleOutcome::FetchFailed;
            }
        };
        tracing::debug!("get: package info");

        if !changed(self.last_seen.as_ref(), &record) {
            return CycleOutcome::Unchanged;
        }

        tracing::info!("update: {} is now \"{}\"", self.package_number, record.status);
        let message = format!(
            "荷物番号{}の配送状況が更新されました\n\n{}",
            self.package_number,
            render(&record)
        );

        let notified = self.notifier.notify(&message).await;
        if notified {
            self.notifications += 1;
        } else {
            tracing::warn!("notification was not delivered, continuing without retry");
        }

        // Adopted regardless of the notification outcome: completion
        // detection must depend only on successful fetches.
        self.last_seen = Some(record);
        CycleOutcome::Updated { notified }
    }

    async fn wait_for_next_cycle(&self) {
        let next_poll = chrono::Local::now() + chrono::Duration::seconds(self.interval.as_secs() as i64);
        tracing::info!("next poll at {}", next_poll.format("%Y-%m-%d %H:%M:%S"));

        let deadline = Instant::now() + self.interval;
        loop {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            sleep(WAIT_SLICE.min(deadline - now)).await;
        }
    }
}
