use super::{CancelHandle, DriverError, Progress, RunOutcome, Status};
use crate::host::HostAdapter;
use crate::parts::PartSequence;
use std::time::Duration;
use tokio::time::{Instant, sleep};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Minimum pause after each submission
    pub min_delay: Duration,
    /// How often readiness is polled
    pub poll_interval: Duration,
    /// How long to wait for the destination to show it took the part.
    /// When it never does, the part is assumed consumed.
    pub consume_timeout: Duration,
    /// How long to wait for the destination to become ready again
    pub ready_timeout: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            min_delay: Duration::from_secs(10),
            poll_interval: Duration::from_millis(500),
            consume_timeout: Duration::from_secs(30),
            ready_timeout: Duration::from_secs(600),
        }
    }
}

enum Wait {
    Reached,
    Cancelled,
    TimedOut,
}

/// Submits parts one by one, waiting for the destination between them
pub struct AutoSubmitter {
    config: DriverConfig,
    cancel: CancelHandle,
}

impl AutoSubmitter {
    pub fn new(config: DriverConfig) -> Self {
        Self {
            config,
            cancel: CancelHandle::new(),
        }
    }

    /// Handle that stops the current run from elsewhere
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Cancel the run and ask the destination to stop generating
    pub fn stop(&self, host: &dyn HostAdapter) {
        self.cancel.cancel();
        host.cancel();
    }

    /// Send every part in order.
    ///
    /// For each part: wait until the destination accepts input, submit,
    /// pause for `min_delay`, wait for it to go busy, then wait for it to
    /// be ready again. Cancellation is checked between every step.
    pub async fn run<F>(
        &self,
        host: &dyn HostAdapter,
        parts: &PartSequence,
        mut on_progress: F,
    ) -> Result<RunOutcome, DriverError>
    where
        F: FnMut(Progress) + Send,
    {
        if parts.is_empty() {
            return Err(DriverError::NothingToSend);
        }

        let total = parts.len();
        let mut submitted = 0;
        info!(host = host.name(), total, "starting auto-submit");

        for part in parts {
            match self.wait_until(host, true, self.config.ready_timeout).await {
                Wait::Reached => {}
                Wait::Cancelled => return Ok(self.cancelled(submitted, total, &mut on_progress)),
                Wait::TimedOut => {
                    warn!(index = part.index, "destination never became ready");
                    return Err(DriverError::HostUnavailable {
                        index: part.index,
                        waited: self.config.ready_timeout,
                    });
                }
            }

            host.submit(&part.text).await?;
            submitted += 1;
            on_progress(Progress {
                current: part.index,
                total,
                status: Status::Pending,
            });
            debug!(index = part.index, total, "part submitted");

            if !self.pause(self.config.min_delay).await {
                return Ok(self.cancelled(submitted, total, &mut on_progress));
            }

            match self.wait_until(host, false, self.config.consume_timeout).await {
                Wait::Reached => {}
                Wait::Cancelled => return Ok(self.cancelled(submitted, total, &mut on_progress)),
                Wait::TimedOut => debug!(index = part.index, "no busy signal, assuming consumed"),
            }
        }

        // The last reply has to finish before the run counts as done
        match self.wait_until(host, true, self.config.ready_timeout).await {
            Wait::Reached => {}
            Wait::Cancelled => return Ok(self.cancelled(submitted, total, &mut on_progress)),
            Wait::TimedOut => {
                return Err(DriverError::HostUnavailable {
                    index: total,
                    waited: self.config.ready_timeout,
                });
            }
        }

        on_progress(Progress {
            current: total,
            total,
            status: Status::Done,
        });
        info!(host = host.name(), submitted, "auto-submit finished");
        Ok(RunOutcome::Completed { submitted })
    }

    async fn wait_until(&self, host: &dyn HostAdapter, ready: bool, timeout: Duration) -> Wait {
        let deadline = Instant::now() + timeout;
        loop {
            if self.cancel.is_cancelled() {
                return Wait::Cancelled;
            }
            if host.can_accept_input() == ready {
                return Wait::Reached;
            }
            if Instant::now() >= deadline {
                return Wait::TimedOut;
            }
            sleep(self.config.poll_interval).await;
        }
    }

    /// Sleep for `duration` in `poll_interval` steps. False when cancelled.
    async fn pause(&self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;
        loop {
            if self.cancel.is_cancelled() {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            sleep(self.config.poll_interval.min(deadline - now)).await;
        }
    }

    fn cancelled<F>(&self, submitted: usize, total: usize, on_progress: &mut F) -> RunOutcome
    where
        F: FnMut(Progress),
    {
        info!(submitted, total, "auto-submit cancelled");
        on_progress(Progress {
            current: submitted,
            total,
            status: Status::Cancelled,
        });
        RunOutcome::Cancelled { submitted }
    }
}

impl Default for AutoSubmitter {
    fn default() -> Self {
        Self::new(DriverConfig::default())
    }
}
