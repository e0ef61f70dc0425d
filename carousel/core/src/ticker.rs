//! Rotation Ticker
//!
//! The carousel's one asynchronous resource: a repeating timer that emits
//! [`CarouselEvent::Tick`] into the owner's event channel.
//!
//! The ticker never looks at carousel state. Whether a tick advances
//! anything is decided when the owner applies it, so pausing needs no
//! rescheduling and resuming never replays ticks that fired while paused.
//!
//! Teardown is tied to [`TickerHandle`]: dropping it aborts the task, so
//! every exit path of the owner (return, `?`, unwinding) stops the timer.
//!
//! ```ignore
//! let (tx, mut rx) = tokio::sync::mpsc::channel(16);
//! let ticker = RotationTicker::new(Duration::from_secs(3)).spawn(tx);
//! while let Some(event) = rx.recv().await {
//!     carousel.handle(event, Instant::now());
//! }
//! drop(ticker);
//! ```

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::events::CarouselEvent;

/// Shortest period the ticker will run at
const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Builder for the repeating tick task
#[derive(Clone, Copy, Debug)]
pub struct RotationTicker {
    interval: Duration,
}

impl RotationTicker {
    /// Create a ticker with the given period
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_TICK_INTERVAL),
        }
    }

    /// Period between ticks
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Spawn the tick task on the current tokio runtime
    ///
    /// The first tick fires one full period after spawning. If the channel
    /// is full the tick is dropped rather than queued; if the receiver is
    /// gone the task exits.
    #[must_use = "dropping the handle cancels the ticker"]
    pub fn spawn(self, tx: mpsc::Sender<CarouselEvent>) -> TickerHandle {
        let period = self.interval;
        tracing::info!(interval_ms = period.as_millis(), "Starting rotation ticker");

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;

                match tx.try_send(CarouselEvent::Tick) {
                    Ok(()) => tracing::trace!("Tick sent"),
                    Err(TrySendError::Full(_)) => {
                        tracing::debug!("Event channel full, dropping tick");
                    }
                    Err(TrySendError::Closed(_)) => {
                        tracing::debug!("Event channel closed, ticker exiting");
                        break;
                    }
                }
            }
        });

        TickerHandle { task }
    }
}

/// Owner's handle on a running tick task; cancels it when dropped
#[derive(Debug)]
pub struct TickerHandle {
    task: JoinHandle<()>,
}

impl TickerHandle {
    /// Stop the ticker now
    pub fn cancel(self) {
        drop(self);
    }

    /// Whether the task has exited (cancelled or receiver gone)
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.task.abort();
        tracing::info!("Rotation ticker cancelled");
    }
}
