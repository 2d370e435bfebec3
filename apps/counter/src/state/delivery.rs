//! # Delivery Ticker
//!
//! Background task driving the supplier screen's delivery animation.
//!
//! ```text
//! ┌──────────────────────────┐  every tick   ┌──────────────────────────┐
//! │ tokio::spawn             │──────────────►│ watch::Sender            │
//! │  interval(tick)          │  progress     │  <DeliveryProgress>      │
//! │  progress.tick()         │  +0.5, wraps  └────────────┬─────────────┘
//! └──────────────────────────┘  100 → 0                   │ borrow()
//!                                                         ▼
//!                                           `delivery` command reads the
//!                                           latest value, never blocks
//! ```
//!
//! Purely cosmetic: it reads nothing from the session. The task stops when
//! the ticker is dropped.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::info;

use officine_core::supplier::DeliveryProgress;

/// Handle to the running animation task.
#[derive(Debug)]
pub struct DeliveryTicker {
    progress_rx: watch::Receiver<DeliveryProgress>,
    task: JoinHandle<()>,
}

impl DeliveryTicker {
    /// Spawns the ticker on the current tokio runtime.
    pub fn start(tick: Duration) -> Self {
        let (progress_tx, progress_rx) = watch::channel(DeliveryProgress::start());

        let task = tokio::spawn(async move {
            info!(tick_ms = tick.as_millis() as u64, "Delivery ticker started");

            let mut interval = tokio::time::interval(tick);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; start from 0%.
            interval.tick().await;

            loop {
                interval.tick().await;
                progress_tx.send_modify(|progress| progress.tick());
            }
        });

        DeliveryTicker { progress_rx, task }
    }

    /// Latest published progress.
    pub fn progress(&self) -> DeliveryProgress {
        *self.progress_rx.borrow()
    }

    /// A receiver for callers that want to await changes.
    pub fn subscribe(&self) -> watch::Receiver<DeliveryProgress> {
        self.progress_rx.clone()
    }
}

impl Drop for DeliveryTicker {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_progress_advances_each_tick() {
        let ticker = DeliveryTicker::start(Duration::from_millis(100));
        let mut rx = ticker.subscribe();
        assert_eq!(ticker.progress().percent(), 0.0);

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().percent(), 0.5);

        rx.changed().await.unwrap();
        assert_eq!(ticker.progress().percent(), 1.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_wraps_after_full_cycle() {
        let ticker = DeliveryTicker::start(Duration::from_millis(100));
        let mut rx = ticker.subscribe();

        // 200 steps of 0.5 reach 100, the next one wraps to 0.
        let mut last = 0.0;
        for _ in 0..400 {
            rx.changed().await.unwrap();
            let now = rx.borrow_and_update().percent();
            if now < last {
                assert!(last >= 99.5);
                assert!(now < 1.0);
                return;
            }
            last = now;
        }
        panic!("delivery progress never wrapped");
    }
}
