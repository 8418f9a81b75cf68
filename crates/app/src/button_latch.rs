//! Lock-free hand-off between the button interrupt and the main loop.
//!
//! The interrupt side calls [`ButtonLatch::on_edge`]; it does nothing but a
//! debounce compare-and-update on one timestamp and a flag store. The main
//! loop calls [`ButtonLatch::take`] on every tick. Rapid bursts of edges
//! collapse into a single pending event; an event that is still pending when
//! the next one is accepted is merged with it, never duplicated.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use gatelink_domain::debounce::{ButtonEvent, DEFAULT_DEBOUNCE_MS, clears_window};
use tokio::time::Instant;

const NEVER: u64 = u64::MAX;

/// Debounce window plus pending flag, shared between interrupt and loop.
#[derive(Debug)]
pub struct ButtonLatch {
    pending: AtomicBool,
    last_accepted_ms: AtomicU64,
    threshold_ms: u64,
    origin: Instant,
}

impl Default for ButtonLatch {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl ButtonLatch {
    #[must_use]
    pub fn new(threshold_ms: u64) -> Self {
        Self {
            pending: AtomicBool::new(false),
            last_accepted_ms: AtomicU64::new(NEVER),
            threshold_ms,
            origin: Instant::now(),
        }
    }

    /// Milliseconds since the latch was created, on the tokio clock.
    #[must_use]
    pub fn ticks_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(NEVER - 1)
    }

    /// Record a falling edge observed now.
    pub fn on_edge_now(&self) -> bool {
        self.on_edge(self.ticks_ms())
    }

    /// Record a falling edge observed at `now_ms`.
    ///
    /// Returns `true` when the edge cleared the debounce window and raised
    /// the pending flag.
    pub fn on_edge(&self, now_ms: u64) -> bool {
        let mut last = self.last_accepted_ms.load(Ordering::Acquire);
        loop {
            if last != NEVER && !clears_window(last, now_ms, self.threshold_ms) {
                return false;
            }
            match self.last_accepted_ms.compare_exchange_weak(
                last,
                now_ms,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => break,
                Err(actual) => last = actual,
            }
        }
        self.pending.store(true, Ordering::Release);
        true
    }

    /// Clear the pending flag, returning the accepted event if one was pending.
    pub fn take(&self) -> Option<ButtonEvent> {
        if self.pending.swap(false, Ordering::AcqRel) {
            Some(ButtonEvent {
                at_ms: self.last_accepted_ms.load(Ordering::Acquire),
            })
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;

    #[test]
    fn should_accept_first_edge() {
        let latch = ButtonLatch::default();
        assert!(latch.on_edge(0));
        assert_eq!(latch.take(), Some(ButtonEvent { at_ms: 0 }));
        assert_eq!(latch.take(), None);
    }

    #[test]
    fn should_drop_edges_inside_threshold() {
        let latch = ButtonLatch::default();
        assert!(latch.on_edge(1_000));
        assert!(!latch.on_edge(1_050));
        assert!(!latch.on_edge(1_300));
        assert!(latch.on_edge(1_301));
    }

    #[test]
    fn should_measure_from_last_accepted_edge_only() {
        let latch = ButtonLatch::default();
        latch.on_edge(0);
        // Bounces every 100 ms do not extend the window.
        assert!(!latch.on_edge(100));
        assert!(!latch.on_edge(200));
        assert!(!latch.on_edge(300));
        assert!(latch.on_edge(400));
    }

    #[test]
    fn should_collapse_burst_into_single_event() {
        let latch = ButtonLatch::default();
        let accepted = (0..50u64)
            .map(|i| 5_000 + i * 3)
            .filter(|&t| latch.on_edge(t))
            .count();
        assert_eq!(accepted, 1);
        assert_eq!(latch.take(), Some(ButtonEvent { at_ms: 5_000 }));
        assert!(!latch.is_pending());
    }

    #[test]
    fn should_keep_accepted_edges_apart() {
        let latch = ButtonLatch::default();
        let edges = [0, 10, 290, 301, 350, 602, 603, 900, 1_203, 1_204, 2_000];
        let accepted: Vec<u64> = edges
            .iter()
            .copied()
            .filter(|&t| latch.on_edge(t))
            .collect();
        assert_eq!(accepted, vec![0, 301, 602, 1_203, 2_000]);
        for pair in accepted.windows(2) {
            assert!(pair[1] - pair[0] >= DEFAULT_DEBOUNCE_MS);
        }
    }

    #[test]
    fn should_merge_presses_accepted_before_the_loop_polls() {
        let latch = ButtonLatch::default();
        latch.on_edge(0);
        latch.on_edge(500);
        assert_eq!(latch.take(), Some(ButtonEvent { at_ms: 500 }));
        assert_eq!(latch.take(), None);
    }

    #[test]
    fn should_accept_from_another_thread() {
        let latch = Arc::new(ButtonLatch::default());
        let irq = Arc::clone(&latch);
        std::thread::spawn(move || {
            irq.on_edge(10);
            irq.on_edge(20);
        })
        .join()
        .unwrap();
        assert_eq!(latch.take(), Some(ButtonEvent { at_ms: 10 }));
    }

    #[tokio::test(start_paused = true)]
    async fn should_timestamp_edges_on_tokio_clock() {
        let latch = ButtonLatch::default();
        tokio::time::advance(Duration::from_millis(1_234)).await;
        assert_eq!(latch.ticks_ms(), 1_234);
        assert!(latch.on_edge_now());
        assert_eq!(latch.take(), Some(ButtonEvent { at_ms: 1_234 }));
    }
}
