//! Keyboard stand-in for the push button.
//!
//! Every line read from the terminal is a press. An empty line is one clean
//! falling edge; a number `n` is a press whose contacts bounce `n` times in
//! the same instant. Edges go straight into the [`ButtonLatch`], exactly as
//! an interrupt handler would deliver them.

use gatelink_app::button_latch::ButtonLatch;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Feed edges from `reader` into `latch` until end of input.
///
/// Returns how many edges cleared the debounce window.
///
/// # Errors
///
/// Returns the underlying I/O error if reading fails.
pub async fn feed_edges<R>(reader: R, latch: &ButtonLatch) -> std::io::Result<u32>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut accepted = 0;
    while let Some(line) = lines.next_line().await? {
        let edges = match line.trim() {
            "" => 1,
            value => match value.parse::<u32>() {
                Ok(count) => count,
                Err(_) => {
                    tracing::warn!(input = %value, "expected an empty line or a bounce count");
                    continue;
                }
            },
        };
        for _ in 0..edges {
            if latch.on_edge_now() {
                accepted += 1;
            }
        }
        tracing::debug!(edges, pending = latch.is_pending(), "button edges");
    }
    Ok(accepted)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::io::{AsyncWriteExt, BufReader};

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn should_latch_one_press_per_empty_line() {
        let latch = ButtonLatch::default();
        let accepted = feed_edges(&b"\n"[..], &latch).await.unwrap();
        assert_eq!(accepted, 1);
        assert!(latch.take().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn should_collapse_bouncing_contacts() {
        let latch = ButtonLatch::default();
        let accepted = feed_edges(&b"12\n"[..], &latch).await.unwrap();
        assert_eq!(accepted, 1);
        assert!(latch.take().is_some());
        assert!(latch.take().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn should_ignore_unparseable_lines() {
        let latch = ButtonLatch::default();
        let accepted = feed_edges(&b"open please\n"[..], &latch).await.unwrap();
        assert_eq!(accepted, 0);
        assert!(!latch.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn should_accept_presses_spaced_beyond_debounce() {
        let latch = ButtonLatch::default();
        let (mut keyboard, terminal) = tokio::io::duplex(64);

        let typist = async move {
            keyboard.write_all(b"\n").await.unwrap();
            tokio::time::sleep(Duration::from_millis(301)).await;
            keyboard.write_all(b"\n").await.unwrap();
            tokio::time::sleep(Duration::from_millis(100)).await;
            keyboard.write_all(b"\n").await.unwrap();
        };
        let (accepted, ()) = tokio::join!(feed_edges(BufReader::new(terminal), &latch), typist);

        assert_eq!(accepted.unwrap(), 2);
    }
}
