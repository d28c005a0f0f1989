//! One-shot engine readiness signal.
//!
//! Each pane gets a [`ReadySender`] / [`ReadyReceiver`] pair. The sender is
//! consumed by [`ReadySender::complete`], so a pane reports at most once.
//! The receiver is polled from the UI thread; it may observe the outcome at
//! any later point, never before the window is shown.

use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError};

/// What a pane's engine reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// Not reported yet.
    Pending,
    /// Engine is ready to navigate.
    Ready,
    /// Engine failed; carries the engine's error text.
    Failed(String),
    /// The sender was dropped without reporting. The pane stays idle.
    Abandoned,
}

/// Completing half. Consumed on use.
#[derive(Debug)]
pub struct ReadySender {
    tx: SyncSender<Result<(), String>>,
}

/// Polling half, owned by the UI thread.
#[derive(Debug)]
pub struct ReadyReceiver {
    rx: Receiver<Result<(), String>>,
    settled: Option<InitOutcome>,
}

/// Create a connected readiness pair.
pub fn channel() -> (ReadySender, ReadyReceiver) {
    let (tx, rx) = mpsc::sync_channel(1);
    (
        ReadySender { tx },
        ReadyReceiver { rx, settled: None },
    )
}

impl ReadySender {
    /// Report the engine's initialization result.
    pub fn complete(self, result: Result<(), String>) {
        // The receiver may already be gone during shutdown.
        let _ = self.tx.send(result);
    }
}

impl ReadyReceiver {
    /// Check for the outcome without blocking.
    ///
    /// Once a final outcome is seen it is returned on every later call.
    pub fn poll(&mut self) -> InitOutcome {
        if let Some(outcome) = &self.settled {
            return outcome.clone();
        }

        let outcome = match self.rx.try_recv() {
            Ok(Ok(())) => InitOutcome::Ready,
            Ok(Err(e)) => InitOutcome::Failed(e),
            Err(TryRecvError::Empty) => return InitOutcome::Pending,
            Err(TryRecvError::Disconnected) => InitOutcome::Abandoned,
        };
        self.settled = Some(outcome.clone());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_until_completed() {
        let (tx, mut rx) = channel();
        assert_eq!(rx.poll(), InitOutcome::Pending);

        tx.complete(Ok(()));
        assert_eq!(rx.poll(), InitOutcome::Ready);
    }

    #[test]
    fn outcome_is_sticky() {
        let (tx, mut rx) = channel();
        tx.complete(Err("no runtime".into()));

        assert_eq!(rx.poll(), InitOutcome::Failed("no runtime".into()));
        assert_eq!(rx.poll(), InitOutcome::Failed("no runtime".into()));
    }

    #[test]
    fn dropped_sender_is_abandoned() {
        let (tx, mut rx) = channel();
        drop(tx);
        assert_eq!(rx.poll(), InitOutcome::Abandoned);
    }

    #[test]
    fn completion_from_another_thread() {
        let (tx, mut rx) = channel();
        std::thread::spawn(move || tx.complete(Ok(())))
            .join()
            .unwrap();
        assert_eq!(rx.poll(), InitOutcome::Ready);
    }

    #[test]
    fn completing_after_receiver_dropped_does_not_panic() {
        let (tx, rx) = channel();
        drop(rx);
        tx.complete(Ok(()));
    }
}
