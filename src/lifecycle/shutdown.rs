//! Shutdown coordination.
//!
//! Backed by a `watch` channel holding a "stopping" flag: once triggered the
//! flag stays set, so a task that subscribes late still observes it.

use tokio::sync::watch;

/// Owner side of the shutdown flag. Dropping it also releases every waiter.
#[derive(Debug)]
pub struct Shutdown {
    stopping: watch::Sender<bool>,
}

/// Handed to long-running tasks; resolves once shutdown begins.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    stopping: watch::Receiver<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (stopping, _) = watch::channel(false);
        Self { stopping }
    }

    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            stopping: self.stopping.subscribe(),
        }
    }

    /// Begin shutdown. Idempotent.
    pub fn trigger(&self) {
        self.stopping.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.stopping.borrow()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownSignal {
    /// Wait until shutdown is triggered or its owner goes away.
    pub async fn wait(mut self) {
        let _ = self.stopping.wait_for(|stopping| *stopping).await;
    }
}
