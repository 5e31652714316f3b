use std::future::pending;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Trailing-edge debouncer. `arm` opens (or re-opens) the quiet window;
/// `idle` resolves once the most recent window closes. Calls inside one
/// window fully coalesce, there is no queued history.
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    pub fn arm(&mut self) {
        self.deadline = Some(Instant::now() + self.window);
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Never resolves while disarmed; pair with an `is_armed` guard in
    /// `select!` branches.
    pub async fn idle(&self) {
        match self.deadline {
            Some(deadline) => sleep_until(deadline).await,
            None => pending().await,
        }
    }
}
