use std::time::{Duration, Instant};

/// Short-lived status message shown top-right 🔔
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub start_time: Instant,
    pub deadline: Instant,
}

impl Toast {
    pub fn new(message: &str, duration: Duration) -> Self {
        let start_time = Instant::now();
        Self {
            message: message.to_string(),
            start_time,
            deadline: start_time + duration,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}
