use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// In-memory rate limiter used to slow down credential guessing on login.
pub struct RateLimiter {
    /// Maps keys (the login identity) to timestamps of failed attempts
    attempts: Mutex<HashMap<String, Vec<Instant>>>,
    /// Maximum number of attempts allowed within the time window
    max_attempts: usize,
    /// Time window for rate limiting
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_attempts: usize, window_secs: u64) -> Self {
        Self {
            attempts: Mutex::new(HashMap::new()),
            max_attempts,
            window: Duration::from_secs(window_secs),
        }
    }

    /// Check if a request is allowed (true if allowed, false if rate limited)
    pub fn check(&self, key: &str) -> bool {
        let mut attempts = self.attempts.lock().unwrap();
        let now = Instant::now();

        let entry = attempts.entry(key.to_string()).or_default();

        // Drop attempts that fell out of the window
        entry.retain(|&time| now.duration_since(time) < self.window);

        entry.len() < self.max_attempts
    }

    /// Record a failed attempt for a key
    pub fn record(&self, key: &str) {
        let mut attempts = self.attempts.lock().unwrap();
        let now = Instant::now();

        let entry = attempts.entry(key.to_string()).or_default();
        entry.retain(|&time| now.duration_since(time) < self.window);
        entry.push(now);
    }

    /// Forget all attempts for a key (after a successful login)
    pub fn clear(&self, key: &str) {
        let mut attempts = self.attempts.lock().unwrap();
        attempts.remove(key);
    }
}
