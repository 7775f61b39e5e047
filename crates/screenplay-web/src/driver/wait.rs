//! Polling explicit wait.

use super::{Browser, DriverResult, WebDriverError};
use std::time::{Duration, Instant};

/// Re-checks a condition on a fixed interval until it holds or time runs out
#[derive(Debug, Clone)]
pub struct WebDriverWait {
    browser: Browser,
    timeout: Duration,
    poll: Duration,
}

impl WebDriverWait {
    /// Create a wait
    #[must_use]
    pub fn new(browser: Browser, timeout: Duration, poll: Duration) -> Self {
        Self {
            browser,
            timeout,
            poll,
        }
    }

    /// Configured timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Configured polling interval
    #[must_use]
    pub const fn poll(&self) -> Duration {
        self.poll
    }

    /// Block until `condition` returns `Ok(true)`.
    ///
    /// The condition is always checked at least once. Missing and stale
    /// elements count as "not yet"; any other error ends the wait.
    pub fn until<F>(&self, mut condition: F) -> DriverResult<()>
    where
        F: FnMut(&Browser) -> DriverResult<bool>,
    {
        let start = Instant::now();
        let mut last_error = None;

        loop {
            match condition(&self.browser) {
                Ok(true) => return Ok(()),
                Ok(false) => {}
                Err(e) if e.is_transient() => last_error = Some(e),
                Err(e) => return Err(e),
            }
            if start.elapsed() >= self.timeout {
                break;
            }
            std::thread::sleep(self.poll);
        }

        let mut message = format!("condition not met within {:?}", self.timeout);
        if let Some(e) = last_error {
            message.push_str(&format!(" (last error: {e})"));
        }
        Err(WebDriverError::timeout(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::MockDriver;

    fn browser() -> Browser {
        Browser::new(MockDriver::new())
    }

    #[test]
    fn test_returns_once_condition_holds() {
        let wait = WebDriverWait::new(browser(), Duration::from_secs(1), Duration::from_millis(1));
        let mut calls = 0;
        wait.until(|_| {
            calls += 1;
            Ok(calls == 3)
        })
        .unwrap();
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_times_out() {
        let wait = WebDriverWait::new(browser(), Duration::from_millis(20), Duration::from_millis(5));
        let err = wait.until(|_| Ok(false)).unwrap_err();
        assert!(matches!(err, WebDriverError::Timeout { .. }));
    }

    #[test]
    fn test_zero_timeout_checks_once() {
        let wait = WebDriverWait::new(browser(), Duration::ZERO, Duration::from_millis(5));
        let mut calls = 0;
        let _ = wait.until(|_| {
            calls += 1;
            Ok(false)
        });
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_transient_errors_keep_polling() {
        let wait = WebDriverWait::new(browser(), Duration::from_millis(20), Duration::from_millis(1));
        let err = wait
            .until(|_| Err(WebDriverError::no_such_element("#late")))
            .unwrap_err();
        assert!(matches!(err, WebDriverError::Timeout { .. }));
        assert!(err.to_string().contains("#late"));
    }

    #[test]
    fn test_other_errors_end_the_wait() {
        let wait = WebDriverWait::new(browser(), Duration::from_secs(5), Duration::from_millis(1));
        let err = wait
            .until(|_| Err(WebDriverError::from_w3c("invalid selector", "bad")))
            .unwrap_err();
        assert!(matches!(err, WebDriverError::InvalidSelector { .. }));
    }
}
