//! Local driver executables (chromedriver, geckodriver, safaridriver).

use super::{DriverResult, WebDriverError};
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

/// How long a freshly spawned driver gets to answer `/status`
pub const STARTUP_TIMEOUT: Duration = Duration::from_secs(10);

const STARTUP_POLL: Duration = Duration::from_millis(100);

/// Which driver executable to launch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverKind {
    /// `chromedriver`
    Chrome,
    /// `geckodriver`
    Firefox,
    /// `safaridriver`
    Safari,
}

impl DriverKind {
    /// Executable name looked up on `PATH`
    #[must_use]
    pub const fn executable(self) -> &'static str {
        match self {
            Self::Chrome => "chromedriver",
            Self::Firefox => "geckodriver",
            Self::Safari => "safaridriver",
        }
    }

    /// Command-line arguments selecting the listen port
    #[must_use]
    pub fn port_args(self, port: u16) -> Vec<String> {
        match self {
            Self::Chrome => vec![format!("--port={port}")],
            Self::Firefox => vec!["--port".to_string(), port.to_string()],
            Self::Safari => vec!["-p".to_string(), port.to_string()],
        }
    }
}

/// A running driver process, killed on drop
#[derive(Debug)]
pub struct DriverService {
    kind: DriverKind,
    child: Child,
    url: String,
}

impl DriverService {
    /// Spawn the driver on a free local port and wait until it is ready
    pub fn start(kind: DriverKind) -> DriverResult<Self> {
        let port = free_port()?;
        let child = Command::new(kind.executable())
            .args(kind.port_args(port))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| WebDriverError::SessionNotCreated {
                message: format!("could not start {}: {e}", kind.executable()),
            })?;

        let mut service = Self {
            kind,
            child,
            url: format!("http://127.0.0.1:{port}"),
        };
        tracing::debug!(driver = kind.executable(), url = %service.url, "driver spawned");

        if let Err(e) = service.wait_until_ready() {
            service.stop();
            return Err(e);
        }
        Ok(service)
    }

    /// Base URL of the driver's HTTP endpoint
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Which driver this is
    #[must_use]
    pub const fn kind(&self) -> DriverKind {
        self.kind
    }

    fn wait_until_ready(&mut self) -> DriverResult<()> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
            .map_err(|e| WebDriverError::Transport {
                message: e.to_string(),
            })?;
        let status_url = format!("{}/status", self.url);
        let start = Instant::now();

        while start.elapsed() < STARTUP_TIMEOUT {
            if let Ok(Some(status)) = self.child.try_wait() {
                return Err(WebDriverError::SessionNotCreated {
                    message: format!("{} exited during startup ({status})", self.kind.executable()),
                });
            }
            if client
                .get(&status_url)
                .send()
                .is_ok_and(|r| r.status().is_success())
            {
                return Ok(());
            }
            std::thread::sleep(STARTUP_POLL);
        }

        Err(WebDriverError::timeout(format!(
            "{} did not become ready within {STARTUP_TIMEOUT:?}",
            self.kind.executable()
        )))
    }

    /// Kill the process; safe to call more than once
    pub fn stop(&mut self) {
        if matches!(self.child.try_wait(), Ok(None)) {
            let _ = self.child.kill();
            let _ = self.child.wait();
            tracing::debug!(driver = self.kind.executable(), "driver stopped");
        }
    }
}

impl Drop for DriverService {
    fn drop(&mut self) {
        self.stop();
    }
}

fn free_port() -> DriverResult<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|e| WebDriverError::Transport {
        message: format!("no free port: {e}"),
    })?;
    listener
        .local_addr()
        .map(|addr| addr.port())
        .map_err(|e| WebDriverError::Transport {
            message: format!("no free port: {e}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_arguments_per_driver() {
        assert_eq!(DriverKind::Chrome.port_args(9515), vec!["--port=9515"]);
        assert_eq!(DriverKind::Firefox.port_args(4444), vec!["--port", "4444"]);
        assert_eq!(DriverKind::Safari.port_args(5555), vec!["-p", "5555"]);
    }

    #[test]
    fn test_executables() {
        assert_eq!(DriverKind::Chrome.executable(), "chromedriver");
        assert_eq!(DriverKind::Firefox.executable(), "geckodriver");
        assert_eq!(DriverKind::Safari.executable(), "safaridriver");
    }

    #[test]
    fn test_free_port_is_nonzero() {
        assert_ne!(free_port().unwrap(), 0);
    }
}
