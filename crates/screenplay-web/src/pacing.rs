//! Narration of a screenplay as it runs.
//!
//! Every Action, Question and `See` announces itself with a [`beat`];
//! supplementary details go out as [`aside`]s. Both are `tracing` events on
//! the `screenplay` target, so any subscriber can record them.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the narration filter
pub const LOG_ENV: &str = "SCREENPLAY_LOG";

/// Announce what an actor is doing
pub fn beat(line: impl AsRef<str>) {
    tracing::info!(target: "screenplay", "{}", line.as_ref());
}

/// Add a detail to the current beat
pub fn aside(line: impl AsRef<str>) {
    tracing::info!(target: "screenplay::aside", "    {}", line.as_ref());
}

/// Install a console subscriber filtered by `SCREENPLAY_LOG` (default
/// `info`). Does nothing if a global subscriber is already set.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging();
        init_logging();
        beat("Perry clicks on the button.");
        aside("then hits the ENTER key");
    }
}
