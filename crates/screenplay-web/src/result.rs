//! Result and error types for screenplay-web.

use std::sync::Arc;
use thiserror::Error;

/// Result type for Screenplay operations
pub type ScreenplayResult<T> = Result<T, ScreenplayError>;

/// Errors surfaced to the author of a screenplay.
///
/// None of these are retried; every failure reaches the caller immediately.
#[derive(Debug, Clone, Error)]
pub enum ScreenplayError {
    /// A Target could not be turned into elements (no locator, or the lookup failed)
    #[error("{message}")]
    Targeting {
        /// Error message
        message: String,
    },

    /// An Action's driver call failed after its target was resolved
    #[error("{message}")]
    Delivery {
        /// Error message
        message: String,
    },

    /// The Action was invoked in a state that makes it impossible to proceed
    #[error("{message}")]
    UnableToAct {
        /// Error message
        message: String,
    },

    /// An ability could not be created or used
    #[error("{message}")]
    Browsing {
        /// Error message
        message: String,
    },

    /// The Actor was asked to use an ability it does not have
    #[error("{actor} does not have the ability to {ability}")]
    MissingAbility {
        /// Actor name
        actor: String,
        /// Ability type name
        ability: String,
    },

    /// A `See` check failed
    #[error("{message}")]
    AssertionFailed {
        /// Hamcrest-style expected/but message
        message: String,
    },

    /// Settings could not be loaded
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(Arc<std::io::Error>),
}

impl ScreenplayError {
    /// Build a targeting error
    pub fn targeting(message: impl Into<String>) -> Self {
        Self::Targeting {
            message: message.into(),
        }
    }

    /// Build a delivery error
    pub fn delivery(message: impl Into<String>) -> Self {
        Self::Delivery {
            message: message.into(),
        }
    }

    /// Build an unable-to-act error
    pub fn unable_to_act(message: impl Into<String>) -> Self {
        Self::UnableToAct {
            message: message.into(),
        }
    }

    /// Build a browsing error
    pub fn browsing(message: impl Into<String>) -> Self {
        Self::Browsing {
            message: message.into(),
        }
    }

    /// Build a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ScreenplayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_passed_through() {
        let err = ScreenplayError::delivery("Encountered an issue while attempting to click x");
        assert_eq!(
            err.to_string(),
            "Encountered an issue while attempting to click x"
        );
    }

    #[test]
    fn test_missing_ability_message() {
        let err = ScreenplayError::MissingAbility {
            actor: "Perry".to_string(),
            ability: "BrowseTheWeb".to_string(),
        };
        assert_eq!(err.to_string(), "Perry does not have the ability to BrowseTheWeb");
    }

    #[test]
    fn test_io_error_converts_and_clones() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ScreenplayError = io.into();
        let copy = err.clone();
        assert!(matches!(copy, ScreenplayError::Io(_)));
        assert!(copy.to_string().contains("gone"));
    }
}
