//! The ability to produce a current two-factor authentication token.

use crate::actor::Ability;
use crate::result::ScreenplayResult;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

type TokenSource = dyn Fn() -> ScreenplayResult<String> + Send + Sync;

/// Produces 2FA tokens on demand, from whatever source the caller supplies
/// (a TOTP generator, a test fixture, a secrets service)
#[derive(Clone)]
pub struct AuthenticateWith2FA {
    source: Arc<TokenSource>,
}

impl fmt::Debug for AuthenticateWith2FA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticateWith2FA").finish_non_exhaustive()
    }
}

impl AuthenticateWith2FA {
    /// Generate tokens with `source`
    pub fn using<F>(source: F) -> Self
    where
        F: Fn() -> ScreenplayResult<String> + Send + Sync + 'static,
    {
        Self {
            source: Arc::new(source),
        }
    }

    /// Always hand out the same token
    pub fn using_token(token: impl Into<String>) -> Self {
        let token = token.into();
        Self::using(move || Ok(token.clone()))
    }

    /// The current token
    pub fn to_get_token(&self) -> ScreenplayResult<String> {
        (self.source)()
    }
}

impl fmt::Display for AuthenticateWith2FA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Authenticate with 2FA")
    }
}

impl Ability for AuthenticateWith2FA {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn forget(&mut self) -> ScreenplayResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_fixed_token() {
        let ability = AuthenticateWith2FA::using_token("123456");
        assert_eq!(ability.to_get_token().unwrap(), "123456");
        assert_eq!(ability.to_string(), "Authenticate with 2FA");
    }

    #[test]
    fn test_source_called_each_time() {
        let counter = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&counter);
        let ability = AuthenticateWith2FA::using(move || {
            Ok(format!("{:06}", seen.fetch_add(1, Ordering::SeqCst)))
        });
        assert_eq!(ability.to_get_token().unwrap(), "000000");
        assert_eq!(ability.to_get_token().unwrap(), "000001");
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }
}
