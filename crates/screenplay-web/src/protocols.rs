//! Capability traits for Actions and Questions.

use crate::actor::Actor;
use crate::driver::ActionChain;
use crate::result::{ScreenplayError, ScreenplayResult};

/// An Action that can be appended to a [`Chain`](crate::actions::Chain)
pub trait Chainable {
    /// Record this action's steps on `chain` without performing them
    fn add_to_chain(&self, actor: &Actor, chain: &mut ActionChain) -> ScreenplayResult<()>;
}

/// A Question that keeps the error it swallowed
pub trait ErrorKeeper {
    /// The most recent error caught while answering, if any
    fn caught_exception(&self) -> Option<ScreenplayError>;
}
