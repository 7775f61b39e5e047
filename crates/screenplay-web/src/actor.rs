//! Screenplay host layer: actors, abilities and the traits every Action,
//! Question and Resolution implements.
//!
//! ```text
//!   Actor ──has──► Ability (BrowseTheWeb, ...)
//!     │
//!     ├─attempts_to──► Performable (Click, Enter, Wait, ...)
//!     └─should───────► See<Answerable, Resolution>
//! ```

use crate::pacing::{aside, beat};
use crate::protocols::Chainable;
use crate::result::{ScreenplayError, ScreenplayResult};
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Last path segment of a type name, without generic parameters
pub(crate) fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

// ============================================================================
// Traits
// ============================================================================

/// Something an actor is able to do, such as browse the web
pub trait Ability: fmt::Display + fmt::Debug + Send + Sync + 'static {
    /// Downcasting hook for [`Actor::ability_to`]
    fn as_any(&self) -> &dyn Any;

    /// Release whatever the ability holds
    fn forget(&mut self) -> ScreenplayResult<()>;
}

/// An Action (or a `See` check) an actor can perform
pub trait Performable: fmt::Debug {
    /// Present-tense description, e.g. `Click on the login button.`
    fn describe(&self) -> String;

    /// Carry out the action
    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()>;

    /// The chaining capability, for actions that can join a `Chain`
    fn as_chainable(&self) -> Option<&dyn Chainable> {
        None
    }

    /// Short type name used in messages
    fn type_name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// A Question an actor can answer
pub trait Answerable: fmt::Debug {
    /// What answering produces
    type Answer;

    /// Description, e.g. `The text from the banner.`
    fn describe(&self) -> String;

    /// Ask the actor
    fn answered_by(&self, actor: &Actor) -> ScreenplayResult<Self::Answer>;
}

/// A hamcrest-style matcher
pub trait Matcher<T: ?Sized> {
    fn matches(&self, item: &T) -> bool;

    /// What a match looks like
    fn describe_to(&self) -> String;

    /// Why `item` matched
    fn describe_match(&self, item: &T) -> String;

    /// Why `item` did not match
    fn describe_mismatch(&self, item: &T) -> String;
}

/// An expected outcome for a Question's answer
pub trait Resolution<T: ?Sized>: fmt::Debug {
    /// Short description, e.g. `visible`
    fn describe(&self) -> String;

    /// The matcher that decides the outcome
    fn resolve(&self) -> Box<dyn Matcher<T>>;
}

// ============================================================================
// Actor
// ============================================================================

/// A file attached to the actor's reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Where the file was written
    pub path: PathBuf,
    /// Options passed through to report adapters
    pub options: BTreeMap<String, String>,
}

/// A named performer holding abilities
#[derive(Debug)]
pub struct Actor {
    name: String,
    abilities: Vec<Box<dyn Ability>>,
    attachments: Mutex<Vec<Attachment>>,
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Actor {
    /// Create an actor with no abilities
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abilities: Vec::new(),
            attachments: Mutex::new(Vec::new()),
        }
    }

    /// Actor name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grant an ability
    #[must_use]
    pub fn who_can(mut self, ability: impl Ability) -> Self {
        self.abilities.push(Box::new(ability));
        self
    }

    /// Alias for [`Actor::who_can`]
    #[must_use]
    pub fn can(self, ability: impl Ability) -> Self {
        self.who_can(ability)
    }

    /// Look up an ability by type
    pub fn ability_to<T: Ability>(&self) -> ScreenplayResult<&T> {
        self.abilities
            .iter()
            .find_map(|a| a.as_any().downcast_ref::<T>())
            .ok_or_else(|| ScreenplayError::MissingAbility {
                actor: self.name.clone(),
                ability: short_type_name(std::any::type_name::<T>()).to_string(),
            })
    }

    /// Alias for [`Actor::ability_to`]
    pub fn uses_ability_to<T: Ability>(&self) -> ScreenplayResult<&T> {
        self.ability_to::<T>()
    }

    #[must_use]
    pub fn has_ability_to<T: Ability>(&self) -> bool {
        self.ability_to::<T>().is_ok()
    }

    /// Perform actions in order, stopping at the first failure
    pub fn attempts_to(&self, actions: &[&dyn Performable]) -> ScreenplayResult<()> {
        for action in actions {
            action.perform_as(self)?;
        }
        Ok(())
    }

    /// Alias for [`Actor::attempts_to`]
    pub fn was_able_to(&self, actions: &[&dyn Performable]) -> ScreenplayResult<()> {
        self.attempts_to(actions)
    }

    /// Run checks in order, stopping at the first failure
    pub fn should(&self, checks: &[&dyn Performable]) -> ScreenplayResult<()> {
        self.attempts_to(checks)
    }

    /// Record a report attachment
    pub fn attach_file(&self, path: impl Into<PathBuf>, options: BTreeMap<String, String>) {
        self.attachments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Attachment {
                path: path.into(),
                options,
            });
    }

    /// Every attachment so far
    #[must_use]
    pub fn attachments(&self) -> Vec<Attachment> {
        self.attachments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Forget every ability. All abilities are forgotten even when one
    /// fails; the first failure is returned.
    pub fn exit(&mut self) -> ScreenplayResult<()> {
        beat(format!("{} exits, stage right.", self.name));
        let mut first_error = None;
        for mut ability in self.abilities.drain(..) {
            if let Err(e) = ability.forget() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

// ============================================================================
// See
// ============================================================================

/// Lower-case the first letter and drop the trailing period
fn additive(description: &str) -> String {
    let trimmed = description.trim_end_matches('.');
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Ask a Question and check its answer against a Resolution
#[derive(Debug)]
pub struct See<Q, R> {
    question: Q,
    resolution: R,
}

impl<Q, R> See<Q, R>
where
    Q: Answerable,
    R: Resolution<Q::Answer>,
{
    pub fn the(question: Q, resolution: R) -> Self {
        Self {
            question,
            resolution,
        }
    }
}

impl<Q, R> Performable for See<Q, R>
where
    Q: Answerable,
    R: Resolution<Q::Answer>,
{
    fn describe(&self) -> String {
        format!(
            "See if {} is {}.",
            additive(&self.question.describe()),
            self.resolution.describe()
        )
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!(
            "{actor} sees if {} is {}.",
            additive(&self.question.describe()),
            self.resolution.describe()
        ));
        let answer = self.question.answered_by(actor)?;
        let matcher = self.resolution.resolve();
        if matcher.matches(&answer) {
            aside(format!("... hoo boy, {}!", matcher.describe_match(&answer)));
            Ok(())
        } else {
            Err(ScreenplayError::AssertionFailed {
                message: format!(
                    "\nExpected: {}\n     but: {}",
                    matcher.describe_to(),
                    matcher.describe_mismatch(&answer)
                ),
            })
        }
    }
}

// ============================================================================
// AttachTheFile
// ============================================================================

/// Attach a file to the actor's reports
#[derive(Debug, Clone)]
pub struct AttachTheFile {
    path: PathBuf,
    filename: String,
    options: BTreeMap<String, String>,
}

impl AttachTheFile {
    pub fn new(path: impl AsRef<Path>, options: BTreeMap<String, String>) -> Self {
        let path = path.as_ref().to_path_buf();
        let filename = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Self {
            path,
            filename,
            options,
        }
    }
}

impl Performable for AttachTheFile {
    fn describe(&self) -> String {
        format!("Attach a file named {}.", self.filename)
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!("{actor} attaches a file named {}.", self.filename));
        actor.attach_file(self.path.clone(), self.options.clone());
        Ok(())
    }
}
