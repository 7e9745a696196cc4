use crate::constants::{SENTINEL_FIRST, SENTINEL_LAST};
use crate::error::ResolverError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Salutation placed before the contact's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Greeting {
    To,
    Dear,
}

impl Greeting {
    pub fn as_str(&self) -> &'static str {
        match self {
            Greeting::To => "To",
            Greeting::Dear => "Dear",
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The company a contact is being resolved for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A complete greeting/first/last triple produced by an extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    pub greeting: Greeting,
    pub first: String,
    pub last: String,
}

impl NameMatch {
    pub fn dear(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            greeting: Greeting::Dear,
            first: first.into(),
            last: last.into(),
        }
    }
}

/// What a successful extraction contributes to the accumulated identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Overwrites greeting, first and last.
    Full(NameMatch),
    /// A first name was found on a page but no surname followed it.
    FirstNameOnly(String),
}

#[derive(Debug)]
pub enum SkipReason {
    Reserved,
    Failed(ResolverError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Reserved => f.write_str("reserved url"),
            SkipReason::Failed(err) => write!(f, "{}", err),
        }
    }
}

/// Result of processing one candidate URL.
#[derive(Debug)]
pub enum CandidateOutcome {
    Matched(Resolution),
    Skipped(SkipReason),
}

impl From<ResolverError> for CandidateOutcome {
    fn from(err: ResolverError) -> Self {
        CandidateOutcome::Skipped(SkipReason::Failed(err))
    }
}

impl From<crate::error::Result<Resolution>> for CandidateOutcome {
    fn from(result: crate::error::Result<Resolution>) -> Self {
        match result {
            Ok(resolution) => CandidateOutcome::Matched(resolution),
            Err(err) => err.into(),
        }
    }
}

/// Identity being accumulated across candidates for one company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityDraft {
    pub greeting: Greeting,
    pub first: String,
    pub last: String,
}

impl Default for IdentityDraft {
    fn default() -> Self {
        Self {
            greeting: Greeting::To,
            first: SENTINEL_FIRST.to_string(),
            last: SENTINEL_LAST.to_string(),
        }
    }
}

impl IdentityDraft {
    /// Folds one candidate outcome in. Later matches overwrite earlier ones;
    /// skipped candidates leave the draft untouched.
    pub fn apply(mut self, outcome: &CandidateOutcome) -> Self {
        match outcome {
            CandidateOutcome::Matched(Resolution::Full(found)) => {
                self.greeting = found.greeting;
                self.first = found.first.clone();
                self.last = found.last.clone();
            }
            CandidateOutcome::Matched(Resolution::FirstNameOnly(first)) => {
                self.first = first.clone();
            }
            CandidateOutcome::Skipped(_) => {}
        }
        self
    }

    pub fn finish(self, company: &Company) -> ContactIdentity {
        ContactIdentity {
            fullname: format!("{} {}", self.first, self.last),
            greeting: self.greeting,
            first: self.first,
            last: self.last,
            workplace: company.name.clone(),
        }
    }
}

/// Final resolved contact for a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactIdentity {
    pub greeting: Greeting,
    pub first: String,
    pub last: String,
    pub fullname: String,
    pub workplace: String,
}

impl ContactIdentity {
    /// True when nothing resolved and the sentinel names survived.
    pub fn is_sentinel(&self) -> bool {
        self.first == SENTINEL_FIRST && self.last == SENTINEL_LAST
    }
}

impl fmt::Display for ContactIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}", self.greeting, self.fullname, self.workplace)
    }
}
