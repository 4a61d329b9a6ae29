//! Warning Accumulator
//!
//! Ordered, append-only list of non-fatal diagnostics collected across the
//! sub-calls of one top-level operation. Warnings travel beside a result or an
//! error, never instead of one.

use crate::error::ActionError;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Diagnostics in the order the sub-calls produced them. No deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Warnings(Vec<String>);

/// Result of an actor call together with the warnings it produced.
pub type Warned<T> = (Result<T, ActionError>, Warnings);

impl Warnings {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append every warning from a sub-call, preserving order.
    pub fn append<I, S>(&mut self, warnings: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(warnings.into_iter().map(Into::into));
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl Deref for Warnings {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for Warnings {
    fn from(warnings: Vec<String>) -> Self {
        Self(warnings)
    }
}

impl<S: Into<String>> FromIterator<S> for Warnings {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Warnings {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Warnings {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
