//! Defines `Syllogism`, the three-proposition argument under audit.

use super::proposition::Proposition;
use serde::{Deserialize, Serialize};

/// A three-proposition categorical argument.
///
/// Any three propositions form a syntactically legal syllogism; whether the
/// combination is a *valid* inference is the verdict of the rule engine,
/// not a construction-time concern. Instances are immutable and
/// request-scoped: built per audit, discarded after the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllogism {
    /// The premise containing the minor term (the conclusion's subject).
    pub minor_premise: Proposition,
    /// The premise containing the major term (the conclusion's predicate).
    pub major_premise: Proposition,
    pub conclusion: Proposition,
}

impl Syllogism {
    pub fn new(
        minor_premise: Proposition,
        major_premise: Proposition,
        conclusion: Proposition,
    ) -> Self {
        Self {
            minor_premise,
            major_premise,
            conclusion,
        }
    }
}
