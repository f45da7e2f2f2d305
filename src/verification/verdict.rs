//! Defines the verdict types returned by the rule engine.

use crate::logic::Term;
use serde::{Deserialize, Serialize};

/// The specific category of a structural violation.
///
// This enum allows for programmatic inspection of violations, which is
// more robust than string matching on the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleCode {
    /// No unique term shared by both premises and absent from the conclusion.
    MiddleTermUnresolved,
    /// The middle term is not the predicate of the minor premise.
    MinorPremisePosition,
    /// The middle term is not the subject of the major premise.
    MajorPremisePosition,
    /// Neither premise is universal.
    NoUniversalPremise,
    /// A negative premise paired with an affirmative conclusion.
    NegativePremise,
    /// A figure other than Figure 1 was requested.
    UnsupportedFigure,
}

/// A structured violation report from the rule engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The category of the violation.
    pub rule: RuleCode,
    /// A human-readable message explaining the violation.
    pub message: String,
}

/// The resolved role assignment for the three terms of a syllogism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRoles {
    /// Subject of the conclusion.
    pub minor_term: Term,
    /// Predicate of the conclusion.
    pub major_term: Term,
    /// The term shared by both premises and absent from the conclusion,
    /// when exactly one such term exists.
    pub middle_term: Option<Term>,
}

/// The full audit result for one syllogism.
///
/// A verdict is produced fresh per call and reports every anomaly as data;
/// an invalid verdict is the engine doing its job, not an engine failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// True iff no violations were collected.
    pub valid: bool,
    /// Violations in rule evaluation order.
    pub errors: Vec<Violation>,
    /// Resolved term roles. `None` only when the requested figure is
    /// unsupported and resolution never ran.
    pub structure: Option<TermRoles>,
    /// Human-readable summary of the outcome.
    pub explanation: String,
}

impl Verdict {
    /// Violation messages in evaluation order.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|v| v.message.as_str()).collect()
    }
}
