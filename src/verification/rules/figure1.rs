//! The Figure-1 structural rule set.
//!
//! Each rule is an independent predicate over the syllogism and its
//! resolved term roles, returning `Some(Violation)` when breached. The
//! verifier runs them in a fixed order and accumulates every violation, so
//! a caller always sees the complete list rather than the first failure.

use crate::logic::{Quality, Quantity, Syllogism, Term};
use crate::verification::verdict::{RuleCode, Violation};

/// Rule 1: the middle term must be the predicate of the minor premise.
pub(crate) fn check_minor_position(syllogism: &Syllogism, middle_term: &Term) -> Option<Violation> {
    if syllogism.minor_premise.predicate != *middle_term {
        return Some(Violation {
            rule: RuleCode::MinorPremisePosition,
            message: format!(
                "Figure 1 violation: middle term '{}' must be the predicate of the minor premise. Found as subject instead.",
                middle_term
            ),
        });
    }
    None
}

/// Rule 2: the middle term must be the subject of the major premise.
pub(crate) fn check_major_position(syllogism: &Syllogism, middle_term: &Term) -> Option<Violation> {
    if syllogism.major_premise.subject != *middle_term {
        return Some(Violation {
            rule: RuleCode::MajorPremisePosition,
            message: format!(
                "Figure 1 violation: middle term '{}' must be the subject of the major premise. Found as predicate instead.",
                middle_term
            ),
        });
    }
    None
}

/// Rule 3: at least one premise must be universal.
///
/// Fires whenever neither premise is `Universal`. A `Singular` premise
/// counts as non-universal here, and the message still describes both
/// premises as particular.
pub(crate) fn check_universal_premise(syllogism: &Syllogism) -> Option<Violation> {
    if syllogism.minor_premise.quantity != Quantity::Universal
        && syllogism.major_premise.quantity != Quantity::Universal
    {
        return Some(Violation {
            rule: RuleCode::NoUniversalPremise,
            message: "Figure 1 violation: at least one premise must be universal. Both premises are particular.".to_string(),
        });
    }
    None
}

/// Rule 4: a negative premise requires a negative conclusion.
///
/// Fires only when the implication is broken: some premise is negative and
/// the conclusion is affirmative. Two negative premises with a negative
/// conclusion pass this check.
pub(crate) fn check_negative_conclusion(syllogism: &Syllogism) -> Option<Violation> {
    let has_negative_premise = syllogism.minor_premise.quality == Quality::Negative
        || syllogism.major_premise.quality == Quality::Negative;

    if has_negative_premise && syllogism.conclusion.quality != Quality::Negative {
        return Some(Violation {
            rule: RuleCode::NegativePremise,
            message: "A negative premise requires a negative conclusion. Found an affirmative conclusion with a negative premise.".to_string(),
        });
    }
    None
}
