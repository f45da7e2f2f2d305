//! Defines `Proposition` and its quantity/quality tags, representing a
//! single categorical statement of the form "subject is/is-not predicate".

use super::term::Term;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The quantification of a proposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    /// "All S is P".
    Universal,
    /// "Some S is P".
    Particular,
    /// "This S is P".
    Singular,
}

/// The affirmation or negation of a proposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Affirmative,
    Negative,
}

/// The four canonical categorical proposition types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropositionType {
    /// Universal affirmative: "All S is P".
    A,
    /// Universal negative: "No S is P".
    E,
    /// Particular affirmative: "Some S is P".
    I,
    /// Particular negative: "Some S is not P".
    O,
}

/// A categorical proposition relating a subject term to a predicate term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposition {
    pub subject: Term,
    pub predicate: Term,
    pub quantity: Quantity,
    pub quality: Quality,
}

impl Proposition {
    pub fn new(subject: Term, predicate: Term, quantity: Quantity, quality: Quality) -> Self {
        Self {
            subject,
            predicate,
            quantity,
            quality,
        }
    }

    /// The A/E/I/O classification, a pure function of (quantity, quality).
    ///
    /// Singular propositions fall outside the four canonical types and
    /// return `None`.
    pub fn classification(&self) -> Option<PropositionType> {
        match (self.quantity, self.quality) {
            (Quantity::Universal, Quality::Affirmative) => Some(PropositionType::A),
            (Quantity::Universal, Quality::Negative) => Some(PropositionType::E),
            (Quantity::Particular, Quality::Affirmative) => Some(PropositionType::I),
            (Quantity::Particular, Quality::Negative) => Some(PropositionType::O),
            (Quantity::Singular, _) => None,
        }
    }
}

impl fmt::Display for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quantifier = match self.quantity {
            Quantity::Universal => "All",
            Quantity::Particular => "Some",
            Quantity::Singular => "This",
        };
        let copula = match self.quality {
            Quality::Affirmative => "is",
            Quality::Negative => "is not",
        };
        write!(
            f,
            "{} {} {} {}",
            quantifier, self.subject, copula, self.predicate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn prop(quantity: Quantity, quality: Quality) -> Proposition {
        Proposition::new(Term::new("humans"), Term::new("mortal"), quantity, quality)
    }

    #[rstest]
    #[case(Quantity::Universal, Quality::Affirmative, Some(PropositionType::A))]
    #[case(Quantity::Universal, Quality::Negative, Some(PropositionType::E))]
    #[case(Quantity::Particular, Quality::Affirmative, Some(PropositionType::I))]
    #[case(Quantity::Particular, Quality::Negative, Some(PropositionType::O))]
    #[case(Quantity::Singular, Quality::Affirmative, None)]
    #[case(Quantity::Singular, Quality::Negative, None)]
    fn classification_follows_quantity_and_quality(
        #[case] quantity: Quantity,
        #[case] quality: Quality,
        #[case] expected: Option<PropositionType>,
    ) {
        assert_eq!(prop(quantity, quality).classification(), expected);
    }

    #[rstest]
    #[case(Quantity::Universal, Quality::Affirmative, "All humans is mortal")]
    #[case(Quantity::Particular, Quality::Negative, "Some humans is not mortal")]
    #[case(Quantity::Singular, Quality::Affirmative, "This humans is mortal")]
    fn display_reads_as_categorical_form(
        #[case] quantity: Quantity,
        #[case] quality: Quality,
        #[case] expected: &str,
    ) {
        assert_eq!(prop(quantity, quality).to_string(), expected);
    }
}
