//! Term-role resolution: which term is minor, major, and middle.

use super::verdict::TermRoles;
use crate::logic::{Syllogism, Term};
use smallvec::SmallVec;

/// Identifies the three roles of a syllogism's terms.
///
/// The minor and major terms are read directly off the conclusion. The
/// middle term must be the unique premise term that does not appear in the
/// conclusion; zero or several candidates leave `middle_term` unset.
/// Ambiguity is communicated through the absent middle term, never through
/// an error; the verifier turns the absence into an invalid verdict.
pub(crate) fn resolve_roles(syllogism: &Syllogism) -> TermRoles {
    let minor_term = &syllogism.conclusion.subject;
    let major_term = &syllogism.conclusion.predicate;

    let premise_terms: [&Term; 4] = [
        &syllogism.minor_premise.subject,
        &syllogism.minor_premise.predicate,
        &syllogism.major_premise.subject,
        &syllogism.major_premise.predicate,
    ];

    // Premise terms minus the conclusion terms, deduplicated under
    // normalized Term equality. Four entries at most, so a SmallVec keeps
    // the scratch space off the heap.
    let mut candidates: SmallVec<[&Term; 4]> = SmallVec::new();
    for term in premise_terms {
        if term != minor_term && term != major_term && !candidates.contains(&term) {
            candidates.push(term);
        }
    }

    let middle_term = match candidates.as_slice() {
        [unique] => Some((*unique).clone()),
        _ => None,
    };

    TermRoles {
        minor_term: minor_term.clone(),
        major_term: major_term.clone(),
        middle_term,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{Proposition, Quality, Quantity};

    fn prop(subject: &str, predicate: &str) -> Proposition {
        Proposition::new(
            Term::new(subject),
            Term::new(predicate),
            Quantity::Universal,
            Quality::Affirmative,
        )
    }

    #[test]
    fn resolves_unique_middle_term() {
        let syllogism = Syllogism::new(
            prop("humans", "mortal"),
            prop("mortal", "die"),
            prop("humans", "die"),
        );
        let roles = resolve_roles(&syllogism);
        assert_eq!(roles.minor_term, Term::new("humans"));
        assert_eq!(roles.major_term, Term::new("die"));
        assert_eq!(roles.middle_term, Some(Term::new("mortal")));
    }

    #[test]
    fn middle_term_resolution_is_normalization_insensitive() {
        let syllogism = Syllogism::new(
            prop("humans", " Mortal "),
            prop("mortal", "die"),
            prop("Humans", "die"),
        );
        let roles = resolve_roles(&syllogism);
        assert_eq!(roles.middle_term, Some(Term::new("mortal")));
    }

    #[test]
    fn two_leftover_premise_terms_leave_middle_unset() {
        let syllogism = Syllogism::new(
            prop("humans", "mortal"),
            prop("educated", "die"),
            prop("humans", "die"),
        );
        let roles = resolve_roles(&syllogism);
        assert_eq!(roles.middle_term, None);
    }

    #[test]
    fn no_leftover_premise_terms_leave_middle_unset() {
        let syllogism = Syllogism::new(
            prop("humans", "die"),
            prop("humans", "die"),
            prop("humans", "die"),
        );
        let roles = resolve_roles(&syllogism);
        assert_eq!(roles.middle_term, None);
    }
}
