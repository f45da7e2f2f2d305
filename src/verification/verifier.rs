//! The central verifier that orchestrates the execution of all rule checks.

use super::resolver::resolve_roles;
use super::rules::figure1;
use super::verdict::{RuleCode, Verdict, Violation};
use crate::logic::Syllogism;

/// The orchestrator for the structural audit.
///
/// This struct holds a reference to the syllogism under audit and applies
/// the ordered rule set for the requested figure, collecting all violations
/// before rendering a verdict. It's like a linter for an inference:
/// everything wrong with the structure is reported at once, never just the
/// first defect. Stateless across calls; each `verify` is a pure function
/// of its input.
pub struct Verifier<'a> {
    syllogism: &'a Syllogism,
}

impl<'a> Verifier<'a> {
    /// Creates a new verifier for the given syllogism.
    pub fn new(syllogism: &'a Syllogism) -> Self {
        Self { syllogism }
    }

    /// Audits the syllogism against the rules of the requested figure.
    ///
    /// Only Figure 1 is implemented; any other figure yields an invalid
    /// verdict naming the unsupported figure, with no structure resolved.
    /// This dispatch is the seam where the rule sets for figures 2-4 will
    /// plug in.
    pub fn verify(&self, figure: u8) -> Verdict {
        if figure != 1 {
            return Verdict {
                valid: false,
                errors: vec![Violation {
                    rule: RuleCode::UnsupportedFigure,
                    message: format!("Figure {} verification is not implemented.", figure),
                }],
                structure: None,
                explanation: "Only Figure 1 verification is implemented.".to_string(),
            };
        }

        self.verify_figure_1()
    }

    /// Runs the Figure-1 audit: role resolution first, then the four
    /// structural rules in fixed order.
    fn verify_figure_1(&self) -> Verdict {
        let roles = resolve_roles(self.syllogism);

        // Without a unique middle term there is no structure to check the
        // rules against; the rule pass is skipped entirely.
        let middle_term = match roles.middle_term.clone() {
            Some(term) => term,
            None => {
                return Verdict {
                    valid: false,
                    errors: vec![Violation {
                        rule: RuleCode::MiddleTermUnresolved,
                        message: "Cannot identify middle term.".to_string(),
                    }],
                    structure: Some(roles),
                    explanation: "A valid syllogism requires exactly one term that appears in both premises but not in the conclusion.".to_string(),
                };
            }
        };

        // The evaluation order below is part of the observable contract:
        // violations are reported in exactly this order.
        let mut errors = Vec::new();
        errors.extend(figure1::check_minor_position(self.syllogism, &middle_term));
        errors.extend(figure1::check_major_position(self.syllogism, &middle_term));
        errors.extend(figure1::check_universal_premise(self.syllogism));
        errors.extend(figure1::check_negative_conclusion(self.syllogism));

        let explanation = if errors.is_empty() {
            format!(
                "Valid Figure 1 syllogism. Structure confirmed: middle term '{}' correctly positioned as predicate of the minor premise and subject of the major premise.",
                middle_term
            )
        } else {
            let joined = errors
                .iter()
                .map(|v| v.message.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            format!("Invalid syllogism. {}", joined)
        };

        Verdict {
            valid: errors.is_empty(),
            errors,
            structure: Some(roles),
            explanation,
        }
    }
}

/// Audits a syllogism against the requested figure's rules.
///
/// Convenience wrapper over [`Verifier`] for one-shot calls.
pub fn verify(syllogism: &Syllogism, figure: u8) -> Verdict {
    Verifier::new(syllogism).verify(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{Proposition, Quality, Quantity, Term};

    fn prop(
        subject: &str,
        predicate: &str,
        quantity: Quantity,
        quality: Quality,
    ) -> Proposition {
        Proposition::new(Term::new(subject), Term::new(predicate), quantity, quality)
    }

    fn all(subject: &str, predicate: &str) -> Proposition {
        prop(subject, predicate, Quantity::Universal, Quality::Affirmative)
    }

    /// The classic Barbara (AAA-1) syllogism.
    fn barbara() -> Syllogism {
        Syllogism::new(
            all("humans", "mortal"),
            all("mortal", "die"),
            all("humans", "die"),
        )
    }

    #[test]
    fn barbara_is_valid() {
        let verdict = verify(&barbara(), 1);
        assert!(verdict.valid);
        assert!(verdict.errors.is_empty());
        let structure = verdict.structure.expect("figure 1 verdicts carry structure");
        assert_eq!(structure.middle_term, Some(Term::new("mortal")));
        assert!(verdict.explanation.contains("Valid Figure 1 syllogism"));
        assert!(verdict.explanation.contains("'mortal'"));
    }

    #[test]
    fn celarent_is_valid() {
        // EAE-1: "No reptiles are mammals; all mammals are warm-blooded" is
        // the arrangement under audit, concluding "no reptiles are
        // warm-blooded".
        let celarent = Syllogism::new(
            prop("reptiles", "mammals", Quantity::Universal, Quality::Negative),
            all("mammals", "warm-blooded"),
            prop(
                "reptiles",
                "warm-blooded",
                Quantity::Universal,
                Quality::Negative,
            ),
        );
        let verdict = verify(&celarent, 1);
        assert!(verdict.valid, "unexpected errors: {:?}", verdict.errors);
    }

    #[test]
    fn misplaced_middle_term_fires_minor_position_rule() {
        // Middle term as subject of the minor premise instead of predicate.
        let syllogism = Syllogism::new(
            all("mortal", "humans"),
            all("mortal", "die"),
            all("humans", "die"),
        );
        let verdict = verify(&syllogism, 1);
        assert!(!verdict.valid);
        assert_eq!(verdict.errors.len(), 1);
        assert_eq!(verdict.errors[0].rule, RuleCode::MinorPremisePosition);
        assert!(verdict.errors[0].message.contains("'mortal'"));
    }

    #[test]
    fn both_premises_particular_fires_universal_rule() {
        let syllogism = Syllogism::new(
            prop("humans", "mortal", Quantity::Particular, Quality::Affirmative),
            prop("mortal", "die", Quantity::Particular, Quality::Affirmative),
            all("humans", "die"),
        );
        let verdict = verify(&syllogism, 1);
        assert!(!verdict.valid);
        assert!(verdict
            .errors
            .iter()
            .any(|v| v.rule == RuleCode::NoUniversalPremise));
    }

    #[test]
    fn singular_premises_count_as_non_universal() {
        // Literal rule behavior: a singular premise does not satisfy the
        // universal-premise requirement.
        let syllogism = Syllogism::new(
            prop("humans", "mortal", Quantity::Singular, Quality::Affirmative),
            prop("mortal", "die", Quantity::Particular, Quality::Affirmative),
            all("humans", "die"),
        );
        let verdict = verify(&syllogism, 1);
        assert!(verdict
            .errors
            .iter()
            .any(|v| v.rule == RuleCode::NoUniversalPremise));
    }

    #[test]
    fn negative_premise_with_affirmative_conclusion_fires_negative_rule() {
        let syllogism = Syllogism::new(
            prop("humans", "immortal", Quantity::Universal, Quality::Negative),
            all("immortal", "gods"),
            all("humans", "gods"),
        );
        let verdict = verify(&syllogism, 1);
        assert!(!verdict.valid);
        assert!(verdict
            .errors
            .iter()
            .any(|v| v.rule == RuleCode::NegativePremise));
    }

    #[test]
    fn unresolvable_middle_term_short_circuits_the_rule_pass() {
        // Four distinct premise terms leave two middle-term candidates.
        let syllogism = Syllogism::new(
            all("humans", "mortal"),
            all("educated", "die"),
            all("humans", "die"),
        );
        let verdict = verify(&syllogism, 1);
        assert!(!verdict.valid);
        assert_eq!(verdict.errors.len(), 1);
        assert_eq!(verdict.errors[0].rule, RuleCode::MiddleTermUnresolved);
        let structure = verdict.structure.expect("structure is still reported");
        assert_eq!(structure.middle_term, None);
        assert!(verdict.explanation.contains("exactly one term"));
    }

    #[test]
    fn unsupported_figure_returns_a_stub_verdict() {
        let verdict = verify(&barbara(), 2);
        assert!(!verdict.valid);
        assert_eq!(verdict.errors.len(), 1);
        assert_eq!(verdict.errors[0].rule, RuleCode::UnsupportedFigure);
        assert!(verdict.errors[0].message.contains("Figure 2"));
        assert!(verdict.structure.is_none());
    }

    #[test]
    fn all_violations_are_collected_in_rule_order() {
        // One syllogism breaching all four rules at once: both premise
        // positions flipped, both premises particular, negative minor
        // premise with an affirmative conclusion.
        let syllogism = Syllogism::new(
            prop("mortal", "humans", Quantity::Particular, Quality::Negative),
            prop("die", "mortal", Quantity::Particular, Quality::Affirmative),
            all("humans", "die"),
        );
        let verdict = verify(&syllogism, 1);
        let codes: Vec<RuleCode> = verdict.errors.iter().map(|v| v.rule).collect();
        assert_eq!(
            codes,
            vec![
                RuleCode::MinorPremisePosition,
                RuleCode::MajorPremisePosition,
                RuleCode::NoUniversalPremise,
                RuleCode::NegativePremise,
            ]
        );
        assert!(verdict.explanation.starts_with("Invalid syllogism. "));
    }

    #[test]
    fn valid_flag_always_mirrors_the_error_list() {
        let cases = vec![
            barbara(),
            Syllogism::new(
                all("mortal", "humans"),
                all("mortal", "die"),
                all("humans", "die"),
            ),
            Syllogism::new(
                all("humans", "mortal"),
                all("educated", "die"),
                all("humans", "die"),
            ),
        ];
        for syllogism in &cases {
            let verdict = verify(syllogism, 1);
            assert_eq!(verdict.valid, verdict.errors.is_empty());
        }
    }

    #[test]
    fn verification_is_idempotent() {
        let syllogism = barbara();
        assert_eq!(verify(&syllogism, 1), verify(&syllogism, 1));

        let invalid = Syllogism::new(
            all("mortal", "humans"),
            all("mortal", "die"),
            all("humans", "die"),
        );
        assert_eq!(verify(&invalid, 1), verify(&invalid, 1));
    }
}
