use crate::logic::{Proposition, Syllogism};
use crate::verification::Verdict;
use std::fmt::Write;

pub fn format_trace(syllogism: &Syllogism, verdict: &Verdict) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "AUDIT TRACE for conclusion '{}':",
        syllogism.conclusion
    );
    let _ = writeln!(output, "--------------------------------------------------");
    let _ = writeln!(
        output,
        "[L1] Conclusion: {} {}",
        syllogism.conclusion,
        classification_tag(&syllogism.conclusion)
    );
    let _ = writeln!(
        output,
        "|-- Minor premise: {} {}",
        syllogism.minor_premise,
        classification_tag(&syllogism.minor_premise)
    );
    let _ = writeln!(
        output,
        "`-- Major premise: {} {}",
        syllogism.major_premise,
        classification_tag(&syllogism.major_premise)
    );

    if let Some(structure) = &verdict.structure {
        let _ = writeln!(output, "Structure:");
        let _ = writeln!(output, "|-- minor term:  {}", structure.minor_term);
        let _ = writeln!(output, "|-- major term:  {}", structure.major_term);
        match &structure.middle_term {
            Some(middle) => {
                let _ = writeln!(output, "`-- middle term: {}", middle);
            }
            None => {
                let _ = writeln!(output, "`-- middle term: (unresolved)");
            }
        }
    }

    let result = if verdict.valid { "VALID" } else { "INVALID" };
    let _ = writeln!(output, "Result: {}", result);
    for violation in &verdict.errors {
        let _ = writeln!(output, "|-- {:?}: {}", violation.rule, violation.message);
    }
    let _ = writeln!(output, "`-- {}", verdict.explanation);

    output
}

// Singular propositions fall outside the A/E/I/O scheme.
fn classification_tag(proposition: &Proposition) -> String {
    match proposition.classification() {
        Some(class) => format!("({:?})", class),
        None => "(unclassified)".to_string(),
    }
}
