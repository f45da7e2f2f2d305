//! Parallel auditing of multi-link reasoning chains.
//!
//! A reasoning chain extracted from an LLM transcript is a sequence of
//! syllogisms audited independently. Each link's verdict is a pure function
//! of that link alone, so the fan-out needs no synchronization and the
//! results slot back into chain order.

use crate::logic::Syllogism;
use crate::verification::{verify, Verdict};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Audits every link of a chain against Figure 1, preserving chain order.
pub fn audit_chain(chain: &[Syllogism]) -> Vec<Verdict> {
    chain
        .par_iter()
        .map(|syllogism| verify(syllogism, 1))
        .collect()
}

/// Aggregate counts for a chain audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSummary {
    /// Number of links audited.
    pub total: usize,
    /// Number of links that verified as valid.
    pub valid: usize,
    /// Indices of the invalid links, in chain order.
    pub failures: Vec<usize>,
}

/// Summarizes a slice of verdicts produced by [`audit_chain`].
pub fn summarize(verdicts: &[Verdict]) -> ChainSummary {
    let failures: Vec<usize> = verdicts
        .iter()
        .enumerate()
        .filter(|(_, verdict)| !verdict.valid)
        .map(|(index, _)| index)
        .collect();

    ChainSummary {
        total: verdicts.len(),
        valid: verdicts.len() - failures.len(),
        failures,
    }
}
