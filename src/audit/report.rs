//! JSON request and report codecs for the audit boundary.
//!
//! The verification core reports every anomaly of the *argument* as
//! verdict data. Faults of the *request* itself (malformed JSON, an empty
//! chain) are the only fallible surface, and they surface here as
//! `AuditError`.

use crate::logic::Syllogism;
use crate::verification::Verdict;

pub use self::error::AuditError;
mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum AuditError {
        #[error("malformed audit request: {0}")]
        Malformed(#[from] serde_json::Error),
        #[error("audit request contains no syllogisms")]
        EmptyChain,
    }
}

/// Parses a JSON array of syllogisms, the shape an upstream
/// proposition-extraction collaborator produces.
pub fn chain_from_json(json: &str) -> Result<Vec<Syllogism>, AuditError> {
    let chain: Vec<Syllogism> = serde_json::from_str(json)?;
    if chain.is_empty() {
        return Err(AuditError::EmptyChain);
    }
    Ok(chain)
}

/// Serializes a single verdict for a consuming harness.
pub fn verdict_to_json(verdict: &Verdict) -> Result<String, AuditError> {
    Ok(serde_json::to_string(verdict)?)
}

/// Serializes a full chain's verdicts, preserving chain order.
pub fn verdicts_to_json(verdicts: &[Verdict]) -> Result<String, AuditError> {
    Ok(serde_json::to_string(verdicts)?)
}
