//! Batch auditing of reasoning chains and the JSON boundary codecs.

pub mod batch;
pub mod report;

// Re-export key entry points for convenient access
pub use batch::{audit_chain, summarize, ChainSummary};
pub use report::{chain_from_json, verdict_to_json, verdicts_to_json, AuditError};
