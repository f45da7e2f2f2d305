//! The structural audit engine for categorical syllogisms.
//!
//! This module provides the `Verifier`, which checks an already-parsed
//! syllogism against the ordered Figure-1 rule set *before* its conclusion
//! is trusted, catching entire classes of invalid inferential structure in
//! machine-produced reasoning.

// Publicly export the primary components for use by other modules.
pub use self::verdict::{RuleCode, TermRoles, Verdict, Violation};
pub use self::verifier::{verify, Verifier};

// --- MODULE DECLARATIONS ---
mod resolver;
mod verdict;
mod verifier;
mod rules {
    pub mod figure1;
    // Figures 2-4 get their own rule modules when their rule sets land.
}
