//! Defines the core data structures for the argument under audit.
pub mod proposition;
pub mod syllogism;
pub mod term;

// Re-export key types for convenient access
pub use proposition::{Proposition, PropositionType, Quality, Quantity};
pub use syllogism::Syllogism;
pub use term::Term;
