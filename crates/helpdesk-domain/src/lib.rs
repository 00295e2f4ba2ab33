//! Helpdesk Domain Layer
//!
//! Core value types shared by the gatekeeper, the router and the CLI.
//! The only external dependency is `serde`, because every type here crosses a
//! JSON boundary somewhere (retrieval backend, HTTP service, CLI input).
//!
//! ## Key Concepts
//!
//! - **Domain**: a business category (HR, IT, Finance, General) that selects
//!   both the specialist knowledge source and the fallback contact message
//! - **Citation**: a retrieved passage supporting a generated answer
//! - **Confidence level**: one of four discrete tiers derived from a combined
//!   confidence score
//! - **Specialist agent**: the external answer generator, behind a trait

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod citation;
pub mod confidence;
pub mod domain;
pub mod traits;

// Re-exports for convenience
pub use citation::{Citation, CitationMetadata};
pub use confidence::ConfidenceLevel;
pub use domain::Domain;
pub use traits::{AgentAnswer, SpecialistAgent};
