//! Audit and remediation engine.
//!
//! [`run_audit`] reads the store and computes the health score;
//! [`generate_policies`] and [`rewrite_product`] are the two
//! generate-then-apply remediation flows. Every entry point returns an
//! outcome value rather than erroring across its boundary: failures arrive
//! as `success: false` with descriptive messages and whatever partial data
//! was produced.

mod apply;
mod audit;
mod content;
mod policies;

#[cfg(test)]
pub(crate) mod testutil;

pub use apply::{OnError, apply_mutations};
pub use audit::{AuditOutcome, SCAN_LIMIT, run_audit};
pub use content::rewrite_product;
pub use policies::generate_policies;
