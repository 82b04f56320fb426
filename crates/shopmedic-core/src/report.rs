//! Audit report structure returned by the audit engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Product-catalog SEO coverage figures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoStatus {
    /// Total products in the catalog (may exceed the number checked).
    pub total_products: u64,
    /// Products among those checked with a usable meta description.
    pub optimized: u64,
    /// Products actually inspected (first page of the catalog).
    pub checked: u64,
}

/// Result of one store audit.
///
/// Constructed fresh per invocation and discarded after rendering; the
/// engine fills it step by step, so a failed audit still carries whatever
/// was populated before the failing step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// Legal-policy presence, 0–50.
    pub compliance_score: u32,
    /// Meta-description coverage, 0–50.
    pub seo_score: u32,
    /// Sum of the two halves, 0–100.
    pub total_score: u32,
    /// Policy title → present.
    pub compliance_status: BTreeMap<String, bool>,
    pub seo_status: SeoStatus,
    /// Actionable findings, in detection order: missing policies first,
    /// duplicate-title warnings second, SEO gaps last. Append-only.
    pub recommendations: Vec<String>,
}
