//! Remediation requests, generated-content shapes, and outcome types.
//!
//! Requests validate synchronously and completely before any remote call is
//! made. Generated-content structs mirror the JSON the generative API is
//! asked to produce (camelCase keys on the wire). Outcomes are plain result
//! values: `errors` is empty iff `success` is true.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One or more required request fields were absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {}", .0.join(", "))]
pub struct MissingFields(pub Vec<String>);

/// Business details for legal-policy generation. All fields required.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRequest {
    pub business_name: String,
    pub contact_email: String,
    pub jurisdiction: String,
    /// Refund window in days, kept as the string the caller submitted.
    pub refund_days: String,
}

impl PolicyRequest {
    pub fn validate(&self) -> Result<(), MissingFields> {
        let mut missing = Vec::new();
        for (name, value) in [
            ("businessName", &self.business_name),
            ("contactEmail", &self.contact_email),
            ("jurisdiction", &self.jurisdiction),
            ("refundDays", &self.refund_days),
        ] {
            if value.trim().is_empty() {
                missing.push(name.to_string());
            }
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(MissingFields(missing))
        }
    }
}

/// Parameters for rewriting one product's content. Only `product_id` is
/// hard-required; the rest feed the prompt and may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequest {
    pub product_id: String,
    pub product_name: String,
    pub product_description: String,
    pub product_tags: String,
    pub tone: String,
    pub target_language: String,
}

impl ContentRequest {
    pub fn validate(&self) -> Result<(), MissingFields> {
        if self.product_id.trim().is_empty() {
            Err(MissingFields(vec!["productId".to_string()]))
        } else {
            Ok(())
        }
    }
}

/// The three legal documents the generative API returns for a policy run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyContent {
    pub privacy_policy_content: String,
    pub terms_of_service_content: String,
    pub refund_policy_content: String,
}

/// Rewritten product content returned by the generative API.
///
/// `new_meta_description` is asked for at 120–155 characters, but the
/// length is a prompt-level target, not a parse-time constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductContent {
    pub new_title: String,
    pub new_description: String,
    pub new_meta_description: String,
}

/// One created policy page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyLink {
    pub policy: String,
    pub url: String,
}

/// Result of a policy-generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyOutcome {
    pub success: bool,
    pub message: Option<String>,
    pub errors: Vec<String>,
    pub policy_results: Vec<PolicyLink>,
}

impl PolicyOutcome {
    pub fn failure(errors: Vec<String>) -> Self {
        Self {
            success: false,
            errors,
            ..Default::default()
        }
    }
}

/// Result of a content-rewrite run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentOutcome {
    pub success: bool,
    pub message: Option<String>,
    pub errors: Vec<String>,
    pub product_name: Option<String>,
    pub new_meta_description: Option<String>,
}

impl ContentOutcome {
    pub fn failure(errors: Vec<String>) -> Self {
        Self {
            success: false,
            errors,
            ..Default::default()
        }
    }
}
