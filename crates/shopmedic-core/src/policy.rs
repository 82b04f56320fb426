//! The four canonical legal-policy slots a storefront is expected to carry.

use serde::{Deserialize, Serialize};

/// One of the required legal-policy slots.
///
/// Slot order is detection order: compliance checks, recommendations, and
/// generated documents all walk [`REQUIRED_POLICIES`] front to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicySlot {
    Privacy,
    Refund,
    Shipping,
    Terms,
}

/// All policy slots, in audit order.
pub const REQUIRED_POLICIES: [PolicySlot; 4] = [
    PolicySlot::Privacy,
    PolicySlot::Refund,
    PolicySlot::Shipping,
    PolicySlot::Terms,
];

impl PolicySlot {
    /// Human-readable page title, also used for duplicate-title detection.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Privacy => "Privacy Policy",
            Self::Refund => "Refund Policy",
            Self::Shipping => "Shipping Policy",
            Self::Terms => "Terms of Service",
        }
    }

    /// URL handle the store platform reserves for this policy.
    pub fn handle(&self) -> &'static str {
        match self {
            Self::Privacy => "privacy-policy",
            Self::Refund => "refund-policy",
            Self::Shipping => "shipping-policy",
            Self::Terms => "terms-of-service",
        }
    }
}
