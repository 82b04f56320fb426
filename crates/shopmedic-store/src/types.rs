//! Data shapes exchanged with the store platform.

use serde::{Deserialize, Serialize};
use shopmedic_core::PolicySlot;

/// Presence of the four canonical legal policies, by platform handle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyHandles {
    pub privacy: Option<String>,
    pub refund: Option<String>,
    pub shipping: Option<String>,
    pub terms: Option<String>,
}

impl PolicyHandles {
    pub fn get(&self, slot: PolicySlot) -> Option<&str> {
        match slot {
            PolicySlot::Privacy => self.privacy.as_deref(),
            PolicySlot::Refund => self.refund.as_deref(),
            PolicySlot::Shipping => self.shipping.as_deref(),
            PolicySlot::Terms => self.terms.as_deref(),
        }
    }
}

/// One product's SEO posture, as read from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSeo {
    pub id: String,
    pub meta_description: Option<String>,
}

/// First page of the catalog plus the catalog-wide total.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPage {
    pub total_count: u64,
    pub products: Vec<ProductSeo>,
}

/// Input for a page-creation mutation.
#[derive(Debug, Clone)]
pub struct NewPage {
    pub title: String,
    pub body_html: String,
    pub handle: String,
    pub published: bool,
}

/// Identifier of a created page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPage {
    /// Platform GID, e.g. `gid://shop/Page/123`.
    pub id: String,
    pub handle: String,
}

impl CreatedPage {
    /// Admin URL for the page, built from the numeric tail of the GID.
    pub fn admin_url(&self, shop_domain: &str) -> String {
        let numeric = self.id.rsplit('/').next().unwrap_or(&self.id);
        format!("https://{shop_domain}/admin/pages/{numeric}")
    }
}

/// Input for a product-update mutation.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub id: String,
    pub title: String,
    pub body_html: String,
    pub seo_title: String,
    pub seo_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_handles_by_slot() {
        let handles = PolicyHandles {
            privacy: Some("privacy-policy".into()),
            terms: None,
            ..Default::default()
        };
        assert_eq!(handles.get(PolicySlot::Privacy), Some("privacy-policy"));
        assert_eq!(handles.get(PolicySlot::Terms), None);
        assert_eq!(handles.get(PolicySlot::Shipping), None);
    }

    #[test]
    fn admin_url_uses_numeric_gid_tail() {
        let page = CreatedPage {
            id: "gid://shop/Page/9876".into(),
            handle: "privacy-policy".into(),
        };
        assert_eq!(
            page.admin_url("acme.myshopify.com"),
            "https://acme.myshopify.com/admin/pages/9876"
        );
    }

    #[test]
    fn admin_url_tolerates_bare_id() {
        let page = CreatedPage {
            id: "42".into(),
            handle: "terms".into(),
        };
        assert_eq!(
            page.admin_url("acme.myshopify.com"),
            "https://acme.myshopify.com/admin/pages/42"
        );
    }
}
