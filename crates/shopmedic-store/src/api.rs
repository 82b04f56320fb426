use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::{CreatedPage, NewPage, PolicyHandles, ProductPage, ProductUpdate};

/// Everything the audit and remediation flows need from the store platform.
///
/// Read operations are issued by the audit engine; the two write operations
/// apply generated content. Implementations are request-scoped and carry
/// their own authentication.
#[async_trait]
pub trait StoreApi: Send + Sync {
    /// Handles of the four canonical legal-policy slots.
    async fn policy_handles(&self) -> Result<PolicyHandles, StoreError>;

    /// Titles of up to `first` content pages.
    async fn page_titles(&self, first: u32) -> Result<Vec<String>, StoreError>;

    /// SEO posture of up to `first` products, plus the catalog total.
    async fn products_seo(&self, first: u32) -> Result<ProductPage, StoreError>;

    /// Create a published content page; field-level user errors surface as
    /// [`StoreError::Rejected`].
    async fn create_page(&self, page: &NewPage) -> Result<CreatedPage, StoreError>;

    /// Update a product's title, body, and SEO fields.
    async fn update_product(&self, update: &ProductUpdate) -> Result<(), StoreError>;

    /// The shop's domain, for building admin URLs.
    fn shop_domain(&self) -> &str;
}
