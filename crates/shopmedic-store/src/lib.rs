//! Store platform access: the [`StoreApi`] trait the audit and remediation
//! flows consume, plus the GraphQL Admin HTTP implementation.
//!
//! Credentials arrive as an explicit [`AdminConfig`]; the crate never reads
//! them from ambient globals.

mod admin;
mod api;
mod error;
mod types;

pub use admin::{AdminClient, AdminConfig};
pub use api::StoreApi;
pub use error::StoreError;
pub use types::{CreatedPage, NewPage, PolicyHandles, ProductPage, ProductSeo, ProductUpdate};
