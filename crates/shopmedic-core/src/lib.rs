pub mod policy;
pub mod report;
pub mod request;
pub mod score;

pub use policy::{PolicySlot, REQUIRED_POLICIES};
pub use report::{AuditReport, SeoStatus};
pub use request::{
    ContentOutcome, ContentRequest, MissingFields, PolicyContent, PolicyLink, PolicyOutcome,
    PolicyRequest, ProductContent,
};
pub use score::{compliance_score, has_usable_meta_description, seo_score};
