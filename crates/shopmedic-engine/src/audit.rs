//! Store health audit: compliance half, duplicate-title scan, SEO half.

use serde::{Deserialize, Serialize};
use shopmedic_core::{
    AuditReport, REQUIRED_POLICIES, SeoStatus, compliance_score, has_usable_meta_description,
    seo_score,
};
use shopmedic_store::{StoreApi, StoreError};
use tracing::{error, info};

/// How many pages/products the audit inspects (first page of each listing).
pub const SCAN_LIMIT: u32 = 250;

/// Result of one audit run. On failure the report still carries whatever
/// the completed steps populated, so callers can render partial scorecards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditOutcome {
    pub success: bool,
    pub errors: Vec<String>,
    pub report: AuditReport,
}

/// Run the full audit against the store.
///
/// Steps run sequentially: policy presence, duplicate-title scan, product
/// SEO scan. A failing step aborts the rest and converts the cause into an
/// error message; nothing propagates past this boundary.
pub async fn run_audit(store: &dyn StoreApi) -> AuditOutcome {
    let mut report = AuditReport::default();
    match audit_steps(store, &mut report).await {
        Ok(()) => {
            info!(
                total = report.total_score,
                compliance = report.compliance_score,
                seo = report.seo_score,
                recommendations = report.recommendations.len(),
                "store audit complete"
            );
            AuditOutcome {
                success: true,
                errors: Vec::new(),
                report,
            }
        }
        Err(e) => {
            error!(error = %e, "store audit failed");
            AuditOutcome {
                success: false,
                errors: vec![format!("Failed to run audit: {e}")],
                report,
            }
        }
    }
}

async fn audit_steps(store: &dyn StoreApi, report: &mut AuditReport) -> Result<(), StoreError> {
    // Compliance half: presence of the four canonical policy slots.
    let handles = store.policy_handles().await?;
    let mut present = 0usize;
    for slot in REQUIRED_POLICIES {
        let is_present = handles.get(slot).is_some();
        report
            .compliance_status
            .insert(slot.title().to_string(), is_present);
        if is_present {
            present += 1;
        } else {
            report.recommendations.push(format!(
                "Missing critical policy: {}. Generate it with the policy writer.",
                slot.title()
            ));
        }
    }
    report.compliance_score = compliance_score(present, REQUIRED_POLICIES.len());

    // Duplicate-title scan: warnings only, never affects the score.
    let titles = store.page_titles(SCAN_LIMIT).await?;
    for slot in REQUIRED_POLICIES {
        let count = titles.iter().filter(|t| t.contains(slot.title())).count();
        if count > 1 {
            report.recommendations.push(format!(
                "Warning: found {count} pages containing the title \"{}\". Delete duplicates to improve SEO.",
                slot.title()
            ));
        }
    }

    // SEO half: meta-description coverage over the first page of products.
    let catalog = store.products_seo(SCAN_LIMIT).await?;
    let checked = catalog.products.len() as u64;
    let optimized = catalog
        .products
        .iter()
        .filter(|p| has_usable_meta_description(p.meta_description.as_deref()))
        .count() as u64;
    report.seo_status = SeoStatus {
        total_products: catalog.total_count,
        optimized,
        checked,
    };
    report.seo_score = seo_score(optimized, checked);

    let needing_fix = checked - optimized;
    if needing_fix > 0 {
        report.recommendations.push(format!(
            "Found {needing_fix} products needing SEO meta descriptions. Rewrite them with the content writer."
        ));
    }

    report.total_score = report.compliance_score + report.seo_score;
    Ok(())
}
