//! Card-style terminal rendering for audit and remediation outcomes.

use shopmedic_core::{ContentOutcome, PolicyOutcome};
use shopmedic_engine::AuditOutcome;

/// Print an audit result as a grouped, human-readable card.
pub fn print_audit(outcome: &AuditOutcome) {
    let report = &outcome.report;
    println!("=== Store Health Audit ===");
    println!(
        "Total score: {} / 100  (compliance {} / 50, SEO {} / 50)",
        report.total_score, report.compliance_score, report.seo_score
    );
    println!();

    if !report.compliance_status.is_empty() {
        println!("Compliance");
        for (policy, present) in &report.compliance_status {
            println!(
                "  {:<26} {}",
                policy,
                if *present { "present" } else { "missing" }
            );
        }
        println!();
    }

    println!("SEO");
    println!("  {:<26} {}", "products in catalog", report.seo_status.total_products);
    println!("  {:<26} {}", "products checked", report.seo_status.checked);
    println!("  {:<26} {}", "with meta description", report.seo_status.optimized);
    println!();

    if !report.recommendations.is_empty() {
        println!("Recommendations");
        for recommendation in &report.recommendations {
            println!("  - {recommendation}");
        }
        println!();
    }

    print_errors(&outcome.errors);
}

pub fn print_policy_outcome(outcome: &PolicyOutcome) {
    println!("=== Policy Generation ===");
    if let Some(message) = &outcome.message {
        println!("{message}");
    }
    for link in &outcome.policy_results {
        println!("  {:<26} {}", link.policy, link.url);
    }
    print_errors(&outcome.errors);
}

pub fn print_content_outcome(outcome: &ContentOutcome) {
    println!("=== Content Rewrite ===");
    if let Some(message) = &outcome.message {
        println!("{message}");
    }
    if let Some(title) = &outcome.product_name {
        println!("  {:<26} {}", "new title", title);
    }
    if let Some(meta) = &outcome.new_meta_description {
        println!("  {:<26} {}", "meta description", meta);
    }
    print_errors(&outcome.errors);
}

fn print_errors(errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    println!("Errors");
    for error in errors {
        println!("  ! {error}");
    }
}
