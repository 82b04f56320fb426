//! Policy writer: generate three legal documents and publish them as pages.
//!
//! Validate → compose prompt and schema → generate → create one page per
//! document. Page creation runs with [`OnError::Continue`]: a rejected
//! document is recorded but the remaining documents are still attempted,
//! and the run fails iff any error accumulated.

use futures::FutureExt;
use shopmedic_ai::{Generator, Schema};
use shopmedic_core::{PolicyContent, PolicyLink, PolicyOutcome, PolicyRequest, PolicySlot};
use shopmedic_store::{NewPage, StoreApi};
use tracing::info;

use crate::apply::{OnError, apply_mutations};

const SYSTEM_PROMPT: &str = "You are a professional legal compliance assistant. Your task is to \
    generate three legal documents (Privacy Policy, Terms of Service, Refund Policy) based on the \
    user's business details. The output MUST be a JSON object adhering to the provided schema. The \
    policy content must be in clean HTML format. Use the jurisdiction setting to ensure compliance \
    (e.g., mention GDPR for EU).";

fn policy_schema() -> Schema {
    Schema::object(vec![
        (
            "privacyPolicyContent",
            Schema::string("The complete HTML content for the Privacy Policy."),
        ),
        (
            "termsOfServiceContent",
            Schema::string("The complete HTML content for the Terms of Service."),
        ),
        (
            "refundPolicyContent",
            Schema::string("The complete HTML content for the Refund Policy."),
        ),
    ])
}

fn user_query(request: &PolicyRequest) -> String {
    format!(
        "Generate policies for a business named \"{}\" with contact email \"{}\". Primary \
         jurisdiction is set to \"{}\". The refund period is {} days. Ensure policies are \
         comprehensive and include standard clauses.",
        request.business_name, request.contact_email, request.jurisdiction, request.refund_days
    )
}

/// Generate the three legal documents and create a store page for each.
pub async fn generate_policies(
    generator: &dyn Generator,
    store: &dyn StoreApi,
    request: &PolicyRequest,
) -> PolicyOutcome {
    if let Err(e) = request.validate() {
        return PolicyOutcome::failure(vec![format!("Missing required business details: {e}")]);
    }

    let schema = policy_schema();
    let generated = match generator
        .generate(SYSTEM_PROMPT, &user_query(request), Some(&schema))
        .await
    {
        Ok(generated) => generated,
        Err(e) => return PolicyOutcome::failure(vec![format!("AI policy generation failed: {e}")]),
    };
    if generated.is_degraded() {
        return PolicyOutcome::failure(vec![
            "Generative API credential is not configured; no policies were generated.".to_string(),
        ]);
    }
    let content: PolicyContent = match serde_json::from_str(&generated.text) {
        Ok(content) => content,
        Err(e) => return PolicyOutcome::failure(vec![format!("AI policy generation failed: {e}")]),
    };

    // Creation order matches the schema's document order.
    let documents = [
        (PolicySlot::Privacy, content.privacy_policy_content),
        (PolicySlot::Terms, content.terms_of_service_content),
        (PolicySlot::Refund, content.refund_policy_content),
    ];
    let shop_domain = store.shop_domain().to_string();
    let ops = documents
        .into_iter()
        .map(|(slot, body_html)| {
            let shop_domain = shop_domain.clone();
            let page = NewPage {
                title: slot.title().to_string(),
                body_html,
                handle: slot.handle().to_string(),
                published: true,
            };
            let op = async move {
                let created = store.create_page(&page).await?;
                Ok(PolicyLink {
                    policy: page.title,
                    url: created.admin_url(&shop_domain),
                })
            }
            .boxed();
            (slot.title().to_string(), op)
        })
        .collect();

    let (policy_results, errors) = apply_mutations(ops, OnError::Continue).await;
    let success = errors.is_empty();
    if success {
        info!(pages = policy_results.len(), "policy pages created");
    }
    PolicyOutcome {
        success,
        message: success
            .then(|| "All policies successfully generated and created.".to_string()),
        errors,
        policy_results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ScriptedGen, StoreFixture};
    use shopmedic_ai::GenError;
    use serde_json::json;

    fn request() -> PolicyRequest {
        PolicyRequest {
            business_name: "Acme Widgets".into(),
            contact_email: "legal@acme.example".into(),
            jurisdiction: "EU".into(),
            refund_days: "30".into(),
        }
    }

    fn policy_json() -> String {
        json!({
            "privacyPolicyContent": "<h1>Privacy</h1>",
            "termsOfServiceContent": "<h1>Terms</h1>",
            "refundPolicyContent": "<h1>Refunds</h1>",
        })
        .to_string()
    }

    #[tokio::test]
    async fn happy_path_creates_three_pages() {
        let generator = ScriptedGen::ok(&policy_json());
        let store = StoreFixture::new();
        let outcome = generate_policies(&generator, &store, &request()).await;

        assert!(outcome.success, "errors: {:?}", outcome.errors);
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.policy_results.len(), 3);
        assert_eq!(outcome.policy_results[0].policy, "Privacy Policy");
        assert_eq!(
            outcome.policy_results[0].url,
            "https://fixture.myshopify.com/admin/pages/1"
        );
        assert_eq!(store.call_count(), 3);
    }

    #[tokio::test]
    async fn missing_field_makes_zero_remote_calls() {
        let generator = ScriptedGen::ok(&policy_json());
        let store = StoreFixture::new();
        let bad = PolicyRequest {
            contact_email: String::new(),
            ..request()
        };
        let outcome = generate_policies(&generator, &store, &bad).await;

        assert!(!outcome.success);
        assert!(outcome.errors[0].contains("contactEmail"));
        assert_eq!(generator.call_count(), 0);
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn generation_failure_is_caught_before_mutations() {
        let generator = ScriptedGen::err(GenError::SafetyBlocked);
        let store = StoreFixture::new();
        let outcome = generate_policies(&generator, &store, &request()).await;

        assert!(!outcome.success);
        assert!(outcome.errors[0].contains("AI policy generation failed"));
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn unparseable_generation_is_caught() {
        let generator = ScriptedGen::ok("not json at all");
        let store = StoreFixture::new();
        let outcome = generate_policies(&generator, &store, &request()).await;

        assert!(!outcome.success);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn degraded_generation_never_touches_the_store() {
        let generator = ScriptedGen::degraded(&policy_json());
        let store = StoreFixture::new();
        let outcome = generate_policies(&generator, &store, &request()).await;

        assert!(!outcome.success);
        assert!(outcome.errors[0].contains("credential"));
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn one_rejected_page_does_not_abort_the_rest() {
        let generator = ScriptedGen::ok(&policy_json());
        let store = StoreFixture::new().rejecting_create("Refund Policy");
        let outcome = generate_policies(&generator, &store, &request()).await;

        assert!(!outcome.success);
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].starts_with("Refund Policy:"));
        assert_eq!(outcome.policy_results.len(), 2);
        // All three creations were attempted despite the failure.
        assert_eq!(
            store.call_log(),
            vec![
                "create_page:Privacy Policy",
                "create_page:Terms of Service",
                "create_page:Refund Policy",
            ]
        );
    }

    #[test]
    fn user_query_carries_business_details() {
        let query = user_query(&request());
        assert!(query.contains("Acme Widgets"));
        assert!(query.contains("legal@acme.example"));
        assert!(query.contains("\"EU\""));
        assert!(query.contains("30 days"));
    }

    #[test]
    fn schema_matches_wire_keys() {
        let schema = policy_schema();
        assert_eq!(
            schema.property_names(),
            vec![
                "privacyPolicyContent",
                "termsOfServiceContent",
                "refundPolicyContent"
            ]
        );
    }
}
