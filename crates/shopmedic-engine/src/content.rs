//! Content writer: rewrite one product's copy and apply it to the store.
//!
//! Same validate → compose → generate → apply shape as the policy writer,
//! but the single product update runs with [`OnError::Abort`]: the update
//! either lands whole or the run fails.

use futures::FutureExt;
use shopmedic_ai::{Generator, Schema};
use shopmedic_core::{ContentOutcome, ContentRequest, ProductContent};
use shopmedic_store::{ProductUpdate, StoreApi};
use tracing::info;

use crate::apply::{OnError, apply_mutations};

fn content_schema() -> Schema {
    Schema::object(vec![
        (
            "newTitle",
            Schema::string("A slightly optimized, catchy product title."),
        ),
        (
            "newDescription",
            Schema::string("The new, SEO-optimized product description, formatted with HTML."),
        ),
        (
            "newMetaDescription",
            Schema::string("A concise, SEO-friendly meta description (120-155 characters)."),
        ),
    ])
}

fn system_prompt(request: &ContentRequest) -> String {
    format!(
        "You are an expert SEO copywriter. You must rewrite the provided product content to be \
         more engaging and optimized for search engines, adhering to a '{}' tone and writing in \
         {}. Your output MUST be valid JSON and conform strictly to the provided schema.",
        request.tone, request.target_language
    )
}

fn user_query(request: &ContentRequest) -> String {
    format!(
        "Rewrite the following product content using a {} tone. Original Title: \"{}\". Original \
         Description: \"{}\". Existing Tags: {}. Generate a new product title, a new HTML product \
         description, and a 120-155 character SEO meta description.",
        request.tone, request.product_name, request.product_description, request.product_tags
    )
}

/// Rewrite a product's title, description, and SEO fields in one update.
pub async fn rewrite_product(
    generator: &dyn Generator,
    store: &dyn StoreApi,
    request: &ContentRequest,
) -> ContentOutcome {
    if request.validate().is_err() {
        return ContentOutcome::failure(vec![
            "No product ID provided. Please select a product.".to_string(),
        ]);
    }

    let schema = content_schema();
    let generated = match generator
        .generate(&system_prompt(request), &user_query(request), Some(&schema))
        .await
    {
        Ok(generated) => generated,
        Err(e) => {
            return ContentOutcome::failure(vec![format!("AI content generation failed: {e}")]);
        }
    };
    if generated.is_degraded() {
        return ContentOutcome::failure(vec![
            "Generative API credential is not configured; the product was not updated.".to_string(),
        ]);
    }
    let content: ProductContent = match serde_json::from_str(&generated.text) {
        Ok(content) => content,
        Err(e) => {
            return ContentOutcome::failure(vec![format!("AI content generation failed: {e}")]);
        }
    };

    // The new title doubles as the SEO title.
    let update = ProductUpdate {
        id: request.product_id.clone(),
        title: content.new_title.clone(),
        body_html: content.new_description.clone(),
        seo_title: content.new_title.clone(),
        seo_description: content.new_meta_description.clone(),
    };
    let ops = vec![(
        request.product_name.clone(),
        async move { store.update_product(&update).await }.boxed(),
    )];
    let (applied, errors) = apply_mutations(ops, OnError::Abort).await;

    if !errors.is_empty() || applied.is_empty() {
        return ContentOutcome::failure(errors);
    }

    info!(product = %request.product_id, "product content updated");
    ContentOutcome {
        success: true,
        message: Some(format!(
            "Product content for {} has been successfully updated with a {} tone.",
            request.product_name, request.tone
        )),
        errors: Vec::new(),
        product_name: Some(content.new_title),
        new_meta_description: Some(content.new_meta_description),
    }
}
