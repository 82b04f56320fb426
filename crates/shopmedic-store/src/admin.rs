//! GraphQL Admin API client.
//!
//! Thin reqwest wrapper around the platform's `graphql.json` endpoint:
//! status and GraphQL-level errors become typed [`StoreError`]s, and the
//! response-shape parsing lives in standalone functions so it can be tested
//! against fixture JSON without a network.

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::info;

use crate::api::StoreApi;
use crate::error::StoreError;
use crate::types::{CreatedPage, NewPage, PolicyHandles, ProductPage, ProductSeo, ProductUpdate};

pub const DEFAULT_API_VERSION: &str = "2025-07";

const POLICY_HANDLES_QUERY: &str = r#"
query getPolicyPages {
  shop {
    privacyPolicy: policy(handle: "privacy-policy") { handle }
    refundPolicy: policy(handle: "refund-policy") { handle }
    shippingPolicy: policy(handle: "shipping-policy") { handle }
    termsOfService: policy(handle: "terms-of-service") { handle }
  }
}
"#;

const PAGE_TITLES_QUERY: &str = r#"
query checkDuplicatePages($first: Int!) {
  pages(first: $first) {
    edges {
      node {
        title
      }
    }
  }
}
"#;

const PRODUCT_SEO_QUERY: &str = r#"
query productSeoCheck($first: Int!) {
  products(first: $first) {
    nodes {
      id
      seo {
        description
      }
    }
    totalCount
  }
}
"#;

const PAGE_CREATE_MUTATION: &str = r#"
mutation pageCreate($input: PageInput!) {
  pageCreate(input: $input) {
    page {
      id
      handle
      title
    }
    userErrors {
      field
      message
    }
  }
}
"#;

const PRODUCT_UPDATE_MUTATION: &str = r#"
mutation productUpdate($input: ProductInput!) {
  productUpdate(input: $input) {
    product {
      id
      title
    }
    userErrors {
      field
      message
    }
  }
}
"#;

/// Connection details for one shop's Admin API.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// e.g. `acme.myshopify.com`.
    pub shop_domain: String,
    pub access_token: String,
    pub api_version: String,
}

impl AdminConfig {
    pub fn new(shop_domain: String, access_token: String) -> Self {
        Self {
            shop_domain,
            access_token,
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

/// GraphQL Admin API client for one shop.
pub struct AdminClient {
    client: reqwest::Client,
    endpoint: String,
    access_token: String,
    shop_domain: String,
}

impl AdminClient {
    pub fn new(config: &AdminConfig) -> Self {
        let endpoint = format!(
            "https://{}/admin/api/{}/graphql.json",
            config.shop_domain, config.api_version
        );
        Self {
            client: reqwest::Client::new(),
            endpoint,
            access_token: config.access_token.clone(),
            shop_domain: config.shop_domain.clone(),
        }
    }

    async fn graphql(&self, query: &str, variables: Value) -> Result<Value, StoreError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header("X-Shopify-Access-Token", &self.access_token)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = resp.json().await?;
        if let Some(errors) = body.get("errors").and_then(Value::as_array)
            && !errors.is_empty()
        {
            let messages = errors
                .iter()
                .map(|e| {
                    e.get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("unknown error")
                        .to_string()
                })
                .collect();
            return Err(StoreError::Query { messages });
        }
        Ok(body)
    }
}

#[async_trait]
impl StoreApi for AdminClient {
    async fn policy_handles(&self) -> Result<PolicyHandles, StoreError> {
        let body = self.graphql(POLICY_HANDLES_QUERY, json!({})).await?;
        Ok(parse_policy_handles(&body))
    }

    async fn page_titles(&self, first: u32) -> Result<Vec<String>, StoreError> {
        let body = self
            .graphql(PAGE_TITLES_QUERY, json!({ "first": first }))
            .await?;
        Ok(parse_page_titles(&body))
    }

    async fn products_seo(&self, first: u32) -> Result<ProductPage, StoreError> {
        let body = self
            .graphql(PRODUCT_SEO_QUERY, json!({ "first": first }))
            .await?;
        Ok(parse_product_page(&body))
    }

    async fn create_page(&self, page: &NewPage) -> Result<CreatedPage, StoreError> {
        info!(title = %page.title, handle = %page.handle, "creating page");
        let variables = json!({
            "input": {
                "title": page.title,
                "bodyHtml": page.body_html,
                "published": page.published,
                "handle": page.handle,
            }
        });
        let body = self.graphql(PAGE_CREATE_MUTATION, variables).await?;
        check_user_errors(&body, "/data/pageCreate/userErrors", &page.title)?;
        parse_created_page(&body)
    }

    async fn update_product(&self, update: &ProductUpdate) -> Result<(), StoreError> {
        info!(id = %update.id, "updating product");
        let variables = json!({
            "input": {
                "id": update.id,
                "title": update.title,
                "bodyHtml": update.body_html,
                "seo": {
                    "title": update.seo_title,
                    "description": update.seo_description,
                }
            }
        });
        let body = self.graphql(PRODUCT_UPDATE_MUTATION, variables).await?;
        check_user_errors(&body, "/data/productUpdate/userErrors", &update.id)?;
        Ok(())
    }

    fn shop_domain(&self) -> &str {
        &self.shop_domain
    }
}

// ── Response parsing ──

fn opt_handle(body: &Value, alias: &str) -> Option<String> {
    body.pointer(&format!("/data/shop/{alias}/handle"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn parse_policy_handles(body: &Value) -> PolicyHandles {
    PolicyHandles {
        privacy: opt_handle(body, "privacyPolicy"),
        refund: opt_handle(body, "refundPolicy"),
        shipping: opt_handle(body, "shippingPolicy"),
        terms: opt_handle(body, "termsOfService"),
    }
}

fn parse_page_titles(body: &Value) -> Vec<String> {
    body.pointer("/data/pages/edges")
        .and_then(Value::as_array)
        .map(|edges| {
            edges
                .iter()
                .filter_map(|e| e.pointer("/node/title").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn parse_product_page(body: &Value) -> ProductPage {
    let total_count = body
        .pointer("/data/products/totalCount")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let products = body
        .pointer("/data/products/nodes")
        .and_then(Value::as_array)
        .map(|nodes| {
            nodes
                .iter()
                .filter_map(|node| {
                    let id = node.get("id").and_then(Value::as_str)?;
                    let meta_description = node
                        .pointer("/seo/description")
                        .and_then(Value::as_str)
                        .map(str::to_string);
                    Some(ProductSeo {
                        id: id.to_string(),
                        meta_description,
                    })
                })
                .collect()
        })
        .unwrap_or_default();
    ProductPage {
        total_count,
        products,
    }
}

fn parse_created_page(body: &Value) -> Result<CreatedPage, StoreError> {
    let page = body
        .pointer("/data/pageCreate/page")
        .filter(|p| !p.is_null())
        .ok_or(StoreError::MissingData("pageCreate.page"))?;
    let id = page
        .get("id")
        .and_then(Value::as_str)
        .ok_or(StoreError::MissingData("pageCreate.page.id"))?;
    let handle = page
        .get("handle")
        .and_then(Value::as_str)
        .unwrap_or_default();
    Ok(CreatedPage {
        id: id.to_string(),
        handle: handle.to_string(),
    })
}

/// Turn a non-empty `userErrors` array into [`StoreError::Rejected`].
fn check_user_errors(body: &Value, pointer: &str, operation: &str) -> Result<(), StoreError> {
    let Some(errors) = body.pointer(pointer).and_then(Value::as_array) else {
        return Ok(());
    };
    if errors.is_empty() {
        return Ok(());
    }
    let messages = errors
        .iter()
        .map(|e| {
            e.get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string()
        })
        .collect();
    Err(StoreError::Rejected {
        operation: operation.to_string(),
        messages,
    })
}
