//! Scripted doubles for the store platform and the generative client.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use shopmedic_ai::{GenError, GenMode, Generated, Generator, Schema};
use shopmedic_core::PolicySlot;
use shopmedic_store::{
    CreatedPage, NewPage, PolicyHandles, ProductPage, ProductSeo, ProductUpdate, StoreApi,
    StoreError,
};

/// Which read step of the audit should blow up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Policies,
    Pages,
    Products,
}

/// In-memory store double that records every call it receives.
pub struct StoreFixture {
    handles: PolicyHandles,
    pages: Vec<String>,
    products: ProductPage,
    fail_at: Option<FailAt>,
    reject_create_title: Option<String>,
    reject_update: bool,
    page_seq: AtomicUsize,
    calls: Mutex<Vec<String>>,
}

impl StoreFixture {
    pub fn new() -> Self {
        Self {
            handles: PolicyHandles::default(),
            pages: Vec::new(),
            products: ProductPage::default(),
            fail_at: None,
            reject_create_title: None,
            reject_update: false,
            page_seq: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Mark the given policy slots as present.
    pub fn with_policies(mut self, slots: &[PolicySlot]) -> Self {
        for slot in slots {
            let handle = Some(slot.handle().to_string());
            match slot {
                PolicySlot::Privacy => self.handles.privacy = handle,
                PolicySlot::Refund => self.handles.refund = handle,
                PolicySlot::Shipping => self.handles.shipping = handle,
                PolicySlot::Terms => self.handles.terms = handle,
            }
        }
        self
    }

    pub fn with_pages(mut self, titles: &[&str]) -> Self {
        self.pages = titles.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Catalog with `optimized` products carrying a usable meta description
    /// and `unoptimized` products without one.
    pub fn with_products(mut self, optimized: u64, unoptimized: u64) -> Self {
        let mut products = Vec::new();
        for i in 0..optimized {
            products.push(ProductSeo {
                id: format!("gid://shop/Product/opt-{i}"),
                meta_description: Some("A long enough meta description.".to_string()),
            });
        }
        for i in 0..unoptimized {
            products.push(ProductSeo {
                id: format!("gid://shop/Product/raw-{i}"),
                meta_description: None,
            });
        }
        self.products = ProductPage {
            total_count: optimized + unoptimized,
            products,
        };
        self
    }

    pub fn failing_at(mut self, step: FailAt) -> Self {
        self.fail_at = Some(step);
        self
    }

    /// Make `create_page` fail for the page with this title.
    pub fn rejecting_create(mut self, title: &str) -> Self {
        self.reject_create_title = Some(title.to_string());
        self
    }

    pub fn rejecting_update(mut self) -> Self {
        self.reject_update = true;
        self
    }

    pub fn call_log(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }

    fn fixture_fault() -> StoreError {
        StoreError::Server {
            status: 502,
            body: "fixture fault".to_string(),
        }
    }
}

#[async_trait]
impl StoreApi for StoreFixture {
    async fn policy_handles(&self) -> Result<PolicyHandles, StoreError> {
        self.record("policy_handles");
        if self.fail_at == Some(FailAt::Policies) {
            return Err(Self::fixture_fault());
        }
        Ok(self.handles.clone())
    }

    async fn page_titles(&self, _first: u32) -> Result<Vec<String>, StoreError> {
        self.record("page_titles");
        if self.fail_at == Some(FailAt::Pages) {
            return Err(Self::fixture_fault());
        }
        Ok(self.pages.clone())
    }

    async fn products_seo(&self, _first: u32) -> Result<ProductPage, StoreError> {
        self.record("products_seo");
        if self.fail_at == Some(FailAt::Products) {
            return Err(Self::fixture_fault());
        }
        Ok(self.products.clone())
    }

    async fn create_page(&self, page: &NewPage) -> Result<CreatedPage, StoreError> {
        self.record(&format!("create_page:{}", page.title));
        if self.reject_create_title.as_deref() == Some(page.title.as_str()) {
            return Err(StoreError::Rejected {
                operation: page.title.clone(),
                messages: vec!["Handle is already taken".to_string()],
            });
        }
        let n = self.page_seq.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(CreatedPage {
            id: format!("gid://shop/Page/{n}"),
            handle: page.handle.clone(),
        })
    }

    async fn update_product(&self, update: &ProductUpdate) -> Result<(), StoreError> {
        self.record(&format!("update_product:{}", update.id));
        if self.reject_update {
            return Err(StoreError::Rejected {
                operation: update.id.clone(),
                messages: vec!["Product does not exist".to_string()],
            });
        }
        Ok(())
    }

    fn shop_domain(&self) -> &str {
        "fixture.myshopify.com"
    }
}

/// Generator double answering with one scripted response.
pub struct ScriptedGen {
    response: Mutex<Option<Result<Generated, GenError>>>,
    calls: AtomicUsize,
}

impl ScriptedGen {
    pub fn ok(text: &str) -> Self {
        Self::with(Ok(Generated {
            text: text.to_string(),
            attempts: 1,
            mode: GenMode::Live,
        }))
    }

    pub fn degraded(text: &str) -> Self {
        Self::with(Ok(Generated {
            text: text.to_string(),
            attempts: 0,
            mode: GenMode::Degraded,
        }))
    }

    pub fn err(error: GenError) -> Self {
        Self::with(Err(error))
    }

    fn with(response: Result<Generated, GenError>) -> Self {
        Self {
            response: Mutex::new(Some(response)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Generator for ScriptedGen {
    async fn generate(
        &self,
        _system_prompt: &str,
        _user_query: &str,
        _schema: Option<&Schema>,
    ) -> Result<Generated, GenError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .lock()
            .unwrap()
            .take()
            .expect("generator called more than once")
    }
}
