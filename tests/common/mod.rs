//! In-memory inventory backend shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use stockroom::api::{
    ApiError, AuthResponse, InventoryBackend, LoginArgs, Product, ProductId, ProductInput, RegisterArgs, User,
};
use stockroom::config::UiConfig;
use stockroom::logger::Logger;
use stockroom::paging::{ListQuery, PageResult, SortDirection};
use stockroom::service::InventoryService;
use stockroom::session::Session;
use stockroom::ui::core::AppContext;

pub const TOKEN: &str = "fake-token";
pub const PASSWORD: &str = "secret1";

pub fn product(id: ProductId) -> Product {
    Product {
        id,
        name: format!("Item {:02}", id),
        sku: format!("SKU-{:02}", id),
        quantity: id * 2,
        price: 1000.0 * id as f64,
        created_at: None,
        updated_at: None,
    }
}

#[derive(Default)]
pub struct FakeBackend {
    pub products: Mutex<Vec<Product>>,
    pub expired: AtomicBool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn with_products(count: i64) -> Arc<Self> {
        Arc::new(Self {
            products: Mutex::new((1..=count).map(product).collect()),
            ..Self::default()
        })
    }

    pub fn expire(&self) {
        self.expired.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn check(&self, session: &Session) -> Result<(), ApiError> {
        if self.expired.load(Ordering::SeqCst) || session.token != TOKEN {
            return Err(ApiError::Unauthorized);
        }
        Ok(())
    }
}

#[async_trait]
impl InventoryBackend for FakeBackend {
    fn base_url(&self) -> &str {
        "http://fake.test/api"
    }

    async fn register(&self, args: &RegisterArgs) -> Result<AuthResponse, ApiError> {
        self.record(format!("register {}", args.email));
        Ok(AuthResponse {
            token: TOKEN.to_string(),
            user: Some(User {
                id: Some(2),
                name: args.name.clone(),
                email: args.email.clone(),
            }),
        })
    }

    async fn login(&self, args: &LoginArgs) -> Result<AuthResponse, ApiError> {
        self.record(format!("login {}", args.email));
        if args.password != PASSWORD {
            return Err(ApiError::Rejected("Invalid credentials".to_string()));
        }
        Ok(AuthResponse {
            token: TOKEN.to_string(),
            user: None,
        })
    }

    async fn logout(&self, session: &Session) -> Result<(), ApiError> {
        self.record("logout");
        self.check(session)
    }

    async fn fetch_products(&self, session: &Session, query: &ListQuery) -> Result<PageResult<Product>, ApiError> {
        self.record(format!("list page={} per_page={}", query.page, query.per_page));
        self.check(session)?;

        let mut items: Vec<Product> = self.products.lock().unwrap().clone();
        if let Some(term) = query.search_term() {
            let term = term.to_lowercase();
            items.retain(|p| p.name.to_lowercase().contains(&term) || p.sku.to_lowercase().contains(&term));
        }
        if let Some(field) = query.sort.field.as_deref() {
            items.sort_by(|a, b| {
                let ordering = match field {
                    "price" => a.price.total_cmp(&b.price),
                    "quantity" => a.quantity.cmp(&b.quantity),
                    "sku" => a.sku.cmp(&b.sku),
                    _ => a.name.cmp(&b.name),
                };
                match query.sort.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        let total = items.len() as u64;
        let per_page = query.per_page.max(1) as usize;
        let total_pages = ((items.len() + per_page - 1) / per_page).max(1) as u32;
        let start = (query.page.max(1) as usize - 1) * per_page;
        let page_items = items.into_iter().skip(start).take(per_page).collect();
        Ok(PageResult::new(page_items, total, total_pages, query.page))
    }

    async fn get_product(&self, session: &Session, id: ProductId) -> Result<Product, ApiError> {
        self.check(session)?;
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("product {}", id)))
    }

    async fn create_product(&self, session: &Session, input: &ProductInput) -> Result<Product, ApiError> {
        self.check(session)?;
        let mut products = self.products.lock().unwrap();
        if products.iter().any(|p| p.sku == input.sku) {
            return Err(ApiError::Validation {
                message: "The given data was invalid.".to_string(),
                errors: [("sku".to_string(), vec!["The sku has already been taken.".to_string()])]
                    .into_iter()
                    .collect(),
            });
        }
        let product = Product {
            id: products.iter().map(|p| p.id).max().unwrap_or(0) + 1,
            name: input.name.clone(),
            sku: input.sku.clone(),
            quantity: input.quantity,
            price: input.price,
            created_at: None,
            updated_at: None,
        };
        products.push(product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        session: &Session,
        id: ProductId,
        input: &ProductInput,
    ) -> Result<Product, ApiError> {
        self.check(session)?;
        let mut products = self.products.lock().unwrap();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("product {}", id)))?;
        product.name = input.name.clone();
        product.sku = input.sku.clone();
        product.quantity = input.quantity;
        product.price = input.price;
        Ok(product.clone())
    }

    async fn delete_product(&self, session: &Session, id: ProductId) -> Result<(), ApiError> {
        self.record(format!("delete {}", id));
        self.check(session)?;
        self.products.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }
}

pub fn service(backend: Arc<FakeBackend>) -> InventoryService {
    InventoryService::new(backend, None)
}

pub fn context(service: InventoryService) -> AppContext {
    AppContext::new(service, UiConfig::default(), Logger::new())
}
