//! Inventory service: the layer between the UI and the remote backend.
//!
//! It owns the current session, keeps the on-disk copy in step with it, and drops it
//! whenever the server answers 401.

use crate::api::{
    ApiError, InventoryBackend, LoginArgs, Product, ProductId, ProductInput, RegisterArgs, User,
};
use crate::constants::DASHBOARD_RECENT_COUNT;
use crate::paging::{ListQuery, PageResult};
use crate::session::{Session, SessionStore};
use std::sync::{Arc, RwLock};

/// Figures shown on the dashboard
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSummary {
    /// Product count reported by the server
    pub total_products: u64,
    /// Sum of quantities over the first page
    pub total_stock: i64,
    /// Sum of prices over the first page, rounded
    pub total_value: f64,
    pub recent: Vec<Product>,
}

impl DashboardSummary {
    pub fn from_page(page: PageResult<Product>) -> Self {
        let total_stock = page.items.iter().map(|p| p.quantity).sum();
        let total_value = page.items.iter().map(|p| p.price).sum::<f64>().round();
        Self {
            total_products: page.total_items,
            total_stock,
            total_value,
            recent: page.items.into_iter().take(DASHBOARD_RECENT_COUNT).collect(),
        }
    }
}

#[derive(Clone)]
pub struct InventoryService {
    backend: Arc<dyn InventoryBackend>,
    session: Arc<RwLock<Option<Session>>>,
    store: Option<SessionStore>,
}

impl InventoryService {
    pub fn new(backend: Arc<dyn InventoryBackend>, store: Option<SessionStore>) -> Self {
        Self {
            backend,
            session: Arc::new(RwLock::new(None)),
            store,
        }
    }

    /// Load the persisted session, if any, and make it current
    pub fn restore(&self) -> anyhow::Result<Option<Session>> {
        let restored = match &self.store {
            Some(store) => store.load()?,
            None => None,
        };
        if let Some(session) = &restored {
            log::info!("Restored session for '{}'", session.display_name());
        }
        self.set_session(restored.clone());
        Ok(restored)
    }

    pub fn backend_url(&self) -> String {
        self.backend.base_url().to_string()
    }

    /// Snapshot of the current session
    pub fn session(&self) -> Option<Session> {
        self.session.read().ok().and_then(|guard| guard.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    fn set_session(&self, session: Option<Session>) {
        if let Ok(mut guard) = self.session.write() {
            *guard = session;
        }
    }

    fn persist(&self, session: &Session) {
        if let Some(store) = &self.store {
            if let Err(e) = store.save(session) {
                log::warn!("Failed to persist session: {:#}", e);
            }
        }
    }

    fn forget(&self) {
        self.set_session(None);
        if let Some(store) = &self.store {
            if let Err(e) = store.clear() {
                log::warn!("Failed to remove stored session: {:#}", e);
            }
        }
    }

    fn require_session(&self) -> Result<Session, ApiError> {
        self.session().ok_or(ApiError::NotAuthenticated)
    }

    /// Drop the session when the server rejected the token
    fn guard<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(ApiError::Unauthorized) = &result {
            log::warn!("Server rejected the session token, logging out");
            self.forget();
        }
        result
    }

    fn establish(&self, token: String, user: User) -> Session {
        let session = Session::new(token, Some(user));
        self.persist(&session);
        self.set_session(Some(session.clone()));
        session
    }

    pub async fn login(&self, args: LoginArgs) -> Result<Session, ApiError> {
        let response = self.backend.login(&args).await?;
        let user = response.user.unwrap_or_else(|| User {
            id: None,
            name: args.email.clone(),
            email: args.email.clone(),
        });
        log::info!("Logged in as '{}'", user.email);
        Ok(self.establish(response.token, user))
    }

    pub async fn register(&self, args: RegisterArgs) -> Result<Session, ApiError> {
        let response = self.backend.register(&args).await?;
        let user = response.user.unwrap_or_else(|| User {
            id: None,
            name: args.name.clone(),
            email: args.email.clone(),
        });
        log::info!("Registered '{}'", user.email);
        Ok(self.establish(response.token, user))
    }

    /// Log out locally; the server call is best effort
    pub async fn logout(&self) {
        if let Some(session) = self.session() {
            if let Err(e) = self.backend.logout(&session).await {
                log::warn!("Server logout failed: {}", e);
            }
        }
        self.forget();
    }

    pub async fn list_products(&self, query: &ListQuery) -> Result<PageResult<Product>, ApiError> {
        let session = self.require_session()?;
        let result = self.backend.fetch_products(&session, query).await;
        self.guard(result)
    }

    pub async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        let session = self.require_session()?;
        let result = self.backend.get_product(&session, id).await;
        self.guard(result)
    }

    pub async fn create_product(&self, input: ProductInput) -> Result<Product, ApiError> {
        let session = self.require_session()?;
        let result = self.backend.create_product(&session, &input).await;
        self.guard(result)
    }

    pub async fn update_product(&self, id: ProductId, input: ProductInput) -> Result<Product, ApiError> {
        let session = self.require_session()?;
        let result = self.backend.update_product(&session, id, &input).await;
        self.guard(result)
    }

    pub async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        let session = self.require_session()?;
        let result = self.backend.delete_product(&session, id).await;
        self.guard(result)
    }

    /// First page of products condensed into dashboard figures
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        let page = self.list_products(&ListQuery::default()).await?;
        Ok(DashboardSummary::from_page(page))
    }
}
