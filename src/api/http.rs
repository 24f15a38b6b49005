//! reqwest implementation of [`InventoryBackend`].

use super::{ApiError, AuthResponse, InventoryBackend, LoginArgs, Product, ProductId, ProductInput, RegisterArgs};
use crate::config::ApiConfig;
use crate::paging::{ListQuery, PageResult};
use crate::session::Session;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// HTTP client for the inventory API
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authed(&self, builder: RequestBuilder, session: &Session) -> RequestBuilder {
        builder.bearer_auth(&session.token)
    }

    /// Send a request and turn non-2xx answers into [`ApiError`]s.
    ///
    /// `auth_endpoint` marks login/register, where a 401 means bad credentials rather
    /// than an expired session.
    async fn send(&self, builder: RequestBuilder, auth_endpoint: bool) -> Result<Response, ApiError> {
        let response = builder
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        log::debug!("API request failed with {}: {}", status, body);
        Err(error_from_status(status, &body, auth_endpoint))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    fn list_params(query: &ListQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", query.page.max(1).to_string()),
            ("per_page", query.per_page.to_string()),
        ];
        if let Some(term) = query.search_term() {
            params.push(("search", term.to_string()));
        }
        if let Some(field) = &query.sort.field {
            params.push(("sort_by", field.clone()));
            params.push(("sort_order", query.sort.direction.as_str().to_string()));
        }
        params
    }
}

/// Map a failed response onto the error taxonomy
pub fn error_from_status(status: StatusCode, body: &str, auth_endpoint: bool) -> ApiError {
    let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|b| b.message.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                status.canonical_reason().unwrap_or("Request failed").to_string()
            } else {
                trimmed.to_string()
            }
        });

    match status {
        StatusCode::UNAUTHORIZED if auth_endpoint => ApiError::Rejected(message),
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::UNPROCESSABLE_ENTITY => ApiError::Validation {
            message,
            errors: parsed.map(|b| b.errors).unwrap_or_default(),
        },
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        _ => ApiError::Server {
            status: status.as_u16(),
            message,
        },
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: BTreeMap<String, Vec<String>>,
}

/// Single resources come either bare or wrapped in `{ "data": ... }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(value) => value,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct PageMeta {
    #[serde(default)]
    total: Option<u64>,
    #[serde(default)]
    last_page: Option<u32>,
    #[serde(default)]
    current_page: Option<u32>,
}

/// Laravel paginator body; counters sit at the top level or under `meta`
#[derive(Debug, Deserialize)]
struct LaravelPage<T> {
    data: Vec<T>,
    #[serde(flatten)]
    top: PageMeta,
    #[serde(default)]
    meta: Option<PageMeta>,
}

impl<T> LaravelPage<T> {
    fn into_page_result(self, requested_page: u32) -> PageResult<T> {
        let meta = self.meta.unwrap_or_default();
        let total = self.top.total.or(meta.total).unwrap_or(self.data.len() as u64);
        let last_page = self.top.last_page.or(meta.last_page).unwrap_or(1);
        let current_page = self.top.current_page.or(meta.current_page).unwrap_or(requested_page);
        PageResult::new(self.data, total, last_page, current_page)
    }
}

#[async_trait]
impl InventoryBackend for HttpBackend {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn register(&self, args: &RegisterArgs) -> Result<AuthResponse, ApiError> {
        let request = self.client.post(self.url("register")).json(args);
        let response = self.send(request, true).await?;
        Self::decode(response).await
    }

    async fn login(&self, args: &LoginArgs) -> Result<AuthResponse, ApiError> {
        let request = self.client.post(self.url("login")).json(args);
        let response = self.send(request, true).await?;
        Self::decode(response).await
    }

    async fn logout(&self, session: &Session) -> Result<(), ApiError> {
        let request = self.authed(self.client.post(self.url("logout")), session);
        self.send(request, false).await?;
        Ok(())
    }

    async fn fetch_products(&self, session: &Session, query: &ListQuery) -> Result<PageResult<Product>, ApiError> {
        let request = self
            .authed(self.client.get(self.url("products")), session)
            .query(&Self::list_params(query));
        let response = self.send(request, false).await?;
        let page: LaravelPage<Product> = Self::decode(response).await?;
        Ok(page.into_page_result(query.page))
    }

    async fn get_product(&self, session: &Session, id: ProductId) -> Result<Product, ApiError> {
        let request = self.authed(self.client.get(self.url(&format!("products/{}", id))), session);
        let response = self.send(request, false).await?;
        let envelope: Envelope<Product> = Self::decode(response).await?;
        Ok(envelope.into_inner())
    }

    async fn create_product(&self, session: &Session, input: &ProductInput) -> Result<Product, ApiError> {
        let request = self
            .authed(self.client.post(self.url("products")), session)
            .json(input);
        let response = self.send(request, false).await?;
        let envelope: Envelope<Product> = Self::decode(response).await?;
        Ok(envelope.into_inner())
    }

    async fn update_product(
        &self,
        session: &Session,
        id: ProductId,
        input: &ProductInput,
    ) -> Result<Product, ApiError> {
        let request = self
            .authed(self.client.put(self.url(&format!("products/{}", id))), session)
            .json(input);
        let response = self.send(request, false).await?;
        let envelope: Envelope<Product> = Self::decode(response).await?;
        Ok(envelope.into_inner())
    }

    async fn delete_product(&self, session: &Session, id: ProductId) -> Result<(), ApiError> {
        let request = self.authed(self.client.delete(self.url(&format!("products/{}", id))), session);
        self.send(request, false).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paging::SortDirection;

    #[test]
    fn list_params_skip_blank_search_and_unset_sort() {
        let query = ListQuery::default();
        let params = HttpBackend::list_params(&query);
        assert_eq!(params, vec![("page", "1".to_string()), ("per_page", "10".to_string())]);
    }

    #[test]
    fn list_params_include_sort() {
        let mut query = ListQuery::default();
        query.search = "pen".to_string();
        query.sort.toggle("price");
        assert_eq!(query.sort.direction, SortDirection::Ascending);
        let params = HttpBackend::list_params(&query);
        assert!(params.contains(&("search", "pen".to_string())));
        assert!(params.contains(&("sort_by", "price".to_string())));
        assert!(params.contains(&("sort_order", "asc".to_string())));
    }

    #[test]
    fn unauthorized_depends_on_endpoint() {
        let body = r#"{"message":"Invalid credentials"}"#;
        assert_eq!(
            error_from_status(StatusCode::UNAUTHORIZED, body, true),
            ApiError::Rejected("Invalid credentials".to_string())
        );
        assert_eq!(
            error_from_status(StatusCode::UNAUTHORIZED, body, false),
            ApiError::Unauthorized
        );
    }

    #[test]
    fn validation_errors_are_kept() {
        let body = r#"{"message":"The given data was invalid.","errors":{"sku":["The sku has already been taken."]}}"#;
        let error = error_from_status(StatusCode::UNPROCESSABLE_ENTITY, body, false);
        assert_eq!(error.user_message(), "The sku has already been taken.");
    }

    #[test]
    fn server_error_uses_plain_body() {
        let error = error_from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom", false);
        assert_eq!(
            error,
            ApiError::Server {
                status: 500,
                message: "boom".to_string()
            }
        );
    }

    #[test]
    fn page_meta_can_be_nested() {
        let body = r#"{"data":[],"meta":{"total":0,"last_page":0,"current_page":1}}"#;
        let page: LaravelPage<Product> = serde_json::from_str(body).unwrap();
        let result = page.into_page_result(1);
        assert_eq!(result.total_items, 0);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn envelope_accepts_both_shapes() {
        let wrapped = r#"{"data":{"id":3,"name":"Pen","sku":"P","quantity":1,"price":100}}"#;
        let bare = r#"{"id":3,"name":"Pen","sku":"P","quantity":1,"price":100}"#;
        let a: Envelope<Product> = serde_json::from_str(wrapped).unwrap();
        let b: Envelope<Product> = serde_json::from_str(bare).unwrap();
        assert_eq!(a.into_inner(), b.into_inner());
    }
}
