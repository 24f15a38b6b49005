//! Remote inventory API abstraction.
//!
//! This module defines the interface the rest of the application uses to talk to the
//! inventory server, the wire types it exchanges, and the error taxonomy for failed
//! requests. [`http::HttpBackend`] is the reqwest implementation.

use crate::paging::{ListQuery, PageResult};
use crate::session::Session;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub mod http;

pub use http::HttpBackend;

/// Server-side product identifier
pub type ProductId = i64;

/// Errors returned by backend operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The bearer token was rejected; the session must be dropped.
    #[error("Session expired")]
    Unauthorized,

    /// No session is available for an authenticated call.
    #[error("Not logged in")]
    NotAuthenticated,

    /// Login or registration was refused by the server.
    #[error("{0}")]
    Rejected(String),

    /// The server rejected the payload (HTTP 422).
    #[error("{message}")]
    Validation {
        message: String,
        errors: BTreeMap<String, Vec<String>>,
    },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Message suitable for a toast or a form's general error line.
    ///
    /// Validation errors surface the first SKU error, then the first error of any
    /// other field, then the server message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation { message, errors } => errors
                .get("sku")
                .and_then(|messages| messages.first())
                .or_else(|| errors.values().find_map(|messages| messages.first()))
                .cloned()
                .unwrap_or_else(|| message.clone()),
            other => other.to_string(),
        }
    }
}

/// A product as returned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    #[serde(deserialize_with = "deserialize_integer")]
    pub quantity: i64,
    #[serde(deserialize_with = "deserialize_number")]
    pub price: f64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Writable product fields for create and update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductInput {
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    pub price: f64,
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            sku: product.sku.clone(),
            quantity: product.quantity,
            price: product.price,
        }
    }
}

/// Authenticated user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Body of a successful login or registration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Arguments for `POST /register`
#[derive(Clone, PartialEq, Serialize)]
pub struct RegisterArgs {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Arguments for `POST /login`
#[derive(Clone, PartialEq, Serialize)]
pub struct LoginArgs {
    pub email: String,
    pub password: String,
}

// Passwords never reach the logs.
impl fmt::Debug for RegisterArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterArgs")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

impl fmt::Debug for LoginArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginArgs")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Interface to the inventory server.
///
/// Authenticated calls take the [`Session`] explicitly; implementations keep no
/// credentials of their own.
#[async_trait]
pub trait InventoryBackend: Send + Sync {
    /// Base URL requests are sent to
    fn base_url(&self) -> &str;

    async fn register(&self, args: &RegisterArgs) -> Result<AuthResponse, ApiError>;
    async fn login(&self, args: &LoginArgs) -> Result<AuthResponse, ApiError>;
    async fn logout(&self, session: &Session) -> Result<(), ApiError>;

    /// Fetch one page of products. An empty page is a valid answer, not an error.
    async fn fetch_products(&self, session: &Session, query: &ListQuery) -> Result<PageResult<Product>, ApiError>;
    async fn get_product(&self, session: &Session, id: ProductId) -> Result<Product, ApiError>;
    async fn create_product(&self, session: &Session, input: &ProductInput) -> Result<Product, ApiError>;
    async fn update_product(&self, session: &Session, id: ProductId, input: &ProductInput)
        -> Result<Product, ApiError>;
    async fn delete_product(&self, session: &Session, id: ProductId) -> Result<(), ApiError>;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

// Decimal columns often arrive as JSON strings ("1500.00").
fn deserialize_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::Text(text) => text.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

fn deserialize_integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_number(deserializer)?;
    if value.fract() != 0.0 {
        return Err(serde::de::Error::custom(format!("expected an integer, got {}", value)));
    }
    Ok(value as i64)
}
