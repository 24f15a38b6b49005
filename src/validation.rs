//! Client-side form validation.
//!
//! Each form validates into the request payload it produces, or into per-field messages.
//! Nothing is sent to the server while a form has errors.

use crate::api::{LoginArgs, Product, ProductInput, RegisterArgs};
use crate::constants::{
    MIN_PASSWORD_LENGTH, MIN_PRODUCT_PRICE, VALIDATION_EMAIL_INVALID, VALIDATION_EMAIL_REQUIRED,
    VALIDATION_NAME_REQUIRED, VALIDATION_PASSWORD_REQUIRED, VALIDATION_PASSWORD_TOO_SHORT, VALIDATION_PRICE_INVALID,
    VALIDATION_PRICE_REQUIRED, VALIDATION_PRODUCT_NAME_REQUIRED, VALIDATION_QUANTITY_INVALID,
    VALIDATION_QUANTITY_REQUIRED, VALIDATION_SKU_REQUIRED,
};
use crate::utils::format::format_price_input;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email regex"));

/// Whether `email` looks like `something@domain.tld`
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validation messages keyed by field name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.keys().copied()
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Raw text of the product create/edit form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub sku: String,
    pub quantity: String,
    pub price: String,
}

impl ProductForm {
    pub const FIELDS: [&'static str; 4] = ["name", "sku", "quantity", "price"];

    /// Prefill for editing; whole prices lose their decimals
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            sku: product.sku.clone(),
            quantity: product.quantity.to_string(),
            price: format_price_input(product.price),
        }
    }

    pub fn validate(&self) -> Result<ProductInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert("name", VALIDATION_PRODUCT_NAME_REQUIRED);
        }

        let sku = self.sku.trim();
        if sku.is_empty() {
            errors.insert("sku", VALIDATION_SKU_REQUIRED);
        }

        let quantity = self.quantity.trim();
        let parsed_quantity = if quantity.is_empty() {
            errors.insert("quantity", VALIDATION_QUANTITY_REQUIRED);
            None
        } else {
            match quantity.parse::<i64>() {
                Ok(value) if value >= 0 => Some(value),
                _ => {
                    errors.insert("quantity", VALIDATION_QUANTITY_INVALID);
                    None
                }
            }
        };

        let price = self.price.trim();
        let parsed_price = if price.is_empty() {
            errors.insert("price", VALIDATION_PRICE_REQUIRED);
            None
        } else {
            match price.parse::<f64>() {
                Ok(value) if value.is_finite() && value >= MIN_PRODUCT_PRICE => Some(value),
                _ => {
                    errors.insert("price", VALIDATION_PRICE_INVALID);
                    None
                }
            }
        };

        errors.into_result(|| ProductInput {
            name: name.to_string(),
            sku: sku.to_string(),
            quantity: parsed_quantity.unwrap_or_default(),
            price: parsed_price.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterArgs, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert("name", VALIDATION_NAME_REQUIRED);
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert("email", VALIDATION_EMAIL_REQUIRED);
        } else if !is_valid_email(email) {
            errors.insert("email", VALIDATION_EMAIL_INVALID);
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.insert("password", VALIDATION_PASSWORD_TOO_SHORT);
        }

        errors.into_result(|| RegisterArgs {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginArgs, FieldErrors> {
        let mut errors = FieldErrors::new();

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert("email", VALIDATION_EMAIL_REQUIRED);
        }
        if self.password.is_empty() {
            errors.insert("password", VALIDATION_PASSWORD_REQUIRED);
        }

        errors.into_result(|| LoginArgs {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}
