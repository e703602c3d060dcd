//! Pre-submission form checks
//!
//! Validation failures block the action locally; nothing reaches the
//! backend until the form passes.

use std::str::FromStr;

use rust_decimal::Decimal;
use validator::Validate;

use shared::models::{LoginRequest, MenuItemCreate, RegisterRequest};
use shared::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN,
    ValidationError, validate_optional_text, validate_required_text,
};

/// Login form input
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn into_request(self) -> Result<LoginRequest, ValidationError> {
        validate_required_text(&self.username, "username", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&self.password, "password", MAX_PASSWORD_LEN)?;
        let request = LoginRequest {
            username: self.username,
            password: self.password,
        };
        request
            .validate()
            .map_err(|e| ValidationError::new(e.to_string()))?;
        Ok(request)
    }
}

/// Registration form input, including the confirmation field
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn into_request(self) -> Result<RegisterRequest, ValidationError> {
        validate_required_text(&self.username, "username", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&self.email, "email", MAX_EMAIL_LEN)?;
        validate_required_text(&self.password, "password", MAX_PASSWORD_LEN)?;
        if self.password != self.confirm_password {
            return Err(ValidationError::new("passwords do not match"));
        }
        let request = RegisterRequest {
            username: self.username,
            email: self.email,
            password: self.password,
        };
        request
            .validate()
            .map_err(|e| ValidationError::new(e.to_string()))?;
        Ok(request)
    }
}

/// Menu item form input; price arrives as raw text
#[derive(Debug, Clone, Default)]
pub struct MenuItemForm {
    pub name: String,
    pub description: Option<String>,
    pub price: String,
}

impl MenuItemForm {
    pub fn into_create(self) -> Result<MenuItemCreate, ValidationError> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&self.description, "description", MAX_NOTE_LEN)?;

        let price = Decimal::from_str(self.price.trim())
            .map_err(|_| ValidationError::new(format!("price must be a number: {:?}", self.price)))?;
        if price <= Decimal::ZERO {
            return Err(ValidationError::new("price must be positive"));
        }

        let create = MenuItemCreate {
            name: self.name,
            description: self.description,
            price,
        };
        create
            .validate()
            .map_err(|e| ValidationError::new(e.to_string()))?;
        Ok(create)
    }
}
