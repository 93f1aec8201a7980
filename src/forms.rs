// ABOUTME: Form handling for the exchange-site library
// ABOUTME: Validates contact messages and checks the placeholder admin credentials

use crate::errors::{Result, SiteError};
use chrono::{DateTime, Local};
use uuid::Uuid;

/// Fields submitted through the contact form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Check required fields and the format of the optional contact details
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SiteError::ValidationError("name is required".to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(SiteError::ValidationError(
                "message is required".to_string(),
            ));
        }

        let email = self.email.trim();
        if !email.is_empty() && !email.contains('@') {
            return Err(SiteError::ValidationError(format!(
                "invalid email address: {}",
                email
            )));
        }

        let phone = self.phone.trim();
        if !phone
            .chars()
            .all(|c| c.is_ascii_digit() || c == ' ' || c == '+' || c == '-')
        {
            return Err(SiteError::ValidationError(format!(
                "invalid phone number: {}",
                phone
            )));
        }

        Ok(())
    }
}

/// Proof that a contact message was accepted
#[derive(Debug, Clone, PartialEq)]
pub struct ContactReceipt {
    pub reference: Uuid,
    pub submitted_at: DateTime<Local>,
    pub form: ContactForm,
}

impl ContactReceipt {
    pub fn new(form: ContactForm) -> Self {
        Self {
            reference: Uuid::new_v4(),
            submitted_at: Local::now(),
            form,
        }
    }
}

/// Admin credentials. This is a demo equality check, not an auth model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn placeholder() -> Self {
        Self::new("admin", "admin123")
    }

    pub fn check(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::placeholder()
    }
}
