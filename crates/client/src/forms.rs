//! Client-side checks run before a form is submitted.

use redsocial_shared::{Credentials, RegisterData};

/// Minimum password length accepted by the login and registration forms.
pub const MIN_PASSWORD_LEN: usize = 6;
/// Minimum length of a post message.
pub const MIN_MESSAGE_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn credential_errors(email: &str, password: &str, errors: &mut Vec<FieldError>) {
    if email.trim().is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !is_valid_email(email) {
        errors.push(FieldError::new("email", "Email is not valid"));
    }

    if password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new("password", "Password must have at least 6 characters"));
    }
}

pub fn login_errors(credentials: &Credentials) -> Vec<FieldError> {
    let mut errors = Vec::new();
    credential_errors(&credentials.email, &credentials.password, &mut errors);
    errors
}

pub fn registration_errors(data: &RegisterData) -> Vec<FieldError> {
    let mut errors = Vec::new();
    credential_errors(&data.email, &data.password, &mut errors);

    let required = [
        ("firstName", &data.first_name, "First name is required"),
        ("lastName", &data.last_name, "Last name is required"),
        ("alias", &data.alias, "Alias is required"),
        ("birthDate", &data.birth_date, "Birth date is required"),
    ];
    for (field, value, message) in required {
        if value.trim().is_empty() {
            errors.push(FieldError::new(field, message));
        }
    }

    errors
}

/// Message attached to `field`, if any.
pub fn error_for(errors: &[FieldError], field: &str) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.to_string())
}

pub fn post_message_error(message: &str) -> Option<&'static str> {
    if message.trim().is_empty() {
        Some("A message is required")
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        Some("The message must have at least 5 characters")
    } else {
        None
    }
}
