//! Checks run before anything goes over the network.

use thiserror::Error;

use crate::api::{Credentials, RegistrationInput};
use crate::form::{field, FormState};

/// Local input problems. `Display` is the text shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

pub fn validate_login(form: &FormState) -> Result<Credentials, ValidationError> {
    let email = form.field(field::EMAIL);
    let password = form.field(field::PASSWORD);
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(Credentials::new(email, password))
}

/// Empty fields are reported before a password mismatch.
pub fn validate_registration(form: &FormState) -> Result<RegistrationInput, ValidationError> {
    let input = RegistrationInput {
        name: form.field(field::NAME).to_string(),
        email: form.field(field::EMAIL).to_string(),
        password: form.field(field::PASSWORD).to_string(),
        confirm_password: form.field(field::CONFIRM_PASSWORD).to_string(),
    };
    if input.name.is_empty()
        || input.email.is_empty()
        || input.password.is_empty()
        || input.confirm_password.is_empty()
    {
        return Err(ValidationError::MissingFields);
    }
    if input.password != input.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(input)
}
