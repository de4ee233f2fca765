//! Wire types for the authentication endpoints and the normalized outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Login form input.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Registration form input.
///
/// `confirm_password` never leaves the client; it only exists for the
/// local mismatch check.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

/// Body of `POST /api/auth/register`.
#[derive(Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a RegistrationInput> for RegisterRequest<'a> {
    fn from(input: &'a RegistrationInput) -> Self {
        Self {
            name: &input.name,
            email: &input.email,
            password: &input.password,
        }
    }
}

/// Fields the server may send back. Both are optional on the wire, and a
/// body that is not JSON at all decodes to the empty value.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ResponseBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ResponseBody {
    pub fn parse(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }
}

/// Why an outcome failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The server answered with an error status.
    Server,
    /// No response was obtained at all.
    Transport,
}

/// Normalized result of one authentication call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Success { message: String },
    Failure { kind: FailureKind, reason: String },
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// User-facing text: the success message or the failure reason.
    pub fn text(&self) -> &str {
        match self {
            Self::Success { message } => message,
            Self::Failure { reason, .. } => reason,
        }
    }
}

/// The two endpoints and their fallback texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Register,
}

/// Used when a transport error renders to an empty string.
pub const NETWORK_ERROR: &str = "Network error";

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Login => "/api/auth/login",
            Endpoint::Register => "/api/auth/register",
        }
    }

    pub fn default_success(self) -> &'static str {
        match self {
            Endpoint::Login => "Login successful!",
            Endpoint::Register => "User registered successfully!",
        }
    }

    pub fn default_failure(self) -> &'static str {
        match self {
            Endpoint::Login => "Invalid credentials",
            Endpoint::Register => "Registration failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_body_tolerates_garbage() {
        let body = ResponseBody::parse(b"<html>502 Bad Gateway</html>");
        assert!(body.message.is_none());
        assert!(body.detail.is_none());
    }

    #[test]
    fn response_body_reads_detail() {
        let body = ResponseBody::parse(br#"{"detail": "Email already registered"}"#);
        assert_eq!(body.detail.as_deref(), Some("Email already registered"));
        assert!(body.message.is_none());
    }

    #[test]
    fn register_request_drops_confirm_password() {
        let input = RegistrationInput {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "pw".into(),
            confirm_password: "pw".into(),
        };
        let json = serde_json::to_value(RegisterRequest::from(&input)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Ada", "email": "ada@example.com", "password": "pw"})
        );
    }

    #[test]
    fn debug_never_prints_password() {
        let creds = Credentials::new("a@b.com", "hunter2");
        let printed = format!("{:?}", creds);
        assert!(printed.contains("a@b.com"));
        assert!(!printed.contains("hunter2"));
    }
}
