//! Client for the remote authentication service.
//!
//! ```text
//! POST {base}/api/auth/login     {email, password}        → {message?} | {detail?}
//! POST {base}/api/auth/register  {name, email, password}  → {message?} | {detail?}
//! ```
//!
//! Every call resolves to an [`AuthOutcome`]; nothing escapes as an error.

mod client;
mod types;

pub use client::{ApiError, AuthApi, HttpAuthApi};
pub use types::{AuthOutcome, Credentials, Endpoint, FailureKind, RegistrationInput, NETWORK_ERROR};
