//! Login and registration submit orchestration.
//!
//! `Idle → Submitting → (Succeeded | Failed) → Idle`, one in-flight
//! request per form, delayed navigation after success.

mod controller;
mod validate;

pub use controller::{AuthController, FormKind, StateListener, Submission};
pub use validate::{validate_login, validate_registration, ValidationError};
