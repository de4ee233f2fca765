//! Authentication and navigation core of the travel app client.
//!
//! ```text
//! SplashController ──replace(Login)──→ NavigationRouter ←──replace/push── AuthController
//!                                            │                              │
//!                                           App (mount / teardown)         AuthApi (HTTP)
//! ```

pub mod api;
pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod context;
pub mod form;
pub mod logging;
pub mod logout;
pub mod mvi;
pub mod nav;
pub mod session;
pub mod splash;
pub mod task;
