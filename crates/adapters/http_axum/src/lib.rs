//! # handyhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the `/handymodell` REST resource (`list`, `read`, `create`,
//!   `update`, `delete`)
//! - Resolve the `userRole` cookie into an access tier for every request
//! - Validate UUID-shaped parameters before any business logic runs
//! - Map application results into HTTP status codes and JSON bodies
//!
//! ## Dependency rule
//! Depends on `handyhub-app` (for port traits and services) and `handyhub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
