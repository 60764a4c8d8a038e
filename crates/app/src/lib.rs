//! # handyhub-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `HandyModelRepository`: CRUD for phone models
//! - Define **driving/inbound ports** as use-case structs:
//!   - `HandyModelService`: list, get, create, update, delete, each gated
//!     by an [`AccessTier`](handyhub_domain::access::AccessTier)
//! - Resolve raw role tokens into access tiers (`AccessPolicy`)
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `handyhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod access_policy;
pub mod ports;
pub mod services;
