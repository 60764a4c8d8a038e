//! # handyhub-domain
//!
//! Pure domain model for the handyhub phone-model registry.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Handy models** (phone model records referencing a brand)
//! - Define **Access tiers** (guest, user, elevated) and what each may do
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod access;
pub mod handy_model;
