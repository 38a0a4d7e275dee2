//! # flatshop-domain
//!
//! Pure domain model for the flatshop listings service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Apartments** (listings) along with their creation draft and
//!   partial-update patch
//! - Define **Cart items** (per-user quantity of one apartment)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod apartment;
pub mod cart;
