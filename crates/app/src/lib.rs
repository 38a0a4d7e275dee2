//! # flatshop-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ApartmentRepository`: CRUD and favourite toggle for apartments
//!   - `CartRepository`: add/list/remove for cart items
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ApartmentService`: list, get, create, update, delete, toggle favourite
//!   - `CartService`: list, add, remove
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `flatshop-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
