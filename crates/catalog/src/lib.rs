//! Product catalog domain module.
//!
//! This crate contains the product data model used by order classification,
//! implemented purely as deterministic domain types (no IO, no HTTP, no
//! storage).

pub mod product;

pub use product::{DigitalProduct, PhysicalProduct, Product};
