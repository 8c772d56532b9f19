//! Persona and expression tables for the placeholder portraits.
//!
//! Both sets are fixed at compile time and never mutated. Their declaration
//! order is stable and defines the batch generation order.

pub mod types;

pub use types::{Expression, Persona};
