//! Employee domain model.
//!
//! # Invariants
//! - Records have a fixed field set; there is no dynamic key-value access.

pub mod employee;
