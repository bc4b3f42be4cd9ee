//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for employee rows.
//! - Isolate SQLite query details from the service facade.
//!
//! # Invariants
//! - Repository writes validate drafts before persistence.
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateEmail`)
//!   in addition to DB transport errors.

pub mod employee_repo;
