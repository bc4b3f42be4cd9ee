//! Core use-case services.
//!
//! Keeps callers (CLI, tests) decoupled from storage details.

pub mod employee_service;
