//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate board mutations into intent-level APIs.
//! - Keep UI/FFI layers decoupled from aggregate internals.

pub mod ledger;
pub mod reclassify;
pub mod rotation;
