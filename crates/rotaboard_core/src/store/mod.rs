//! In-memory store layer.
//!
//! # Responsibility
//! - Own the board aggregate holding the three topic lanes and the roster.
//! - Keep whole-collection-replacement mutation semantics in one place.
//!
//! # Invariants
//! - Mutations are all-or-nothing; the aggregate is never observed
//!   mid-replacement.
//! - Validation and structural failures are silent no-ops, never panics.

pub mod board;
