//! Domain model for the rotation board.
//!
//! # Responsibility
//! - Define the canonical topic/presenter/proposal records used by the core.
//! - Keep identity stable across lane moves and history snapshots.
//!
//! # Invariants
//! - Every domain object is identified by a stable uuid-backed id.
//! - A topic id is live in at most one lane at a time (enforced by the store).

pub mod presenter;
pub mod proposal;
pub mod topic;
