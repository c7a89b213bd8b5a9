//! Core domain logic for the rotaboard study-group rotation board.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::presenter::{Presenter, PresenterId};
pub use model::proposal::Proposal;
pub use model::topic::{Lane, Topic, TopicId};
pub use service::ledger::{apply_count_edit, coerce_count, edit_presented_topic_title};
pub use service::reclassify::move_topic;
pub use service::rotation::{
    eligible_presenters, eligible_topics, select_next, RotationSession, SelectionRejection,
};
pub use store::board::{Board, BoardSnapshot};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
