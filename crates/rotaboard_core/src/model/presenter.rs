//! Presenter domain model.
//!
//! # Responsibility
//! - Define the roster record with presentation count, history and
//!   eligibility flag.
//!
//! # Invariants
//! - `id` is stable and never reused for another presenter.
//! - `presented_topics` is append-only; entries are snapshots owned by this
//!   presenter, independent from the board's presented lane.
//! - `presentation_count` is manually correctable and may diverge from
//!   `presented_topics.len()`.

use crate::model::topic::Topic;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a presenter.
pub type PresenterId = Uuid;

/// A roster member who can be proposed for the next presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presenter {
    /// Stable global ID.
    pub id: PresenterId,
    /// Display name. Mutable; identity lives in `id`.
    pub name: String,
    /// Times presented. Incremented on confirm, user-overwritable.
    pub presentation_count: u32,
    /// Per-presenter log of presented topics, in confirmation order.
    pub presented_topics: Vec<Topic>,
    /// When set, the presenter is skipped by the selector but keeps their
    /// history and count.
    pub excluded: bool,
}

impl Presenter {
    /// Creates a new presenter with a generated stable ID, zero count,
    /// empty history and `excluded = false`.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a presenter with a caller-provided stable ID.
    pub fn with_id(id: PresenterId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            presentation_count: 0,
            presented_topics: Vec::new(),
            excluded: false,
        }
    }

    /// Returns whether the selector may pick this presenter.
    pub fn is_eligible(&self) -> bool {
        !self.excluded
    }

    /// Records one confirmed presentation of `topic`.
    ///
    /// Appends a snapshot to the history and bumps the count. The count is
    /// saturating so a manual overwrite near the maximum cannot wrap.
    pub fn record_presentation(&mut self, topic: Topic) {
        self.presentation_count = self.presentation_count.saturating_add(1);
        self.presented_topics.push(topic);
    }
}
