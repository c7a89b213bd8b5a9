//! Topic domain model.
//!
//! # Responsibility
//! - Define the candidate-subject record shared by all three board lanes.
//! - Name the lanes a topic can live in.
//!
//! # Invariants
//! - `id` is stable and never reused for another topic.
//! - Lane membership is exclusive; the store owns that invariant, the model
//!   only names the lanes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a topic.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TopicId = Uuid;

/// The three mutually exclusive board lanes a topic can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lane {
    /// Candidate pool awaiting selection.
    Pending,
    /// Already presented.
    Presented,
    /// Parked and ineligible for selection.
    Excluded,
}

impl Lane {
    /// Stable lowercase label for logging and FFI transport.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Presented => "presented",
            Self::Excluded => "excluded",
        }
    }

    /// Parses a lane label produced by [`Lane::label`].
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "presented" => Some(Self::Presented),
            "excluded" => Some(Self::Excluded),
            _ => None,
        }
    }
}

/// A candidate presentation subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Stable global ID used for lane moves and history snapshots.
    pub id: TopicId,
    /// User-facing title. Mutable; identity lives in `id`.
    pub title: String,
}

impl Topic {
    /// Creates a new topic with a generated stable ID.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates a topic with a caller-provided stable ID.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(id: TopicId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
