//! Proposal domain model.
//!
//! # Responsibility
//! - Pair one presenter with one topic while the user decides.
//!
//! # Invariants
//! - At most one proposal is live at a time (owned by the rotation session).
//! - A proposal never outlives its resolve step: confirm and cancel both
//!   destroy it.
//! - The topic is a snapshot of the pending entry; the store copy is the one
//!   that moves on confirm.

use crate::model::presenter::PresenterId;
use crate::model::topic::Topic;
use serde::{Deserialize, Serialize};

/// An unconfirmed presenter+topic pairing awaiting the user's decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Chosen presenter, by roster id.
    pub presenter_id: PresenterId,
    /// Presenter display name at proposal time, for rendering.
    pub presenter_name: String,
    /// Presenter count at proposal time, for "name (count)" pickers.
    pub presenter_count: u32,
    /// Chosen topic snapshot.
    pub topic: Topic,
}
