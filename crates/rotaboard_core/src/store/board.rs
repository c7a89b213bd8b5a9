//! Board aggregate: three topic lanes plus the presenter roster.
//!
//! # Responsibility
//! - Hold `pending` / `presented` / `excluded` topic lanes and the roster as
//!   ordered collections.
//! - Apply every mutation as a whole-collection replacement: read the
//!   current collection, build the new one, assign it in one step.
//!
//! # Invariants
//! - No topic id appears in more than one lane (selector still de-dups
//!   defensively rather than assuming it).
//! - No presenter id appears twice in the roster.
//! - Unknown ids and blank inputs are silent no-ops; the aggregate is never
//!   left partially mutated.

use crate::model::presenter::{Presenter, PresenterId};
use crate::model::topic::{Lane, Topic, TopicId};
use log::debug;
use serde::{Deserialize, Serialize};

/// Owned aggregate for all board state.
///
/// The board is passed explicitly to every operation rather than living in
/// ambient global state, so operations stay composable and testable in
/// isolation. The FFI layer owns the single long-lived instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pending: Vec<Topic>,
    presented: Vec<Topic>,
    excluded: Vec<Topic>,
    roster: Vec<Presenter>,
}

/// Read-only copy of the full board state, in collection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub pending: Vec<Topic>,
    pub presented: Vec<Topic>,
    pub excluded: Vec<Topic>,
    pub roster: Vec<Presenter>,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board seeded with the demo roster the original app ships
    /// with: three presenters at counts 2, 1 and 3.
    pub fn with_demo_roster() -> Self {
        let mut board = Self::new();
        for (name, count) in [("Yamada", 2), ("Suzuki", 1), ("Sato", 3)] {
            let mut presenter = Presenter::new(name);
            presenter.presentation_count = count;
            board.roster.push(presenter);
        }
        board
    }

    /// Returns the ordered contents of one lane.
    pub fn lane(&self, lane: Lane) -> &[Topic] {
        match lane {
            Lane::Pending => &self.pending,
            Lane::Presented => &self.presented,
            Lane::Excluded => &self.excluded,
        }
    }

    /// Returns the ordered presenter roster.
    pub fn roster(&self) -> &[Presenter] {
        &self.roster
    }

    /// Looks up one presenter by id.
    pub fn presenter(&self, id: PresenterId) -> Option<&Presenter> {
        self.roster.iter().find(|p| p.id == id)
    }

    /// Appends a new topic to the pending lane.
    ///
    /// Returns the created id, or `None` when the trimmed title is empty
    /// (validation no-op).
    pub fn add_topic(&mut self, title: &str) -> Option<TopicId> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return None;
        }

        let topic = Topic::new(trimmed);
        let id = topic.id;
        let mut next = self.pending.clone();
        next.push(topic);
        self.pending = next;
        debug!("event=topic_added module=store lane=pending id={id}");
        Some(id)
    }

    /// Replaces the title of a topic within the named lane.
    ///
    /// Returns `false` without touching the lane when the id is not present
    /// there or the trimmed title is empty.
    pub fn edit_topic_title(&mut self, lane: Lane, id: TopicId, new_title: &str) -> bool {
        let trimmed = new_title.trim();
        if trimmed.is_empty() {
            return false;
        }
        if !self.lane(lane).iter().any(|t| t.id == id) {
            return false;
        }

        let next = self
            .lane(lane)
            .iter()
            .map(|t| {
                if t.id == id {
                    Topic::with_id(t.id, trimmed)
                } else {
                    t.clone()
                }
            })
            .collect();
        self.replace_lane(lane, next);
        debug!(
            "event=topic_edited module=store lane={} id={id}",
            lane.label()
        );
        true
    }

    /// Appends a new presenter to the roster with count 0, empty history and
    /// `excluded = false`.
    ///
    /// Returns the created id, or `None` when the trimmed name is empty.
    pub fn add_presenter(&mut self, name: &str) -> Option<PresenterId> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }

        let presenter = Presenter::new(trimmed);
        let id = presenter.id;
        let mut next = self.roster.clone();
        next.push(presenter);
        self.roster = next;
        debug!("event=presenter_added module=store id={id}");
        Some(id)
    }

    /// Overwrites a presenter's presentation count.
    ///
    /// The count is a manually correctable counter; this path deliberately
    /// does not touch the presenter's history. Returns `false` when the id
    /// is unknown.
    pub fn set_presentation_count(&mut self, id: PresenterId, count: u32) -> bool {
        self.update_presenter(id, |p| p.presentation_count = count)
    }

    /// Flips a presenter's excluded flag, leaving history and count intact.
    ///
    /// Returns `false` when the id is unknown.
    pub fn toggle_exclusion(&mut self, id: PresenterId) -> bool {
        self.update_presenter(id, |p| p.excluded = !p.excluded)
    }

    /// Returns a full read-only copy of the board for rendering.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            pending: self.pending.clone(),
            presented: self.presented.clone(),
            excluded: self.excluded.clone(),
            roster: self.roster.clone(),
        }
    }

    /// Replaces one lane wholesale. Crate-internal seam for the reclassify
    /// and rotation services, which build the replacement collections before
    /// any assignment happens.
    pub(crate) fn replace_lane(&mut self, lane: Lane, topics: Vec<Topic>) {
        match lane {
            Lane::Pending => self.pending = topics,
            Lane::Presented => self.presented = topics,
            Lane::Excluded => self.excluded = topics,
        }
    }

    /// Rebuilds the roster with `apply` run against the matching presenter.
    ///
    /// Returns `false` and leaves the roster untouched when the id is
    /// unknown.
    pub(crate) fn update_presenter(
        &mut self,
        id: PresenterId,
        apply: impl FnOnce(&mut Presenter),
    ) -> bool {
        if !self.roster.iter().any(|p| p.id == id) {
            return false;
        }

        let mut next = self.roster.clone();
        if let Some(presenter) = next.iter_mut().find(|p| p.id == id) {
            apply(presenter);
        }
        self.roster = next;
        true
    }
}
