//! Rotation selector and proposal session.
//!
//! # Responsibility
//! - Pick the next presenter (least presentations first) and a random
//!   eligible topic.
//! - Hold the single live proposal through override/confirm/cancel.
//!
//! # Invariants
//! - `select_next` never mutates the board.
//! - Ties at the minimum count resolve to the first presenter in roster
//!   order, deterministically.
//! - Confirm applies all four mutations (count, history, presented lane,
//!   pending lane) or, when no proposal is live, none of them.
//! - Cancel has no side effect beyond dropping the proposal.

use crate::model::presenter::{Presenter, PresenterId};
use crate::model::proposal::Proposal;
use crate::model::topic::{Lane, Topic, TopicId};
use crate::store::board::Board;
use log::{debug, info};
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reasons a selection round can be rejected.
///
/// Rejections are user-visible notices, not faults; the board is left
/// untouched and no proposal is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRejection {
    /// Roster is empty or every presenter is excluded.
    NoEligiblePresenters,
    /// Pending lane has no topic that is absent from the other two lanes.
    NoEligibleTopics,
}

impl Display for SelectionRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoEligiblePresenters => {
                write!(f, "no eligible presenters; clear an exclusion first")
            }
            Self::NoEligibleTopics => {
                write!(f, "no eligible topics; add one or restore an excluded topic")
            }
        }
    }
}

impl Error for SelectionRejection {}

/// Presenters the selector may pick, in roster order.
pub fn eligible_presenters(board: &Board) -> Vec<&Presenter> {
    board.roster().iter().filter(|p| p.is_eligible()).collect()
}

/// Pending topics whose id does not also appear in the presented or
/// excluded lane.
///
/// Under normal operation the lanes are already disjoint; the selector
/// de-dups anyway instead of assuming it.
pub fn eligible_topics(board: &Board) -> Vec<&Topic> {
    let shadowed = |id: TopicId| {
        board.lane(Lane::Presented).iter().any(|t| t.id == id)
            || board.lane(Lane::Excluded).iter().any(|t| t.id == id)
    };
    board
        .lane(Lane::Pending)
        .iter()
        .filter(|t| !shadowed(t.id))
        .collect()
}

/// Picks the next presenter and a uniformly-random eligible topic.
///
/// Does not mutate the board; the returned proposal must go through a
/// [`RotationSession`] to take effect.
pub fn select_next<R: Rng>(board: &Board, rng: &mut R) -> Result<Proposal, SelectionRejection> {
    let candidates = eligible_presenters(board);
    let presenter = least_presented(&candidates).ok_or(SelectionRejection::NoEligiblePresenters)?;

    let topics = eligible_topics(board);
    if topics.is_empty() {
        return Err(SelectionRejection::NoEligibleTopics);
    }
    let topic = topics[rng.gen_range(0..topics.len())].clone();

    Ok(Proposal {
        presenter_id: presenter.id,
        presenter_name: presenter.name.clone(),
        presenter_count: presenter.presentation_count,
        topic,
    })
}

/// First presenter with the minimum presentation count, in roster order.
fn least_presented<'a>(candidates: &[&'a Presenter]) -> Option<&'a Presenter> {
    let mut best: Option<&'a Presenter> = None;
    for candidate in candidates.iter().copied() {
        match best {
            // Strict comparison keeps the first minimum on ties.
            Some(current) if candidate.presentation_count >= current.presentation_count => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// Owns the single live proposal between a draw and the user's decision.
#[derive(Debug, Default)]
pub struct RotationSession {
    proposal: Option<Proposal>,
}

impl RotationSession {
    /// Creates a session with no live proposal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the live proposal, if any.
    pub fn current(&self) -> Option<&Proposal> {
        self.proposal.as_ref()
    }

    /// Runs a fresh selection round and stores the result as the live
    /// proposal, replacing any previous one.
    pub fn propose<R: Rng>(
        &mut self,
        board: &Board,
        rng: &mut R,
    ) -> Result<Proposal, SelectionRejection> {
        match select_next(board, rng) {
            Ok(proposal) => {
                debug!(
                    "event=proposal_created module=rotation presenter={} topic={}",
                    proposal.presenter_id, proposal.topic.id
                );
                self.proposal = Some(proposal.clone());
                Ok(proposal)
            }
            Err(rejection) => {
                debug!("event=proposal_rejected module=rotation reason={rejection}");
                Err(rejection)
            }
        }
    }

    /// Swaps the live proposal's presenter for another eligible one.
    ///
    /// No-op (returns `false`) when no proposal is live or the id is not an
    /// eligible presenter.
    pub fn override_presenter(&mut self, board: &Board, id: PresenterId) -> bool {
        let Some(proposal) = self.proposal.as_mut() else {
            return false;
        };
        let Some(presenter) = board.presenter(id).filter(|p| p.is_eligible()) else {
            return false;
        };

        proposal.presenter_id = presenter.id;
        proposal.presenter_name = presenter.name.clone();
        proposal.presenter_count = presenter.presentation_count;
        true
    }

    /// Swaps the live proposal's topic for another eligible one.
    ///
    /// No-op (returns `false`) when no proposal is live or the id is not in
    /// the eligible topic set.
    pub fn override_topic(&mut self, board: &Board, id: TopicId) -> bool {
        let Some(proposal) = self.proposal.as_mut() else {
            return false;
        };
        let Some(topic) = eligible_topics(board).into_iter().find(|t| t.id == id) else {
            return false;
        };

        proposal.topic = topic.clone();
        true
    }

    /// Applies the live proposal to the board and drops it.
    ///
    /// Increments the presenter's count, appends a topic snapshot to their
    /// history, appends the topic to the presented lane and removes it from
    /// pending. Returns the resolved proposal, or `None` when nothing was
    /// live.
    pub fn confirm(&mut self, board: &mut Board) -> Option<Proposal> {
        let proposal = self.proposal.take()?;

        let pending: Vec<Topic> = board
            .lane(Lane::Pending)
            .iter()
            .filter(|t| t.id != proposal.topic.id)
            .cloned()
            .collect();
        let mut presented = board.lane(Lane::Presented).to_vec();
        presented.push(proposal.topic.clone());

        board.replace_lane(Lane::Pending, pending);
        board.replace_lane(Lane::Presented, presented);
        board.update_presenter(proposal.presenter_id, |p| {
            p.record_presentation(proposal.topic.clone());
        });

        info!(
            "event=proposal_confirmed module=rotation presenter={} topic={}",
            proposal.presenter_id, proposal.topic.id
        );
        Some(proposal)
    }

    /// Drops the live proposal with no other side effects.
    ///
    /// Returns `false` when nothing was live. A later [`Self::propose`] is a
    /// fresh, independent draw.
    pub fn cancel(&mut self) -> bool {
        if self.proposal.take().is_some() {
            debug!("event=proposal_cancelled module=rotation");
            true
        } else {
            false
        }
    }
}
