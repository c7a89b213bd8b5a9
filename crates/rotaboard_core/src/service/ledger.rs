//! Presenter ledger edits.
//!
//! # Responsibility
//! - Apply direct user corrections to presenter counts and per-presenter
//!   history titles.
//!
//! # Invariants
//! - Count input has no rejection path: anything that does not parse as a
//!   non-negative integer coerces to zero.
//! - History title edits touch only that presenter's snapshot; the board's
//!   presented lane keeps its own copy of the same conceptual topic.

use crate::model::presenter::PresenterId;
use crate::model::topic::{Topic, TopicId};
use crate::store::board::Board;

/// Coerces raw count input to a non-negative integer.
///
/// Non-numeric and negative input becomes 0.
pub fn coerce_count(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Overwrites a presenter's count from raw user input.
///
/// Returns `false` when the presenter id is unknown.
pub fn apply_count_edit(board: &mut Board, id: PresenterId, raw: &str) -> bool {
    board.set_presentation_count(id, coerce_count(raw))
}

/// Edits one entry of a presenter's presented-topic history.
///
/// Changes only that presenter's snapshot; the presented lane's copy of the
/// same topic id is deliberately left alone. Returns `false` when the
/// presenter or the history entry is unknown, or the trimmed title is empty.
pub fn edit_presented_topic_title(
    board: &mut Board,
    presenter_id: PresenterId,
    topic_id: TopicId,
    new_title: &str,
) -> bool {
    let trimmed = new_title.trim();
    if trimmed.is_empty() {
        return false;
    }

    let has_entry = board
        .presenter(presenter_id)
        .map(|p| p.presented_topics.iter().any(|t| t.id == topic_id))
        .unwrap_or(false);
    if !has_entry {
        return false;
    }

    let title = trimmed.to_string();
    board.update_presenter(presenter_id, |presenter| {
        presenter.presented_topics = presenter
            .presented_topics
            .iter()
            .map(|t| {
                if t.id == topic_id {
                    Topic::with_id(t.id, title.clone())
                } else {
                    t.clone()
                }
            })
            .collect();
    })
}

#[cfg(test)]
mod tests {
    use super::coerce_count;

    #[test]
    fn coerce_count_parses_plain_integers() {
        assert_eq!(coerce_count("12"), 12);
        assert_eq!(coerce_count("  3 "), 3);
        assert_eq!(coerce_count("0"), 0);
    }

    #[test]
    fn coerce_count_zeroes_bad_input() {
        assert_eq!(coerce_count(""), 0);
        assert_eq!(coerce_count("abc"), 0);
        assert_eq!(coerce_count("-4"), 0);
        assert_eq!(coerce_count("3.5"), 0);
    }
}
