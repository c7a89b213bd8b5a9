//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the board intents and read-only snapshots to Dart via FRB.
//! - Keep error semantics simple for the UI: every intent returns an
//!   envelope, never a thrown error.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Intents are serialized behind one process-global lock; handlers never
//!   interleave, matching the single-threaded event model of the core.
//! - Ids cross the boundary as uuid strings; anything unparseable is a
//!   structural no-op.

use rotaboard_core::{
    apply_count_edit, core_version as core_version_inner, edit_presented_topic_title,
    init_logging as init_logging_inner, move_topic, ping as ping_inner, Board, Lane, Presenter,
    Proposal, RotationSession, Topic,
};
use std::sync::{Mutex, MutexGuard, OnceLock};
use uuid::Uuid;

static APP_STATE: OnceLock<Mutex<AppState>> = OnceLock::new();

struct AppState {
    board: Board,
    session: RotationSession,
}

fn app_state() -> MutexGuard<'static, AppState> {
    let mutex = APP_STATE.get_or_init(|| {
        Mutex::new(AppState {
            board: Board::new(),
            session: RotationSession::new(),
        })
    });
    // A poisoned lock only means a previous handler panicked mid-intent;
    // the board itself is still the last fully-replaced value.
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for the same `level + log_dir`; conflicts return an error.
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Topic view crossing the FFI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicView {
    /// Stable topic id in string form.
    pub id: String,
    /// Current title.
    pub title: String,
}

/// Presenter view crossing the FFI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenterView {
    /// Stable presenter id in string form.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Presentation count, including manual corrections.
    pub presentation_count: u32,
    /// Per-presenter presented-topic history, in confirmation order.
    pub presented_topics: Vec<TopicView>,
    /// Whether the selector skips this presenter.
    pub excluded: bool,
}

/// Live proposal view, present only between propose and confirm/cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalView {
    /// Chosen presenter id in string form.
    pub presenter_id: String,
    /// Chosen presenter name at proposal time.
    pub presenter_name: String,
    /// Chosen presenter count at proposal time.
    pub presenter_count: u32,
    /// Chosen topic.
    pub topic: TopicView,
}

/// Full read-only board state for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Pending lane, in order.
    pub pending: Vec<TopicView>,
    /// Presented lane, in order.
    pub presented: Vec<TopicView>,
    /// Excluded lane, in order.
    pub excluded: Vec<TopicView>,
    /// Presenter roster, in order.
    pub roster: Vec<PresenterView>,
    /// Live proposal, or `None` when nothing awaits confirmation.
    pub proposal: Option<ProposalView>,
}

/// Generic action response envelope for board intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the intent changed state (or produced a proposal).
    pub ok: bool,
    /// Optional created/affected id in string form.
    pub id: Option<String>,
    /// Human-readable response message for diagnostics/UI notices.
    pub message: String,
}

impl ActionResponse {
    fn applied(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn ignored(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Resets all board state; test and fresh-session hook.
///
/// # FFI contract
/// - Sync call, never panics.
/// - `seed_demo = true` loads the three-presenter demo roster.
#[flutter_rust_bridge::frb(sync)]
pub fn board_reset(seed_demo: bool) {
    let mut state = app_state();
    state.board = if seed_demo {
        Board::with_demo_roster()
    } else {
        Board::new()
    };
    state.session = RotationSession::new();
    log::debug!("event=board_reset module=ffi seed_demo={seed_demo}");
}

/// Returns the full board snapshot plus the live proposal, if any.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Collections come back in stored order.
#[flutter_rust_bridge::frb(sync)]
pub fn board_snapshot() -> BoardView {
    let state = app_state();
    BoardView {
        pending: topics_view(state.board.lane(Lane::Pending)),
        presented: topics_view(state.board.lane(Lane::Presented)),
        excluded: topics_view(state.board.lane(Lane::Excluded)),
        roster: state.board.roster().iter().map(presenter_view).collect(),
        proposal: state.session.current().map(proposal_view),
    }
}

/// Adds a topic to the pending lane.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Blank titles are ignored (`ok = false`), matching the core's
///   validation no-op policy.
#[flutter_rust_bridge::frb(sync)]
pub fn board_add_topic(title: String) -> ActionResponse {
    match app_state().board.add_topic(title.as_str()) {
        Some(id) => ActionResponse::applied("Topic added.", Some(id.to_string())),
        None => ActionResponse::ignored("Topic title is empty; nothing added."),
    }
}

/// Edits a topic title within the named lane (`pending|presented|excluded`).
///
/// # FFI contract
/// - Sync call, never panics.
/// - Unknown lane label, unparseable id, or absent topic: ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn board_edit_topic(lane: String, topic_id: String, title: String) -> ActionResponse {
    let Some(lane) = Lane::parse(lane.as_str()) else {
        return ActionResponse::ignored(format!("Unknown lane `{lane}`; edit ignored."));
    };
    let Some(id) = parse_id(topic_id.as_str()) else {
        return ActionResponse::ignored("Malformed topic id; edit ignored.");
    };

    if app_state().board.edit_topic_title(lane, id, title.as_str()) {
        ActionResponse::applied("Topic updated.", Some(topic_id))
    } else {
        ActionResponse::ignored("Topic not found in that lane; edit ignored.")
    }
}

/// Moves a topic between lanes (or reorders within one) by index, driven by
/// a resolved drag gesture.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Cancelled drags should not call this at all; out-of-range indices are
///   ignored defensively.
#[flutter_rust_bridge::frb(sync)]
pub fn board_move_topic(
    source_lane: String,
    source_index: u32,
    dest_lane: String,
    dest_index: u32,
) -> ActionResponse {
    let (Some(source), Some(dest)) = (
        Lane::parse(source_lane.as_str()),
        Lane::parse(dest_lane.as_str()),
    ) else {
        return ActionResponse::ignored("Unknown lane label; move ignored.");
    };

    let moved = move_topic(
        &mut app_state().board,
        source,
        source_index as usize,
        dest,
        dest_index as usize,
    );
    if moved {
        ActionResponse::applied("Topic moved.", None)
    } else {
        ActionResponse::ignored("Source index out of range; move ignored.")
    }
}

/// Adds a presenter to the roster.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Blank names are ignored (`ok = false`).
#[flutter_rust_bridge::frb(sync)]
pub fn board_add_presenter(name: String) -> ActionResponse {
    match app_state().board.add_presenter(name.as_str()) {
        Some(id) => ActionResponse::applied("Presenter added.", Some(id.to_string())),
        None => ActionResponse::ignored("Presenter name is empty; nothing added."),
    }
}

/// Overwrites a presenter's presentation count from raw input.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Non-numeric input coerces to 0; there is no rejection path for the
///   value itself, only for unknown presenters.
#[flutter_rust_bridge::frb(sync)]
pub fn board_edit_presenter_count(presenter_id: String, raw_count: String) -> ActionResponse {
    let Some(id) = parse_id(presenter_id.as_str()) else {
        return ActionResponse::ignored("Malformed presenter id; edit ignored.");
    };

    if apply_count_edit(&mut app_state().board, id, raw_count.as_str()) {
        ActionResponse::applied("Presentation count updated.", Some(presenter_id))
    } else {
        ActionResponse::ignored("Presenter not found; edit ignored.")
    }
}

/// Edits one entry of a presenter's presented-topic history.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Touches only the presenter's snapshot; the presented lane keeps its
///   own copy.
#[flutter_rust_bridge::frb(sync)]
pub fn board_edit_presented_topic(
    presenter_id: String,
    topic_id: String,
    title: String,
) -> ActionResponse {
    let (Some(presenter), Some(topic)) = (
        parse_id(presenter_id.as_str()),
        parse_id(topic_id.as_str()),
    ) else {
        return ActionResponse::ignored("Malformed id; edit ignored.");
    };

    if edit_presented_topic_title(&mut app_state().board, presenter, topic, title.as_str()) {
        ActionResponse::applied("History entry updated.", Some(topic_id))
    } else {
        ActionResponse::ignored("History entry not found; edit ignored.")
    }
}

/// Flips a presenter's excluded flag.
///
/// # FFI contract
/// - Sync call, never panics.
/// - History and count are untouched.
#[flutter_rust_bridge::frb(sync)]
pub fn board_toggle_exclusion(presenter_id: String) -> ActionResponse {
    let Some(id) = parse_id(presenter_id.as_str()) else {
        return ActionResponse::ignored("Malformed presenter id; toggle ignored.");
    };

    if app_state().board.toggle_exclusion(id) {
        ActionResponse::applied("Exclusion toggled.", Some(presenter_id))
    } else {
        ActionResponse::ignored("Presenter not found; toggle ignored.")
    }
}

/// Draws the next presenter + topic pairing and holds it for confirmation.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Replaces any live proposal with a fresh draw.
/// - Rejections (`ok = false`) carry the user-facing notice and leave all
///   state unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn rotation_propose_next() -> ActionResponse {
    let mut state = app_state();
    let AppState { board, session } = &mut *state;
    match session.propose(board, &mut rand::thread_rng()) {
        Ok(proposal) => ActionResponse::applied(
            format!(
                "Proposed {} for `{}`.",
                proposal.presenter_name, proposal.topic.title
            ),
            Some(proposal.topic.id.to_string()),
        ),
        Err(rejection) => ActionResponse::ignored(rejection.to_string()),
    }
}

/// Swaps the live proposal's presenter for another eligible one.
///
/// # FFI contract
/// - Sync call, never panics.
/// - No live proposal or ineligible target: ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn rotation_override_presenter(presenter_id: String) -> ActionResponse {
    let Some(id) = parse_id(presenter_id.as_str()) else {
        return ActionResponse::ignored("Malformed presenter id; override ignored.");
    };

    let mut state = app_state();
    let AppState { board, session } = &mut *state;
    if session.override_presenter(board, id) {
        ActionResponse::applied("Proposal presenter overridden.", Some(presenter_id))
    } else {
        ActionResponse::ignored("No live proposal or ineligible presenter; override ignored.")
    }
}

/// Swaps the live proposal's topic for another eligible one.
///
/// # FFI contract
/// - Sync call, never panics.
/// - No live proposal or ineligible target: ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn rotation_override_topic(topic_id: String) -> ActionResponse {
    let Some(id) = parse_id(topic_id.as_str()) else {
        return ActionResponse::ignored("Malformed topic id; override ignored.");
    };

    let mut state = app_state();
    let AppState { board, session } = &mut *state;
    if session.override_topic(board, id) {
        ActionResponse::applied("Proposal topic overridden.", Some(topic_id))
    } else {
        ActionResponse::ignored("No live proposal or ineligible topic; override ignored.")
    }
}

/// Confirms the live proposal, applying the rotation transition.
///
/// # FFI contract
/// - Sync call, never panics.
/// - No live proposal: ignored, board untouched.
#[flutter_rust_bridge::frb(sync)]
pub fn rotation_confirm() -> ActionResponse {
    let mut state = app_state();
    let AppState { board, session } = &mut *state;
    match session.confirm(board) {
        Some(proposal) => ActionResponse::applied(
            format!(
                "Recorded `{}` for {}.",
                proposal.topic.title, proposal.presenter_name
            ),
            Some(proposal.topic.id.to_string()),
        ),
        None => ActionResponse::ignored("No live proposal; confirm ignored."),
    }
}

/// Cancels the live proposal with no other side effects.
///
/// # FFI contract
/// - Sync call, never panics.
/// - No live proposal: ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn rotation_cancel() -> ActionResponse {
    if app_state().session.cancel() {
        ActionResponse::applied("Proposal cancelled.", None)
    } else {
        ActionResponse::ignored("No live proposal; cancel ignored.")
    }
}

fn parse_id(value: &str) -> Option<Uuid> {
    Uuid::parse_str(value.trim()).ok()
}

fn topics_view(topics: &[Topic]) -> Vec<TopicView> {
    topics.iter().map(topic_view).collect()
}

fn topic_view(topic: &Topic) -> TopicView {
    TopicView {
        id: topic.id.to_string(),
        title: topic.title.clone(),
    }
}

fn presenter_view(presenter: &Presenter) -> PresenterView {
    PresenterView {
        id: presenter.id.to_string(),
        name: presenter.name.clone(),
        presentation_count: presenter.presentation_count,
        presented_topics: topics_view(&presenter.presented_topics),
        excluded: presenter.excluded,
    }
}

fn proposal_view(proposal: &Proposal) -> ProposalView {
    ProposalView {
        presenter_id: proposal.presenter_id.to_string(),
        presenter_name: proposal.presenter_name.clone(),
        presenter_count: proposal.presenter_count,
        topic: topic_view(&proposal.topic),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        board_add_presenter, board_add_topic, board_edit_presented_topic,
        board_edit_presenter_count, board_edit_topic, board_move_topic, board_reset,
        board_snapshot, board_toggle_exclusion, core_version, init_logging, ping,
        rotation_cancel, rotation_confirm, rotation_override_presenter, rotation_override_topic,
        rotation_propose_next,
    };
    use std::sync::{Mutex, MutexGuard, OnceLock};

    // The api state is process-global; serialize tests that touch it.
    fn state_guard() -> MutexGuard<'static, ()> {
        static TEST_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        match TEST_LOCK.get_or_init(|| Mutex::new(())).lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn add_and_snapshot_round_trip() {
        let _guard = state_guard();
        board_reset(false);

        let topic = board_add_topic("FFI smoke topic".to_string());
        assert!(topic.ok, "{}", topic.message);
        let presenter = board_add_presenter("FFI presenter".to_string());
        assert!(presenter.ok, "{}", presenter.message);

        let view = board_snapshot();
        assert_eq!(view.pending.len(), 1);
        assert_eq!(view.pending[0].title, "FFI smoke topic");
        assert_eq!(view.roster.len(), 1);
        assert!(view.proposal.is_none());
    }

    #[test]
    fn blank_inputs_are_ignored() {
        let _guard = state_guard();
        board_reset(false);

        assert!(!board_add_topic("   ".to_string()).ok);
        assert!(!board_add_presenter(String::new()).ok);
        assert!(!board_edit_presenter_count("not-a-uuid".to_string(), "3".to_string()).ok);
        assert!(!board_move_topic("pending".to_string(), 0, "nowhere".to_string(), 0).ok);
    }

    #[test]
    fn propose_confirm_cycle_moves_the_topic() {
        let _guard = state_guard();
        board_reset(true);
        board_add_topic("cycle topic".to_string());

        let proposed = rotation_propose_next();
        assert!(proposed.ok, "{}", proposed.message);
        assert!(board_snapshot().proposal.is_some());

        let confirmed = rotation_confirm();
        assert!(confirmed.ok, "{}", confirmed.message);

        let view = board_snapshot();
        assert!(view.proposal.is_none());
        assert!(view.pending.is_empty());
        assert_eq!(view.presented.len(), 1);
        assert_eq!(view.presented[0].title, "cycle topic");
    }

    #[test]
    fn edit_toggle_and_override_intents_round_trip() {
        let _guard = state_guard();
        board_reset(true);

        let first = board_add_topic("first topic".to_string());
        let second = board_add_topic("second topic".to_string());
        let first_id = first.id.expect("created topic returns id");
        let second_id = second.id.expect("created topic returns id");

        assert!(
            board_edit_topic(
                "pending".to_string(),
                first_id.clone(),
                "first revised".to_string()
            )
            .ok
        );
        // Same id through the wrong lane is ignored.
        assert!(
            !board_edit_topic(
                "presented".to_string(),
                first_id,
                "misplaced".to_string()
            )
            .ok
        );
        assert_eq!(board_snapshot().pending[0].title, "first revised");

        let toggled = board_snapshot().roster[0].id.clone();
        assert!(board_toggle_exclusion(toggled.clone()).ok);
        assert!(board_snapshot().roster[0].excluded);
        assert!(board_toggle_exclusion(toggled).ok);
        assert!(!board_snapshot().roster[0].excluded);

        assert!(rotation_propose_next().ok);
        assert!(rotation_override_topic(second_id.clone()).ok);
        let override_target = board_snapshot().roster[2].id.clone();
        assert!(rotation_override_presenter(override_target.clone()).ok);

        let proposal = board_snapshot().proposal.expect("live proposal");
        assert_eq!(proposal.topic.id, second_id);
        assert_eq!(proposal.presenter_id, override_target);

        assert!(rotation_confirm().ok);
        assert!(
            board_edit_presented_topic(
                override_target.clone(),
                second_id.clone(),
                "history rename".to_string()
            )
            .ok
        );

        let view = board_snapshot();
        let presenter = view
            .roster
            .iter()
            .find(|p| p.id == override_target)
            .expect("override target in roster");
        assert_eq!(presenter.presented_topics[0].title, "history rename");
        // The presented lane keeps its own copy of the same topic.
        assert_eq!(view.presented[0].id, second_id);
        assert_eq!(view.presented[0].title, "second topic");
    }

    #[test]
    fn propose_rejects_with_a_notice_when_nothing_is_eligible() {
        let _guard = state_guard();
        board_reset(false);

        let rejected = rotation_propose_next();
        assert!(!rejected.ok);
        assert!(rejected.message.contains("no eligible presenters"));
        assert!(!rotation_cancel().ok);
    }
}
