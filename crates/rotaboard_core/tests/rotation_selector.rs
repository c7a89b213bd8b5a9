use rand::rngs::StdRng;
use rand::SeedableRng;
use rotaboard_core::{select_next, Board, Lane, RotationSession, SelectionRejection};

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn selects_the_unique_minimum_count_presenter() {
    // Demo roster carries counts [2, 1, 3]; the middle presenter is the
    // unique minimum and must always win.
    let mut board = Board::with_demo_roster();
    board.add_topic("topic").unwrap();
    let expected = board.roster()[1].id;

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let proposal = select_next(&board, &mut rng).unwrap();
        assert_eq!(proposal.presenter_id, expected);
    }
}

#[test]
fn ties_at_the_minimum_resolve_to_roster_order() {
    let mut board = Board::new();
    let first = board.add_presenter("first").unwrap();
    board.add_presenter("second").unwrap();
    board.add_topic("topic").unwrap();

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let proposal = select_next(&board, &mut rng).unwrap();
        assert_eq!(proposal.presenter_id, first);
    }
}

#[test]
fn rejects_when_roster_is_empty() {
    let mut board = Board::new();
    board.add_topic("topic").unwrap();

    let err = select_next(&board, &mut rng()).unwrap_err();
    assert_eq!(err, SelectionRejection::NoEligiblePresenters);
}

#[test]
fn rejects_when_every_presenter_is_excluded() {
    let mut board = Board::with_demo_roster();
    board.add_topic("topic").unwrap();
    let ids: Vec<_> = board.roster().iter().map(|p| p.id).collect();
    for id in ids {
        board.toggle_exclusion(id);
    }

    let err = select_next(&board, &mut rng()).unwrap_err();
    assert_eq!(err, SelectionRejection::NoEligiblePresenters);
}

#[test]
fn rejects_when_pending_is_empty() {
    let board = Board::with_demo_roster();

    let err = select_next(&board, &mut rng()).unwrap_err();
    assert_eq!(err, SelectionRejection::NoEligibleTopics);
}

#[test]
fn excluded_presenters_are_skipped_even_at_minimum_count() {
    let mut board = Board::with_demo_roster();
    board.add_topic("topic").unwrap();
    let minimum = board.roster()[1].id;
    board.toggle_exclusion(minimum);

    let proposal = select_next(&board, &mut rng()).unwrap();
    // Next-lowest count is the first presenter (count 2).
    assert_eq!(proposal.presenter_id, board.roster()[0].id);
}

#[test]
fn drawn_topic_always_comes_from_the_eligible_set() {
    let mut board = Board::with_demo_roster();
    let mut expected = Vec::new();
    for title in ["a", "b", "c", "d"] {
        expected.push(board.add_topic(title).unwrap());
    }

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let proposal = select_next(&board, &mut rng).unwrap();
        assert!(expected.contains(&proposal.topic.id));
    }
}

#[test]
fn same_seed_draws_identically_fresh_draw_otherwise() {
    let mut board = Board::with_demo_roster();
    for title in ["a", "b", "c", "d", "e", "f", "g", "h"] {
        board.add_topic(title).unwrap();
    }

    let first = select_next(&board, &mut StdRng::seed_from_u64(7)).unwrap();
    let second = select_next(&board, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(first.topic.id, second.topic.id);
}

#[test]
fn cancel_leaves_the_board_untouched() {
    let mut board = Board::with_demo_roster();
    board.add_topic("a").unwrap();
    board.add_topic("b").unwrap();
    let before = board.snapshot();

    let mut session = RotationSession::new();
    session.propose(&board, &mut rng()).unwrap();
    assert!(session.current().is_some());
    assert!(session.cancel());

    assert!(session.current().is_none());
    assert_eq!(board.snapshot(), before);
    // Cancel with nothing live is itself a no-op.
    assert!(!session.cancel());
}

#[test]
fn second_propose_replaces_the_live_proposal() {
    let mut board = Board::with_demo_roster();
    board.add_topic("a").unwrap();
    board.add_topic("b").unwrap();

    let mut session = RotationSession::new();
    let first = session
        .propose(&board, &mut StdRng::seed_from_u64(1))
        .unwrap();
    assert_eq!(session.current().unwrap(), &first);

    // Shrink the eligible set so the fresh draw must pick someone else.
    board.toggle_exclusion(first.presenter_id);
    let second = session
        .propose(&board, &mut StdRng::seed_from_u64(2))
        .unwrap();
    assert_eq!(session.current().unwrap(), &second);
    assert_ne!(second.presenter_id, first.presenter_id);

    let confirmed = session.confirm(&mut board).unwrap();
    assert_eq!(confirmed, second);
    let record = board.presenter(second.presenter_id).unwrap();
    assert_eq!(record.presented_topics.len(), 1);
    assert_eq!(record.presented_topics[0].id, second.topic.id);
    assert!(board
        .presenter(first.presenter_id)
        .unwrap()
        .presented_topics
        .is_empty());
}

#[test]
fn cancel_then_propose_is_a_fresh_independent_draw() {
    let mut board = Board::with_demo_roster();
    board.add_topic("a").unwrap();
    let before = board.snapshot();

    let mut session = RotationSession::new();
    session
        .propose(&board, &mut StdRng::seed_from_u64(3))
        .unwrap();
    assert!(session.cancel());
    assert_eq!(board.snapshot(), before);

    let redraw = session
        .propose(&board, &mut StdRng::seed_from_u64(4))
        .unwrap();
    assert_eq!(session.current().unwrap(), &redraw);
    session.confirm(&mut board).unwrap();
    assert_eq!(board.lane(Lane::Presented).len(), 1);
    assert_eq!(board.lane(Lane::Presented)[0].id, redraw.topic.id);
}

#[test]
fn confirm_applies_the_full_transition() {
    let mut board = Board::new();
    let presenter = board.add_presenter("solo").unwrap();
    let a = board.add_topic("A").unwrap();
    let b = board.add_topic("B").unwrap();

    let mut session = RotationSession::new();
    let proposal = session.propose(&board, &mut rng()).unwrap();
    let chosen = proposal.topic.id;
    let other = if chosen == a { b } else { a };

    let confirmed = session.confirm(&mut board).unwrap();
    assert_eq!(confirmed.topic.id, chosen);
    assert!(session.current().is_none());

    let pending: Vec<_> = board.lane(Lane::Pending).iter().map(|t| t.id).collect();
    let presented: Vec<_> = board.lane(Lane::Presented).iter().map(|t| t.id).collect();
    assert_eq!(pending, vec![other]);
    assert_eq!(presented, vec![chosen]);

    let record = board.presenter(presenter).unwrap();
    assert_eq!(record.presentation_count, 1);
    assert_eq!(record.presented_topics.len(), 1);
    assert_eq!(record.presented_topics[0].id, chosen);
}

#[test]
fn confirm_without_live_proposal_is_a_noop() {
    let mut board = Board::with_demo_roster();
    board.add_topic("a").unwrap();
    let before = board.snapshot();

    let mut session = RotationSession::new();
    assert!(session.confirm(&mut board).is_none());
    assert_eq!(board.snapshot(), before);
}

#[test]
fn confirming_n_proposals_appends_n_history_entries_in_order() {
    let mut board = Board::new();
    let presenter = board.add_presenter("solo").unwrap();
    for title in ["a", "b", "c"] {
        board.add_topic(title).unwrap();
    }

    let mut session = RotationSession::new();
    let mut rng = rng();
    let mut confirmed_order = Vec::new();
    for _ in 0..3 {
        session.propose(&board, &mut rng).unwrap();
        let resolved = session.confirm(&mut board).unwrap();
        confirmed_order.push(resolved.topic.id);
    }

    let record = board.presenter(presenter).unwrap();
    assert_eq!(record.presentation_count, 3);
    let history: Vec<_> = record.presented_topics.iter().map(|t| t.id).collect();
    assert_eq!(history, confirmed_order);
    assert!(board.lane(Lane::Pending).is_empty());
}

#[test]
fn override_presenter_requires_an_eligible_target() {
    let mut board = Board::with_demo_roster();
    board.add_topic("a").unwrap();
    let excluded_target = board.roster()[2].id;
    board.toggle_exclusion(excluded_target);

    let mut session = RotationSession::new();
    // No live proposal yet: overrides are no-ops.
    assert!(!session.override_presenter(&board, board.roster()[0].id));

    session.propose(&board, &mut rng()).unwrap();
    assert!(!session.override_presenter(&board, excluded_target));
    assert!(session.override_presenter(&board, board.roster()[0].id));
    assert_eq!(
        session.current().unwrap().presenter_id,
        board.roster()[0].id
    );
}

#[test]
fn override_topic_requires_an_eligible_target() {
    let mut board = Board::with_demo_roster();
    let a = board.add_topic("a").unwrap();
    board.add_topic("b").unwrap();
    // Park one topic; it is no longer a valid override target.
    rotaboard_core::move_topic(&mut board, Lane::Pending, 0, Lane::Excluded, 0);

    let mut session = RotationSession::new();
    session.propose(&board, &mut rng()).unwrap();

    assert!(!session.override_topic(&board, a));
    let b = board.lane(Lane::Pending)[0].id;
    assert!(session.override_topic(&board, b));
    assert_eq!(session.current().unwrap().topic.id, b);
}

#[test]
fn confirm_honours_presenter_override() {
    let mut board = Board::with_demo_roster();
    board.add_topic("a").unwrap();
    let override_target = board.roster()[2].id;
    let original_count = board.roster()[2].presentation_count;

    let mut session = RotationSession::new();
    session.propose(&board, &mut rng()).unwrap();
    assert!(session.override_presenter(&board, override_target));
    session.confirm(&mut board).unwrap();

    let record = board.presenter(override_target).unwrap();
    assert_eq!(record.presentation_count, original_count + 1);
    assert_eq!(record.presented_topics.len(), 1);
}
