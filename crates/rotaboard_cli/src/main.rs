//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `rotaboard_core` linkage.
//! - Run one seeded propose/confirm cycle for quick local sanity checks.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rotaboard_core::{Board, Lane, RotationSession};

fn main() {
    println!("rotaboard_core ping={}", rotaboard_core::ping());
    println!("rotaboard_core version={}", rotaboard_core::core_version());

    // Seeded demo cycle keeps the probe output deterministic.
    let mut board = Board::with_demo_roster();
    let _ = board.add_topic("demo topic");
    let mut session = RotationSession::new();
    match session.propose(&board, &mut StdRng::seed_from_u64(0)) {
        Ok(proposal) => {
            println!(
                "proposal presenter={} topic={}",
                proposal.presenter_name, proposal.topic.title
            );
            session.confirm(&mut board);
            println!(
                "confirmed pending={} presented={}",
                board.lane(Lane::Pending).len(),
                board.lane(Lane::Presented).len()
            );
        }
        Err(rejection) => println!("rejected: {rejection}"),
    }
}
