//! Restart and cancellation tests.
//!
//! `restart()` must behave like a fresh `start()` and must neutralize
//! every suspension that was pending when it ran.

mod common;

use common::{choose, config, play_turn, settle};
use trivia_track::core::PlayerId;
use trivia_track::rules::PhaseKind;
use trivia_track::session::{GameSession, ResumeToken, SessionEvent, SuspensionKind};

fn last_token(events: &[SessionEvent], kind: SuspensionKind) -> ResumeToken {
    events
        .iter()
        .rev()
        .find_map(|e| match e {
            SessionEvent::SuspensionStarted { token, .. } if token.kind == kind => Some(*token),
            _ => None,
        })
        .expect("no suspension of that kind")
}

/// Restart with no further calls matches a fresh start.
#[test]
fn test_restart_matches_fresh_start() {
    let fresh = GameSession::start(config(5, 2, 6)).unwrap();

    let mut session = GameSession::start(config(5, 2, 6)).unwrap();
    play_turn(&mut session, true);
    play_turn(&mut session, true);
    play_turn(&mut session, false);
    session.restart();

    assert_eq!(session.phase_kind(), PhaseKind::AwaitingQuestion);
    assert_eq!(session.active_player(), PlayerId::new(0));
    assert_eq!(session.question_cursor(), 0);
    assert_eq!(session.players(), fresh.players());
    for (_, player) in session.players().iter() {
        assert_eq!(player.score, 0);
        assert_eq!(player.waypoint_index, 0);
        assert_eq!(player.questions_answered, 0);
    }
    assert_eq!(session.deck().len(), fresh.deck().len());
}

/// Restart from the completed state starts a playable game.
#[test]
fn test_restart_after_complete() {
    let mut session = GameSession::start(config(2, 1, 3)).unwrap();
    play_turn(&mut session, true);
    assert_eq!(session.phase_kind(), PhaseKind::Complete);

    session.restart();
    assert!(session.result().is_none());
    play_turn(&mut session, true);
    assert_eq!(session.phase_kind(), PhaseKind::Complete);
    assert_eq!(session.scores(), vec![(PlayerId::new(0), 10)]);
}

/// A feedback token from before the restart is ignored afterwards.
#[test]
fn test_stale_feedback_token_is_noop() {
    let mut session = GameSession::start(config(5, 1, 4)).unwrap();
    settle(&mut session);
    let index = choose(&session, true);
    session.submit_answer(index).unwrap();
    let token = last_token(&session.drain_events(), SuspensionKind::Feedback);

    session.restart();
    settle(&mut session);
    let before = session.player(PlayerId::new(0)).unwrap().clone();
    let cursor = session.question_cursor();

    assert!(!session.resume(token).unwrap());
    assert_eq!(session.phase_kind(), PhaseKind::AwaitingAnswer);
    assert_eq!(session.player(PlayerId::new(0)).unwrap(), &before);
    assert_eq!(session.question_cursor(), cursor);
}

/// A token minted in the new generation at the same turn ordinal still
/// differs from the stale one.
#[test]
fn test_stale_token_same_turn_number() {
    let mut session = GameSession::start(config(5, 1, 4)).unwrap();
    settle(&mut session);
    session.submit_answer(0).unwrap();
    let stale = last_token(&session.drain_events(), SuspensionKind::Feedback);

    session.restart();
    settle(&mut session);
    session.submit_answer(0).unwrap();
    let live = last_token(&session.drain_events(), SuspensionKind::Feedback);

    assert_eq!(stale.turn, live.turn);
    assert_ne!(stale, live);

    assert!(!session.resume(stale).unwrap());
    assert_eq!(session.phase_kind(), PhaseKind::Feedback);
    assert!(session.resume(live).unwrap());
    assert_eq!(session.phase_kind(), PhaseKind::Moving);
}

/// Restart in the middle of a move abandons the animation.
#[test]
fn test_restart_during_move() {
    let mut session = GameSession::start(config(5, 1, 4)).unwrap();
    settle(&mut session);
    session.submit_answer(0).unwrap();
    session.tick(1.0).unwrap();
    assert_eq!(session.phase_kind(), PhaseKind::Moving);
    let token = last_token(&session.drain_events(), SuspensionKind::Moving);

    session.restart();
    assert!(!session.resume(token).unwrap());
    session.tick(10.0).unwrap();

    let player = session.player(PlayerId::new(0)).unwrap();
    assert_eq!(player.waypoint_index, 0);
    assert_eq!(player.token_position, glam::Vec3::ZERO);
    assert_eq!(session.phase_kind(), PhaseKind::AwaitingAnswer);
    assert!(session
        .drain_events()
        .iter()
        .all(|e| !matches!(e, SessionEvent::TokenMoved { .. })));
}

/// Resuming live tokens skips the wait and the animation.
#[test]
fn test_resume_live_tokens() {
    let mut session = GameSession::start(config(5, 1, 4)).unwrap();
    settle(&mut session);
    session.submit_answer(0).unwrap();

    let feedback = last_token(&session.drain_events(), SuspensionKind::Feedback);
    assert!(session.resume(feedback).unwrap());
    assert_eq!(session.phase_kind(), PhaseKind::Moving);

    let moving = last_token(&session.drain_events(), SuspensionKind::Moving);
    assert!(session.resume(moving).unwrap());
    assert_eq!(session.phase_kind(), PhaseKind::AwaitingAnswer);
    assert_eq!(session.player(PlayerId::new(0)).unwrap().waypoint_index, 1);
    assert_eq!(
        session.token_position(PlayerId::new(0)),
        Some(glam::Vec3::new(1.0, 0.0, 0.0))
    );
}

/// Re-shuffling on restart keeps the same questions.
#[test]
fn test_restart_reshuffle_is_permutation() {
    let mut session = GameSession::start(config(5, 1, 12)).unwrap();
    let mut before: Vec<String> = session.deck().iter().map(|q| q.text.clone()).collect();
    session.restart();
    let mut after: Vec<String> = session.deck().iter().map(|q| q.text.clone()).collect();

    before.sort();
    after.sort();
    assert_eq!(before, after);
}
