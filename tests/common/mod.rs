//! Shared helpers for driving a session like a view layer would.

#![allow(dead_code)]

use trivia_track::core::SessionConfig;
use trivia_track::questions::Question;
use trivia_track::rules::PhaseKind;
use trivia_track::session::GameSession;

/// `n` four-option questions with varying correct answers.
pub fn questions(n: usize) -> Vec<Question> {
    (0..n)
        .map(|i| Question::new(format!("Question {i}"), ["A", "B", "C", "D"], i % 4))
        .collect()
}

/// Config with a straight track, instant feedback off (default 1s delay).
pub fn config(track_len: usize, players: usize, deck_size: usize) -> SessionConfig {
    SessionConfig::with_track_length(track_len)
        .unwrap()
        .with_players(players)
        .with_questions(questions(deck_size))
        .with_base_points(10)
        .with_seed(42)
}

/// Tick until the session wants an answer or is complete.
pub fn settle(session: &mut GameSession) {
    for _ in 0..1_000 {
        match session.phase_kind() {
            PhaseKind::AwaitingAnswer | PhaseKind::Complete => return,
            _ => session.tick(0.25).unwrap(),
        }
    }
    panic!("session did not settle, stuck in {}", session.phase_kind());
}

/// Index of a correct or wrong option for the question on the table.
pub fn choose(session: &GameSession, correct: bool) -> usize {
    let pending = session.current_question().expect("no question on the table");
    let right = pending.question.correct_answer_index;
    if correct {
        right
    } else {
        (right + 1) % pending.question.answers.len()
    }
}

/// Serve if needed, answer, then run feedback and movement to completion.
pub fn play_turn(session: &mut GameSession, correct: bool) {
    settle(session);
    let index = choose(session, correct);
    session.submit_answer(index).unwrap();
    settle(session);
}
