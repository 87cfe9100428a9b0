//! Table state: everything on the board that the turn engine mutates.
//!
//! ## TableState
//!
//! - Players (score, waypoint, answered count, token position)
//! - The track they move along
//! - The shuffled deck view and the shared question cursor
//! - The RNG the deck is shuffled from
//!
//! Only `GameSession` (through `TurnEngine`) mutates a `TableState`.

use glam::Vec3;

use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::movement::Track;
use crate::questions::{Deck, Question, QuestionBank};

/// Mutable board state for one session.
#[derive(Clone, Debug)]
pub struct TableState {
    pub players: PlayerMap<Player>,
    track: Track,
    bank: QuestionBank,
    deck: Deck,
    /// Questions served so far, shared by all players; indexes the deck cyclically.
    question_cursor: usize,
    rng: GameRng,
}

impl TableState {
    /// Seat `player_count` players on the first waypoint and shuffle the deck.
    #[must_use]
    pub fn new(track: Track, player_count: usize, bank: QuestionBank, seed: u64) -> Self {
        let mut rng = GameRng::new(seed).for_context("deck");
        let deck = bank.shuffle_with(&mut rng);
        let start = track.start();
        Self {
            players: PlayerMap::new(player_count, |id| Player::new(id, start)),
            track,
            bank,
            deck,
            question_cursor: 0,
            rng,
        }
    }

    /// Put every player back on the start, rewind the cursor and re-shuffle.
    pub fn reset(&mut self) {
        let start = self.track.start();
        for player in self.players.values_mut() {
            player.reset(start);
        }
        self.question_cursor = 0;
        let mut branch = self.rng.fork();
        self.deck = self.bank.shuffle_with(&mut branch);
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn track(&self) -> &Track {
        &self.track
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn question_cursor(&self) -> usize {
        self.question_cursor
    }

    /// Serve the next question and advance the shared cursor.
    pub fn draw_question(&mut self) -> Question {
        let question = self.deck.question_at(self.question_cursor).clone();
        self.question_cursor += 1;
        question
    }

    /// Coordinate of a player's current waypoint.
    #[must_use]
    pub fn waypoint_of(&self, player: PlayerId) -> Vec3 {
        self.track
            .waypoint(self.players[player].waypoint_index)
            .unwrap_or_else(|| self.track.start())
    }

    /// Whether every player stands on the final waypoint.
    #[must_use]
    pub fn all_finished(&self) -> bool {
        let len = self.track.len();
        self.players.iter().all(|(_, p)| p.is_finished(len))
    }

    /// Scores in seating order.
    #[must_use]
    pub fn scores(&self) -> Vec<(PlayerId, i64)> {
        self.players.iter().map(|(id, p)| (id, p.score)).collect()
    }
}
