//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! Type-safe 0-based player identifier.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! Mutable runtime record: score, track position, answered count and the
//! continuous token position used for animation.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier. The first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a session with `player_count` players.
    ///
    /// ```
    /// use trivia_track::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(2).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// The player after this one in seating order, wrapping around.
    #[must_use]
    pub fn next(self, player_count: usize) -> PlayerId {
        PlayerId(((self.index() + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over mutable entries.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Runtime state of one player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub score: i64,
    /// Discrete track position, `0 <= waypoint_index < track length`.
    pub waypoint_index: usize,
    /// Questions resolved by this player; drives bonus eligibility.
    pub questions_answered: u32,
    /// Rendered token position; converges to the waypoint coordinate.
    pub token_position: Vec3,
}

impl Player {
    /// A fresh player standing on the first waypoint.
    #[must_use]
    pub fn new(id: PlayerId, start: Vec3) -> Self {
        Self {
            id,
            score: 0,
            waypoint_index: 0,
            questions_answered: 0,
            token_position: start,
        }
    }

    /// Reset to the initial state, keeping the id.
    pub fn reset(&mut self, start: Vec3) {
        *self = Self::new(self.id, start);
    }

    /// Whether this player's token stands on the final waypoint.
    #[must_use]
    pub fn is_finished(&self, track_len: usize) -> bool {
        self.waypoint_index + 1 >= track_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 1");
    }

    #[test]
    fn test_player_id_next_wraps() {
        assert_eq!(PlayerId::new(0).next(2), PlayerId::new(1));
        assert_eq!(PlayerId::new(1).next(2), PlayerId::new(0));
        assert_eq!(PlayerId::new(0).next(1), PlayerId::new(0));
    }

    #[test]
    fn test_player_map_indexing() {
        let mut map: PlayerMap<i64> = PlayerMap::new(2, |p| p.index() as i64 * 10);
        assert_eq!(map[PlayerId::new(1)], 10);

        map[PlayerId::new(0)] = 5;
        assert_eq!(map[PlayerId::new(0)], 5);
        assert_eq!(map.player_count(), 2);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::new(0), &5), (PlayerId::new(1), &10)]);
    }

    #[test]
    fn test_player_map_factory_sees_ids_in_order() {
        let map = PlayerMap::new(2, |p| p);
        let ids: Vec<_> = map.iter().map(|(_, &p)| p).collect();
        assert_eq!(ids, PlayerId::all(2).collect::<Vec<_>>());
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::new(0, |_| 0);
    }

    #[test]
    fn test_player_reset() {
        let mut player = Player::new(PlayerId::new(1), Vec3::ZERO);
        player.score = 40;
        player.waypoint_index = 3;
        player.questions_answered = 4;
        player.token_position = Vec3::new(3.0, 0.0, 0.0);

        player.reset(Vec3::ZERO);
        assert_eq!(player, Player::new(PlayerId::new(1), Vec3::ZERO));
    }

    #[test]
    fn test_player_finished() {
        let mut player = Player::new(PlayerId::new(0), Vec3::ZERO);
        assert!(!player.is_finished(3));
        player.waypoint_index = 2;
        assert!(player.is_finished(3));
    }
}
