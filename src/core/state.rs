//! Board state: where every pawn stands.
//!
//! ## Flavours
//!
//! - `MutableBoardState`: the owner. Mutated in place by its `Board`.
//! - `ImmutableBoardState`: a value. `apply` returns a new state and leaves
//!   the original untouched; clones share structure via `im`.
//! - `ShiftedBoardState`: a borrowed, read-only view that re-seats every
//!   player `k` places so that seat `k` reads as seat 0. The underlying
//!   state is never copied; each `positions` call builds a fresh, re-sorted
//!   `Pawns` for the requested seat, since rotation can wrap spots past 0.
//!
//! All three implement the `BoardState` read trait, which is what strategies
//! and the rule evaluator see.
//!
//! ## Invariants
//!
//! - Each seat's pawns are sorted ascending by `Position` after every
//!   mutation. Pawns sharing a position are therefore adjacent, which move
//!   generation relies on for its duplicate elision.
//! - A seated player always has exactly `pawns_per_player` pawns. An empty
//!   seat means the seat is not in play.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::RulesConfig;
use super::layer::Layer;
use super::moves::Move;
use super::player::{PlayerId, PlayerMap};
use super::position::Position;

/// One seat's pawns, sorted ascending.
pub type Pawns = SmallVec<[Position; 4]>;

/// Read access to a board state.
pub trait BoardState {
    /// Seats on the board.
    fn player_count(&self) -> usize;

    /// Pawns every seated player owns.
    fn pawns_per_player(&self) -> usize;

    /// Spots on the track.
    fn board_size(&self) -> i32;

    /// Spot offset between consecutive seats.
    fn dots_per_player(&self) -> i32;

    /// A seat's pawns, sorted ascending. Empty for unseated or unknown seats.
    fn positions(&self, player: PlayerId) -> Pawns;

    /// Which seat has a pawn on `position`, if any.
    fn owner_of(&self, position: Position) -> Option<PlayerId>;

    /// Position of one pawn.
    fn position(&self, player: PlayerId, pawn: usize) -> Option<Position> {
        self.positions(player).get(pawn).copied()
    }

    /// True if the seat is empty or every pawn is home.
    ///
    /// Panics if a seated player's pawn count drifted from
    /// `pawns_per_player`; that is an engine bug, not a game state.
    fn is_finished(&self, player: PlayerId) -> bool {
        let pawns = self.positions(player);
        if pawns.is_empty() {
            return true;
        }
        assert_eq!(
            pawns.len(),
            self.pawns_per_player(),
            "invariant violation: {} has {} pawns, expected {}",
            player,
            pawns.len(),
            self.pawns_per_player()
        );
        pawns.iter().all(|p| p.layer == Layer::Home)
    }

    /// Seats that hold pawns.
    fn seated_count(&self) -> usize {
        PlayerId::all(self.player_count())
            .filter(|&p| !self.positions(p).is_empty())
            .count()
    }
}

// === Shared mutation helpers ===

/// Find the seat and pawn index standing on `from`, scanning each seat
/// from its tail so the last of several stacked pawns is picked.
fn locate<'a>(seats: impl Iterator<Item = &'a Pawns>, from: Position) -> Option<(usize, usize)> {
    seats
        .enumerate()
        .find_map(|(seat, pawns)| pawns.iter().rposition(|&p| p == from).map(|pawn| (seat, pawn)))
}

/// Replace one pawn and restore sortedness if the replacement broke it.
fn replace_pawn(pawns: &mut Pawns, pawn: usize, to: Position) {
    pawns[pawn] = to;
    if !pawns.windows(2).all(|w| w[0] <= w[1]) {
        pawns.sort_unstable();
    }
}

fn sorted(positions: &[Position]) -> Pawns {
    let mut pawns: Pawns = positions.iter().copied().collect();
    pawns.sort_unstable();
    pawns
}

fn render(state: &dyn BoardState, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for player in PlayerId::all(state.player_count()) {
        write!(f, "{}:", player.0)?;
        for position in state.positions(player) {
            write!(f, " {}", position)?;
        }
        writeln!(f)?;
    }
    Ok(())
}

// =============================================================================
// Mutable owner
// =============================================================================

/// Board state owned and mutated in place by a `Board`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutableBoardState {
    seats: PlayerMap<Pawns>,
    pawns_per_player: usize,
    board_size: i32,
    dots_per_player: i32,
}

impl MutableBoardState {
    /// Seat players `0..seated` with every pawn on their begin position.
    /// The remaining seats stay empty.
    #[must_use]
    pub fn new(config: &RulesConfig, seated: usize) -> Self {
        let seats = PlayerMap::new(config.player_count, |player| {
            if player.index() < seated {
                SmallVec::from_elem(config.begin_position(player), config.pawns_per_player)
            } else {
                Pawns::new()
            }
        });

        Self {
            seats,
            pawns_per_player: config.pawns_per_player,
            board_size: config.board_size(),
            dots_per_player: config.dots(),
        }
    }

    /// Overwrite one seat's pawns. The positions are sorted on the way in.
    pub fn set_positions(&mut self, player: PlayerId, positions: &[Position]) {
        self.seats[player] = sorted(positions);
    }

    /// Apply a move in place.
    ///
    /// A stationary move, or one whose origin holds no pawn, is a no-op.
    pub fn apply(&mut self, mv: &Move) {
        if mv.is_stationary() {
            return;
        }
        if let Some((seat, pawn)) = locate(self.seats.iter().map(|(_, p)| p), mv.from) {
            replace_pawn(&mut self.seats[PlayerId(seat as u8)], pawn, mv.to);
        }
    }

    /// Read-only view in which seat `player_offset` reads as seat 0.
    #[must_use]
    pub fn shifted_view(&self, player_offset: usize) -> ShiftedBoardState<'_> {
        ShiftedBoardState::new(self, player_offset)
    }

    /// Immutable copy for renderers and replays.
    #[must_use]
    pub fn snapshot(&self) -> ImmutableBoardState {
        ImmutableBoardState {
            seats: self.seats.iter().map(|(_, p)| p.clone()).collect(),
            pawns_per_player: self.pawns_per_player,
            board_size: self.board_size,
            dots_per_player: self.dots_per_player,
        }
    }
}

impl BoardState for MutableBoardState {
    fn player_count(&self) -> usize {
        self.seats.player_count()
    }

    fn pawns_per_player(&self) -> usize {
        self.pawns_per_player
    }

    fn board_size(&self) -> i32 {
        self.board_size
    }

    fn dots_per_player(&self) -> i32 {
        self.dots_per_player
    }

    fn positions(&self, player: PlayerId) -> Pawns {
        if player.index() >= self.player_count() {
            return Pawns::new();
        }
        self.seats[player].clone()
    }

    fn position(&self, player: PlayerId, pawn: usize) -> Option<Position> {
        if player.index() >= self.player_count() {
            return None;
        }
        self.seats[player].get(pawn).copied()
    }

    fn owner_of(&self, position: Position) -> Option<PlayerId> {
        self.seats
            .iter()
            .find(|(_, pawns)| pawns.binary_search(&position).is_ok())
            .map(|(player, _)| player)
    }
}

impl std::fmt::Display for MutableBoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render(self, f)
    }
}

// =============================================================================
// Immutable value
// =============================================================================

/// Copy-on-write board state. Every mutation returns a new value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImmutableBoardState {
    seats: Vector<Pawns>,
    pawns_per_player: usize,
    board_size: i32,
    dots_per_player: i32,
}

impl ImmutableBoardState {
    /// Seat players `0..seated` with every pawn on their begin position.
    #[must_use]
    pub fn new(config: &RulesConfig, seated: usize) -> Self {
        MutableBoardState::new(config, seated).snapshot()
    }

    /// New state with one seat's pawns replaced (sorted on the way in).
    #[must_use]
    pub fn with_positions(&self, player: PlayerId, positions: &[Position]) -> Self {
        let mut next = self.clone();
        next.seats.set(player.index(), sorted(positions));
        next
    }

    /// New state with `mv` applied. `self` is left unchanged.
    #[must_use]
    pub fn apply(&self, mv: &Move) -> Self {
        let mut next = self.clone();
        if mv.is_stationary() {
            return next;
        }
        if let Some((seat, pawn)) = locate(self.seats.iter(), mv.from) {
            let mut pawns = self.seats[seat].clone();
            replace_pawn(&mut pawns, pawn, mv.to);
            next.seats.set(seat, pawns);
        }
        next
    }

    /// Read-only view in which seat `player_offset` reads as seat 0.
    #[must_use]
    pub fn shifted_view(&self, player_offset: usize) -> ShiftedBoardState<'_> {
        ShiftedBoardState::new(self, player_offset)
    }
}

impl BoardState for ImmutableBoardState {
    fn player_count(&self) -> usize {
        self.seats.len()
    }

    fn pawns_per_player(&self) -> usize {
        self.pawns_per_player
    }

    fn board_size(&self) -> i32 {
        self.board_size
    }

    fn dots_per_player(&self) -> i32 {
        self.dots_per_player
    }

    fn positions(&self, player: PlayerId) -> Pawns {
        self.seats.get(player.index()).cloned().unwrap_or_default()
    }

    fn owner_of(&self, position: Position) -> Option<PlayerId> {
        self.seats
            .iter()
            .position(|pawns| pawns.binary_search(&position).is_ok())
            .map(|seat| PlayerId(seat as u8))
    }
}

impl std::fmt::Display for ImmutableBoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render(self, f)
    }
}

// =============================================================================
// Shifted view
// =============================================================================

/// Read-only view of another state with every seat rotated by `offset`.
///
/// Logical seat `p` reads owner seat `(p + offset) mod player_count`, and every
/// returned spot is moved back by `offset * dots_per_player`, so the seat at
/// `offset` sees itself as seat 0 with its start on `E0`.
#[derive(Clone, Copy)]
pub struct ShiftedBoardState<'a> {
    owner: &'a dyn BoardState,
    offset: usize,
}

impl<'a> ShiftedBoardState<'a> {
    /// View `owner` rotated by `offset` seats.
    #[must_use]
    pub fn new(owner: &'a dyn BoardState, offset: usize) -> Self {
        Self {
            owner,
            offset: offset % owner.player_count(),
        }
    }

    /// Seat offset of this view.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Rotate further. Equivalent to one view with the summed offset.
    #[must_use]
    pub fn shifted_view(&self, player_offset: usize) -> ShiftedBoardState<'a> {
        ShiftedBoardState::new(self.owner, self.offset + player_offset)
    }

    fn spot_offset(&self) -> i32 {
        self.offset as i32 * self.owner.dots_per_player()
    }

    fn owner_seat(&self, player: PlayerId) -> PlayerId {
        player.offset(self.offset as i64, self.owner.player_count())
    }
}

impl BoardState for ShiftedBoardState<'_> {
    fn player_count(&self) -> usize {
        self.owner.player_count()
    }

    fn pawns_per_player(&self) -> usize {
        self.owner.pawns_per_player()
    }

    fn board_size(&self) -> i32 {
        self.owner.board_size()
    }

    fn dots_per_player(&self) -> i32 {
        self.owner.dots_per_player()
    }

    fn positions(&self, player: PlayerId) -> Pawns {
        if player.index() >= self.player_count() {
            return Pawns::new();
        }
        let shift = -self.spot_offset();
        let board_size = self.board_size();
        let pawns: Pawns = self
            .owner
            .positions(self.owner_seat(player))
            .iter()
            .map(|p| p.move_by(shift).normalize(board_size))
            .collect();
        // Rotation can wrap a spot past zero, so restore the order.
        sorted(&pawns)
    }

    fn owner_of(&self, position: Position) -> Option<PlayerId> {
        let real = position.move_by(self.spot_offset()).normalize(self.board_size());
        self.owner
            .owner_of(real)
            .map(|owner| owner.offset(-(self.offset as i64), self.player_count()))
    }
}

impl std::fmt::Display for ShiftedBoardState<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render(self, f)
    }
}

impl std::fmt::Debug for ShiftedBoardState<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShiftedBoardState")
            .field("offset", &self.offset)
            .field("state", &self.to_string())
            .finish()
    }
}
