//! The board: pawns, die and turn cursor.
//!
//! A `Board` owns the mutable board state for one game together with the
//! die, every seat's begin and start positions, and the turn cursor
//! (current player, current roll, players still racing).
//!
//! ## Turn order
//!
//! `next_player` advances clockwise, except that rolling the die's top face
//! grants the same player another turn. Finished and unseated players are
//! skipped, and a player who just finished never keeps the extra turn.

use tracing::{debug, trace};

use crate::core::{
    BoardState, Die, EngineError, ImmutableBoardState, Layer, Move, MutableBoardState, PlayerId,
    Position, RulesConfig,
};

use super::evaluator::RuleEvaluator;

/// One game's board.
#[derive(Debug)]
pub struct Board {
    config: RulesConfig,
    state: MutableBoardState,
    die: Die,
    begin_positions: Vec<Position>,
    start_positions: Vec<Position>,
    current_player: PlayerId,
    current_roll: u32,
    active_players: usize,
}

impl Board {
    /// Create a board with players `0..seated` on their begin positions.
    ///
    /// Fails if the configuration is invalid, if `seated` does not fit the
    /// board, or if the die does not match the configured face count.
    pub fn new(config: RulesConfig, seated: usize, die: Die) -> Result<Self, EngineError> {
        config.validate()?;
        if seated == 0 || seated > config.player_count {
            return Err(EngineError::InvalidBracket(format!(
                "cannot seat {} players on a {}-seat board",
                seated, config.player_count
            )));
        }
        if die.faces() != config.die_faces {
            return Err(EngineError::InvalidConfig(format!(
                "die has {} faces, rules expect {}",
                die.faces(),
                config.die_faces
            )));
        }

        let begin_positions = PlayerId::all(config.player_count)
            .map(|p| config.begin_position(p))
            .collect();
        let start_positions = PlayerId::all(config.player_count)
            .map(|p| config.start_position(p))
            .collect();

        Ok(Self {
            state: MutableBoardState::new(&config, seated),
            die,
            begin_positions,
            start_positions,
            // The first advance lands on seat 0.
            current_player: PlayerId((config.player_count - 1) as u8),
            current_roll: 0,
            active_players: seated,
            config,
        })
    }

    /// Create a board whose die is driven by a seeded `GameRng`.
    pub fn seeded(config: RulesConfig, seated: usize, seed: u64) -> Result<Self, EngineError> {
        let die = Die::seeded(config.die_faces, seed)?;
        Self::new(config, seated, die)
    }

    // === Accessors ===

    /// Rules this board plays by.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Current pawn positions.
    #[must_use]
    pub fn state(&self) -> &MutableBoardState {
        &self.state
    }

    /// Immutable copy of the current positions.
    #[must_use]
    pub fn snapshot(&self) -> ImmutableBoardState {
        self.state.snapshot()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// The roll for the current turn (0 before the first turn).
    #[must_use]
    pub fn current_roll(&self) -> u32 {
        self.current_roll
    }

    /// Players still racing.
    #[must_use]
    pub fn active_players(&self) -> usize {
        self.active_players
    }

    /// Where `player`'s struck pawns return to.
    #[must_use]
    pub fn begin_position(&self, player: PlayerId) -> Option<Position> {
        self.begin_positions.get(player.index()).copied()
    }

    /// Where `player` enters the track.
    #[must_use]
    pub fn start_position(&self, player: PlayerId) -> Option<Position> {
        self.start_positions.get(player.index()).copied()
    }

    // === Setup ===

    /// Overwrite one seat's pawns, e.g. to resume a recorded position.
    pub fn set_positions(&mut self, player: PlayerId, positions: &[Position]) {
        self.state.set_positions(player, positions);
        self.active_players = PlayerId::all(self.config.player_count)
            .filter(|&p| !self.state.is_finished(p))
            .count();
    }

    /// Place the turn cursor on `player` with `roll` already thrown.
    pub fn set_turn(&mut self, player: PlayerId, roll: u32) {
        self.current_player = player;
        self.current_roll = roll;
    }

    // === Move generation ===

    /// The move `roll` would make for one pawn, before any legality check.
    ///
    /// A pawn that crosses its owner's start while wrapping around moves up
    /// a layer: Begin onto the track, or the track into the home lane.
    #[must_use]
    pub fn potential_move(&self, player: PlayerId, pawn: usize, roll: u32) -> Option<Move> {
        let board_size = self.config.board_size();
        let start = self.start_position(player)?;
        let from = self.state.position(player, pawn)?.normalize(board_size);
        let mut to = from.move_by(roll as i32).normalize(board_size);

        let crossed_start = if player.index() == 0 {
            to < from
        } else {
            from.spot < start.spot && start.spot <= to.spot
        };
        if crossed_start {
            to = to.next_layer().ok()?;
        }

        Some(Move::new(from, to))
    }

    /// Potential moves of the current player for the current roll.
    ///
    /// Pawns sharing a position sit next to each other in the sorted state,
    /// so skipping a move equal to the previous one removes every duplicate.
    #[must_use]
    pub fn potential_moves(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = Vec::with_capacity(self.config.pawns_per_player);
        for pawn in 0..self.config.pawns_per_player {
            if let Some(mv) = self.potential_move(self.current_player, pawn, self.current_roll) {
                if moves.last() != Some(&mv) {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    /// Legal moves of the current player for the current roll.
    #[must_use]
    pub fn allowed_moves(&self) -> Vec<Move> {
        let Some(start) = self.start_position(self.current_player) else {
            return Vec::new();
        };
        RuleEvaluator::new(&self.state, start, &self.config)
            .evaluate(&self.potential_moves(), self.current_roll)
    }

    /// The move that sends an opponent standing on `mv.to` back to Begin.
    ///
    /// Not subject to the rule evaluator.
    #[must_use]
    pub fn strike_move(&self, mv: &Move) -> Option<Move> {
        let occupant = self.state.owner_of(mv.to)?;
        let mover = self.state.owner_of(mv.from).unwrap_or(self.current_player);
        if occupant == mover {
            return None;
        }
        Some(Move::new(mv.to, self.begin_position(occupant)?))
    }

    // === Transitions ===

    /// Apply a move. Returns the mover if this move finished them.
    pub fn apply(&mut self, mv: &Move) -> Option<PlayerId> {
        self.state.apply(mv);
        trace!(%mv, "applied move");

        if mv.from.layer != Layer::Event || mv.to.layer != Layer::Home {
            return None;
        }
        let mover = self.state.owner_of(mv.to)?;
        if !self.state.is_finished(mover) {
            return None;
        }

        self.active_players = self.active_players.saturating_sub(1);
        debug!(player = %mover, remaining = self.active_players, "player finished");
        Some(mover)
    }

    /// Advance the turn cursor and roll for the next player.
    ///
    /// Returns `None` once every seated player has finished.
    pub fn next_player(&mut self) -> Option<PlayerId> {
        let player_count = self.config.player_count;

        // Each pass either returns or moves past one finished seat.
        for _ in 0..=player_count {
            if self.active_players == 0 {
                return None;
            }
            if self.state.is_finished(self.current_player) {
                self.current_roll = 0;
            }
            if self.current_roll != self.die.faces() {
                self.current_player = self.current_player.offset(1, player_count);
            }
            if !self.state.is_finished(self.current_player) {
                self.current_roll = self.die.roll();
                trace!(player = %self.current_player, roll = self.current_roll, "next turn");
                return Some(self.current_player);
            }
        }
        None
    }
}
