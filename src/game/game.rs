//! The turn loop.
//!
//! ## Turn
//!
//! 1. The board picks the next player and rolls.
//! 2. The player's strategy is always asked, even with nothing to choose
//!    from, so stateful strategies observe every turn.
//! 3. With no legal move the turn ends there.
//! 4. A missing or illegal answer is replaced by a random legal move.
//! 5. Any opponent on the target square is struck back to Begin first,
//!    then the move itself is applied. Both land in the history.
//!
//! The game ends when every seated player has brought all pawns home.

use tracing::{debug, trace, warn};

use crate::core::{Die, EngineError, GameRng, ImmutableBoardState, PlayerId, RulesConfig};
use crate::rules::Board;
use crate::strategy::Strategy;

use super::history::History;
use super::player::Player;

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    /// Seat and strategy name, in the order players finished.
    pub finish_order: Vec<(PlayerId, String)>,
    /// Turns taken, extra turns included.
    pub turns: usize,
}

impl GameOutcome {
    /// 0-based finishing place of `seat`, if it finished.
    #[must_use]
    pub fn place_of(&self, seat: PlayerId) -> Option<usize> {
        self.finish_order.iter().position(|(p, _)| *p == seat)
    }

    /// Strategy name of the winner.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.finish_order.first().map(|(_, name)| name.as_str())
    }
}

/// One game between a bracket of strategies.
#[derive(Debug)]
pub struct Game {
    board: Board,
    players: Vec<Player>,
    history: History,
    rng: GameRng,
    finish_order: Vec<PlayerId>,
    turns: usize,
}

impl Game {
    /// Seat `strategies` in seats `0..n` and roll with a die seeded from
    /// `seed`.
    pub fn new(
        rules: RulesConfig,
        strategies: Vec<Box<dyn Strategy>>,
        seed: u64,
    ) -> Result<Self, EngineError> {
        let mut rng = GameRng::new(seed);
        let die = Die::new(rules.die_faces, rng.fork())?;
        Self::with_die(rules, strategies, die, rng)
    }

    /// Seat `strategies` and play with an explicit die. `rng` drives the
    /// replacement of illegal answers.
    pub fn with_die(
        rules: RulesConfig,
        strategies: Vec<Box<dyn Strategy>>,
        die: Die,
        rng: GameRng,
    ) -> Result<Self, EngineError> {
        if strategies.is_empty() {
            return Err(EngineError::InvalidBracket(
                "a game needs at least one strategy".to_string(),
            ));
        }
        if strategies.len() > rules.player_count {
            return Err(EngineError::InvalidBracket(format!(
                "{} strategies for {} seats",
                strategies.len(),
                rules.player_count
            )));
        }

        let board = Board::new(rules.clone(), strategies.len(), die)?;
        let history = History::new();
        let players: Vec<Player> = strategies
            .into_iter()
            .enumerate()
            .map(|(seat, strategy)| {
                let mut player = Player::new(strategy, PlayerId(seat as u8), &rules);
                player.initialize(&history);
                player
            })
            .collect();

        debug!(
            players = players.len(),
            seed = rng.seed(),
            "game created"
        );

        Ok(Self {
            board,
            players,
            history,
            rng,
            finish_order: Vec::new(),
            turns: 0,
        })
    }

    // === Accessors ===

    /// The board being played on.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current positions as an immutable value.
    #[must_use]
    pub fn snapshot(&self) -> ImmutableBoardState {
        self.board.snapshot()
    }

    /// Every applied move so far.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Seats that have finished, in order.
    #[must_use]
    pub fn finish_order(&self) -> &[PlayerId] {
        &self.finish_order
    }

    /// Turns played so far.
    #[must_use]
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// True once every seated player has finished.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.board.active_players() == 0
    }

    // === Play ===

    /// Play one turn. Returns the player who had the turn, or `None` if the
    /// game is already over.
    pub fn play_turn(&mut self) -> Option<PlayerId> {
        let current = self.board.next_player()?;
        self.turns += 1;

        let allowed = self.board.allowed_moves();
        let player = self.players.get_mut(current.index())?;
        let choice = player.choose(&allowed, self.board.state());
        if allowed.is_empty() {
            return Some(current);
        }

        let choice = match choice {
            Some(mv) if allowed.contains(&mv) => mv,
            other => {
                let Some(&substitute) = self.rng.choose(&allowed) else {
                    return Some(current);
                };
                warn!(
                    strategy = player.name(),
                    answer = ?other.map(|mv| mv.to_string()),
                    %substitute,
                    "strategy answered outside the legal moves"
                );
                substitute
            }
        };

        if let Some(strike) = self.board.strike_move(&choice) {
            self.board.apply(&strike);
            self.history.push(strike);
            trace!(player = %current, %strike, "struck opponent");
        }
        if let Some(finisher) = self.board.apply(&choice) {
            self.finish_order.push(finisher);
        }
        self.history.push(choice);

        Some(current)
    }

    /// Play to the end, report each strategy's placing and return the
    /// outcome.
    pub fn play(mut self) -> GameOutcome {
        while self.play_turn().is_some() {}

        let mut finish_order = Vec::with_capacity(self.finish_order.len());
        for (finish_index, &seat) in self.finish_order.iter().enumerate() {
            if let Some(player) = self.players.get_mut(seat.index()) {
                player.finalize(finish_index);
                debug!(
                    player = %seat,
                    strategy = player.name(),
                    finish_index,
                    "player placed"
                );
                finish_order.push((seat, player.name().to_string()));
            }
        }

        debug!(turns = self.turns, moves = self.history.len(), "game over");
        GameOutcome {
            finish_order,
            turns: self.turns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardState, FixedRolls, Move, Position};
    use crate::strategy::{FirstStrategy, LastStrategy, RandomStrategy};

    fn bracket(n: usize) -> Vec<Box<dyn Strategy>> {
        (0..n)
            .map(|i| Box::new(RandomStrategy::new(i as u64)) as Box<dyn Strategy>)
            .collect()
    }

    /// Never answers.
    struct Silent;

    impl Strategy for Silent {
        fn name(&self) -> &str {
            "silent"
        }

        fn choose(&mut self, _: &[Move], _: &dyn BoardState) -> Option<Move> {
            None
        }
    }

    /// Always answers with a move that is never legal.
    struct Cheater;

    impl Strategy for Cheater {
        fn name(&self) -> &str {
            "cheater"
        }

        fn choose(&mut self, _: &[Move], _: &dyn BoardState) -> Option<Move> {
            Some(Move::new(Position::begin(34), Position::home(0)))
        }
    }

    #[test]
    fn test_bracket_size_checked() {
        let rules = RulesConfig::default();
        assert!(matches!(
            Game::new(rules.clone(), Vec::new(), 1),
            Err(EngineError::InvalidBracket(_))
        ));
        assert!(matches!(
            Game::new(rules, bracket(5), 1),
            Err(EngineError::InvalidBracket(_))
        ));
    }

    #[test]
    fn test_invalid_rules_rejected() {
        let rules = RulesConfig::default().with_pawns_per_player(6);
        assert!(matches!(
            Game::new(rules, bracket(2), 1),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_die_wider_than_seat_gap_rejected() {
        let rules = RulesConfig::default().with_player_count(2).with_dots_per_player(5);
        let strategies: Vec<Box<dyn Strategy>> = vec![Box::new(FirstStrategy), Box::new(FirstStrategy)];
        assert!(matches!(
            Game::new(rules, strategies, 1),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_die_equal_to_seat_gap_finishes() {
        let rules = RulesConfig::default().with_player_count(2).with_dots_per_player(6);
        let strategies: Vec<Box<dyn Strategy>> = vec![Box::new(FirstStrategy), Box::new(FirstStrategy)];
        let mut game = Game::new(rules, strategies, 1).unwrap();

        let mut turns = 0;
        while game.play_turn().is_some() {
            turns += 1;
            assert!(turns < 100_000, "game did not finish");
        }
        assert!(game.is_over());
        assert_eq!(game.finish_order().len(), 2);
    }

    #[test]
    fn test_full_game_places_everyone() {
        let outcome = Game::new(RulesConfig::default(), bracket(4), 42).unwrap().play();

        assert_eq!(outcome.finish_order.len(), 4);
        let mut seats: Vec<usize> = outcome.finish_order.iter().map(|(p, _)| p.index()).collect();
        seats.sort_unstable();
        assert_eq!(seats, vec![0, 1, 2, 3]);
        assert!(outcome.turns > 0);
        assert_eq!(outcome.winner(), Some("random"));
    }

    #[test]
    fn test_partial_bracket() {
        let strategies: Vec<Box<dyn Strategy>> = vec![Box::new(FirstStrategy), Box::new(LastStrategy)];
        let outcome = Game::new(RulesConfig::default(), strategies, 3).unwrap().play();

        assert_eq!(outcome.finish_order.len(), 2);
        assert!(outcome.place_of(PlayerId::new(0)).is_some());
        assert!(outcome.place_of(PlayerId::new(1)).is_some());
        assert_eq!(outcome.place_of(PlayerId::new(2)), None);
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = Game::new(RulesConfig::default(), bracket(3), 9).unwrap().play();
        let b = Game::new(RulesConfig::default(), bracket(3), 9).unwrap().play();
        assert_eq!(a, b);
    }

    #[test]
    fn test_silent_strategy_still_moves() {
        let rules = RulesConfig::default();
        let die = Die::new(6, FixedRolls::always(6)).unwrap();
        let mut game = Game::with_die(rules, vec![Box::new(Silent)], die, GameRng::new(0)).unwrap();

        assert_eq!(game.play_turn(), Some(PlayerId::new(0)));
        assert_eq!(
            game.board().state().positions(PlayerId::new(0)).last(),
            Some(&Position::event(0))
        );
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_cheater_gets_substitute() {
        let outcome = Game::new(RulesConfig::default(), vec![Box::new(Cheater)], 5)
            .unwrap()
            .play();
        assert_eq!(outcome.finish_order, vec![(PlayerId::new(0), "cheater".to_string())]);
    }

    #[test]
    fn test_turn_without_moves_changes_nothing() {
        let rules = RulesConfig::default();
        let die = Die::new(6, FixedRolls::always(3)).unwrap();
        let mut game = Game::with_die(rules, bracket(2), die, GameRng::new(0)).unwrap();

        assert_eq!(game.play_turn(), Some(PlayerId::new(0)));
        assert_eq!(game.play_turn(), Some(PlayerId::new(1)));
        assert!(game.history().is_empty());
        assert_eq!(game.turns(), 2);
    }

    #[test]
    fn test_strike_recorded_before_move() {
        let rules = RulesConfig::default();
        let die = Die::new(6, FixedRolls::always(6)).unwrap();
        let mut game = Game::with_die(rules, bracket(2), die, GameRng::new(0)).unwrap();
        game.board.set_positions(PlayerId::new(1), &[
            Position::event(0), Position::begin(4), Position::begin(4), Position::begin(4),
        ]);

        game.play_turn();

        let moves = game.history().snapshot();
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0], Move::new(Position::event(0), Position::begin(4)));
        assert_eq!(moves[1], Move::new(Position::begin(34), Position::event(0)));
        assert_eq!(
            game.board().state().owner_of(Position::event(0)),
            Some(PlayerId::new(0))
        );
    }
}
