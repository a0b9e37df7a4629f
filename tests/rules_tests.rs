//! Board and rule scenarios on the standard 4-seat, 40-spot board.

use rust_ludo::core::{
    BoardState, Die, FixedRolls, Move, MutableBoardState, PlayerId, Position, RulesConfig,
};
use rust_ludo::rules::{Board, RuleEvaluator};

fn fixed_board(seated: usize, rolls: Vec<u32>) -> Board {
    let die = Die::new(6, FixedRolls::new(rolls)).unwrap();
    Board::new(RulesConfig::default(), seated, die).unwrap()
}

/// Begin positions sit one full roll behind each start square.
#[test]
fn test_begin_positions() {
    let board = fixed_board(4, vec![6]);
    let begins: Vec<Position> = PlayerId::all(4)
        .map(|p| board.begin_position(p).unwrap())
        .collect();
    assert_eq!(
        begins,
        vec![Position::begin(34), Position::begin(4), Position::begin(14), Position::begin(24)]
    );
    assert_eq!(board.start_position(PlayerId::new(3)), Some(Position::event(30)));
}

/// Entering the track re-sorts the pawn behind the waiting ones.
#[test]
fn test_enter_track_and_render() {
    let mut state = MutableBoardState::new(&RulesConfig::default(), 4);
    state.apply(&Move::parse("<B34->E0>").unwrap());

    assert_eq!(state.position(PlayerId::new(0), 3), Some(Position::event(0)));
    assert_eq!(state.position(PlayerId::new(0), 2), Some(Position::begin(34)));
    assert_eq!(
        state.to_string(),
        "0: B34 B34 B34 E0\n1: B4 B4 B4 B4\n2: B14 B14 B14 B14\n3: B24 B24 B24 B24\n"
    );
}

/// Sixes keep the turn with the same player.
#[test]
fn test_sixes_keep_the_turn() {
    let mut board = fixed_board(4, vec![6]);
    let first = board.next_player();
    assert_eq!(first, Some(PlayerId::new(0)));
    for _ in 0..10 {
        assert_eq!(board.next_player(), first);
        assert_eq!(board.current_roll(), 6);
    }
}

/// Without sixes the turn goes round the table.
#[test]
fn test_turn_order_rotates() {
    let mut board = fixed_board(3, vec![2, 4, 5]);
    let order: Vec<usize> = (0..6)
        .map(|_| board.next_player().unwrap().index())
        .collect();
    assert_eq!(order, vec![0, 1, 2, 0, 1, 2]);
}

/// Leaving start is forced when exactly one pawn can.
#[test]
fn test_forced_leave_start() {
    let rules = RulesConfig::default();
    let mut state = MutableBoardState::new(&rules, 2);
    state.set_positions(PlayerId::new(0), &[
        Position::event(0), Position::event(12), Position::event(20), Position::begin(34),
    ]);
    let candidates = vec![
        Move::new(Position::event(0), Position::event(3)),
        Move::new(Position::event(12), Position::event(15)),
        Move::new(Position::event(20), Position::event(23)),
    ];

    let allowed = RuleEvaluator::new(&state, Position::event(0), &rules).evaluate(&candidates, 3);
    assert_eq!(allowed, vec![Move::new(Position::event(0), Position::event(3))]);
}

/// A pawn at the end of the lap turns into its home lane.
#[test]
fn test_home_lane_entry() {
    let mut board = fixed_board(4, vec![4]);
    board.set_positions(PlayerId::new(0), &[
        Position::event(38), Position::begin(34), Position::begin(34), Position::begin(34),
    ]);
    board.set_positions(PlayerId::new(1), &[
        Position::event(8), Position::begin(4), Position::begin(4), Position::begin(4),
    ]);

    assert_eq!(
        board.potential_move(PlayerId::new(0), 3, 4),
        Some(Move::new(Position::event(38), Position::home(2)))
    );
    assert_eq!(
        board.potential_move(PlayerId::new(1), 3, 3),
        Some(Move::new(Position::event(8), Position::home(11)))
    );
}

/// A strike sends the occupant to its own begin position.
#[test]
fn test_strike_returns_occupant() {
    let mut board = fixed_board(2, vec![6]);
    board.set_positions(PlayerId::new(1), &[
        Position::event(0), Position::begin(4), Position::begin(4), Position::begin(4),
    ]);
    board.next_player();

    let allowed = board.allowed_moves();
    assert_eq!(allowed, vec![Move::new(Position::begin(34), Position::event(0))]);
    let strike = board.strike_move(&allowed[0]);
    assert_eq!(strike, Some(Move::new(Position::event(0), Position::begin(4))));

    board.apply(&strike.unwrap());
    board.apply(&allowed[0]);
    assert_eq!(board.state().owner_of(Position::event(0)), Some(PlayerId::new(0)));
    assert!(board
        .state()
        .positions(PlayerId::new(1))
        .iter()
        .all(|&p| p == Position::begin(4)));
}

/// Snapshots taken before a move keep the old positions.
#[test]
fn test_snapshot_is_frozen() {
    let mut board = fixed_board(2, vec![6]);
    let before = board.snapshot();
    board.next_player();
    let mv = board.allowed_moves()[0];
    board.apply(&mv);

    assert_eq!(before.position(PlayerId::new(0), 3), Some(Position::begin(34)));
    assert_eq!(board.snapshot().position(PlayerId::new(0), 3), Some(Position::event(0)));
}
