use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    Board, Coordinate, Game, GameError, GameStatus, MoveSource, Orientation, RandomAi, Ship,
    ShotError, ShotOutcome, Side, SideId, BOARD_SIZE, TOTAL_FLEET_CELLS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Rejected(Coordinate, ShotError),
    Fired(Coordinate, ShotOutcome),
    FiredUpon(Coordinate, ShotOutcome),
}

/// Move source replaying a fixed list of targets and recording callbacks.
struct Scripted {
    moves: VecDeque<Coordinate>,
    events: Rc<RefCell<Vec<Event>>>,
}

impl Scripted {
    fn new(moves: &[(i32, i32)]) -> (Self, Rc<RefCell<Vec<Event>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let source = Scripted {
            moves: moves.iter().map(|&m| Coordinate::from(m)).collect(),
            events: Rc::clone(&events),
        };
        (source, events)
    }
}

impl MoveSource for Scripted {
    fn next_move(&mut self, _rng: &mut SmallRng) -> Option<Coordinate> {
        self.moves.pop_front()
    }

    fn handle_rejected(&mut self, target: Coordinate, error: ShotError) {
        self.events.borrow_mut().push(Event::Rejected(target, error));
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: ShotOutcome) {
        self.events.borrow_mut().push(Event::Fired(target, outcome));
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, outcome: ShotOutcome) {
        self.events.borrow_mut().push(Event::FiredUpon(target, outcome));
    }
}

fn one_ship_board(x: i32, y: i32, length: usize, orientation: Orientation) -> Board {
    let mut board = Board::new();
    board
        .add_ship(Ship::new(Coordinate::new(x, y), length, orientation))
        .unwrap();
    board
}

#[test]
fn test_rejected_targets_do_not_consume_the_turn() {
    let (a, a_events) = Scripted::new(&[(6, 0), (2, 2)]);
    let (b, b_events) = Scripted::new(&[]);
    let mut game = Game::new(
        Side::new(one_ship_board(0, 0, 1, Orientation::Horizontal), a),
        Side::new(one_ship_board(2, 2, 1, Orientation::Horizontal), b),
        SmallRng::seed_from_u64(1),
    );
    assert_eq!(game.status(), GameStatus::WaitingForSideA);

    let report = game.play_turn().unwrap();
    assert_eq!(report.side, SideId::A);
    assert_eq!(report.target, Coordinate::new(2, 2));
    assert_eq!(report.outcome, ShotOutcome::Destroyed);
    assert_eq!(report.rejected, 1);
    assert_eq!(report.winner, Some(SideId::A));
    assert_eq!(game.status(), GameStatus::Finished(SideId::A));
    assert_eq!(game.winner(), Some(SideId::A));
    assert_eq!(game.turns(), 1);

    assert_eq!(
        *a_events.borrow(),
        vec![
            Event::Rejected(Coordinate::new(6, 0), ShotError::OutOfBounds),
            Event::Fired(Coordinate::new(2, 2), ShotOutcome::Destroyed),
        ]
    );
    assert_eq!(
        *b_events.borrow(),
        vec![Event::FiredUpon(Coordinate::new(2, 2), ShotOutcome::Destroyed)]
    );

    assert_eq!(game.play_turn(), Err(GameError::AlreadyFinished(SideId::A)));
}

#[test]
fn test_turns_alternate_and_repeats_are_asked_again() {
    let (a, a_events) = Scripted::new(&[(0, 0), (0, 0), (0, 1), (0, 2)]);
    let (b, _) = Scripted::new(&[(5, 5), (4, 4)]);
    let mut game = Game::new(
        Side::new(one_ship_board(5, 5, 1, Orientation::Horizontal), a),
        Side::new(one_ship_board(0, 0, 3, Orientation::Horizontal), b),
        SmallRng::seed_from_u64(2),
    );

    let first = game.play_turn().unwrap();
    assert_eq!((first.side, first.outcome), (SideId::A, ShotOutcome::Hit));
    assert_eq!(game.status(), GameStatus::WaitingForSideB);

    let second = game.play_turn().unwrap();
    assert_eq!(second.side, SideId::B);
    // side B sinks side A's only ship
    assert_eq!(second.outcome, ShotOutcome::Destroyed);
    assert_eq!(second.winner, Some(SideId::B));
    assert_eq!(game.status(), GameStatus::Finished(SideId::B));
    assert_eq!(game.board(SideId::A).hits_scored_against(), 1);
    assert_eq!(game.board(SideId::B).hits_scored_against(), 0);
    assert_eq!(a_events.borrow().len(), 2);
}

#[test]
fn test_repeat_shot_is_reasked_within_the_same_turn() {
    let (a, a_events) = Scripted::new(&[(0, 0), (0, 0), (0, 1)]);
    let (b, _) = Scripted::new(&[(3, 3)]);
    let mut game = Game::new(
        Side::new(one_ship_board(5, 5, 1, Orientation::Horizontal), a),
        Side::new(one_ship_board(0, 0, 3, Orientation::Horizontal), b),
        SmallRng::seed_from_u64(3),
    );

    assert_eq!(game.play_turn().unwrap().outcome, ShotOutcome::Hit);
    assert_eq!(game.play_turn().unwrap().outcome, ShotOutcome::Miss);
    let third = game.play_turn().unwrap();
    assert_eq!(third.target, Coordinate::new(0, 1));
    assert_eq!(third.rejected, 1);
    assert_eq!(third.outcome, ShotOutcome::Hit);
    assert!(a_events
        .borrow()
        .contains(&Event::Rejected(Coordinate::new(0, 0), ShotError::AlreadyTargeted)));
    assert_eq!(game.status(), GameStatus::WaitingForSideB);
}

#[test]
fn test_closed_move_source() {
    let (a, _) = Scripted::new(&[(9, 9)]);
    let (b, _) = Scripted::new(&[]);
    let mut game = Game::new(
        Side::new(one_ship_board(0, 0, 1, Orientation::Horizontal), a),
        Side::new(one_ship_board(3, 3, 1, Orientation::Horizontal), b),
        SmallRng::seed_from_u64(4),
    );
    assert_eq!(game.play_turn(), Err(GameError::MoveSourceClosed(SideId::A)));
    assert_eq!(game.status(), GameStatus::WaitingForSideA);
}

#[test]
fn test_shipless_boards_run_out_of_targets() {
    let mut game = Game::new(
        Side::new(Board::new(), RandomAi::new()),
        Side::new(Board::new(), RandomAi::new()),
        SmallRng::seed_from_u64(1),
    );
    let cells = BOARD_SIZE * BOARD_SIZE;
    for _ in 0..2 * cells {
        let report = game.play_turn().unwrap();
        assert_eq!(report.outcome, ShotOutcome::Miss);
        assert_eq!(report.winner, None);
    }
    assert!(game.board(SideId::A).is_fully_targeted());
    assert!(game.board(SideId::B).is_fully_targeted());

    assert_eq!(game.play_turn(), Err(GameError::NoTargetsLeft(SideId::A)));
    assert_eq!(game.status(), GameStatus::WaitingForSideA);
    assert_eq!(game.turns(), 2 * cells);
    assert_eq!(game.run(), Err(GameError::NoTargetsLeft(SideId::A)));
}

#[test]
fn test_random_ai_game_runs_to_completion() {
    for seed in 0..20u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let a = Side::with_random_fleet(&mut rng, RandomAi::new());
        let b = Side::with_random_fleet(&mut rng, RandomAi::new());
        let mut game = Game::new(a, b, rng);

        let mut accepted = 0;
        let winner = game
            .run_with(|game, report| {
                accepted += 1;
                assert_eq!(report.winner.is_some(), game.winner().is_some());
            })
            .unwrap();
        assert_eq!(accepted, game.turns());
        // every cell can be fired upon once per side
        assert!(game.turns() < 2 * BOARD_SIZE * BOARD_SIZE);

        let loser = game.board(winner.opponent());
        assert_eq!(loser.cells_hit(), TOTAL_FLEET_CELLS);
        assert_eq!(loser.hits_scored_against(), 7);
        assert!(!game.board(winner).is_exhausted());
        assert_eq!(game.winner(), Some(winner));
    }
}

#[test]
fn test_seeded_games_are_reproducible() {
    let play = |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let a = Side::with_random_fleet(&mut rng, RandomAi::new());
        let b = Side::with_random_fleet(&mut rng, RandomAi::new());
        let mut game = Game::new(a, b, rng);
        let mut log = Vec::new();
        let winner = game.run_with(|_, report| log.push(*report)).unwrap();
        (winner, log)
    };
    assert_eq!(play(99), play(99));
}
