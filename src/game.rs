//! Turn engine: alternates the two sides until one fleet is sunk.

use alloc::boxed::Box;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{Coordinate, GameError, ShotOutcome, SideId},
    placement,
    player::MoveSource,
};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    WaitingForSideA,
    WaitingForSideB,
    Finished(SideId),
}

impl GameStatus {
    fn waiting_for(side: SideId) -> Self {
        match side {
            SideId::A => GameStatus::WaitingForSideA,
            SideId::B => GameStatus::WaitingForSideB,
        }
    }
}

/// One player: its own board and where its moves come from.
pub struct Side {
    board: Board,
    moves: Box<dyn MoveSource>,
}

impl Side {
    pub fn new(board: Board, moves: impl MoveSource + 'static) -> Self {
        Self {
            board,
            moves: Box::new(moves),
        }
    }

    /// A side with a randomly placed fleet.
    pub fn with_random_fleet(rng: &mut SmallRng, moves: impl MoveSource + 'static) -> Self {
        Self::new(placement::random_board(rng), moves)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// The result of one consumed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// The side that fired.
    pub side: SideId,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Targets the opponent board rejected before this one was accepted.
    pub rejected: usize,
    /// Set when this shot won the game.
    pub winner: Option<SideId>,
}

pub struct Game {
    side_a: Side,
    side_b: Side,
    status: GameStatus,
    turns: usize,
    rng: SmallRng,
}

impl Game {
    /// Start a game; side A moves first.
    pub fn new(side_a: Side, side_b: Side, rng: SmallRng) -> Self {
        Self {
            side_a,
            side_b,
            status: GameStatus::WaitingForSideA,
            turns: 0,
            rng,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<SideId> {
        match self.status {
            GameStatus::Finished(side) => Some(side),
            _ => None,
        }
    }

    /// Number of consumed turns so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn side(&self, id: SideId) -> &Side {
        match id {
            SideId::A => &self.side_a,
            SideId::B => &self.side_b,
        }
    }

    pub fn board(&self, id: SideId) -> &Board {
        &self.side(id).board
    }

    /// Play one turn for whichever side is waiting.
    ///
    /// Targets rejected by the opponent board are requested again from the same
    /// side; the turn is only consumed by a miss, hit or kill. A side facing a
    /// board with no cell left to fire upon gets `GameError::NoTargetsLeft`.
    pub fn play_turn(&mut self) -> Result<TurnReport, GameError> {
        let shooter = match self.status {
            GameStatus::WaitingForSideA => SideId::A,
            GameStatus::WaitingForSideB => SideId::B,
            GameStatus::Finished(winner) => return Err(GameError::AlreadyFinished(winner)),
        };
        let rng = &mut self.rng;
        let (own, other) = match shooter {
            SideId::A => (&mut self.side_a, &mut self.side_b),
            SideId::B => (&mut self.side_b, &mut self.side_a),
        };

        if other.board.is_fully_targeted() {
            return Err(GameError::NoTargetsLeft(shooter));
        }

        let mut rejected = 0;
        let (target, outcome) = loop {
            let target = own
                .moves
                .next_move(rng)
                .ok_or(GameError::MoveSourceClosed(shooter))?;
            match other.board.resolve_shot(target) {
                Ok(outcome) => break (target, outcome),
                Err(error) => {
                    rejected += 1;
                    log::trace!("{} target {} rejected: {:?}", shooter, target, error);
                    own.moves.handle_rejected(target, error);
                }
            }
        };
        own.moves.handle_shot_result(target, outcome);
        other.moves.handle_opponent_shot(target, outcome);
        self.turns += 1;
        log::debug!("turn {}: {} fired at {} -> {:?}", self.turns, shooter, target, outcome);

        let winner = if self.board(shooter.opponent()).is_exhausted() {
            log::info!("{} wins after {} turns", shooter, self.turns);
            self.status = GameStatus::Finished(shooter);
            Some(shooter)
        } else {
            self.status = GameStatus::waiting_for(shooter.opponent());
            None
        };
        Ok(TurnReport {
            side: shooter,
            target,
            outcome,
            rejected,
            winner,
        })
    }

    /// Play turns until someone wins, calling `observe` after each one.
    pub fn run_with<F>(&mut self, mut observe: F) -> Result<SideId, GameError>
    where
        F: FnMut(&Game, &TurnReport),
    {
        loop {
            let report = self.play_turn()?;
            observe(self, &report);
            if let Some(winner) = report.winner {
                return Ok(winner);
            }
        }
    }

    /// Play turns until someone wins.
    pub fn run(&mut self) -> Result<SideId, GameError> {
        self.run_with(|_, _| {})
    }
}

