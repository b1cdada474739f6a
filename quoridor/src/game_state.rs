use super::action::Action;
use super::board::{Board, Player};
use super::legal_actions::LegalActions;
use super::legality::WallLegality;
use super::oracle::FloodFillOracle;
use super::options::RulesOptions;
use super::pawn_moves::destination;
use anyhow::{anyhow, bail, ensure, Result};
use log::debug;
use std::collections::HashMap;

/// A position seen this many times ends the game in a draw.
const REPETITIONS_FOR_DRAW: usize = 3;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Win(Player),
    /// The game ran past the move limit or the same position came up three times.
    Draw,
}

/// A game in progress. Keeps the legal walls of the position up to date as actions are taken, so a wall placement
/// only rechecks the walls that were legal before it.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    walls: WallLegality,
    player_to_move: Player,
    move_number: usize,
    max_number_of_moves: usize,
    positions: HashMap<(Board, Player), usize>,
    repetitions: usize,
    oracle: FloodFillOracle,
}

impl GameState {
    pub fn new(options: &RulesOptions) -> Result<Self> {
        options.validate()?;

        let board = Board::standard(options.board_size, options.walls_per_player)?;

        Ok(Self::from_board(
            board,
            Player::One,
            options.max_number_of_moves,
        ))
    }

    /// The standard 9x9 game with 10 walls each.
    pub fn initial() -> Self {
        Self::from_board(
            Board::default(),
            Player::One,
            RulesOptions::default().max_number_of_moves,
        )
    }

    pub fn from_board(mut board: Board, player_to_move: Player, max_number_of_moves: usize) -> Self {
        let oracle = FloodFillOracle;
        let walls = WallLegality::compute(&mut board, &oracle);
        let positions = HashMap::from([((board.clone(), player_to_move), 1)]);

        Self {
            board,
            walls,
            player_to_move,
            move_number: 1,
            max_number_of_moves,
            positions,
            repetitions: 1,
            oracle,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn walls(&self) -> &WallLegality {
        &self.walls
    }

    pub fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    pub fn move_number(&self) -> usize {
        self.move_number
    }

    pub fn valid_actions(&self) -> LegalActions {
        LegalActions::new(&self.board, self.player_to_move, &self.walls)
    }

    pub fn take_action(&mut self, action: &Action) -> Result<()> {
        if let Some(outcome) = self.is_terminal() {
            bail!("Cannot take {}, the game is over: {:?}", action, outcome);
        }

        ensure!(
            self.valid_actions().contains(action),
            "{} is not a legal action for {:?}",
            action,
            self.player_to_move
        );

        let player = self.player_to_move;
        match action {
            Action::MovePawn(pawn_action) => {
                let coord = destination(&self.board, player, *pawn_action)
                    .ok_or_else(|| anyhow!("{} leaves the board", action))?;

                self.board.move_pawn(player, coord)?;
                self.walls = WallLegality::compute(&mut self.board, &self.oracle);
            }
            Action::PlaceWall(slot) => {
                self.board.place_wall(*slot)?;
                self.board.spend_wall(player)?;
                self.walls = self.walls.update(&mut self.board, &self.oracle);
            }
        }

        self.increment_turn();
        self.record_position();

        Ok(())
    }

    pub fn is_terminal(&self) -> Option<Outcome> {
        if let Some(player) = Player::ALL
            .into_iter()
            .find(|player| self.board.pawn(*player).is_at_goal())
        {
            Some(Outcome::Win(player))
        } else if self.move_number >= self.max_number_of_moves
            || self.repetitions >= REPETITIONS_FOR_DRAW
        {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// How many times the current position, including the side to move, has come up in this game.
    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    fn record_position(&mut self) {
        let count = self
            .positions
            .entry((self.board.clone(), self.player_to_move))
            .or_insert(0);
        *count += 1;
        self.repetitions = *count;

        if self.repetitions > 1 {
            debug!(
                "Position repeated {} times at move {}",
                self.repetitions, self.move_number
            );
        }
    }

    fn increment_turn(&mut self) {
        self.player_to_move = self.player_to_move.opponent();
        if self.player_to_move == Player::One {
            self.move_number += 1;
        }
    }
}
