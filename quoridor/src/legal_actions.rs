use super::action::{Action, WallOrientation};
use super::board::{Board, Player};
use super::constants::{action_vector_len, NUM_PAWN_ACTIONS};
use super::legality::WallLegality;
use super::oracle::PathOracle;
use super::pawn_moves::pawn_actions;

/// Flags for every action of a board, in the fixed vector layout of [`Action::to_vector_index`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LegalActions {
    size: usize,
    flags: Vec<bool>,
}

impl LegalActions {
    /// Combines the pawn actions of `player` with the legal walls. A player without walls left gets no wall actions.
    pub fn new(board: &Board, player: Player, walls: &WallLegality) -> Self {
        let size = board.size();
        debug_assert_eq!(walls.size(), size);

        let mut flags = Vec::with_capacity(action_vector_len(size));
        flags.extend_from_slice(&pawn_actions(board, player));

        if board.pawn(player).walls_remaining > 0 {
            for orientation in WallOrientation::ALL {
                flags.extend_from_slice(walls.plane(orientation));
            }
        } else {
            flags.resize(action_vector_len(size), false);
        }

        Self { size, flags }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn pawn_actions(&self) -> &[bool] {
        &self.flags[..NUM_PAWN_ACTIONS]
    }

    /// Number of legal actions.
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|legal| **legal).count()
    }

    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, legal)| **legal)
            .filter_map(move |(index, _)| Action::from_vector_index(index, self.size).ok())
    }

    pub fn contains(&self, action: &Action) -> bool {
        if let Action::PlaceWall(slot) = action {
            if !slot.is_in_range(self.size) {
                return false;
            }
        }

        self.flags
            .get(action.to_vector_index(self.size))
            .copied()
            .unwrap_or(false)
    }

    /// The flags as the other player sees them after the board is turned around.
    pub fn rotate(&self) -> Self {
        let mut flags = vec![false; self.flags.len()];

        for action in self.actions() {
            if let Some(rotated) = action.rotate(self.size) {
                flags[rotated.to_vector_index(self.size)] = true;
            }
        }

        Self {
            size: self.size,
            flags,
        }
    }
}

/// All legal actions of `player`, checking every wall slot from scratch.
pub fn legal_actions<O: PathOracle>(board: &mut Board, player: Player, oracle: &O) -> LegalActions {
    let walls = WallLegality::compute(board, oracle);
    LegalActions::new(board, player, &walls)
}
