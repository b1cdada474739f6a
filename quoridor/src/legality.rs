use super::action::{WallOrientation, WallSlot};
use super::board::{Board, Player};
use super::coordinate::Coordinate;
use super::oracle::PathOracle;
use super::walls::{classify, Candidate};
use anyhow::{ensure, Result};
use itertools::iproduct;
use log::{debug, warn};

/// A wall placed on the board for the lifetime of the probe and removed again when it is dropped.
///
/// The board is only reachable through the probe while it lives, so the removal happens on every exit path.
pub struct WallProbe<'a> {
    board: &'a mut Board,
    slot: WallSlot,
}

impl<'a> WallProbe<'a> {
    pub fn new(board: &'a mut Board, slot: WallSlot) -> Result<Self> {
        ensure!(
            board.is_structurally_free(slot),
            "Cannot probe {}, the slot is not free",
            slot
        );

        board.set_wall(slot, true);

        Ok(Self { board, slot })
    }

    pub fn board(&self) -> &Board {
        self.board
    }
}

impl Drop for WallProbe<'_> {
    fn drop(&mut self) {
        self.board.set_wall(self.slot, false);
    }
}

/// Whether both players could still reach their goal rows with a wall at `slot`.
///
/// Slots that overlap or cross a placed wall are never placeable. An anchor outside of the board is an error. The board
/// is unchanged when this returns.
pub fn can_place_wall<O: PathOracle>(board: &mut Board, slot: WallSlot, oracle: &O) -> Result<bool> {
    ensure!(
        slot.is_in_range(board.size()),
        "Wall {} is outside of a board of size {}",
        slot,
        board.size()
    );

    Ok(paths_remain_with(board, slot, oracle))
}

fn paths_remain_with<O: PathOracle>(board: &mut Board, slot: WallSlot, oracle: &O) -> bool {
    match WallProbe::new(board, slot) {
        Ok(probe) => all_players_have_paths(probe.board(), oracle),
        Err(_) => false,
    }
}

fn all_players_have_paths<O: PathOracle>(board: &Board, oracle: &O) -> bool {
    Player::ALL.iter().all(|player| {
        let pawn = board.pawn(*player);
        oracle.reachable(board, pawn.coord, pawn.goal_row)
    })
}

/// The set of walls that may legally be placed on a board, as two `size * size` planes of anchors indexed
/// `x * size + y`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WallLegality {
    size: usize,
    vertical: Vec<bool>,
    horizontal: Vec<bool>,
    pawns: [Coordinate; 2],
}

impl WallLegality {
    /// Checks every slot of the board.
    pub fn compute<O: PathOracle>(board: &mut Board, oracle: &O) -> Self {
        let mut legality = Self::empty(board);

        if !all_players_have_paths(board, oracle) {
            warn!("A player has no path to their goal row, no wall can be placed");
            return legality;
        }

        let n = board.size();
        let mut probes = 0;
        for (orientation, x, y) in iproduct!(WallOrientation::ALL, 0..n - 1, 0..n - 1) {
            let slot = WallSlot::new(orientation, x, y);
            let legal = Self::check(board, slot, oracle, &mut probes);
            legality.set(slot, legal);
        }

        debug!(
            "Computed wall legality: {} legal slots, {} probes",
            legality.count(),
            probes
        );

        legality
    }

    /// Advances the set after one more wall has been placed on the board.
    ///
    /// Placing a wall never makes another one legal, so only the slots legal before the placement are checked again.
    /// When the pawns have moved since this set was computed the whole board is checked instead.
    pub fn update<O: PathOracle>(&self, board: &mut Board, oracle: &O) -> Self {
        if self.size != board.size() || self.pawns != Self::pawn_coords(board) {
            debug!("Pawns moved since the wall legality was computed, recomputing");
            return Self::compute(board, oracle);
        }

        let mut legality = Self::empty(board);

        if all_players_have_paths(board, oracle) {
            let mut probes = 0;
            for slot in self.iter() {
                let legal = Self::check(board, slot, oracle, &mut probes);
                legality.set(slot, legal);
            }

            debug!(
                "Updated wall legality: {} of {} slots still legal, {} probes",
                legality.count(),
                self.count(),
                probes
            );
        } else {
            warn!("A player has no path to their goal row, no wall can be placed");
        }

        debug_assert_eq!(
            legality,
            Self::compute(board, oracle),
            "Incremental wall legality diverged from a full recompute"
        );

        legality
    }

    fn check<O: PathOracle>(board: &mut Board, slot: WallSlot, oracle: &O, probes: &mut usize) -> bool {
        match classify(board, slot) {
            Candidate::Occupied => false,
            Candidate::Free => true,
            Candidate::NeedsProbe => {
                *probes += 1;
                paths_remain_with(board, slot, oracle)
            }
        }
    }

    fn empty(board: &Board) -> Self {
        let size = board.size();

        Self {
            size,
            vertical: vec![false; size * size],
            horizontal: vec![false; size * size],
            pawns: Self::pawn_coords(board),
        }
    }

    fn pawn_coords(board: &Board) -> [Coordinate; 2] {
        board.pawns().map(|pawn| pawn.coord)
    }

    fn set(&mut self, slot: WallSlot, legal: bool) {
        let index = slot.coord.index(self.size);
        match slot.orientation {
            WallOrientation::Vertical => self.vertical[index] = legal,
            WallOrientation::Horizontal => self.horizontal[index] = legal,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_legal(&self, slot: WallSlot) -> bool {
        slot.is_in_range(self.size) && self.plane(slot.orientation)[slot.coord.index(self.size)]
    }

    /// The legality flags of one orientation, laid out like the wall section of the legal-action vector.
    pub fn plane(&self, orientation: WallOrientation) -> &[bool] {
        match orientation {
            WallOrientation::Vertical => &self.vertical,
            WallOrientation::Horizontal => &self.horizontal,
        }
    }

    pub fn count(&self) -> usize {
        self.vertical
            .iter()
            .chain(self.horizontal.iter())
            .filter(|legal| **legal)
            .count()
    }

    /// The legal slots, vertical before horizontal, `x` major.
    pub fn iter(&self) -> impl Iterator<Item = WallSlot> + '_ {
        let size = self.size;

        WallOrientation::ALL.into_iter().flat_map(move |orientation| {
            self.plane(orientation)
                .iter()
                .enumerate()
                .filter(|(_, legal)| **legal)
                .map(move |(index, _)| WallSlot {
                    coord: Coordinate::from_index(index, size),
                    orientation,
                })
        })
    }
}
