use super::action::{WallOrientation, WallSlot};
use super::constants::{
    DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE, NUM_WALLS_PER_PLAYER,
};
use super::coordinate::{Coordinate, Direction};
use anyhow::{bail, ensure, Result};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn index(&self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn opponent(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Pawn {
    pub coord: Coordinate,
    pub goal_row: usize,
    pub walls_remaining: usize,
}

impl Pawn {
    pub fn new(coord: Coordinate, goal_row: usize, walls_remaining: usize) -> Self {
        Self {
            coord,
            goal_row,
            walls_remaining,
        }
    }

    pub fn is_at_goal(&self) -> bool {
        self.coord.y == self.goal_row
    }
}

/// Board state: the placed walls and both pawns.
///
/// Walls are stored by anchor, one flag per placed wall, in two `size * size` planes indexed `x * size + y`. Only
/// anchors with `x, y < size - 1` are ever set. The segment matrices used at the boundary are derived from the anchors,
/// so a wall covering a single segment cannot be represented.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    size: usize,
    vertical: Vec<bool>,
    horizontal: Vec<bool>,
    pawns: [Pawn; 2],
}

impl Board {
    pub fn new(size: usize, pawns: [Pawn; 2]) -> Result<Self> {
        ensure!(
            size % 2 == 1 && (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size),
            "Board size must be odd and between {} and {}, found {}",
            MIN_BOARD_SIZE,
            MAX_BOARD_SIZE,
            size
        );

        for pawn in &pawns {
            ensure!(
                pawn.coord.is_on_board(size),
                "Pawn at ({}, {}) is outside of a board of size {}",
                pawn.coord.x,
                pawn.coord.y,
                size
            );
            ensure!(
                pawn.goal_row == 0 || pawn.goal_row == size - 1,
                "Goal row must be 0 or {}, found {}",
                size - 1,
                pawn.goal_row
            );
        }

        ensure!(
            pawns[0].coord != pawns[1].coord,
            "Pawns cannot share the cell {}",
            pawns[0].coord
        );
        ensure!(
            pawns[0].goal_row != pawns[1].goal_row,
            "Pawns must have goals on opposite rows"
        );

        Ok(Self {
            size,
            vertical: vec![false; size * size],
            horizontal: vec![false; size * size],
            pawns,
        })
    }

    /// The starting position: pawns in the middle of the first and last rows, each aiming for the opposite row.
    pub fn standard(size: usize, walls_per_player: usize) -> Result<Self> {
        ensure!(size > 0, "Board size must be positive");

        let middle = size / 2;
        Self::new(
            size,
            [
                Pawn::new(Coordinate::new(middle, 0), size - 1, walls_per_player),
                Pawn::new(Coordinate::new(middle, size - 1), 0, walls_per_player),
            ],
        )
    }

    /// Builds a board from segment matrices.
    ///
    /// `vwalls[x][y]` blocks movement between `(x, y)` and `(x + 1, y)`, `hwalls[x][y]` blocks movement between
    /// `(x, y)` and `(x, y + 1)`. Every run of set segments along a line must split into walls of length two.
    pub fn from_segments(vwalls: &[Vec<bool>], hwalls: &[Vec<bool>], pawns: [Pawn; 2]) -> Result<Self> {
        let size = vwalls.len();
        ensure!(
            hwalls.len() == size,
            "Wall matrices must have the same dimensions, found {} and {} columns",
            size,
            hwalls.len()
        );
        for (name, matrix) in [("vertical", vwalls), ("horizontal", hwalls)] {
            for (x, column) in matrix.iter().enumerate() {
                ensure!(
                    column.len() == size,
                    "The {} wall matrix must be {}x{}, column {} has {} entries",
                    name,
                    size,
                    size,
                    x,
                    column.len()
                );
            }
        }

        let mut board = Self::new(size, pawns)?;

        for (x, column) in vwalls.iter().enumerate() {
            ensure!(
                x + 1 < size || column.iter().all(|set| !set),
                "Vertical wall segment on the east edge of the board"
            );

            for (start, len) in runs(column.iter().copied()) {
                ensure!(
                    len % 2 == 0,
                    "Vertical wall segments at column {} rows {}..{} do not form walls of length two",
                    x,
                    start,
                    start + len
                );

                for y in (start..start + len).step_by(2) {
                    board.set_wall(WallSlot::vertical(x, y), true);
                }
            }
        }

        for y in 0..size {
            let row = hwalls.iter().map(|column| column[y]);
            ensure!(
                y + 1 < size || !row.clone().any(|set| set),
                "Horizontal wall segment on the north edge of the board"
            );

            for (start, len) in runs(row) {
                ensure!(
                    len % 2 == 0,
                    "Horizontal wall segments at row {} columns {}..{} do not form walls of length two",
                    y,
                    start,
                    start + len
                );

                for x in (start..start + len).step_by(2) {
                    board.set_wall(WallSlot::horizontal(x, y), true);
                }
            }
        }

        let crossing = board
            .anchors(WallOrientation::Vertical)
            .find(|slot| board.has_wall(WallSlot::horizontal(slot.coord.x, slot.coord.y)));
        if let Some(slot) = crossing {
            bail!("Vertical and horizontal walls cross at {}", slot.coord);
        }

        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn pawn(&self, player: Player) -> &Pawn {
        &self.pawns[player.index()]
    }

    pub fn pawns(&self) -> &[Pawn; 2] {
        &self.pawns
    }

    pub fn has_wall(&self, slot: WallSlot) -> bool {
        self.wall_at(
            slot.orientation,
            slot.coord.x as isize,
            slot.coord.y as isize,
        )
    }

    /// Whether a wall is anchored at `(x, y)`. Anchors off the board are never set.
    pub fn wall_at(&self, orientation: WallOrientation, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 || x as usize >= self.size || y as usize >= self.size {
            return false;
        }

        let index = x as usize * self.size + y as usize;
        match orientation {
            WallOrientation::Vertical => self.vertical[index],
            WallOrientation::Horizontal => self.horizontal[index],
        }
    }

    /// Whether a step from `coord` in `direction` is stopped by a wall or the edge of the board.
    pub fn is_blocked(&self, coord: Coordinate, direction: Direction) -> bool {
        if !coord.is_on_board(self.size) {
            return true;
        }

        let n = self.size as isize;
        let (x, y) = (coord.x as isize, coord.y as isize);
        let v = |x, y| self.wall_at(WallOrientation::Vertical, x, y);
        let h = |x, y| self.wall_at(WallOrientation::Horizontal, x, y);

        match direction {
            Direction::North => y + 1 >= n || h(x, y) || h(x - 1, y),
            Direction::South => y == 0 || h(x, y - 1) || h(x - 1, y - 1),
            Direction::East => x + 1 >= n || v(x, y) || v(x, y - 1),
            Direction::West => x == 0 || v(x - 1, y) || v(x - 1, y - 1),
        }
    }

    /// Cells reachable from `coord` in a single unobstructed step, ignoring pawns.
    pub fn open_neighbours(&self, coord: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |direction| !self.is_blocked(coord, *direction))
            .filter_map(move |direction| coord.step(direction, self.size))
    }

    /// Whether a wall could sit at `slot` without overlapping or crossing any placed wall.
    pub fn is_structurally_free(&self, slot: WallSlot) -> bool {
        if !slot.is_in_range(self.size) {
            return false;
        }

        let (x, y) = (slot.coord.x as isize, slot.coord.y as isize);
        let (dx, dy) = slot.orientation.along();

        !self.wall_at(slot.orientation, x, y)
            && !self.wall_at(slot.orientation, x - dx, y - dy)
            && !self.wall_at(slot.orientation, x + dx, y + dy)
            && !self.wall_at(slot.orientation.perpendicular(), x, y)
    }

    /// Places a wall after checking it fits. Reachability and wall budgets are the caller's concern.
    pub fn place_wall(&mut self, slot: WallSlot) -> Result<()> {
        ensure!(
            slot.is_in_range(self.size),
            "Wall {} is outside of a board of size {}",
            slot,
            self.size
        );
        ensure!(
            self.is_structurally_free(slot),
            "Wall {} overlaps or crosses a placed wall",
            slot
        );

        self.set_wall(slot, true);

        Ok(())
    }

    pub(crate) fn set_wall(&mut self, slot: WallSlot, value: bool) {
        let index = slot.coord.index(self.size);
        match slot.orientation {
            WallOrientation::Vertical => self.vertical[index] = value,
            WallOrientation::Horizontal => self.horizontal[index] = value,
        }
    }

    pub fn move_pawn(&mut self, player: Player, coord: Coordinate) -> Result<()> {
        ensure!(
            coord.is_on_board(self.size),
            "Cannot move pawn off the board to ({}, {})",
            coord.x,
            coord.y
        );
        ensure!(
            self.pawn(player.opponent()).coord != coord,
            "Cannot move pawn onto the opponent at {}",
            coord
        );

        self.pawns[player.index()].coord = coord;

        Ok(())
    }

    pub fn spend_wall(&mut self, player: Player) -> Result<()> {
        let pawn = &mut self.pawns[player.index()];
        ensure!(pawn.walls_remaining > 0, "{:?} has no walls remaining", player);

        pawn.walls_remaining -= 1;

        Ok(())
    }

    /// All placed walls, vertical before horizontal, `x` major.
    pub fn walls(&self) -> impl Iterator<Item = WallSlot> + '_ {
        self.anchors(WallOrientation::Vertical)
            .chain(self.anchors(WallOrientation::Horizontal))
    }

    fn anchors(&self, orientation: WallOrientation) -> impl Iterator<Item = WallSlot> + '_ {
        let size = self.size;
        let plane = match orientation {
            WallOrientation::Vertical => &self.vertical,
            WallOrientation::Horizontal => &self.horizontal,
        };

        plane
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .map(move |(index, _)| WallSlot {
                coord: Coordinate::from_index(index, size),
                orientation,
            })
    }

    pub fn vertical_segments(&self) -> Vec<Vec<bool>> {
        self.segments(WallOrientation::Vertical)
    }

    pub fn horizontal_segments(&self) -> Vec<Vec<bool>> {
        self.segments(WallOrientation::Horizontal)
    }

    fn segments(&self, orientation: WallOrientation) -> Vec<Vec<bool>> {
        let mut segments = vec![vec![false; self.size]; self.size];
        let (dx, dy) = orientation.along();

        for slot in self.walls().filter(|slot| slot.orientation == orientation) {
            let Coordinate { x, y } = slot.coord;
            segments[x][y] = true;
            segments[x + dx as usize][y + dy as usize] = true;
        }

        segments
    }

    /// The board seen from the other side of the table. Each player keeps their pawn, goal and budget.
    pub fn rotate(&self) -> Self {
        let size = self.size;
        let mut rotated = Self {
            size,
            vertical: vec![false; size * size],
            horizontal: vec![false; size * size],
            pawns: self.pawns.map(|pawn| Pawn {
                coord: pawn.coord.rotate(size),
                goal_row: size - 1 - pawn.goal_row,
                ..pawn
            }),
        };

        for slot in self.walls() {
            if let Some(slot) = slot.rotate(size) {
                rotated.set_wall(slot, true);
            }
        }

        rotated
    }

    /// The rotated board with the players swapping seats, so each player sees the position the other one had.
    pub fn flip(&self) -> Self {
        let mut flipped = self.rotate();
        flipped.pawns.swap(0, 1);
        flipped
    }
}

impl Default for Board {
    /// The standard 9x9 starting position with 10 walls each.
    fn default() -> Self {
        let size = DEFAULT_BOARD_SIZE;
        let middle = size / 2;

        Self {
            size,
            vertical: vec![false; size * size],
            horizontal: vec![false; size * size],
            pawns: [
                Pawn::new(Coordinate::new(middle, 0), size - 1, NUM_WALLS_PER_PLAYER),
                Pawn::new(Coordinate::new(middle, size - 1), 0, NUM_WALLS_PER_PLAYER),
            ],
        }
    }
}

/// Maximal runs of set flags as `(start, len)`.
fn runs(flags: impl Iterator<Item = bool>) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start = None;
    let mut len = 0;

    for (i, set) in flags.enumerate() {
        match (set, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                runs.push((s, i - s));
                start = None;
            }
            _ => {}
        }
        len = i + 1;
    }

    if let Some(s) = start {
        runs.push((s, len - s));
    }

    runs
}
