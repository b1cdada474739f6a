use super::constants::NUM_PAWN_ACTIONS;
use super::coordinate::{Coordinate, Direction};
use anyhow::{anyhow, bail, ensure};
use std::fmt::{self};
use std::str::FromStr;

/// The twelve pawn actions, in the order they occupy the head of the legal-action vector.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum PawnAction {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
    JumpNorth = 4,
    JumpSouth = 5,
    JumpEast = 6,
    JumpWest = 7,
    JumpNorthEast = 8,
    JumpNorthWest = 9,
    JumpSouthEast = 10,
    JumpSouthWest = 11,
}

impl PawnAction {
    pub const ALL: [PawnAction; NUM_PAWN_ACTIONS] = [
        PawnAction::North,
        PawnAction::South,
        PawnAction::East,
        PawnAction::West,
        PawnAction::JumpNorth,
        PawnAction::JumpSouth,
        PawnAction::JumpEast,
        PawnAction::JumpWest,
        PawnAction::JumpNorthEast,
        PawnAction::JumpNorthWest,
        PawnAction::JumpSouthEast,
        PawnAction::JumpSouthWest,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn step(direction: Direction) -> Self {
        match direction {
            Direction::North => PawnAction::North,
            Direction::South => PawnAction::South,
            Direction::East => PawnAction::East,
            Direction::West => PawnAction::West,
        }
    }

    pub fn jump(direction: Direction) -> Self {
        match direction {
            Direction::North => PawnAction::JumpNorth,
            Direction::South => PawnAction::JumpSouth,
            Direction::East => PawnAction::JumpEast,
            Direction::West => PawnAction::JumpWest,
        }
    }

    /// The diagonal jump taken when approaching the opponent moving `forward` and leaving it towards `side`.
    pub fn diagonal(forward: Direction, side: Direction) -> Self {
        use Direction::*;

        match (forward, side) {
            (North, East) | (East, North) => PawnAction::JumpNorthEast,
            (North, West) | (West, North) => PawnAction::JumpNorthWest,
            (South, East) | (East, South) => PawnAction::JumpSouthEast,
            (South, West) | (West, South) => PawnAction::JumpSouthWest,
            _ => unreachable!("{:?} is not perpendicular to {:?}", side, forward),
        }
    }

    /// Displacement of the pawn in cells.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            PawnAction::North => (0, 1),
            PawnAction::South => (0, -1),
            PawnAction::East => (1, 0),
            PawnAction::West => (-1, 0),
            PawnAction::JumpNorth => (0, 2),
            PawnAction::JumpSouth => (0, -2),
            PawnAction::JumpEast => (2, 0),
            PawnAction::JumpWest => (-2, 0),
            PawnAction::JumpNorthEast => (1, 1),
            PawnAction::JumpNorthWest => (-1, 1),
            PawnAction::JumpSouthEast => (1, -1),
            PawnAction::JumpSouthWest => (-1, -1),
        }
    }

    /// The same action seen from the other side of the table.
    pub fn rotate(&self) -> Self {
        match self {
            PawnAction::North => PawnAction::South,
            PawnAction::South => PawnAction::North,
            PawnAction::East => PawnAction::West,
            PawnAction::West => PawnAction::East,
            PawnAction::JumpNorth => PawnAction::JumpSouth,
            PawnAction::JumpSouth => PawnAction::JumpNorth,
            PawnAction::JumpEast => PawnAction::JumpWest,
            PawnAction::JumpWest => PawnAction::JumpEast,
            PawnAction::JumpNorthEast => PawnAction::JumpSouthWest,
            PawnAction::JumpNorthWest => PawnAction::JumpSouthEast,
            PawnAction::JumpSouthEast => PawnAction::JumpNorthWest,
            PawnAction::JumpSouthWest => PawnAction::JumpNorthEast,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PawnAction::North => "n",
            PawnAction::South => "s",
            PawnAction::East => "e",
            PawnAction::West => "w",
            PawnAction::JumpNorth => "jn",
            PawnAction::JumpSouth => "js",
            PawnAction::JumpEast => "je",
            PawnAction::JumpWest => "jw",
            PawnAction::JumpNorthEast => "jne",
            PawnAction::JumpNorthWest => "jnw",
            PawnAction::JumpSouthEast => "jse",
            PawnAction::JumpSouthWest => "jsw",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum WallOrientation {
    Vertical,
    Horizontal,
}

impl WallOrientation {
    pub const ALL: [WallOrientation; 2] = [WallOrientation::Vertical, WallOrientation::Horizontal];

    pub fn perpendicular(&self) -> Self {
        match self {
            WallOrientation::Vertical => WallOrientation::Horizontal,
            WallOrientation::Horizontal => WallOrientation::Vertical,
        }
    }

    /// Step between the anchors of two walls lying end to end.
    pub fn along(&self) -> (isize, isize) {
        match self {
            WallOrientation::Vertical => (0, 1),
            WallOrientation::Horizontal => (1, 0),
        }
    }

    fn suffix(&self) -> char {
        match self {
            WallOrientation::Vertical => 'v',
            WallOrientation::Horizontal => 'h',
        }
    }
}

/// The anchor of a two cell long wall.
///
/// A vertical wall anchored at `(x, y)` blocks movement east out of `(x, y)` and `(x, y + 1)`.
/// A horizontal wall anchored at `(x, y)` blocks movement north out of `(x, y)` and `(x + 1, y)`.
/// Both cross the corner shared by `(x, y)` and `(x + 1, y + 1)`, so only anchors with `x, y < size - 1` lie on the board.
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct WallSlot {
    pub coord: Coordinate,
    pub orientation: WallOrientation,
}

impl WallSlot {
    pub fn new(orientation: WallOrientation, x: usize, y: usize) -> Self {
        Self {
            coord: Coordinate::new(x, y),
            orientation,
        }
    }

    pub fn vertical(x: usize, y: usize) -> Self {
        Self::new(WallOrientation::Vertical, x, y)
    }

    pub fn horizontal(x: usize, y: usize) -> Self {
        Self::new(WallOrientation::Horizontal, x, y)
    }

    pub fn is_in_range(&self, size: usize) -> bool {
        self.coord.x + 1 < size && self.coord.y + 1 < size
    }

    pub fn rotate(&self, size: usize) -> Option<Self> {
        if !self.is_in_range(size) {
            return None;
        }

        Some(Self::new(
            self.orientation,
            size - 2 - self.coord.x,
            size - 2 - self.coord.y,
        ))
    }
}

impl fmt::Display for WallSlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.coord, self.orientation.suffix())
    }
}

impl fmt::Debug for WallSlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for WallSlot {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let orientation = match s.chars().last() {
            Some('v') => WallOrientation::Vertical,
            Some('h') => WallOrientation::Horizontal,
            _ => bail!("Invalid wall '{}', expected a trailing 'v' or 'h'", s),
        };

        let coord = s[..s.len() - 1].parse::<Coordinate>()?;

        Ok(Self { coord, orientation })
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub enum Action {
    MovePawn(PawnAction),
    PlaceWall(WallSlot),
}

impl Action {
    /// Position of the action in the legal-action vector of a board of the given size.
    ///
    /// Pawn actions take the first twelve entries, followed by a `size * size` plane of vertical anchors and a
    /// `size * size` plane of horizontal anchors, each flattened `x` major.
    pub fn to_vector_index(&self, size: usize) -> usize {
        match self {
            Action::MovePawn(pawn_action) => pawn_action.index(),
            Action::PlaceWall(slot) => {
                let plane = match slot.orientation {
                    WallOrientation::Vertical => 0,
                    WallOrientation::Horizontal => 1,
                };

                NUM_PAWN_ACTIONS + plane * size * size + slot.coord.index(size)
            }
        }
    }

    pub fn from_vector_index(index: usize, size: usize) -> anyhow::Result<Self> {
        let plane_size = size * size;
        ensure!(
            index < NUM_PAWN_ACTIONS + 2 * plane_size,
            "Action index {} is outside of the action vector for a board of size {}",
            index,
            size
        );

        if let Some(pawn_action) = PawnAction::from_index(index) {
            return Ok(Action::MovePawn(pawn_action));
        }

        let wall_index = index - NUM_PAWN_ACTIONS;
        let orientation = if wall_index < plane_size {
            WallOrientation::Vertical
        } else {
            WallOrientation::Horizontal
        };
        let coord = Coordinate::from_index(wall_index % plane_size, size);

        Ok(Action::PlaceWall(WallSlot { coord, orientation }))
    }

    pub fn rotate(&self, size: usize) -> Option<Self> {
        match self {
            Action::MovePawn(pawn_action) => Some(Action::MovePawn(pawn_action.rotate())),
            Action::PlaceWall(slot) => slot.rotate(size).map(Action::PlaceWall),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::MovePawn(pawn_action) => write!(f, "{}", pawn_action.name()),
            Action::PlaceWall(slot) => write!(f, "{}", slot),
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().any(|c| c.is_ascii_digit()) {
            return Ok(Action::PlaceWall(s.parse()?));
        }

        PawnAction::ALL
            .iter()
            .find(|pawn_action| pawn_action.name() == s)
            .map(|pawn_action| Action::MovePawn(*pawn_action))
            .ok_or_else(|| anyhow!("Invalid action '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pawn_action_indices_are_fixed() {
        for (i, pawn_action) in PawnAction::ALL.iter().enumerate() {
            assert_eq!(pawn_action.index(), i);
            assert_eq!(PawnAction::from_index(i), Some(*pawn_action));
        }

        assert_eq!(PawnAction::from_index(NUM_PAWN_ACTIONS), None);
    }

    #[test]
    fn test_pawn_action_rotate_inverts_offset() {
        for pawn_action in PawnAction::ALL {
            let (dx, dy) = pawn_action.offset();

            assert_eq!(pawn_action.rotate().offset(), (-dx, -dy));
            assert_eq!(pawn_action.rotate().rotate(), pawn_action);
        }
    }

    #[test]
    fn test_diagonal_is_symmetric_in_approach() {
        assert_eq!(
            PawnAction::diagonal(Direction::North, Direction::East),
            PawnAction::JumpNorthEast
        );
        assert_eq!(
            PawnAction::diagonal(Direction::East, Direction::North),
            PawnAction::JumpNorthEast
        );
        assert_eq!(
            PawnAction::diagonal(Direction::West, Direction::South),
            PawnAction::JumpSouthWest
        );
        assert_eq!(
            PawnAction::diagonal(Direction::South, Direction::West),
            PawnAction::JumpSouthWest
        );
    }

    #[test]
    fn test_diagonal_offset_is_sum_of_directions() {
        for forward in Direction::ALL {
            for side in forward.perpendicular() {
                let (fx, fy) = forward.offset();
                let (sx, sy) = side.offset();

                assert_eq!(
                    PawnAction::diagonal(forward, side).offset(),
                    (fx + sx, fy + sy)
                );
            }
        }
    }

    #[test]
    fn test_wall_slot_in_range() {
        assert!(WallSlot::vertical(0, 0).is_in_range(9));
        assert!(WallSlot::vertical(7, 7).is_in_range(9));
        assert!(!WallSlot::vertical(8, 0).is_in_range(9));
        assert!(!WallSlot::horizontal(0, 8).is_in_range(9));
    }

    #[test]
    fn test_wall_slot_rotate() {
        assert_eq!(
            WallSlot::vertical(0, 0).rotate(9),
            Some(WallSlot::vertical(7, 7))
        );
        assert_eq!(
            WallSlot::horizontal(3, 1).rotate(9),
            Some(WallSlot::horizontal(4, 6))
        );
        assert_eq!(WallSlot::horizontal(8, 1).rotate(9), None);
    }

    #[test]
    fn test_parse_pawn_actions() {
        for pawn_action in PawnAction::ALL {
            assert_eq!(
                pawn_action.name().parse::<Action>().unwrap(),
                Action::MovePawn(pawn_action)
            );
        }
    }

    #[test]
    fn test_parse_walls() {
        assert_eq!(
            "d3v".parse::<Action>().unwrap(),
            Action::PlaceWall(WallSlot::vertical(3, 2))
        );
        assert_eq!(
            "a1h".parse::<Action>().unwrap(),
            Action::PlaceWall(WallSlot::horizontal(0, 0))
        );
    }

    #[test]
    fn test_parse_invalid_actions() {
        assert!("x".parse::<Action>().is_err());
        assert!("d3".parse::<Action>().is_err());
        assert!("d3x".parse::<Action>().is_err());
        assert!("3v".parse::<Action>().is_err());
        assert!("".parse::<Action>().is_err());
    }

    #[test]
    fn test_vector_index_layout() {
        assert_eq!(Action::MovePawn(PawnAction::North).to_vector_index(9), 0);
        assert_eq!(
            Action::MovePawn(PawnAction::JumpSouthWest).to_vector_index(9),
            11
        );
        assert_eq!(
            Action::PlaceWall(WallSlot::vertical(0, 0)).to_vector_index(9),
            12
        );
        assert_eq!(
            Action::PlaceWall(WallSlot::vertical(1, 2)).to_vector_index(9),
            12 + 9 + 2
        );
        assert_eq!(
            Action::PlaceWall(WallSlot::horizontal(0, 0)).to_vector_index(9),
            12 + 81
        );
        assert_eq!(
            Action::PlaceWall(WallSlot::horizontal(8, 8)).to_vector_index(9),
            12 + 81 * 2 - 1
        );
    }

    #[test]
    fn test_vector_index_round_trip() {
        for size in [3, 5, 9] {
            for index in 0..NUM_PAWN_ACTIONS + 2 * size * size {
                let action = Action::from_vector_index(index, size).unwrap();

                assert_eq!(action.to_vector_index(size), index);
            }
        }
    }

    #[test]
    fn test_vector_index_out_of_range() {
        assert!(Action::from_vector_index(12 + 2 * 81, 9).is_err());
    }
}
