use super::constants::{ASCII_LETTER_A, MAX_BOARD_SIZE};
use anyhow::{anyhow, bail};
use std::fmt::{self};
use std::str::FromStr;

/// A cell of the board.
///
/// `x` is the column, growing to the east. `y` is the row, growing to the north. The text form writes the column as a
/// letter and the row starting from 1, so `(0, 0)` is `a1` and `(4, 8)` is `e9`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn is_on_board(&self, size: usize) -> bool {
        self.x < size && self.y < size
    }

    pub fn step(&self, direction: Direction, size: usize) -> Option<Self> {
        let (dx, dy) = direction.offset();
        self.offset(dx, dy, size)
    }

    pub fn offset(&self, dx: isize, dy: isize, size: usize) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;

        (x < size && y < size).then_some(Self { x, y })
    }

    /// The same cell seen from the other side of the table.
    pub fn rotate(&self, size: usize) -> Self {
        Self {
            x: size - 1 - self.x,
            y: size - 1 - self.y,
        }
    }

    /// Index into a flattened `size * size` plane, `x` major.
    pub fn index(&self, size: usize) -> usize {
        self.x * size + self.y
    }

    pub fn from_index(index: usize, size: usize) -> Self {
        assert!(
            index < size * size,
            "Coordinate index must be less than {}",
            size * size
        );

        Self {
            x: index / size,
            y: index % size,
        }
    }

    pub fn col(&self) -> char {
        (self.x as u8 + ASCII_LETTER_A) as char
    }

    pub fn row(&self) -> usize {
        self.y + 1
    }
}

impl FromStr for Coordinate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col = chars
            .next()
            .filter(|c| c.is_ascii_lowercase())
            .ok_or_else(|| anyhow!("Invalid coordinate '{}', expected a column letter", s))?;

        let row = chars
            .as_str()
            .parse::<usize>()
            .map_err(|_| anyhow!("Invalid coordinate '{}', expected a row number", s))?;

        let x = (col as u8 - ASCII_LETTER_A) as usize;
        if row == 0 || row > MAX_BOARD_SIZE || x >= MAX_BOARD_SIZE {
            bail!("Invalid coordinate '{}', out of range", s);
        }

        Ok(Coordinate::new(x, row - 1))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.col(), self.row())
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// The two directions at right angles, east before west and north before south.
    pub fn perpendicular(&self) -> [Direction; 2] {
        match self {
            Direction::North | Direction::South => [Direction::East, Direction::West],
            Direction::East | Direction::West => [Direction::North, Direction::South],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_coords_iter(size: usize) -> impl Iterator<Item = Coordinate> {
        (0..size * size).map(move |i| Coordinate::from_index(i, size))
    }

    #[test]
    fn test_parse_a1() {
        let coord = "a1".parse::<Coordinate>().unwrap();

        assert_eq!(coord, Coordinate::new(0, 0));
    }

    #[test]
    fn test_parse_e1() {
        let coord = "e1".parse::<Coordinate>().unwrap();

        assert_eq!(coord, Coordinate::new(4, 0));
    }

    #[test]
    fn test_parse_i9() {
        let coord = "i9".parse::<Coordinate>().unwrap();

        assert_eq!(coord, Coordinate::new(8, 8));
    }

    #[test]
    fn test_parse_two_digit_row() {
        let coord = "k11".parse::<Coordinate>().unwrap();

        assert_eq!(coord, Coordinate::new(10, 10));
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<Coordinate>().is_err());
        assert!("a".parse::<Coordinate>().is_err());
        assert!("a0".parse::<Coordinate>().is_err());
        assert!("1a".parse::<Coordinate>().is_err());
        assert!("A1".parse::<Coordinate>().is_err());
        assert!("z1".parse::<Coordinate>().is_err());
        assert!("e1v".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for coord in all_coords_iter(9) {
            assert_eq!(coord.to_string().parse::<Coordinate>().unwrap(), coord);
        }
    }

    #[test]
    fn test_step_north_from_e1() {
        let coord = "e1".parse::<Coordinate>().unwrap();

        assert_eq!(
            coord.step(Direction::North, 9),
            Some("e2".parse::<Coordinate>().unwrap())
        );
    }

    #[test]
    fn test_step_off_board() {
        let corner = "a1".parse::<Coordinate>().unwrap();

        assert_eq!(corner.step(Direction::South, 9), None);
        assert_eq!(corner.step(Direction::West, 9), None);

        let corner = "i9".parse::<Coordinate>().unwrap();

        assert_eq!(corner.step(Direction::North, 9), None);
        assert_eq!(corner.step(Direction::East, 9), None);
    }

    #[test]
    fn test_rotate_coordinate_a1() {
        let coord = "a1".parse::<Coordinate>().unwrap();
        let expected = "i9".parse::<Coordinate>().unwrap();

        assert_eq!(coord.rotate(9), expected);
    }

    #[test]
    fn test_rotate_coordinate_e5() {
        let coord = "e5".parse::<Coordinate>().unwrap();

        assert_eq!(coord.rotate(9), coord);
    }

    #[test]
    fn test_rotate_coordinate_d3() {
        let coord = "d3".parse::<Coordinate>().unwrap();
        let expected = "f7".parse::<Coordinate>().unwrap();

        assert_eq!(coord.rotate(9), expected);
    }

    #[test]
    fn test_rotate_coordinate_double_rotate() {
        for coord in all_coords_iter(7) {
            assert_eq!(coord.rotate(7).rotate(7), coord);
        }
    }

    #[test]
    fn test_coordinate_to_from_index_all() {
        for (i, coord) in all_coords_iter(9).enumerate() {
            assert_eq!(coord.index(9), i);
            assert_eq!(Coordinate::from_index(coord.index(9), 9), coord);
        }
    }

    #[test]
    fn test_direction_opposite_offsets_cancel() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();
            let (ox, oy) = direction.opposite().offset();

            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn test_direction_perpendicular() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();

            for side in direction.perpendicular() {
                let (sx, sy) = side.offset();
                assert_eq!(dx * sx + dy * sy, 0);
            }
        }
    }
}
