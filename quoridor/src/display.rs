use std::fmt::{self, Display, Formatter};

use crate::{Board, Coordinate, Direction, GameState, Player};

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.size();
        let player_1 = self.pawn(Player::One);
        let player_2 = self.pawn(Player::Two);

        writeln!(f)?;
        write!(f, "   +")?;
        for _ in 0..size {
            write!(f, "---+")?;
        }
        writeln!(f)?;

        for y in (0..size).rev() {
            write!(f, "{:>2} |", y + 1)?;

            for x in 0..size {
                let coord = Coordinate::new(x, y);
                let p = if player_1.coord == coord {
                    "1"
                } else if player_2.coord == coord {
                    "2"
                } else {
                    " "
                };
                let w = if x + 1 < size && self.is_blocked(coord, Direction::East) {
                    "█"
                } else {
                    "|"
                };
                write!(f, " {} {}", p, w)?;
            }

            writeln!(f)?;
            write!(f, "   +")?;

            for x in 0..size {
                let coord = Coordinate::new(x, y);
                let w = if y > 0 && self.is_blocked(coord, Direction::South) {
                    "███"
                } else {
                    "---"
                };
                write!(f, "{}+", w)?;
            }

            writeln!(f)?;
        }

        write!(f, "    ")?;
        for x in 0..size {
            write!(f, " {}  ", Coordinate::new(x, 0).col())?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "  P1: {} walls   P2: {} walls",
            player_1.walls_remaining, player_2.walls_remaining
        )
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board())?;
        writeln!(
            f,
            "  Move {}, {:?} to move",
            self.move_number(),
            self.player_to_move()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WallSlot;

    #[test]
    fn test_display_initial() {
        let board = Board::standard(3, 1).unwrap();
        let expected = [
            "",
            "   +---+---+---+",
            " 3 |   | 2 |   |",
            "   +---+---+---+",
            " 2 |   |   |   |",
            "   +---+---+---+",
            " 1 |   | 1 |   |",
            "   +---+---+---+",
            "     a   b   c  ",
            "  P1: 1 walls   P2: 1 walls",
            "",
        ]
        .join("\n");

        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_display_walls() {
        let mut board = Board::standard(3, 1).unwrap();
        board.place_wall(WallSlot::vertical(0, 1)).unwrap();
        board.place_wall(WallSlot::horizontal(1, 0)).unwrap();
        let lines = board.to_string();
        let lines = lines.lines().collect::<Vec<_>>();

        assert_eq!(lines[2], " 3 |   █ 2 |   |");
        assert_eq!(lines[4], " 2 |   █   |   |");
        assert_eq!(lines[5], "   +---+███+███+");
        assert_eq!(lines[6], " 1 |   | 1 |   |");
    }

    #[test]
    fn test_display_game_state() {
        let game_state = GameState::initial();

        assert!(game_state.to_string().ends_with("  Move 1, One to move\n"));
    }
}
