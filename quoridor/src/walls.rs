use super::action::{WallOrientation, WallSlot};
use super::board::Board;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Candidate {
    /// The slot overlaps or crosses a placed wall, or lies off the board.
    Occupied,
    /// The wall touches the existing barriers at fewer than two points and cannot close a region.
    Free,
    /// The wall could close a region, so reachability has to be checked.
    NeedsProbe,
}

pub fn classify(board: &Board, slot: WallSlot) -> Candidate {
    if !board.is_structurally_free(slot) {
        return Candidate::Occupied;
    }

    if connection_count(board, slot) < 2 {
        Candidate::Free
    } else {
        Candidate::NeedsProbe
    }
}

/// Counts the points of the wall, its two ends and its middle, that already touch a placed wall or the edge of the
/// board.
///
/// A region can only be sealed off by a wall that joins the existing barriers at two distinct points, since the new
/// wall has to close a cycle. A count below two therefore leaves every path intact.
pub fn connection_count(board: &Board, slot: WallSlot) -> u8 {
    let n = board.size() as isize;
    let (x, y) = (slot.coord.x as isize, slot.coord.y as isize);
    let v = |x, y| board.wall_at(WallOrientation::Vertical, x, y);
    let h = |x, y| board.wall_at(WallOrientation::Horizontal, x, y);

    let (start, middle, end) = match slot.orientation {
        WallOrientation::Vertical => (
            y == 0 || v(x, y - 2) || h(x - 1, y - 1) || h(x, y - 1) || h(x + 1, y - 1),
            h(x - 1, y) || h(x + 1, y),
            y + 2 == n || v(x, y + 2) || h(x - 1, y + 1) || h(x, y + 1) || h(x + 1, y + 1),
        ),
        WallOrientation::Horizontal => (
            x == 0 || h(x - 2, y) || v(x - 1, y - 1) || v(x - 1, y) || v(x - 1, y + 1),
            v(x, y - 1) || v(x, y + 1),
            x + 2 == n || h(x + 2, y) || v(x + 1, y - 1) || v(x + 1, y) || v(x + 1, y + 1),
        ),
    };

    start as u8 + middle as u8 + end as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_board() -> Board {
        Board::standard(9, 10).unwrap()
    }

    #[test]
    fn test_open_board_is_free() {
        let board = empty_board();

        assert_eq!(connection_count(&board, WallSlot::vertical(3, 3)), 0);
        assert_eq!(classify(&board, WallSlot::vertical(3, 3)), Candidate::Free);
        assert_eq!(
            classify(&board, WallSlot::horizontal(4, 4)),
            Candidate::Free
        );
    }

    #[test]
    fn test_board_edge_counts_once() {
        let board = empty_board();

        assert_eq!(connection_count(&board, WallSlot::vertical(3, 0)), 1);
        assert_eq!(connection_count(&board, WallSlot::vertical(3, 7)), 1);
        assert_eq!(connection_count(&board, WallSlot::horizontal(0, 3)), 1);
        assert_eq!(connection_count(&board, WallSlot::horizontal(7, 3)), 1);

        // A vertical wall beside the west edge does not touch it.
        assert_eq!(connection_count(&board, WallSlot::vertical(0, 3)), 0);
    }

    #[test]
    fn test_edge_and_wall_need_probe() {
        let mut board = empty_board();
        board.place_wall(WallSlot::vertical(1, 3)).unwrap();

        assert_eq!(connection_count(&board, WallSlot::horizontal(0, 3)), 2);
        assert_eq!(
            classify(&board, WallSlot::horizontal(0, 3)),
            Candidate::NeedsProbe
        );
    }

    #[test]
    fn test_structural_rejections() {
        let mut board = empty_board();
        board.place_wall(WallSlot::vertical(3, 3)).unwrap();

        assert_eq!(classify(&board, WallSlot::vertical(3, 3)), Candidate::Occupied);
        assert_eq!(classify(&board, WallSlot::vertical(3, 2)), Candidate::Occupied);
        assert_eq!(classify(&board, WallSlot::vertical(3, 4)), Candidate::Occupied);
        assert_eq!(
            classify(&board, WallSlot::horizontal(3, 3)),
            Candidate::Occupied
        );
        assert_eq!(classify(&board, WallSlot::vertical(8, 3)), Candidate::Occupied);
        assert_eq!(
            classify(&board, WallSlot::horizontal(3, 8)),
            Candidate::Occupied
        );
    }

    #[test]
    fn test_colinear_extension_connects() {
        let mut board = empty_board();
        board.place_wall(WallSlot::vertical(3, 3)).unwrap();

        assert_eq!(connection_count(&board, WallSlot::vertical(3, 5)), 1);
        assert_eq!(connection_count(&board, WallSlot::vertical(3, 1)), 1);
        assert_eq!(connection_count(&board, WallSlot::vertical(3, 6)), 0);
    }

    #[test]
    fn test_perpendicular_contacts() {
        let mut board = empty_board();
        board.place_wall(WallSlot::vertical(3, 3)).unwrap();

        // Horizontal walls whose end meets the vertical wall's middle.
        assert_eq!(connection_count(&board, WallSlot::horizontal(2, 3)), 1);
        assert_eq!(connection_count(&board, WallSlot::horizontal(4, 3)), 1);

        // Horizontal walls whose middle meets the vertical wall's ends.
        assert_eq!(connection_count(&board, WallSlot::horizontal(3, 2)), 1);
        assert_eq!(connection_count(&board, WallSlot::horizontal(3, 4)), 1);

        // Horizontal walls whose end meets the vertical wall's ends.
        assert_eq!(connection_count(&board, WallSlot::horizontal(4, 4)), 1);
        assert_eq!(connection_count(&board, WallSlot::horizontal(2, 2)), 1);
    }

    #[test]
    fn test_two_contacts_need_probe() {
        let mut board = empty_board();
        board.place_wall(WallSlot::vertical(3, 3)).unwrap();
        board.place_wall(WallSlot::vertical(5, 3)).unwrap();

        // Bridges the middles of both vertical walls.
        assert_eq!(connection_count(&board, WallSlot::horizontal(4, 3)), 2);
        assert_eq!(
            classify(&board, WallSlot::horizontal(4, 3)),
            Candidate::NeedsProbe
        );
    }

    #[test]
    fn test_counts_are_symmetric_under_rotation() {
        let mut board = empty_board();
        board.place_wall(WallSlot::vertical(0, 2)).unwrap();
        board.place_wall(WallSlot::horizontal(2, 5)).unwrap();
        board.place_wall(WallSlot::vertical(6, 6)).unwrap();
        let rotated = board.rotate();

        for orientation in WallOrientation::ALL {
            for x in 0..8 {
                for y in 0..8 {
                    let slot = WallSlot::new(orientation, x, y);
                    let mirrored = slot.rotate(9).unwrap();

                    assert_eq!(
                        classify(&board, slot),
                        classify(&rotated, mirrored),
                        "{}",
                        slot
                    );
                    assert_eq!(
                        connection_count(&board, slot),
                        connection_count(&rotated, mirrored),
                        "{}",
                        slot
                    );
                }
            }
        }
    }
}
