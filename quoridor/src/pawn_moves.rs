use super::action::PawnAction;
use super::board::{Board, Player};
use super::constants::NUM_PAWN_ACTIONS;
use super::coordinate::{Coordinate, Direction};
use super::oracle::distances_to_row;

/// The pawn actions available to `player`, indexed by [`PawnAction::index`].
///
/// A step onto the opponent becomes a jump over it. When a wall or the edge stops the jump, the pawn may instead leave
/// the opponent's cell sideways, so up to two diagonal jumps can be set together.
pub fn pawn_actions(board: &Board, player: Player) -> [bool; NUM_PAWN_ACTIONS] {
    let mut actions = [false; NUM_PAWN_ACTIONS];
    let size = board.size();
    let coord = board.pawn(player).coord;
    let opponent = board.pawn(player.opponent()).coord;

    for direction in Direction::ALL {
        if board.is_blocked(coord, direction) {
            continue;
        }

        if coord.step(direction, size) != Some(opponent) {
            actions[PawnAction::step(direction).index()] = true;
            continue;
        }

        if !board.is_blocked(opponent, direction) {
            actions[PawnAction::jump(direction).index()] = true;
            continue;
        }

        for side in direction.perpendicular() {
            if !board.is_blocked(opponent, side) {
                actions[PawnAction::diagonal(direction, side).index()] = true;
            }
        }
    }

    actions
}

/// Where the pawn of `player` lands after taking `action`, or `None` if that would leave the board.
pub fn destination(board: &Board, player: Player, action: PawnAction) -> Option<Coordinate> {
    let (dx, dy) = action.offset();
    board.pawn(player).coord.offset(dx, dy, board.size())
}

/// For every legal pawn action of `player`, the number of steps left to their goal row after taking it. `None` for
/// actions that are not legal.
pub fn pawn_action_distances(board: &Board, player: Player) -> [Option<usize>; NUM_PAWN_ACTIONS] {
    let size = board.size();
    let distances = distances_to_row(board, board.pawn(player).goal_row);
    let legal = pawn_actions(board, player);
    let mut action_distances = [None; NUM_PAWN_ACTIONS];

    for action in PawnAction::ALL {
        if legal[action.index()] {
            action_distances[action.index()] = destination(board, player, action)
                .and_then(|coord| distances[coord.index(size)]);
        }
    }

    action_distances
}
