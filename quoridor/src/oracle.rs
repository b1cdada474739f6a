use super::board::Board;
use super::coordinate::Coordinate;
use std::collections::VecDeque;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Path {
    /// Every cell visited, from the start to the end inclusive.
    pub cells: Vec<Coordinate>,
    pub steps: usize,
}

/// Path queries over the walls of a board. Pawns never obstruct a path.
pub trait PathOracle {
    /// Whether any cell of `goal_row` can be reached from `start`.
    fn reachable(&self, board: &Board, start: Coordinate, goal_row: usize) -> bool;

    /// A shortest route from `start` to `end`, or `None` when the walls separate them.
    fn shortest_path(&self, board: &Board, start: Coordinate, end: Coordinate) -> Option<Path>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FloodFillOracle;

impl PathOracle for FloodFillOracle {
    fn reachable(&self, board: &Board, start: Coordinate, goal_row: usize) -> bool {
        let size = board.size();
        if !start.is_on_board(size) || goal_row >= size {
            return false;
        }

        let mut visited = vec![false; size * size];
        let mut frontier = vec![start];
        visited[start.index(size)] = true;

        while !frontier.is_empty() {
            if frontier.iter().any(|coord| coord.y == goal_row) {
                return true;
            }

            let mut next = Vec::with_capacity(frontier.len() * 2);
            for coord in frontier {
                for neighbour in board.open_neighbours(coord) {
                    let index = neighbour.index(size);
                    if !visited[index] {
                        visited[index] = true;
                        next.push(neighbour);
                    }
                }
            }

            frontier = next;
        }

        false
    }

    fn shortest_path(&self, board: &Board, start: Coordinate, end: Coordinate) -> Option<Path> {
        let size = board.size();
        if !start.is_on_board(size) || !end.is_on_board(size) {
            return None;
        }

        let mut parents: Vec<Option<Coordinate>> = vec![None; size * size];
        let mut visited = vec![false; size * size];
        let mut queue = VecDeque::from([start]);
        visited[start.index(size)] = true;

        while let Some(coord) = queue.pop_front() {
            if coord == end {
                let mut cells = vec![end];
                let mut current = end;
                while let Some(parent) = parents[current.index(size)] {
                    cells.push(parent);
                    current = parent;
                }
                cells.reverse();

                let steps = cells.len() - 1;
                return Some(Path { cells, steps });
            }

            for neighbour in board.open_neighbours(coord) {
                let index = neighbour.index(size);
                if !visited[index] {
                    visited[index] = true;
                    parents[index] = Some(coord);
                    queue.push_back(neighbour);
                }
            }
        }

        None
    }
}

/// Step distance from every cell to the nearest cell of `goal_row`, indexed `x * size + y`. `None` for cells walled
/// off from the row.
pub fn distances_to_row(board: &Board, goal_row: usize) -> Vec<Option<usize>> {
    let size = board.size();
    let mut distances = vec![None; size * size];
    if goal_row >= size {
        return distances;
    }

    let mut queue = VecDeque::with_capacity(size * size);
    for x in 0..size {
        let coord = Coordinate::new(x, goal_row);
        distances[coord.index(size)] = Some(0);
        queue.push_back((coord, 0));
    }

    while let Some((coord, distance)) = queue.pop_front() {
        for neighbour in board.open_neighbours(coord) {
            let index = neighbour.index(size);
            if distances[index].is_none() {
                distances[index] = Some(distance + 1);
                queue.push_back((neighbour, distance + 1));
            }
        }
    }

    distances
}
