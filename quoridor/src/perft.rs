use super::game_state::GameState;
use anyhow::Result;
use log::info;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Counts the positions reached after exactly `depth` actions. Finished games end their branch early and count as
/// nothing.
///
/// Deeper subtrees are split across the rayon pool, each branch taking its own copy of the state.
pub fn perft(game_state: &GameState, depth: usize) -> Result<u64> {
    let count = count_moves_par(game_state, depth)?;

    info!("perft({}) = {}", depth, count);

    Ok(count)
}

fn count_moves_par(game_state: &GameState, depth: usize) -> Result<u64> {
    if depth <= 2 {
        return count_moves(game_state, depth);
    }

    if game_state.is_terminal().is_some() {
        return Ok(0);
    }

    game_state
        .valid_actions()
        .actions()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|action| {
            let mut next_game_state = game_state.clone();
            next_game_state.take_action(&action)?;
            count_moves_par(&next_game_state, depth - 1)
        })
        .sum()
}

fn count_moves(game_state: &GameState, depth: usize) -> Result<u64> {
    if depth == 0 {
        return Ok(1);
    }

    if game_state.is_terminal().is_some() {
        return Ok(0);
    }

    let valid_actions = game_state.valid_actions();
    if depth == 1 {
        return Ok(valid_actions.count() as u64);
    }

    valid_actions
        .actions()
        .map(|action| {
            let mut next_game_state = game_state.clone();
            next_game_state.take_action(&action)?;
            count_moves(&next_game_state, depth - 1)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::super::options::RulesOptions;
    use super::*;

    #[test]
    fn test_perft_depth_zero() {
        assert_eq!(perft(&GameState::initial(), 0).unwrap(), 1);
    }

    #[test]
    fn test_perft_initial_depth_one() {
        assert_eq!(perft(&GameState::initial(), 1).unwrap(), 131);
    }

    #[test]
    fn test_perft_small_board_matches_sequential() {
        let options = RulesOptions {
            board_size: 5,
            walls_per_player: 1,
            max_number_of_moves: 50,
        };
        let game_state = GameState::new(&options).unwrap();

        assert_eq!(
            perft(&game_state, 3).unwrap(),
            count_moves(&game_state, 3).unwrap()
        );
    }

    #[test]
    fn test_perft_without_walls() {
        let options = RulesOptions {
            board_size: 5,
            walls_per_player: 0,
            max_number_of_moves: 50,
        };
        let game_state = GameState::new(&options).unwrap();

        // Both pawns start with three moves and cannot meet within two plies.
        assert_eq!(perft(&game_state, 2).unwrap(), 9);
    }
}
