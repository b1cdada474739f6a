use super::constants::{
    default_walls_per_player, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MAX_NUMBER_OF_MOVES,
    MIN_BOARD_SIZE,
};
use anyhow::{ensure, Result};
use common::{Config, ConfigLoader};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct RulesOptions {
    pub board_size: usize,
    pub walls_per_player: usize,
    pub max_number_of_moves: usize,
}

impl RulesOptions {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.board_size % 2 == 1
                && (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size),
            "board_size must be odd and between {} and {}, found {}",
            MIN_BOARD_SIZE,
            MAX_BOARD_SIZE,
            self.board_size
        );
        ensure!(
            self.max_number_of_moves > 0,
            "max_number_of_moves must be positive"
        );

        Ok(())
    }
}

impl Default for RulesOptions {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            walls_per_player: default_walls_per_player(DEFAULT_BOARD_SIZE),
            max_number_of_moves: MAX_NUMBER_OF_MOVES,
        }
    }
}

impl Config for RulesOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let board_size = config
            .get_usize("board_size")?
            .unwrap_or(DEFAULT_BOARD_SIZE);

        let options = Self {
            board_size,
            walls_per_player: config
                .get_usize("walls_per_player")?
                .unwrap_or_else(|| default_walls_per_player(board_size)),
            max_number_of_moves: config
                .get_usize("max_number_of_moves")?
                .unwrap_or(MAX_NUMBER_OF_MOVES),
        };

        options.validate()?;

        Ok(options)
    }
}
