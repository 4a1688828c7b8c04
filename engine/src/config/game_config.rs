use serde::{Deserialize, Serialize};

use super::Validate;
use crate::bot::DEFAULT_SEARCH_DEPTH;
use crate::game::{FirstPlayer, GameSettings};

pub const CONFIG_FILE: &str = "mnk_tictactoe_config.yaml";
pub const MAX_BOARD_SIDE: usize = 20;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub board: BoardConfig,
    pub engine: EngineConfig,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        self.board.validate()?;
        self.engine.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<(), String> {
        if self.rows == 0 || self.cols == 0 {
            return Err("board dimensions must be at least 1x1".to_string());
        }
        if self.rows > MAX_BOARD_SIDE || self.cols > MAX_BOARD_SIDE {
            return Err(format!(
                "board dimensions must not exceed {}x{}",
                MAX_BOARD_SIDE, MAX_BOARD_SIDE
            ));
        }
        if self.win_length == 0 {
            return Err("win_length must be at least 1".to_string());
        }
        let min_dimension = self.rows.min(self.cols);
        if self.win_length > min_dimension {
            return Err(format!(
                "win_length ({}) cannot exceed minimum dimension ({})",
                self.win_length, min_dimension
            ));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct EngineConfig {
    pub search_depth: usize,
    pub first_player: FirstPlayer,
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        if self.search_depth == 0 {
            return Err("search_depth must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig {
                rows: 3,
                cols: 3,
                win_length: 3,
            },
            engine: EngineConfig {
                search_depth: DEFAULT_SEARCH_DEPTH,
                first_player: FirstPlayer::Human,
            },
        }
    }
}

impl From<&GameConfig> for GameSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            rows: config.board.rows,
            cols: config.board.cols,
            win_length: config.board.win_length,
            search_depth: config.engine.search_depth,
            first_player: config.engine.first_player,
        }
    }
}
