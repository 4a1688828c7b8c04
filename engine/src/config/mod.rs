mod config_file;
mod game_config;
mod validate;

pub use config_file::{ConfigFile, parse_config, render_config};
pub use game_config::{BoardConfig, CONFIG_FILE, EngineConfig, GameConfig, MAX_BOARD_SIDE};
pub use validate::Validate;
