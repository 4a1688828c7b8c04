pub mod bot;
pub mod config;
pub mod game;
pub mod logger;

pub use bot::{MinimaxBot, Score};
pub use game::{Board, GameState, GameStatus, Mark, Position};
