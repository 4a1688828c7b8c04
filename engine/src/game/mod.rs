mod board;
mod game_state;
mod lines;
mod types;
mod win_detector;

pub use board::Board;
pub use game_state::{GameSettings, GameState};
pub use lines::{Direction, Window, windows};
pub use types::{FirstPlayer, GameStatus, Mark, Position};
pub use win_detector::{find_winning_window, has_won};
