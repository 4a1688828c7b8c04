use rand::Rng;

use super::board::Board;
use super::lines::Window;
use super::types::{FirstPlayer, GameStatus, Mark, Position};
use super::win_detector::find_winning_window;
use crate::bot::MinimaxBot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
    pub search_depth: usize,
    pub first_player: FirstPlayer,
}

/// One human against the minimax bot. `X` always moves first; `first_player`
/// decides who holds it.
#[derive(Debug)]
pub struct GameState {
    board: Board,
    bot: MinimaxBot,
    first_player: FirstPlayer,
    human_mark: Mark,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<Position>,
    winning_window: Option<Window>,
}

impl GameState {
    pub fn new(settings: &GameSettings) -> Self {
        let mut state = Self {
            board: Board::new(settings.rows, settings.cols, settings.win_length),
            bot: MinimaxBot::with_depth(settings.search_depth),
            first_player: settings.first_player,
            human_mark: Mark::X,
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
            winning_window: None,
        };
        state.assign_marks();
        state
    }

    fn assign_marks(&mut self) {
        let human_first = match self.first_player {
            FirstPlayer::Human => true,
            FirstPlayer::Engine => false,
            FirstPlayer::Random => rand::rng().random(),
        };

        let (human_mark, engine_mark) = if human_first {
            (Mark::X, Mark::O)
        } else {
            (Mark::O, Mark::X)
        };
        self.human_mark = human_mark;
        self.bot.play_as(engine_mark, human_mark);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn engine_mark(&self) -> Mark {
        self.bot.my_mark()
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn winning_window(&self) -> Option<Window> {
        self.winning_window
    }

    pub fn is_engine_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.bot.my_mark()
    }

    /// Applies the human's move and, if the game goes on, the engine's reply.
    /// Returns the reply.
    pub fn play_human(&mut self, pos: Position) -> Result<Option<Position>, String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if self.current_mark != self.human_mark {
            return Err("Not your turn".to_string());
        }

        if !self.board.contains(pos) {
            return Err(format!(
                "Position {} is out of bounds for a {}x{} board",
                pos,
                self.board.rows(),
                self.board.cols()
            ));
        }

        if !self.board.is_empty_cell(pos) {
            return Err(format!("Cell {} is already marked", pos));
        }

        self.apply_move(pos);
        Ok(self.play_engine())
    }

    /// Lets the engine move if it is its turn.
    pub fn play_engine(&mut self) -> Option<Position> {
        if !self.is_engine_turn() {
            return None;
        }

        let pos = self.bot.select_move(&mut self.board)?;
        self.apply_move(pos);
        Some(pos)
    }

    fn apply_move(&mut self, pos: Position) {
        let mark = self.current_mark;
        self.board.set(pos, mark);
        self.last_move = Some(pos);
        crate::log!("{} placed at {}", mark, pos);

        self.check_game_over(mark, pos);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    fn check_game_over(&mut self, mark: Mark, pos: Position) {
        if let Some(window) = find_winning_window(&self.board, mark, pos.row, pos.col) {
            if let Some(status) = GameStatus::won_by(mark) {
                self.status = status;
                self.winning_window = Some(window);
                crate::log!("{} won with a line from {} to {}", mark, window.start, window.end());
                return;
            }
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            crate::log!("Game ended in a draw");
        }
    }

    /// Clears the board for a new game with the same settings. A random first
    /// player is drawn again.
    pub fn restart(&mut self) {
        self.board.reset();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.winning_window = None;
        self.assign_marks();
    }
}
