mod input;
mod terminal;

use clap::{Parser, ValueEnum};
use mnk_engine::config::{CONFIG_FILE, ConfigFile, GameConfig, Validate};
use mnk_engine::game::{FirstPlayer, GameSettings, GameState};
use mnk_engine::logger::{self, LogTarget};
use mnk_engine::log;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstPlayerArg {
    Human,
    Engine,
    Random,
}

impl From<FirstPlayerArg> for FirstPlayer {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::Human => FirstPlayer::Human,
            FirstPlayerArg::Engine => FirstPlayer::Engine,
            FirstPlayerArg::Random => FirstPlayer::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "mnk_console", about = "Play m,n,k tic-tac-toe against a minimax engine")]
struct Args {
    /// YAML file with saved game settings
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    cols: Option<usize>,

    /// Marks in a row needed to win
    #[arg(long)]
    win: Option<usize>,

    /// Plies the engine looks ahead
    #[arg(long)]
    depth: Option<usize>,

    #[arg(long, value_enum)]
    first: Option<FirstPlayerArg>,

    /// Write the resulting settings back to the config file
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut GameConfig) {
        if let Some(rows) = self.rows {
            config.board.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.board.cols = cols;
        }
        if let Some(win) = self.win {
            config.board.win_length = win;
        }
        if let Some(depth) = self.depth {
            config.engine.search_depth = depth;
        }
        if let Some(first) = self.first {
            config.engine.first_player = first.into();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, LogTarget::Stderr);

    let config_file = ConfigFile::new(&args.config);
    let mut config = config_file.load()?;
    args.apply_overrides(&mut config);
    config
        .validate()
        .map_err(|e| format!("Invalid game settings: {}", e))?;

    if args.save_config {
        config_file.save(&config)?;
        log!("Settings saved to {}", config_file.path().display());
    }

    log!(
        "Starting {}x{} game, {} in a row wins, engine depth {}",
        config.board.rows,
        config.board.cols,
        config.board.win_length,
        config.engine.search_depth
    );

    let mut game = GameState::new(&GameSettings::from(&config));
    terminal::run(&mut game)?;

    log!("Session finished");
    Ok(())
}
