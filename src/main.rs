use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use connect_four::config::AppConfig;
use connect_four::driver::{self, ScriptedInput, TextRenderer};
use connect_four::game::GameSession;
use connect_four::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override board width (columns)
    #[arg(long)]
    width: Option<usize>,

    /// Override board height (rows)
    #[arg(long)]
    height: Option<usize>,

    /// Override player one's name
    #[arg(long)]
    player_one: Option<String>,

    /// Override player two's name
    #[arg(long)]
    player_two: Option<String>,

    /// Override player one's color
    #[arg(long)]
    color_one: Option<String>,

    /// Override player two's color
    #[arg(long)]
    color_two: Option<String>,

    /// Play these columns headlessly (e.g. `--moves 0,1,0,1`) and print the result
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    moves: Option<Vec<isize>>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let config = load_config(&cli)?;

    match cli.moves {
        Some(moves) => run_headless(&config, moves),
        None => run_tui(config).context("running terminal UI"),
    }
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(name) = &cli.player_one {
        config.players.one.name = name.clone();
    }
    if let Some(name) = &cli.player_two {
        config.players.two.name = name.clone();
    }
    if let Some(color) = &cli.color_one {
        config.players.one.color = color.clone();
    }
    if let Some(color) = &cli.color_two {
        config.players.two.color = color.clone();
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn run_headless(config: &AppConfig, moves: Vec<isize>) -> Result<()> {
    let mut session = GameSession::from_config(config);
    let mut input = ScriptedInput::new(moves);
    let mut renderer = TextRenderer::new(io::stdout());

    let outcome = driver::play(&mut session, &mut input, &mut renderer)?;
    if outcome.is_none() {
        println!("Game not finished");
    }
    renderer.write_board(&session)?;
    Ok(())
}

fn run_tui(config: AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
