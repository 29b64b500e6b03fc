use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser};
use sketchboard::config::Config;
use sketchboard::input::BoardMode;
use sketchboard::{export, replay};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "sketchboard")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SKETCHBOARD_GIT_HASH"), ")"),
    about = "Whiteboard drawing engine with undo history and remote stroke relay"
)]
struct Cli {
    /// Replay a JSON-lines event script onto a fresh board
    #[arg(long, short = 'r', value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Write the final board as PNG (requires --replay)
    #[arg(long, short = 'o', value_name = "FILE", requires = "replay")]
    output: Option<PathBuf>,

    /// Initial board mode (light or dark)
    #[arg(long, short = 'm', value_name = "MODE")]
    mode: Option<String>,

    /// Config file to use instead of ~/.config/sketchboard/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::get_config_path()?,
        };
        Config::create_default_file(&path)?;
        println!("Created config at {}", path.display());
    } else if let Some(script) = &cli.replay {
        let config = load_config(cli.config.as_deref())?;
        let mode = resolve_mode(cli.mode.as_deref(), &config)?;
        run_replay(script, cli.output.as_deref(), &config, mode)?;
    } else {
        // No flags: show usage
        println!("sketchboard: Whiteboard drawing engine with undo history and remote stroke relay");
        println!();
        println!("Usage:");
        println!("  sketchboard --replay <FILE> [--output <FILE>]   Replay an event script");
        println!("  sketchboard --init-config                        Write a default config file");
        println!("  sketchboard --help                               Show help");
        println!();
        println!("Scripts hold one JSON event per line, for example:");
        println!("  {{\"type\":\"select_tool\",\"tool\":\"rectangle\"}}");
        println!("  {{\"type\":\"pointer_down\",\"x\":10,\"y\":10}}");
        println!("  {{\"type\":\"pointer_move\",\"x\":50,\"y\":40}}");
        println!("  {{\"type\":\"pointer_up\"}}");
        println!("  {{\"type\":\"export\",\"path\":\"board.png\"}}");
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn resolve_mode(cli_mode: Option<&str>, config: &Config) -> Result<BoardMode> {
    match cli_mode {
        Some(mode) => mode
            .parse()
            .map_err(|_| anyhow!("Invalid board mode '{mode}' (expected light or dark)")),
        // Already validated by Config::validate_and_clamp
        None => Ok(config.board.default_mode.parse().unwrap_or_default()),
    }
}

fn run_replay(script: &Path, output: Option<&Path>, config: &Config, mode: BoardMode) -> Result<()> {
    let (state, summary) = replay::run_script(script, config, mode)
        .with_context(|| format!("Failed to replay {}", script.display()))?;

    for path in &summary.exports {
        println!("Exported {}", path.display());
    }

    if let Some(output) = output {
        let path = export::export_png(state.committed(), output)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        println!("Wrote {}", path.display());
    }

    println!(
        "Applied {} events ({} undoable, {} redoable)",
        summary.events, summary.history_len, summary.redo_len
    );
    Ok(())
}
