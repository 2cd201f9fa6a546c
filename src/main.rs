mod config;
mod food;
mod game;
mod snake;
mod term;
mod traits;
mod types;

use std::process::exit;

use clap::Parser;

use config::GameConfig;
use game::{GameState, SnakeGame};
use term::{is_ctrl_c, wait_for_any_key, TermInput, TermRenderer};

#[derive(Parser)]
#[command(name = "termsnake", about = "Snake in your terminal")]
struct Args {
    /// Grid columns
    #[arg(long, default_value_t = config::DEFAULT_WIDTH)]
    width: i32,

    /// Grid rows
    #[arg(long, default_value_t = config::DEFAULT_HEIGHT)]
    height: i32,

    /// Delay between game updates, in milliseconds
    #[arg(long, default_value_t = config::DEFAULT_TICK_INTERVAL_MS)]
    tick_interval_ms: u64,

    /// Score the player starts with
    #[arg(long, default_value_t = config::DEFAULT_INITIAL_SCORE)]
    initial_score: u32,
}

fn main() {
    pretty_env_logger::init();

    let args = Args::parse();
    let config = GameConfig {
        width: args.width,
        height: args.height,
        tick_interval_ms: args.tick_interval_ms,
        initial_score: args.initial_score,
    };

    if let Err(msg) = config.validate() {
        eprintln!("{}", msg);
        exit(1);
    }

    let mut renderer = TermRenderer::new();
    renderer.show_message(
        &[
            "Arrow keys or WASD to move",
            "CTRL+C to quit",
            "",
            "Press any key to begin",
        ],
        config.width,
        config.height,
    );

    if is_ctrl_c(&wait_for_any_key()) {
        return;
    }

    let mut game = SnakeGame::new(config, renderer, TermInput::new());
    game.run();

    // Leave the final score on screen until a key is pressed; a Ctrl+C
    // quit skips straight to the terminal restore.
    if game.state() == GameState::GameOver {
        wait_for_any_key();
    }
}
