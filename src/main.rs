use std::io;
use std::process::ExitCode;

use chess_duel::console::Console;
use chess_duel::game::{GameConfig, GameController};

const USAGE: &str = "usage: chess_duel [--human white|black] [--delay-ms N] [--seed N]";

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    env_logger::init();

    let config = match GameConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let mut console = Console::new(GameController::from_config(&config), config.ai_delay);
    let stdin = io::stdin();
    match console.run(stdin.lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
