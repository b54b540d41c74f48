use std::io::{self, Write};
use std::process::ExitCode;

use life_game::cli::{self, Args};
use life_game::{Game, GameError, ResultsFormat};

fn main() -> ExitCode {
    // Game text goes to stdout; logs stay quiet on stderr unless RUST_LOG says otherwise.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).try_init();

    match run(&cli::parse_args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), GameError> {
    let config = args.resolve_config()?;
    let mut game = Game::with_default_roster(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = game.start(io::stdin().lock(), &mut out)?;

    if config.results == ResultsFormat::Json {
        serde_json::to_writer_pretty(&mut out, &summary)?;
        writeln!(out)?;
    }
    Ok(())
}
