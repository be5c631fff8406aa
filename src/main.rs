//! Maze Chase entry point
//!
//! Carves a maze from settings and prints it, either as ASCII art or as
//! layout JSON for an external physics engine.
//!
//! Usage: `maze-chase [settings.json] [--json]`

use std::path::PathBuf;

const USAGE: &str = "usage: maze-chase [settings.json] [--json]";

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct CliArgs {
    json: bool,
    settings_path: Option<PathBuf>,
}

/// Why the command line was not runnable
#[derive(Debug, Clone, PartialEq, Eq)]
enum CliError {
    Help,
    UnknownFlag(String),
    ExtraPath(String),
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs, CliError> {
    let mut cli = CliArgs::default();
    for arg in args {
        match arg.as_str() {
            "--json" => cli.json = true,
            "-h" | "--help" => return Err(CliError::Help),
            flag if flag.starts_with('-') => return Err(CliError::UnknownFlag(flag.to_string())),
            other if cli.settings_path.is_some() => {
                return Err(CliError::ExtraPath(other.to_string()));
            }
            other => cli.settings_path = Some(PathBuf::from(other)),
        }
    }
    Ok(cli)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let cli = match parse_args(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(CliError::Help) => {
            println!("{USAGE}");
            return;
        }
        Err(CliError::UnknownFlag(flag)) => {
            eprintln!("maze-chase: unknown option '{flag}'\n{USAGE}");
            std::process::exit(2);
        }
        Err(CliError::ExtraPath(path)) => {
            eprintln!("maze-chase: unexpected argument '{path}'\n{USAGE}");
            std::process::exit(2);
        }
    };

    let settings = match &cli.settings_path {
        Some(path) => maze_chase::Settings::load(path),
        None => maze_chase::Settings::default(),
    };

    if let Err(err) = run(&settings, cli.json) {
        log::error!("{err}");
        eprintln!("maze-chase: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run(settings: &maze_chase::Settings, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    use maze_chase::GameState;

    let seed = settings.resolve_seed();
    log::info!(
        "Maze Chase starting: {}x{} cells, seed {}",
        settings.rows,
        settings.cols,
        seed
    );

    let state = GameState::new(settings, seed)?;
    let layout = &state.layout;

    if json {
        println!("{}", layout.to_json()?);
    } else {
        print!("{}", layout.maze().to_ascii());
        println!(
            "seed {}  walls {}  cell {:.1}x{:.1}",
            seed,
            layout.walls().len(),
            layout.params().unit_width,
            layout.params().unit_height
        );
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is consumed directly
    let _ = (USAGE, parse_args(std::iter::empty()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, CliError> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args() {
        assert_eq!(parse(&[]), Ok(CliArgs::default()));
    }

    #[test]
    fn test_path_and_json_any_order() {
        let expected = CliArgs {
            json: true,
            settings_path: Some(PathBuf::from("maze.json")),
        };
        assert_eq!(parse(&["maze.json", "--json"]), Ok(expected.clone()));
        assert_eq!(parse(&["--json", "maze.json"]), Ok(expected));
    }

    #[test]
    fn test_help() {
        assert_eq!(parse(&["--help"]), Err(CliError::Help));
        assert_eq!(parse(&["maze.json", "-h"]), Err(CliError::Help));
    }

    #[test]
    fn test_typo_flag_is_rejected() {
        assert_eq!(
            parse(&["--jsno"]),
            Err(CliError::UnknownFlag("--jsno".to_string()))
        );
        assert_eq!(
            parse(&["maze.json", "-x"]),
            Err(CliError::UnknownFlag("-x".to_string()))
        );
    }

    #[test]
    fn test_second_path_is_rejected() {
        assert_eq!(
            parse(&["a.json", "b.json"]),
            Err(CliError::ExtraPath("b.json".to_string()))
        );
    }
}
