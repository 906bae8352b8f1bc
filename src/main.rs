//! Word Search Puzzle Generator
//!
//! Pulls words of a minimum length out of text files, hides as many as
//! possible in a square letter grid, and prints the grid with a count of the
//! words that made it in.

use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use scrambler::{format_grid, logging, words, BuildReport, Engine, Sizing};

/// Builds a word-search puzzle from the words in text files.
#[derive(Parser, Debug)]
#[command(name = "scrambler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Shortest word length, written with a leading dash (e.g. -4).
    #[arg(value_name = "-N", allow_hyphen_values = true)]
    min_length: String,

    /// Text files to take words from. Unreadable files are skipped.
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Seed for a reproducible puzzle.
    #[arg(long)]
    seed: Option<u64>,

    /// Grid dimension, overriding the size computed from the words.
    #[arg(long, value_name = "D")]
    dim: Option<usize>,

    /// How the grid size scales with the word list.
    #[arg(long, value_enum, default_value_t = Sizing::Mean)]
    sizing: Sizing,

    /// Print the word list after the grid.
    #[arg(long)]
    show_words: bool,

    /// Log placement details to stderr.
    #[arg(long)]
    verbose: bool,
}

/// Exit status for bad or missing arguments.
const USAGE_ERROR: i32 = 1;

/// Maps a command-line parse failure to the process exit status.
///
/// Help and version requests succeed; every other failure is a usage error,
/// not clap's default of 2.
fn exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => USAGE_ERROR,
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(exit_code(e.kind()));
        }
    };

    logging::init_logger(cli.verbose);

    let min_length = match words::parse_min_length(&cli.min_length) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("ERROR! {}", e);
            process::exit(USAGE_ERROR);
        }
    };

    let collected = words::collect_files(&cli.files, min_length);
    if collected.skipped > 0 {
        log::debug!("skipped {} unreadable file(s)", collected.skipped);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut engine = match cli.dim {
        Some(dim) => Engine::with_dimension(collected.words, dim),
        None => Engine::new(collected.words, cli.sizing),
    };

    match engine.build(&mut rng) {
        Ok(report) => print!("{}", render(&engine, &report, cli.show_words)),
        Err(e) => {
            eprintln!("ERROR! {}", e);
            process::exit(1);
        }
    }
}

/// Formats the counts, the grid and optionally the word list.
fn render(engine: &Engine, report: &BuildReport, show_words: bool) -> String {
    let mut output = format!("{}\n\n", report);
    output.push_str(&format_grid(engine.grid()));

    if show_words {
        output.push('\n');
        for word in engine.words() {
            output.push_str(word);
            output.push('\n');
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use rand::rngs::mock::StepRng;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_dash_length_parses_as_positional() {
        let cli = Cli::try_parse_from(["scrambler", "-4", "a.txt", "b.txt"]).unwrap();
        assert_eq!(cli.min_length, "-4");
        assert_eq!(cli.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(cli.sizing, Sizing::Mean);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_malformed_length_reaches_validation() {
        let cli = Cli::try_parse_from(["scrambler", "-x", "a.txt"]).unwrap();
        assert!(words::parse_min_length(&cli.min_length).is_err());
    }

    #[test]
    fn test_missing_arguments_are_rejected() {
        for args in [vec!["scrambler"], vec!["scrambler", "-4"]] {
            let err = Cli::try_parse_from(args.clone()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument, "{args:?}");
        }
    }

    #[test]
    fn test_argument_errors_exit_with_one() {
        for args in [
            vec!["scrambler"],
            vec!["scrambler", "-4"],
            vec!["scrambler", "-4", "a.txt", "--sizing", "huge"],
            vec!["scrambler", "-4", "a.txt", "--seed", "x"],
        ] {
            let err = Cli::try_parse_from(args.clone()).unwrap_err();
            assert_eq!(exit_code(err.kind()), 1, "{args:?}");
        }
    }

    #[test]
    fn test_help_and_version_exit_with_zero() {
        for flag in ["--help", "--version"] {
            let err = Cli::try_parse_from(["scrambler", flag]).unwrap_err();
            assert_eq!(exit_code(err.kind()), 0, "{flag}");
        }
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "scrambler",
            "-3",
            "words.txt",
            "--seed",
            "7",
            "--dim",
            "12",
            "--sizing",
            "total",
            "--show-words",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.dim, Some(12));
        assert_eq!(cli.sizing, Sizing::Total);
        assert!(cli.show_words);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_render_output() {
        let mut engine = Engine::new(vec!["ab".to_string()], Sizing::Mean);
        let report = engine.build(&mut StepRng::new(0, 0)).unwrap();

        assert_eq!(
            render(&engine, &report, true),
            "Inserted: 0\nRemaining: 1\n\n\
             A A A A \nA A A A \nA A A A \nA A A A \n\
             \nAB\n"
        );
    }
}
