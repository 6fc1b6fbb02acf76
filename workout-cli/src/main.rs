//! Command-line interface for workout notation files
//! Parses a workout file and prints the result, reporting diagnostics on stderr.
//!
//! Usage:
//!   workout `<path>` [--sport `<sport>`] [--format `<format>`] [--config `<file>`] [--strict]
//!
//! Exit codes: 0 on success, 1 when `--strict` is set and an error diagnostic was reported,
//! 2 when the file, the configuration or the input size is rejected.

mod render;

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::debug;
use std::process;
use workout_config::{Loader, OutputFormat, WorkoutConfig};
use workout_parser::workout::ast::Diagnostic;
use workout_parser::workout::loader::{DocumentLoader, LoaderError};
use workout_parser::ParseOptions;

/// Picked up from the working directory when `--config` is not given.
const USER_CONFIG: &str = "workout.toml";

const EXIT_DIAGNOSTICS: i32 = 1;
const EXIT_FAILURE: i32 = 2;

fn main() {
    let matches = Command::new("workout")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse and inspect workout notation files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the workout file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("sport")
                .long("sport")
                .short('s')
                .help("Sport used for default metrics (overrides parsing.sport)")
                .value_parser(["bike", "run", "swim"]),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (overrides output.format)")
                .value_parser(OutputFormat::NAMES),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Exit with status 1 when any error diagnostic is reported")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pipeline progress to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(EXIT_FAILURE);
    });
    let Some(path) = matches.get_one::<String>("path") else {
        process::exit(EXIT_FAILURE);
    };
    let code = handle_parse_command(path, &config, matches.get_flag("strict"));
    process::exit(code);
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Defaults, then the user file, then command-line flags.
fn load_config(matches: &ArgMatches) -> Result<WorkoutConfig, workout_config::ConfigError> {
    let mut loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(USER_CONFIG),
    };
    if let Some(sport) = matches.get_one::<String>("sport") {
        loader = loader.set_override("parsing.sport", sport.as_str())?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    loader.build()
}

/// Parse `path` and print it in the configured format. Returns the exit code.
fn handle_parse_command(path: &str, config: &WorkoutConfig, strict: bool) -> i32 {
    let options = ParseOptions::from(&config.parsing);
    let format = config.output.format;
    debug!(
        "parsing {} as {} with format {}",
        path, options.sport, format
    );

    let loader = DocumentLoader::from_path(path).unwrap_or_else(|e| fail(path, e));

    let (formatted, diagnostics) = match format {
        OutputFormat::Lines => {
            let staged = loader
                .classify_with(&options)
                .unwrap_or_else(|e| fail(path, e));
            (render::lines(&staged.value), staged.diagnostics.into_vec())
        }
        _ => {
            let output = loader
                .parse_with(&options)
                .unwrap_or_else(|e| fail(path, e));
            let formatted = match format {
                OutputFormat::Json => render::json(&output),
                OutputFormat::Yaml => render::yaml(&output),
                _ => Ok(render::summary(&output.document)),
            }
            .unwrap_or_else(|e| {
                eprintln!("Error formatting output: {}", e);
                process::exit(EXIT_FAILURE);
            });
            (formatted, output.diagnostics.into_vec())
        }
    };

    print!("{}", formatted);
    report(&diagnostics, config.output.show_warnings);

    if strict && diagnostics.iter().any(Diagnostic::is_error) {
        EXIT_DIAGNOSTICS
    } else {
        0
    }
}

fn report(diagnostics: &[Diagnostic], show_warnings: bool) {
    for diagnostic in diagnostics {
        if diagnostic.is_error() || show_warnings {
            eprintln!("{}", diagnostic);
        }
    }
}

fn fail(path: &str, error: LoaderError) -> ! {
    eprintln!("{}: {}", path, error);
    process::exit(EXIT_FAILURE);
}
