//! # Lenguaje
//!
//! The interpreter's entry point: run a source file if one is given on the
//! command line, otherwise fall into the REPL.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::error;

use lenguaje::environment::Environment;
use lenguaje::error::LenguajeError;
use lenguaje::repl;
use lenguaje::run_source;

/// Struct containing the CLI configuration for Lenguaje.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// The path to a Lenguaje source file. If omitted, starts the REPL.
    #[arg(index = 1)]
    pub file: Option<PathBuf>,

    /// Specify the log level of the interpreter.
    #[arg(value_enum, short, long, default_value_t = LogLevel::default())]
    pub verbosity: LogLevel,
}

/// Enum for specifying the log level of Lenguaje.
#[derive(ValueEnum, Clone, Default, Debug)]
pub enum LogLevel {
    /// The default log level. Only critical errors will be logged.
    #[default]
    #[value(alias("0"))]
    Error,

    /// Also logs warnings.
    #[value(alias("1"))]
    Warn,

    /// Also logs general information, e.g., which file is being run.
    #[value(alias("2"))]
    Info,

    /// Logs debug information from the lexer, parser, and evaluator.
    #[value(alias("3"))]
    Debug,

    /// Logs everything, including every token the lexer produces.
    #[value(alias("4"))]
    Trace,
}

impl From<&LogLevel> for log::Level {
    fn from(value: &LogLevel) -> Self {
        match value {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    simple_logger::init_with_level(cli.verbosity.into()).unwrap();

    match &cli.file {
        Some(path) => run_file(path),
        None => {
            let stdin = io::stdin();
            match repl::start(stdin.lock(), io::stdout()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    error!("fallo de E/S en la consola: {err}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn run_file(path: &PathBuf) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(source) => {
            let err = LenguajeError::ReadSource {
                path: path.clone(),
                source,
            };
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let env = Environment::new();
    match run_source(&source, &env) {
        Ok(result) => {
            println!("{}", result.inspect());
            ExitCode::SUCCESS
        }
        Err(parse_errors) => {
            for message in &parse_errors {
                error!("{message}");
                eprintln!("{message}");
            }
            ExitCode::FAILURE
        }
    }
}
