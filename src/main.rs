use std::{fs::read_to_string, path::PathBuf, process::ExitCode, rc::Rc, time::Instant};

use clap::{Parser as CliParser, ValueEnum};
use minipascal::{
    display_error,
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::parser::parse,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// One token per line with its line number
    Tokens,
    /// The syntax tree in debug form
    Ast,
    /// The syntax tree printed back as source
    Source,
}

/// Parse a mini-Pascal program and print what the front end produced.
#[derive(Debug, CliParser)]
#[command(name = "minipascal", version)]
struct Cli {
    /// Source file to parse
    file: PathBuf,

    /// What to print on success
    #[arg(long, value_enum, default_value_t = Emit::Ast)]
    emit: Emit,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.to_string_lossy().into_owned());

    let file_contents = match read_to_string(&cli.file) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Error: failed to read {}: {}", cli.file.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(file_contents.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &cli.file, &file_contents);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(elapsed = ?start.elapsed(), tokens = tokens.len(), "tokenized");

    if cli.emit == Emit::Tokens {
        for token in &tokens {
            println!("{}", token);
        }
        return ExitCode::SUCCESS;
    }

    let parse_start = Instant::now();
    let program = match parse(tokens) {
        Ok(program) => program,
        Err(error) => {
            let error = Error::from_syntax_error(error, Rc::new(file_name));
            display_error(&error, &cli.file, &file_contents);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(elapsed = ?parse_start.elapsed(), "parsed");
    tracing::info!(elapsed = ?start.elapsed(), "total");

    match cli.emit {
        Emit::Ast => println!("{:#?}", program),
        Emit::Source => print!("{}", program),
        Emit::Tokens => {}
    }

    ExitCode::SUCCESS
}
