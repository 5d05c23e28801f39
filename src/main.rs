use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use krys::{display_error, lexer::lexer::tokenize, parser::parser::parse};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Parse a krys configuration file and print its syntax tree
#[derive(Debug, Parser)]
#[command(name = "krys")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Source file to parse
    file: PathBuf,

    /// Print the token stream before the tree
    #[arg(long)]
    tokens: bool,

    /// Log stage timings (overridden by `RUST_LOG`)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "krys=debug" } else { "krys=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file_name = cli.file.to_string_lossy().to_string();

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(err) => {
            debug!(%err, file = %file_name, "read failed");
            eprintln!("Failed to read {}", file_name);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source, &file_name);
            return ExitCode::FAILURE;
        }
    };

    debug!("Tokenized in {:?}", start.elapsed());

    if cli.tokens {
        for token in &tokens {
            println!("{}", token.debug());
        }
    }

    let parse_start = Instant::now();

    let ast = match parse(tokens) {
        Ok(ast) => ast,
        Err(error) => {
            display_error(&error, &source, &file_name);
            return ExitCode::FAILURE;
        }
    };

    debug!("Parsed in {:?}", parse_start.elapsed());

    print!("{}", ast);
    ExitCode::SUCCESS
}
