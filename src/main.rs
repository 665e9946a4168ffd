use std::path::PathBuf;
use std::process::ExitCode;
use std::{fs, io};

use clap::Parser;
use ini::{Document, Error, ParseOptions};
use tracing_subscriber::EnvFilter;

/// Decode an INI file and print its sections as JSON.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// File to read, or `-` for standard input.
    path: PathBuf,

    /// Lower-case section names and keys.
    #[arg(short, long)]
    ignore_case: bool,

    /// Section for assignments that appear before the first header.
    #[arg(long, default_value = ini::DEFAULT_SECTION)]
    default_section: String,

    /// Print the JSON on a single line.
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let options = ParseOptions::new()
        .ignore_case(args.ignore_case)
        .default_section(args.default_section.as_str());

    let document = if args.path.as_os_str() == "-" {
        ini::from_reader(io::stdin().lock(), &options)?
    } else {
        let file = fs::File::open(&args.path).map_err(|source| Error::Read { source })?;
        ini::from_reader(file, &options)?
    };

    print(&document, args.compact)
}

fn print(document: &Document, compact: bool) -> Result<(), Error> {
    let json = if compact {
        serde_json::to_string(document)
    } else {
        serde_json::to_string_pretty(document)
    }
    .map_err(|source| Error::Output { source })?;

    println!("{json}");
    Ok(())
}
