// Author: Dustin Pilgrim
// License: MIT

// Command-line front end for inspecting and converting ADF files

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use adf_cfg::export::{document_to_json, document_to_json_with_relative};
use adf_cfg::{AdfConfig, AdfResult, ParseMode, ParseOptions};

/// Parse, inspect and convert ADF (Augmentable Data Format) files
#[derive(Parser, Debug)]
#[command(name = "adf")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parse, inspect and convert ADF files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose debug output
    #[arg(short = 'v', long, global = true, default_value_t = false)]
    verbose: bool,

    /// Parse in strict mode
    #[arg(long, global = true, default_value_t = false)]
    strict: bool,

    /// Keep every scalar as a string
    #[arg(long, global = true, default_value_t = false)]
    no_infer: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a file and report success
    Check { file: PathBuf },

    /// Print the document as JSON
    ToJson {
        file: PathBuf,

        /// Include relative sections as {"absolute", "relative"}
        #[arg(long, default_value_t = false)]
        relative: bool,
    },

    /// Print the canonical ADF rendering of a file
    Fmt { file: PathBuf },

    /// Dump the token stream as JSON lines
    Tokens { file: PathBuf },

    /// Print the value at a dot path
    Get { file: PathBuf, path: String },
}

impl Cli {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            mode: if self.strict { ParseMode::Strict } else { ParseMode::Lenient },
            infer_types: !self.no_infer,
        }
    }
}

fn load(file: &Path, options: ParseOptions) -> AdfResult<AdfConfig> {
    AdfConfig::from_file_with_options(file, options)
}

fn run(cli: &Cli) -> AdfResult<()> {
    let options = cli.parse_options();

    match &cli.command {
        Commands::Check { file } => {
            let config = load(file, options)?;
            let doc = config.document();
            let fragments = doc.relative_sections_copy().as_object().map_or(0, |o| o.len());
            println!(
                "{}: ok ({} top-level keys, {} relative fragments)",
                file.display(),
                doc.len(),
                fragments
            );
        }
        Commands::ToJson { file, relative } => {
            let config = load(file, options)?;
            let json = if *relative {
                document_to_json_with_relative(config.document())?
            } else {
                document_to_json(config.document())?
            };
            println!("{}", json);
        }
        Commands::Fmt { file } => {
            let config = load(file, options)?;
            print!("{}", config.document().serialize());
        }
        Commands::Tokens { file } => {
            let config = load(file, options)?;
            for token in adf_cfg::tokenize(config.raw_content()) {
                match serde_json::to_string(&token) {
                    Ok(line) => println!("{}", line),
                    Err(e) => tracing::warn!(line = token.line_number, error = %e, "could not render token"),
                }
            }
        }
        Commands::Get { file, path } => {
            let config = load(file, options)?;
            println!("{}", config.get_value(path)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "adf_cfg=debug,adf=debug,warn" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
