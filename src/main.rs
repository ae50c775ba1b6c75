use clap::{Parser as ClapParser, Subcommand};
use json_graft::GraftOptions;
use json_graft::cli::{self, CliError, GetOptions, MergeOptions, PatchOptions};
use json_graft::{Edit, UpdateMode};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "graft")]
#[command(about = "graft - read, write and delete values inside JSON documents by path")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value at a path
    Get {
        /// Path to read, e.g. user.tags[0]
        path: String,

        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Fail on malformed input instead of treating it as {}
        #[arg(long)]
        strict_documents: bool,
    },

    /// Apply edits and print the resulting document
    Patch {
        /// PATH=LITERAL to write, applied in order (repeatable)
        #[arg(short, long = "set", value_name = "PATH=LITERAL")]
        sets: Vec<String>,

        /// PATH to remove, applied after all sets (repeatable)
        #[arg(short, long = "delete", value_name = "PATH")]
        deletes: Vec<String>,

        /// JSON input (reads from stdin if not provided, else starts from {})
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Reject :bool literals other than true/false
        #[arg(long)]
        strict_booleans: bool,

        /// Fail on malformed input instead of treating it as {}
        #[arg(long)]
        strict_documents: bool,
    },

    /// Merge an override map onto a base map
    Merge {
        /// set, update or delete
        mode: String,

        /// Base map as a JSON object of strings (reads from stdin if not provided)
        #[arg(short, long)]
        base: Option<String>,

        /// Override map as a JSON object of strings
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'graft docs' to list categories)
        category: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Get {
            path,
            input,
            pretty,
            strict_documents,
        } => read_input(input).and_then(|input| {
            cli::execute_get(&GetOptions {
                path,
                input,
                pretty,
                graft: GraftOptions::new().with_strict_documents(strict_documents),
            })
        }),
        Commands::Patch {
            sets,
            deletes,
            input,
            pretty,
            strict_booleans,
            strict_documents,
        } => run_patch(sets, deletes, input, pretty, strict_booleans, strict_documents),
        Commands::Merge {
            mode,
            base,
            input,
            pretty,
        } => run_merge(&mode, base, input, pretty),
        Commands::Docs => Ok(cli::get_docs_overview().to_string()),
        Commands::Doc { category } => cli::get_doc_category(&category).map(str::to_string),
    };

    match result {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Use the explicit argument, or stdin when it is piped.
fn read_input(input: Option<String>) -> Result<Option<String>, CliError> {
    match input {
        Some(s) => Ok(Some(s)),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(Some(buffer))
        }
        None => Ok(None),
    }
}

fn run_patch(
    sets: Vec<String>,
    deletes: Vec<String>,
    input: Option<String>,
    pretty: bool,
    strict_booleans: bool,
    strict_documents: bool,
) -> Result<String, CliError> {
    let mut edits = sets
        .iter()
        .map(|arg| cli::parse_assignment(arg))
        .collect::<Result<Vec<_>, _>>()?;
    edits.extend(deletes.into_iter().map(Edit::delete));

    let options = PatchOptions {
        edits,
        input: read_input(input)?,
        pretty,
        graft: GraftOptions::new()
            .with_strict_booleans(strict_booleans)
            .with_strict_documents(strict_documents),
    };
    cli::execute_patch(&options)
}

fn run_merge(
    mode: &str,
    base: Option<String>,
    input: Option<String>,
    pretty: bool,
) -> Result<String, CliError> {
    let mode = mode.parse::<UpdateMode>()?;
    let options = MergeOptions {
        mode,
        base: read_input(base)?,
        input,
        pretty,
    };
    cli::execute_merge(&options)
}
