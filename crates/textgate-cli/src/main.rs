//! `textgate` command-line interface.
//!
//! Exit codes: 0 when the input passes, 1 when it is rejected (the tool
//! error response is printed as JSON), 2 on I/O or config errors.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;
use textgate_core::{
    format_validation_failure, validate_array, validate_array_value,
    validate_single, GateConfig, Policy, PresentationResponse, ValidationFailure,
};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "textgate", version, about = "Validate free-text tool inputs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a single text value
    Check(CheckArgs),
    /// Validate a list of text values
    CheckArray(CheckArrayArgs),
    /// Validate a tool-call argument object against a gate config
    Args(GateArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    /// Text must be non-empty
    NonEmpty,
    /// Text must be non-empty and English only
    EnglishOnly,
}

impl From<PolicyArg> for Policy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::NonEmpty => Policy::NON_EMPTY,
            PolicyArg::EnglishOnly => Policy::ENGLISH_ONLY,
        }
    }
}

#[derive(Args)]
struct CheckArgs {
    /// Field label used in messages
    #[arg(long)]
    field: Option<String>,
    #[arg(long, value_enum, default_value_t = PolicyArg::EnglishOnly)]
    policy: PolicyArg,
    /// Text to validate; read from stdin when omitted
    text: Option<String>,
}

#[derive(Args)]
struct CheckArrayArgs {
    /// Field label used in messages
    #[arg(long)]
    field: Option<String>,
    #[arg(long, value_enum, default_value_t = PolicyArg::EnglishOnly)]
    policy: PolicyArg,
    /// Read an untyped JSON value from a file (`-` for stdin)
    #[arg(long, conflicts_with = "items")]
    json: Option<PathBuf>,
    /// Items to validate
    items: Vec<String>,
}

#[derive(Args)]
struct GateArgs {
    /// Gate config (.json, otherwise parsed as YAML)
    #[arg(long)]
    config: PathBuf,
    /// Tool-call arguments as a JSON object (`-` or omitted for stdin)
    #[arg(long)]
    input: Option<PathBuf>,
}

fn main() -> ExitCode {
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();

    let cli = Cli::parse();
    let (code, response) = dispatch(run(cli.command));
    match response {
        Some(response) => emit(&response),
        None => println!("ok"),
    }
    ExitCode::from(code)
}

/// Map a command outcome to its exit code and the response to print.
///
/// `None` means the input passed and a single `ok` line is printed.
fn dispatch(outcome: Result<Result<(), ValidationFailure>>) -> (u8, Option<PresentationResponse>) {
    match outcome {
        Ok(Ok(())) => (0, None),
        Ok(Err(failure)) => {
            tracing::info!(code = %failure.code(), "Input rejected");
            (1, Some(format_validation_failure(&failure)))
        }
        Err(err) => {
            let chain = format!("{:#}", err);
            tracing::error!(error = %chain, "textgate failed");
            (2, Some(PresentationResponse::error_text(format!("Error: {}", chain))))
        }
    }
}

/// Run a command. The outer result carries I/O and config errors, the inner
/// one the validation outcome.
fn run(command: Commands) -> Result<Result<(), ValidationFailure>> {
    match command {
        Commands::Check(args) => {
            let text = match args.text {
                Some(text) => text,
                None => read_source(None)?.trim_end_matches(['\r', '\n']).to_string(),
            };
            Ok(validate_single(&text, args.field.as_deref(), args.policy.into()))
        }
        Commands::CheckArray(args) => {
            let field = args.field.as_deref();
            let policy = args.policy.into();
            match args.json {
                Some(path) => {
                    let value = read_json(Some(&path))?;
                    Ok(validate_array_value(&value, field, policy))
                }
                None => Ok(validate_array(&args.items, field, policy)),
            }
        }
        Commands::Args(args) => {
            let config = load_config(&args.config)?;
            let arguments = read_json(args.input.as_deref())?;
            Ok(config.check(&arguments))
        }
    }
}

fn load_config(path: &Path) -> Result<GateConfig> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config = if is_json {
        GateConfig::from_json_file(path)
    } else {
        GateConfig::from_yaml_file(path)
    };
    config.with_context(|| format!("failed to load gate config {}", path.display()))
}

/// Read a file, or stdin when `path` is `None` or `-`.
fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn read_json(path: Option<&Path>) -> Result<Value> {
    let raw = read_source(path)?;
    serde_json::from_str(&raw).context("input is not valid JSON")
}

fn emit(response: &PresentationResponse) {
    match serde_json::to_string_pretty(response) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize response");
            for block in &response.content {
                println!("{}", block.as_text());
            }
        }
    }
}
