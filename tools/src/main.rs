use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codec::{CodecError, InspectReport, Payload};
use glob::Pattern;
use hapa_tools::{load_payload_json, parse_form_text, report_json};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hapa-tools",
    version,
    about = "Hide payloads in emoji and read them back"
)]
struct Cli {
    /// Log codec internals at debug level (overrides RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a payload behind a base emoji.
    Encode {
        /// Base emoji. Defaults to the payload's own emoji.
        #[arg(long)]
        emoji: Option<String>,
        /// Payload JSON file, or `-` for stdin.
        #[arg(long, conflicts_with = "form", required_unless_present = "form")]
        json: Option<PathBuf>,
        /// Slash-command form text, e.g. `/🍌 {to: did:hapa:bob456; amount: 5;}`.
        #[arg(long)]
        form: Option<String>,
        /// Sender used when the form has no `from`.
        #[arg(long, default_value = "did:hapa:default")]
        sender: String,
        /// Encode even if the payload breaks a business rule.
        #[arg(long)]
        allow_invalid: bool,
    },
    /// Decode the payload hidden in an emoji.
    Decode {
        /// Encoded text.
        #[arg(conflicts_with = "file", required_unless_present = "file")]
        text: Option<String>,
        /// Read encoded text from a file.
        #[arg(long)]
        file: Option<PathBuf>,
        /// Print the raw value without validating it.
        #[arg(long)]
        unvalidated: bool,
    },
    /// Inspect encoded text, a file, or a directory of files.
    Inspect {
        /// Encoded text, or a path to a file or directory.
        target: String,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Limit the number of inspected files.
        #[arg(long)]
        limit: Option<usize>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = InspectFormat::Pretty)]
        format: InspectFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Encode {
            emoji,
            json,
            form,
            sender,
            allow_invalid,
        } => {
            let payload = match (json, form) {
                (Some(path), _) => {
                    let text = read_input(&path)?;
                    load_payload_json(&text)?
                }
                (None, Some(form)) => {
                    let now = chrono::Utc::now().timestamp_millis();
                    parse_form_text(&form)
                        .context("form text is blank")?
                        .into_payload(&sender, now)
                }
                (None, None) => bail!("one of --json or --form is required"),
            };
            if !allow_invalid {
                payload
                    .check()
                    .map_err(|err| coded(CodecError::Validation(err)))?;
            }
            let base = emoji.unwrap_or_else(|| payload.emoji().to_owned());
            let encoded = codec::encode(&base, &payload).map_err(coded)?;
            println!("{encoded}");
        }
        Command::Decode {
            text,
            file,
            unvalidated,
        } => {
            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => read_input(&path)?,
                (None, None) => bail!("one of TEXT or --file is required"),
            };
            let text = text.trim();
            let value = if unvalidated {
                codec::decode_unvalidated(text).map_err(coded)?
            } else {
                let payload: Payload = codec::decode(text).map_err(coded)?;
                serde_json::to_value(&payload).context("serialize payload")?
            };
            let json = serde_json::to_string_pretty(&value).context("serialize json")?;
            println!("{json}");
        }
        Command::Inspect {
            target,
            glob,
            limit,
            format,
        } => {
            let path = Path::new(&target);
            if path.is_dir() {
                let mut entries = collect_entries(path, glob.as_deref())?;
                if let Some(limit) = limit {
                    entries.truncate(limit);
                }
                for entry in entries {
                    let text = fs::read_to_string(&entry)
                        .with_context(|| format!("read {}", entry.display()))?;
                    println!("== {} ==", entry.display());
                    match codec::inspect_encoded(text.trim()) {
                        Ok(report) => print_report(&report, format)?,
                        Err(err) => println!("error: {}", coded(err)),
                    }
                }
            } else {
                let text = if path.is_file() {
                    fs::read_to_string(path).with_context(|| format!("read {target}"))?
                } else {
                    target.clone()
                };
                let report = codec::inspect_encoded(text.trim()).map_err(coded)?;
                print_report(&report, format)?;
            }
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Prefixes a codec error with its flat code.
fn coded(err: CodecError) -> anyhow::Error {
    anyhow!("{}: {err}", err.code())
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("read stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

fn collect_entries(dir: &Path, glob: Option<&str>) -> Result<Vec<PathBuf>> {
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        entries.push(path);
    }
    entries.sort();
    Ok(entries)
}

fn print_report(report: &InspectReport, format: InspectFormat) -> Result<()> {
    match format {
        InspectFormat::Json => {
            let json =
                serde_json::to_string_pretty(&report_json(report)).context("serialize json")?;
            println!("{json}");
        }
        InspectFormat::Pretty => println!("{report}"),
    }
    Ok(())
}
