//! Command-line front end.
//!
//! Loads a settings file (default `settings.json`, or the first argument),
//! reads one line from stdin, and prints the ciphertext in five-letter
//! blocks. Logs go to stderr; set `RUST_LOG` to change the level.

use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use enigmacrypt::utils::grouping::{group_blocks, BLOCK_SIZE};
use enigmacrypt::{load_machine, EnigmaMachine};

const DEFAULT_SETTINGS: &str = "settings.json";

/// Log filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "info";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SETTINGS.to_string());

    let machine = load_machine(&path)
        .with_context(|| format!("Failed to set machine from {}", path))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(machine, &path, stdin.lock(), stdout.lock())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Announces the loaded settings, prompts, enciphers one line of `input`
/// and writes it to `output` in five-letter blocks.
fn run_session<R: BufRead, W: Write>(
    mut machine: EnigmaMachine,
    path: &str,
    mut input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "Machine set using {}", path)?;
    write!(output, "Enter message (all in CAPS): ")?;
    output.flush()?;

    let mut message = String::new();
    input
        .read_line(&mut message)
        .context("Failed to read message from stdin")?;
    debug!(chars = message.chars().count(), "message read");

    let cipher = machine.encrypt(&message);
    writeln!(output, "{}", group_blocks(&cipher, BLOCK_SIZE))?;
    Ok(())
}
