//! Normalize command implementation

use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use textstats_core::normalize;

use super::read_input_file;

/// Arguments for the `normalize` subcommand.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// File to normalize.
    pub file: Utf8PathBuf,
}

#[derive(Serialize)]
struct Normalized {
    normalized: String,
}

/// Print the normalized text of a file.
#[instrument(name = "cmd_normalize", skip_all, fields(file = %args.file))]
pub fn cmd_normalize(
    args: NormalizeArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing normalize command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let normalized = normalize(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&Normalized { normalized })?);
    } else {
        println!("{normalized}");
    }

    Ok(())
}
