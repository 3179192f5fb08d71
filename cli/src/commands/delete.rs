//! DELETE command - Delete a note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, make_request, output};

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Note ID to delete
    pub note_id: i64,

    /// Skip confirmation prompt (for non-interactive use)
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Response from deleting a note.
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteNoteResponse {
    pub message: String,
}

impl HumanReadable for DeleteNoteResponse {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
    }
}

/// Execute the delete command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: DeleteArgs,
) -> Result<()> {
    // Confirmation prompt for interactive use
    if human && !args.yes {
        eprint!(
            "{} Are you sure you want to delete note {}? [y/N] ",
            "Warning:".yellow().bold(),
            args.note_id
        );

        use std::io::Write;
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let url = format!("{}/notes/{}", base_url, args.note_id);

    let response: DeleteNoteResponse = make_request(client.delete(&url)).await?;

    output(&response, human)
}
