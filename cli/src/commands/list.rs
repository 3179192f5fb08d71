//! LIST command - List all notes.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use notes_core::Note;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, make_request, output, truncate};

/// Width of the content preview in human output.
const PREVIEW_CHARS: usize = 60;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {}

/// Response from listing notes.
#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ListNotesResponse(pub Vec<Note>);

impl HumanReadable for ListNotesResponse {
    fn print_human(&self) {
        if self.0.is_empty() {
            println!("{}", "No notes.".dimmed());
            return;
        }

        println!("{}", format!("{} note(s)", self.0.len()).bold());
        println!();
        for note in &self.0 {
            let preview = note.content.lines().next().unwrap_or_default();
            println!(
                "  {:>5}  {}  {}",
                note.id.to_string().cyan(),
                note.title.bold(),
                truncate(preview, PREVIEW_CHARS).dimmed()
            );
        }
    }
}

/// Execute the list command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    _args: ListArgs,
) -> Result<()> {
    let url = format!("{}/notes", base_url);

    let response: ListNotesResponse = make_request(client.get(&url)).await?;

    output(&response, human)
}
