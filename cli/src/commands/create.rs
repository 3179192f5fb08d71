//! CREATE command - Create a new note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use notes_core::NoteId;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, make_request, output};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Note title
    pub title: String,

    /// Note content (may be empty)
    pub content: String,
}

/// Request body for creating a note.
#[derive(Serialize)]
struct CreateNoteRequest {
    title: String,
    content: String,
}

/// Response from creating a note.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateNoteResponse {
    pub note_id: NoteId,
    pub message: String,
}

impl HumanReadable for CreateNoteResponse {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
        println!("  {} {}", "ID:".cyan(), self.note_id);
    }
}

/// Execute the create command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: CreateArgs,
) -> Result<()> {
    let url = format!("{}/notes", base_url);

    let request_body = CreateNoteRequest {
        title: args.title,
        content: args.content,
    };

    let response: CreateNoteResponse = make_request(client.post(&url).json(&request_body)).await?;

    output(&response, human)
}
