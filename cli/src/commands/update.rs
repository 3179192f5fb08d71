//! UPDATE command - Replace the title and content of a note.

use anyhow::Result;
use clap::Args;
use notes_core::Note;
use serde::Serialize;

use super::{make_request, output};

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Note ID to update
    pub note_id: i64,

    /// New title
    pub title: String,

    /// New content (may be empty)
    pub content: String,
}

/// Request body for updating a note.
#[derive(Serialize)]
struct UpdateNoteRequest {
    title: String,
    content: String,
}

/// Execute the update command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: UpdateArgs,
) -> Result<()> {
    let url = format!("{}/notes/{}", base_url, args.note_id);

    let request_body = UpdateNoteRequest {
        title: args.title,
        content: args.content,
    };

    let note: Note = make_request(client.put(&url).json(&request_body)).await?;

    output(&note, human)
}
