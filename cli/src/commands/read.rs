//! READ command - Retrieve one note.

use anyhow::Result;
use clap::Args;
use notes_core::Note;

use super::{make_request, output};

/// Arguments for the read command.
#[derive(Args)]
pub struct ReadArgs {
    /// Note ID to read
    pub note_id: i64,
}

/// Execute the read command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: ReadArgs,
) -> Result<()> {
    let url = format!("{}/notes/{}", base_url, args.note_id);

    let note: Note = make_request(client.get(&url)).await?;

    output(&note, human)
}
