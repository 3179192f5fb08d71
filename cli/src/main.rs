//! Command-line interface for the notes service.
//!
//! Commands map one-to-one onto the HTTP API:
//! - create: POST /notes
//! - list: GET /notes
//! - read: GET /notes/{id}
//! - update: PUT /notes/{id}
//! - delete: DELETE /notes/{id}
//!
//! Configuration via environment:
//! - NOTES_URL: Base URL of the notes server (default: http://localhost:5000)

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    create::CreateArgs, delete::DeleteArgs, list::ListArgs, read::ReadArgs, update::UpdateArgs,
};

/// Notes service CLI
///
/// Prints JSON by default; pass --human for formatted output.
#[derive(Parser)]
#[command(name = "notes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Notes server URL
    #[arg(
        long,
        env = "NOTES_URL",
        default_value = "http://localhost:5000",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new note
    Create(CreateArgs),

    /// List all notes
    List(ListArgs),

    /// Read one note
    Read(ReadArgs),

    /// Replace the title and content of a note
    Update(UpdateArgs),

    /// Delete a note
    Delete(DeleteArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let base_url = cli.url.trim_end_matches('/');

    let result = match cli.command {
        Commands::Create(args) => commands::create::execute(&client, base_url, cli.human, args).await,
        Commands::List(args) => commands::list::execute(&client, base_url, cli.human, args).await,
        Commands::Read(args) => commands::read::execute(&client, base_url, cli.human, args).await,
        Commands::Update(args) => commands::update::execute(&client, base_url, cli.human, args).await,
        Commands::Delete(args) => commands::delete::execute(&client, base_url, cli.human, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create() {
        let cli = Cli::try_parse_from(["notes", "create", "Shopping", "Milk, eggs"]).unwrap();
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.title, "Shopping");
                assert_eq!(args.content, "Milk, eggs");
            }
            _ => panic!("expected create"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "notes",
            "read",
            "7",
            "--human",
            "--url",
            "http://example:9000",
        ])
        .unwrap();
        assert!(cli.human);
        assert_eq!(cli.url, "http://example:9000");
        assert!(matches!(cli.command, Commands::Read(ReadArgs { note_id: 7 })));
    }

    #[test]
    fn test_parse_delete_rejects_non_integer_id() {
        assert!(Cli::try_parse_from(["notes", "delete", "abc"]).is_err());
    }
}
