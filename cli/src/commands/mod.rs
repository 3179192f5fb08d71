//! Command implementations for the notes CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//! - Human-readable and JSON output formatting

pub mod create;
pub mod delete;
pub mod list;
pub mod read;
pub mod update;

use anyhow::Result;
use colored::Colorize;
use notes_core::Note;
use serde::Serialize;

/// Common error type for HTTP requests.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Build the HTTP client shared by all commands.
pub fn build_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("notes-cli/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

impl HumanReadable for Note {
    fn print_human(&self) {
        println!("{} {}", format!("#{}", self.id).cyan().bold(), self.title.bold());
        if self.content.is_empty() {
            println!("  {}", "(empty)".dimmed());
        } else {
            for line in self.content.lines() {
                println!("  {}", line);
            }
        }
    }
}

/// Send a request and decode the JSON response.
///
/// Non-success responses become [`CliError::Server`], using the server's
/// `{"error": "..."}` message when the body has one.
pub async fn make_request<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, CliError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        let body = response.json::<T>().await?;
        Ok(body)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(CliError::Server {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

/// Extract the `error` member of a JSON error body, or fall back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("error").and_then(|v| v.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

/// Truncate a string for display, adding ellipsis if needed.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_json() {
        assert_eq!(error_message(r#"{"error":"Note not found"}"#), "Note not found");
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(error_message(""), "");
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message(r#"{"detail":"x"}"#), r#"{"detail":"x"}"#);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
        assert_eq!(truncate("ééééééé", 5), "éé...");
    }
}
