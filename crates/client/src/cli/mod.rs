//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the todo API.
#[derive(Debug, Parser)]
#[command(name = "todo-client")]
#[command(about = "CLI client for the todo API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "TODO_API_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all items.
    List,
    /// Get an item by ID.
    Get {
        /// Item ID.
        id: String,
    },
    /// Add a new item.
    Add {
        /// Item text.
        text: String,
    },
    /// Replace an item's text and completion flag.
    Update {
        /// Item ID.
        id: String,
        /// New item text.
        #[arg(long)]
        text: String,
        /// Mark the item as completed.
        #[arg(long)]
        completed: bool,
        /// Only update if the item still has this ETag.
        #[arg(long)]
        if_match: Option<String>,
    },
    /// Mark an item as completed.
    Complete {
        /// Item ID.
        id: String,
    },
    /// Delete an item by ID.
    Delete {
        /// Item ID.
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_update() {
        let cli = Cli::try_parse_from([
            "todo-client",
            "--format",
            "json",
            "update",
            "abc",
            "--text",
            "buy milk",
            "--completed",
            "--if-match",
            "W/\"3\"",
        ])
        .unwrap();

        assert!(matches!(cli.format, OutputFormat::Json));
        match cli.command {
            Commands::Update {
                id,
                text,
                completed,
                if_match,
            } => {
                assert_eq!(id, "abc");
                assert_eq!(text, "buy milk");
                assert!(completed);
                assert_eq!(if_match.as_deref(), Some("W/\"3\""));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_add_requires_text() {
        assert!(Cli::try_parse_from(["todo-client", "add"]).is_err());
    }
}
