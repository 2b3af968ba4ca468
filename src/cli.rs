//! Command-line argument parsing
//!
//! Supports:
//! - Cleaning pasted text
//! - Cleaning HTML, with the editor's sanitizer or the save endpoint's
//! - Rendering content inside the editor chrome

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Headless rich-text editor tools
#[derive(Parser, Debug)]
#[command(name = "rich-editor", version, about = "Headless rich-text editor tools")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Reduce pasted content to plain text
    CleanText {
        /// Input file (stdin when omitted)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Sanitize HTML against the allow-list
    CleanHtml {
        /// Input file (stdin when omitted)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Use the save endpoint's cleaning instead of the editor's
        #[arg(long)]
        server: bool,
    },
    /// Render content inside the editor chrome
    Render {
        /// Input file (stdin when omitted)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Editor config file (YAML)
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Placeholder shown while empty
        #[arg(long)]
        placeholder: Option<String>,

        /// Hide the character counter
        #[arg(long)]
        no_char_count: bool,

        /// Prepend the editor stylesheet
        #[arg(long)]
        with_styles: bool,
    },
}

impl CliCommand {
    pub fn input(&self) -> Option<&Path> {
        match self {
            CliCommand::CleanText { input }
            | CliCommand::CleanHtml { input, .. }
            | CliCommand::Render { input, .. } => input.as_deref(),
        }
    }
}

/// Read the whole input file, or stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e)),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("Failed to read stdin: {}", e))?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_from_stdin() {
        let args = CliArgs::try_parse_from(["rich-editor", "clean-text"]).unwrap();
        assert_eq!(args.command, CliCommand::CleanText { input: None });
        assert_eq!(args.command.input(), None);
    }

    #[test]
    fn test_clean_html_server_flag() {
        let args =
            CliArgs::try_parse_from(["rich-editor", "clean-html", "--server", "in.html"]).unwrap();
        assert_eq!(
            args.command,
            CliCommand::CleanHtml {
                input: Some(PathBuf::from("in.html")),
                server: true,
            }
        );
    }

    #[test]
    fn test_render_options() {
        let args = CliArgs::try_parse_from([
            "rich-editor",
            "render",
            "--placeholder",
            "Écrire...",
            "--no-char-count",
        ])
        .unwrap();
        match args.command {
            CliCommand::Render {
                placeholder,
                no_char_count,
                with_styles,
                ..
            } => {
                assert_eq!(placeholder.as_deref(), Some("Écrire..."));
                assert!(no_char_count);
                assert!(!with_styles);
            }
            other => panic!("Expected Render, got {:?}", other),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(CliArgs::try_parse_from(["rich-editor"]).is_err());
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        std::fs::write(&path, "hello").unwrap();
        assert_eq!(read_input(Some(&path)).unwrap(), "hello");
        assert!(read_input(Some(&dir.path().join("missing"))).is_err());
    }
}
