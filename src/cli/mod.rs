//! CLI module for Recipe Vision
//!
//! Provides subcommands:
//! - `serve`: run the HTTP API and pages
//! - `analyze`: run the image pipeline once from the terminal

pub mod analyze;
pub mod serve;

use clap::{Parser, Subcommand};

/// Recipe Vision - Turn a photo of ingredients into a recipe
#[derive(Parser)]
#[command(name = "recipe-vision")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Extract ingredients from an image URL or file and optionally generate a recipe
    Analyze(analyze::AnalyzeArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["recipe-vision", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "recipe-vision",
            "analyze",
            "https://example.com/list.jpg",
            "--recipe",
        ])
        .unwrap();

        let Command::Analyze(args) = cli.command else {
            panic!("expected analyze command");
        };
        assert_eq!(args.image, "https://example.com/list.jpg");
        assert!(args.recipe);
        assert!(!args.caption);
    }

    #[test]
    fn test_analyze_requires_url() {
        assert!(Cli::try_parse_from(["recipe-vision", "analyze"]).is_err());
    }
}
