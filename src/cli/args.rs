//! Command line argument parsing for the TextScope CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::pipeline::AnalysisView;

/// TextScope - lexical, morphological, stopword, part-of-speech and sentiment analysis
#[derive(Parser, Debug, Clone)]
#[command(name = "textscope")]
#[command(about = "Analyze English text: tokens, stems, lemmas, stop words, tags and sentiment")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "TextScope Contributors")]
#[command(long_about = None)]
pub struct TextScopeArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TextScopeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze a text
    Analyze(AnalyzeArgs),

    /// Manage the custom stopword store
    #[command(subcommand)]
    Stopwords(StopwordsCommand),
}

/// Arguments for analyzing a text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// File to read the text from (default: standard input)
    #[arg(value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Text to analyze
    #[arg(short, long)]
    pub text: Option<String>,

    /// Show only one facet of the result: lexical, tokenization,
    /// lemmatization, stemming, stopwords, pos or sentiment
    #[arg(long, value_name = "VIEW", value_parser = parse_view)]
    pub view: Option<AnalysisView>,

    /// Custom stopword store file merged into the English stop words
    #[arg(short, long, value_name = "STORE_FILE", env = "TEXTSCOPE_STOPWORDS")]
    pub stopwords: Option<PathBuf>,

    /// Analysis configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Number of most frequent words to report
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,

    /// Run all components on the calling thread
    #[arg(long)]
    pub sequential: bool,
}

/// Stopword store subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum StopwordsCommand {
    /// List the words in the store
    List(StoreArgs),

    /// Add words to the store
    Add(StopwordEditArgs),

    /// Remove words from the store
    Remove(StopwordEditArgs),
}

/// Location of the stopword store
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Stopword store file (JSON array of words)
    #[arg(long, value_name = "STORE_FILE", env = "TEXTSCOPE_STOPWORDS")]
    pub store: PathBuf,
}

/// Arguments for adding or removing stop words
#[derive(Args, Debug, Clone)]
pub struct StopwordEditArgs {
    /// Words to add or remove
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

fn parse_view(s: &str) -> std::result::Result<AnalysisView, String> {
    s.parse::<AnalysisView>().map_err(|e| e.to_string())
}

impl AnalyzeArgs {
    /// Whether the components may run concurrently
    pub fn parallel(&self) -> bool {
        !self.sequential
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_analyze_command() {
        let args = TextScopeArgs::try_parse_from([
            "textscope",
            "analyze",
            "--text",
            "I love this!",
            "--view",
            "sentiment",
            "--top-n",
            "5",
            "--sequential",
        ])
        .unwrap();

        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(analyze_args.text.as_deref(), Some("I love this!"));
            assert_eq!(analyze_args.view, Some(AnalysisView::Sentiment));
            assert_eq!(analyze_args.top_n, Some(5));
            assert!(!analyze_args.parallel());
            assert!(analyze_args.file.is_none());
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_analyze_file_and_config() {
        let args = TextScopeArgs::try_parse_from([
            "textscope",
            "analyze",
            "essay.txt",
            "--config",
            "config.json",
        ])
        .unwrap();

        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(analyze_args.file, Some(PathBuf::from("essay.txt")));
            assert_eq!(analyze_args.config, Some(PathBuf::from("config.json")));
            assert!(analyze_args.parallel());
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_file_conflicts_with_text() {
        let result = TextScopeArgs::try_parse_from([
            "textscope",
            "analyze",
            "essay.txt",
            "--text",
            "hello",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_view_values() {
        let args =
            TextScopeArgs::try_parse_from(["textscope", "analyze", "--view", "POS"]).unwrap();
        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(analyze_args.view, Some(AnalysisView::Pos));
        } else {
            panic!("Expected Analyze command");
        }

        let result = TextScopeArgs::try_parse_from(["textscope", "analyze", "--view", "syntax"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_stopwords_commands() {
        let args = TextScopeArgs::try_parse_from([
            "textscope",
            "stopwords",
            "add",
            "lorem",
            "ipsum",
            "--store",
            "words.json",
        ])
        .unwrap();

        if let Command::Stopwords(StopwordsCommand::Add(edit)) = args.command {
            assert_eq!(edit.words, vec!["lorem", "ipsum"]);
            assert_eq!(edit.store.store, PathBuf::from("words.json"));
        } else {
            panic!("Expected Stopwords Add command");
        }

        let args = TextScopeArgs::try_parse_from([
            "textscope",
            "stopwords",
            "list",
            "--store",
            "words.json",
        ])
        .unwrap();
        assert!(matches!(
            args.command,
            Command::Stopwords(StopwordsCommand::List(_))
        ));

        let result = TextScopeArgs::try_parse_from([
            "textscope",
            "stopwords",
            "remove",
            "--store",
            "words.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let args = TextScopeArgs::try_parse_from(["textscope", "analyze", "-t", "x"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args =
            TextScopeArgs::try_parse_from(["textscope", "-vv", "analyze", "-t", "x"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args =
            TextScopeArgs::try_parse_from(["textscope", "--quiet", "analyze", "-t", "x"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = TextScopeArgs::try_parse_from([
            "textscope",
            "--format",
            "json",
            "--pretty",
            "analyze",
            "-t",
            "x",
        ])
        .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
    }
}
