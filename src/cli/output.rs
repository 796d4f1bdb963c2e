//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cli::args::{OutputFormat, TextScopeArgs};
use crate::error::Result;
use crate::pipeline::{AnalysisResult, AnalysisView};

/// Contents of a stopword store.
#[derive(Debug, Serialize, Deserialize)]
pub struct StopwordListResult {
    pub path: String,
    pub words: Vec<String>,
    pub count: usize,
}

/// Outcome of adding or removing stop words.
#[derive(Debug, Serialize, Deserialize)]
pub struct StopwordUpdateResult {
    pub path: String,
    /// Words that changed the store.
    pub changed: Vec<String>,
    /// Words that were blank, already present (add) or missing (remove).
    pub skipped: Vec<String>,
    /// Number of words in the store afterwards.
    pub total: usize,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(
    message: &str,
    result: &T,
    args: &TextScopeArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(&serde_json::to_value(result)?, args),
    }
}

/// Output an analysis result, or one view of it.
pub fn output_analysis(
    result: &AnalysisResult,
    view: Option<AnalysisView>,
    args: &TextScopeArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", render_analysis_human(result, view));
            Ok(())
        }
        OutputFormat::Json => {
            let value = match view {
                Some(view) => result.view(view)?,
                None => serde_json::to_value(result)?,
            };
            output_json(&value, args)
        }
    }
}

/// Output in JSON format.
fn output_json(value: &Value, args: &TextScopeArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

/// Output in human-readable format.
fn output_human<T: Serialize>(
    message: &str,
    result: &T,
    args: &TextScopeArgs,
) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    output_generic_human(&value);
    Ok(())
}

/// Generic human-readable output.
fn output_generic_human(value: &Value) {
    if let Some(obj) = value.as_object() {
        for (key, value) in obj {
            match value {
                Value::Array(items) => {
                    let items: Vec<String> = items.iter().map(plain).collect();
                    println!("{key}: {}", items.join(", "));
                }
                other => println!("{key}: {}", plain(other)),
            }
        }
    } else {
        println!("{}", plain(value));
    }
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}:");
    let _ = writeln!(out, "{}", "═".repeat(title.chars().count() + 1));
}

/// Render an analysis result for a terminal. Without a view every facet is
/// rendered in turn.
pub fn render_analysis_human(result: &AnalysisResult, view: Option<AnalysisView>) -> String {
    let mut out = String::new();

    if !result.has_data {
        out.push_str("No text to analyze.\n");
        return out;
    }

    let views: Vec<AnalysisView> = match view {
        Some(view) => vec![view],
        None => AnalysisView::ALL.to_vec(),
    };

    for (i, view) in views.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_view(&mut out, result, view);
    }

    out
}

fn render_view(out: &mut String, result: &AnalysisResult, view: AnalysisView) {
    match view {
        AnalysisView::Lexical => {
            let lexical = &result.lexical;
            heading(out, "Lexical Statistics");
            let _ = writeln!(out, "Sentences: {}", lexical.sentence_count);
            let _ = writeln!(out, "Words: {}", lexical.word_count);
            let _ = writeln!(out, "Characters: {}", lexical.char_count);
            let _ = writeln!(out, "Lexical density: {:.1}%", lexical.density);
            if !lexical.word_freq.is_empty() {
                let _ = writeln!(out, "Top words:");
                for entry in &lexical.word_freq {
                    let _ = writeln!(out, "  {} ({})", entry.word, entry.count);
                }
            }
        }
        AnalysisView::Tokenization => {
            heading(out, "Tokens");
            let _ = writeln!(out, "{}", result.tokens.join(" | "));
        }
        AnalysisView::Lemmatization => {
            heading(out, "Lemmas");
            for pair in &result.lemmas {
                let _ = writeln!(out, "  {} → {}", pair.original, pair.root);
            }
        }
        AnalysisView::Stemming => {
            heading(out, "Stems");
            for pair in &result.stems {
                let _ = writeln!(out, "  {} → {}", pair.original, pair.stem);
            }
        }
        AnalysisView::Stopwords => {
            let stopwords = &result.stopwords;
            heading(out, "Stop Words");
            let _ = writeln!(
                out,
                "Removed ({}): {}",
                stopwords.removed_count,
                stopwords.removed.join(", ")
            );
            let _ = writeln!(out, "Clean text: {}", stopwords.clean_text);
        }
        AnalysisView::Pos => {
            heading(out, "Part of Speech");
            for entry in &result.pos {
                let text = if entry.text.is_empty() {
                    "(implicit)"
                } else {
                    entry.text.as_str()
                };
                let tags: Vec<&str> = entry.tags.iter().map(String::as_str).collect();
                let _ = writeln!(out, "  {text}: {}", tags.join(", "));
            }
        }
        AnalysisView::Sentiment => {
            let sentiment = &result.sentiment;
            heading(out, "Sentiment");
            let _ = writeln!(out, "Score: {} ({})", sentiment.score, sentiment.verdict);
            for entry in &sentiment.breakdown {
                let _ = writeln!(out, "  {}: {:+}", entry.word, entry.score);
            }
        }
    }
}
