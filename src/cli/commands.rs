//! Command implementations for the TextScope CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AnalysisConfig;
use crate::error::{Result, TextScopeError};
use crate::pipeline::AnalysisPipeline;
use crate::store::StopwordStore;

/// Execute a CLI command.
pub fn execute_command(args: TextScopeArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze_text(analyze_args.clone(), &args),
        Command::Stopwords(StopwordsCommand::List(store_args)) => {
            list_stopwords(store_args.clone(), &args)
        }
        Command::Stopwords(StopwordsCommand::Add(edit_args)) => {
            add_stopwords(edit_args.clone(), &args)
        }
        Command::Stopwords(StopwordsCommand::Remove(edit_args)) => {
            remove_stopwords(edit_args.clone(), &args)
        }
    }
}

/// Analyze a text from `--text`, a file or standard input.
fn analyze_text(args: AnalyzeArgs, cli_args: &TextScopeArgs) -> Result<()> {
    let config = build_config(&args)?;
    let text = read_input(&args)?;

    let mut builder = AnalysisPipeline::builder().config(config);
    if let Some(store_path) = &args.stopwords {
        let store = StopwordStore::open(store_path)?;
        debug!(
            "merging {} custom stop words from {}",
            store.len(),
            store_path.display()
        );
        builder = builder.stopword_store(&store);
    }
    let pipeline = builder.build()?;
    debug!("{pipeline:?}");

    let result = pipeline.analyze(&text)?;
    output_analysis(&result, args.view, cli_args)
}

/// Resolve the configuration: file values first, then command line overrides.
fn build_config(args: &AnalyzeArgs) -> Result<AnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => AnalysisConfig::from_file(path)?,
        None => AnalysisConfig::default(),
    };

    if let Some(top_n) = args.top_n {
        config.top_n = top_n;
    }
    config.parallel = config.parallel && args.parallel();

    config.validate()?;
    Ok(config)
}

fn read_input(args: &AnalyzeArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    match &args.file {
        Some(path) => {
            debug!("reading text from {}", path.display());
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(text)
        }
        None => {
            debug!("reading text from standard input");
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// List the words in a stopword store.
fn list_stopwords(args: StoreArgs, cli_args: &TextScopeArgs) -> Result<()> {
    let store = StopwordStore::open(&args.store)?;
    let words = store.snapshot();

    output_result(
        &format!("Custom stop words in {}", args.store.display()),
        &StopwordListResult {
            path: display_path(&args.store),
            count: words.len(),
            words,
        },
        cli_args,
    )
}

/// Add words to a stopword store and save it.
fn add_stopwords(args: StopwordEditArgs, cli_args: &TextScopeArgs) -> Result<()> {
    let result = edit_store(&args, StopwordStore::add)?;
    info!("added {} stop words", result.changed.len());
    output_result("Stop words added", &result, cli_args)
}

/// Remove words from a stopword store and save it.
fn remove_stopwords(args: StopwordEditArgs, cli_args: &TextScopeArgs) -> Result<()> {
    let result = edit_store(&args, StopwordStore::remove)?;
    info!("removed {} stop words", result.changed.len());
    output_result("Stop words removed", &result, cli_args)
}

fn edit_store(
    args: &StopwordEditArgs,
    edit: fn(&StopwordStore, &str) -> bool,
) -> Result<StopwordUpdateResult> {
    if args.words.is_empty() {
        return Err(TextScopeError::invalid_argument("no words given"));
    }

    let store = StopwordStore::open(&args.store.store)?;
    let (changed, skipped): (Vec<String>, Vec<String>) = args
        .words
        .iter()
        .cloned()
        .partition(|word| edit(&store, word));

    if !changed.is_empty() {
        store.save()?;
    }

    Ok(StopwordUpdateResult {
        path: display_path(&args.store.store),
        changed,
        skipped,
        total: store.len(),
    })
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
