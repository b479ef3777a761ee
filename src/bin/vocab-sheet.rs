use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vocab_sheet::constants::{DEFAULT_CLI_OUTPUT, DEFAULT_CLI_TEMPLATE, DEFAULT_CLI_VOCAB};
use vocab_sheet::{FileSink, SheetStyle, TemplateImage, VocabSource, generate_sheet};

/// Render a semicolon-separated vocabulary list onto a PDF template.
///
/// Without arguments the files are looked up in the current directory.
#[derive(Parser)]
#[command(name = "vocab-sheet", version, about)]
struct Cli {
    /// Background template image (its pixel size becomes the page size)
    #[arg(short, long, default_value = DEFAULT_CLI_TEMPLATE)]
    template: PathBuf,

    /// Vocabulary list, one `term;translation` pair per line
    #[arg(short, long, default_value = DEFAULT_CLI_VOCAB)]
    vocab: PathBuf,

    /// Output PDF file
    #[arg(short, long, default_value = DEFAULT_CLI_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let template = TemplateImage::open(&cli.template)
        .with_context(|| format!("Failed to load template {}", cli.template.display()))?;

    let mut sink = FileSink::new(&cli.output);
    let report = generate_sheet(
        &VocabSource::File(cli.vocab.clone()),
        &template,
        &SheetStyle::default(),
        &mut sink,
    )
    .with_context(|| format!("Failed to generate sheet from {}", cli.vocab.display()))?;

    for skipped in &report.skipped {
        eprintln!(
            "warning: skipped line {} without a translation: {}",
            skipped.line_number, skipped.content
        );
    }

    println!("PDF created successfully: {}", cli.output.display());
    Ok(())
}
