use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use property_feed::{write_records, FeedPipeline, FeedSource};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SourceKind {
    File,
    Url,
}

#[derive(clap::Parser, Debug)]
struct Args {
    /// How to interpret the source location
    #[arg(long = "source-kind", value_enum)]
    source_kind: SourceKind,

    /// Path or URL of the XML feed
    #[arg(long)]
    source: String,

    /// City to keep, case-insensitive
    #[arg(long)]
    city: String,

    /// Destination path for the JSON output
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let source = match args.source_kind {
        SourceKind::File => FeedSource::File(PathBuf::from(&args.source)),
        SourceKind::Url => FeedSource::Url(args.source.clone()),
    };

    let feed = source.load().context("failed to load feed")?;
    tracing::info!(properties = feed.properties.len(), "loaded feed");

    let records = FeedPipeline::new(&args.city)
        .run(&feed)
        .context("failed to filter and map properties")?;
    tracing::info!(matched = records.len(), city = %args.city, "mapped properties");

    write_records(&records, &args.out)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    tracing::info!(out = %args.out.display(), "wrote property records");

    Ok(())
}
