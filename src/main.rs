//! Command line front end: converts OpenCorpora dumps into lexicon JSON.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use opencorpora_lexicon::lexicon::OptimizeLimits;
use opencorpora_lexicon::{Converter, LexiconDocument, RulesConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "opencorpora-lexicon")]
#[command(about = "Builds a Russian morphology lexicon from an OpenCorpora dump")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// More logging (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an OpenCorpora XML dump into a lexicon
    Convert {
        /// OpenCorpora annotation XML
        #[arg(default_value = "annot.opcorpora.no_ambig.xml")]
        input: PathBuf,

        /// Output file, `-` for stdout
        #[arg(short, long, default_value = "opencorpora_morphology.json")]
        output: PathBuf,

        /// TOML file overriding skip tags and inference word lists
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Cap a lexicon to a fixed number of entries per part of speech
    Optimize {
        /// Lexicon JSON written by `convert`
        input: PathBuf,

        /// Output file, `-` for stdout
        #[arg(short, long, default_value = "opencorpora_optimized.json")]
        output: PathBuf,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Remove blocked words from a lexicon
    Prune {
        /// Lexicon JSON written by `convert` or `optimize`
        input: PathBuf,

        /// Output file, `-` for stdout
        #[arg(short, long, default_value = "opencorpora_filtered.json")]
        output: PathBuf,

        /// TOML file overriding the blocked words and fragments
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the part-of-speech distribution of a lexicon
    Stats {
        /// Lexicon JSON written by `convert`
        input: PathBuf,
    },
}

impl Args {
    fn log_filter(&self) -> EnvFilter {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return filter;
        }
        let level = match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, 2) => "debug",
            _ => "trace",
        };
        EnvFilter::new(level)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(args.log_filter())
        .with_writer(io::stderr)
        .init();

    match args.command {
        Command::Convert {
            input,
            output,
            rules,
            pretty,
        } => convert(&input, &output, rules.as_deref(), pretty),
        Command::Optimize {
            input,
            output,
            pretty,
        } => optimize(&input, &output, pretty),
        Command::Prune {
            input,
            output,
            rules,
            pretty,
        } => prune(&input, &output, rules.as_deref(), pretty),
        Command::Stats { input } => stats(&input),
    }
}

fn read_rules(rules: Option<&Path>) -> Result<RulesConfig> {
    match rules {
        Some(path) => RulesConfig::from_path(path)
            .with_context(|| format!("cannot read rules from {}", path.display())),
        None => Ok(RulesConfig::default()),
    }
}

fn convert(input: &Path, output: &Path, rules: Option<&Path>, pretty: bool) -> Result<()> {
    let config = read_rules(rules)?;

    let conversion = Converter::new(config)
        .convert_path(input)
        .with_context(|| format!("cannot convert {}", input.display()))?;
    let stats = conversion.stats;
    info!(
        "skipped {} filtered, {} without grammemes, {} without part of speech, {} duplicates",
        stats.filtered, stats.missing_grammemes, stats.no_part_of_speech, stats.duplicates
    );

    write_document(&conversion.document, output, pretty)?;
    eprintln!(
        "Wrote {} words to {}",
        conversion.document.metadata.total_words,
        output.display()
    );
    Ok(())
}

fn optimize(input: &Path, output: &Path, pretty: bool) -> Result<()> {
    let document = read_document(input)?;
    let optimized = document.optimize(&OptimizeLimits::default());
    write_document(&optimized, output, pretty)?;

    eprintln!(
        "Optimized {} words down to {}",
        document.metadata.total_words, optimized.metadata.total_words
    );
    for (pos, count) in optimized.metadata.words.pos_distribution() {
        eprintln!("  {:?}: {}", pos, count);
    }
    Ok(())
}

fn prune(input: &Path, output: &Path, rules: Option<&Path>, pretty: bool) -> Result<()> {
    let blocklist = read_rules(rules)?.blocklist();
    let document = read_document(input)?;
    let (pruned, removed) = document.prune(&blocklist);
    write_document(&pruned, output, pretty)?;

    eprintln!("Removed {} words, {} left", removed.len(), pruned.metadata.total_words);
    Ok(())
}

fn stats(input: &Path) -> Result<()> {
    let document = read_document(input)?;
    let metadata = &document.metadata;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "source:      {}", metadata.source)?;
    writeln!(out, "version:     {}", metadata.version)?;
    writeln!(out, "revision:    {}", metadata.revision)?;
    writeln!(out, "total words: {}", metadata.total_words)?;
    for (pos, count) in metadata.words.pos_distribution() {
        writeln!(out, "  {:<14}{}", format!("{:?}", pos), count)?;
    }
    Ok(())
}

fn read_document(path: &Path) -> Result<LexiconDocument> {
    LexiconDocument::from_path(path)
        .with_context(|| format!("cannot read lexicon {}", path.display()))
}

fn write_document(document: &LexiconDocument, output: &Path, pretty: bool) -> Result<()> {
    if output == Path::new("-") {
        let mut writer = BufWriter::new(io::stdout().lock());
        document.write_to(&mut writer, pretty)?;
        writeln!(writer)?;
        writer.flush()?;
    } else {
        document
            .save(output, pretty)
            .with_context(|| format!("cannot write {}", output.display()))?;
    }
    Ok(())
}
