//! Command-line interface for mmseg-rs
//!
//! Usage:
//!   mmseg [OPTIONS] <TEXT>
//!   echo "ကျေးဇူးတင်ပါတယ်" | mmseg -d burmese_df.txt

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mmseg_rs::{FileOrder, Lexicon, LexiconSource, SanitizeOptions, Segmenter, SegmenterConfig};

/// mmseg - a dictionary-driven Myanmar word segmenter
#[derive(Debug, Parser)]
#[command(name = "mmseg", version, after_help = EXAMPLES)]
struct Cli {
    /// Path to a word,document_frequency lexicon file
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["store", "config"])]
    dict: Option<PathBuf>,

    /// Path to a JSON dump of lexicon store rows
    #[arg(long, value_name = "FILE", conflicts_with = "config")]
    store: Option<PathBuf>,

    /// Path to a JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Sort a lexicon file longest word first instead of keeping file order
    #[arg(long, requires = "dict")]
    longest_first: bool,

    /// Tokenize only, without a lexicon
    #[arg(short, long, conflicts_with_all = ["dict", "store", "config"])]
    simple: bool,

    /// Do not convert Zawgyi input
    #[arg(long)]
    no_convert: bool,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Print the sanitized text instead of segmenting it
    #[arg(long)]
    sanitize_only: bool,

    /// Text to segment; read from stdin when absent
    text: Option<String>,
}

const EXAMPLES: &str = r#"EXAMPLES:
    mmseg -d burmese_df.txt "ကျေးဇူးတင်ပါတယ်ခင်ဗျား။"
    mmseg -s "မြန်မာစာ"
    mmseg -c mmseg.json -j "မြန်မာစာ"
    echo "မြန်မာစာ" | mmseg --store rows.json"#;

fn build_segmenter(cli: &Cli) -> Result<Segmenter> {
    let mut segmenter = if let Some(path) = &cli.config {
        let config = SegmenterConfig::from_file(path)?;
        Segmenter::from_config(&config)
            .with_context(|| format!("loading lexicon configured in {}", path.display()))?
    } else if let Some(path) = &cli.dict {
        let order = if cli.longest_first {
            FileOrder::LongestFirst
        } else {
            FileOrder::AsWritten
        };
        Segmenter::build(&LexiconSource::File {
            path: path.clone(),
            order,
        })?
    } else if let Some(path) = &cli.store {
        Segmenter::build(&LexiconSource::Store { path: path.clone() })?
    } else {
        if !cli.simple {
            tracing::info!("no lexicon given, tokenizing only");
        }
        Segmenter::new(Lexicon::empty())
    };

    if cli.no_convert {
        let options = SanitizeOptions {
            convert_legacy: false,
            ..*segmenter.options()
        };
        segmenter = segmenter.with_options(options);
    }

    Ok(segmenter)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Read from stdin if no text provided
    let input_text = match &cli.text {
        Some(t) => t.clone(),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    if input_text.trim().is_empty() {
        bail!("no input text provided");
    }

    let segmenter = build_segmenter(&cli)?;

    if cli.sanitize_only {
        println!("{}", segmenter.sanitize(&input_text));
        return Ok(());
    }

    // Output
    if cli.json {
        let words = segmenter.segment_words(&input_text)?;
        println!("{}", serde_json::to_string_pretty(&words)?);
    } else {
        for word in segmenter.segment(&input_text)? {
            println!("{}", word);
        }
    }

    Ok(())
}
