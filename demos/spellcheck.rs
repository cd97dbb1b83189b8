use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chain_hash::ChainedHashSet;
use chain_hash::WordChecker;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Checks words against a word list and suggests corrections.
#[derive(Parser, Debug)]
struct Args {
    /// Word list, one word per line
    #[arg(short = 'w', long = "words")]
    words: PathBuf,

    /// Keep the word list's case instead of uppercasing everything
    #[arg(long)]
    keep_case: bool,

    /// Words to check
    #[arg(required = true)]
    check: Vec<String>,
}

fn normalize(word: &str, keep_case: bool) -> String {
    if keep_case {
        word.to_string()
    } else {
        word.to_uppercase()
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let args = Args::parse();

    let contents = fs::read_to_string(&args.words)
        .with_context(|| format!("reading word list {}", args.words.display()))?;

    let mut words: ChainedHashSet<String> = ChainedHashSet::new();
    for line in contents.lines().map(str::trim).filter(|l| !l.is_empty()) {
        words.add(normalize(line, args.keep_case));
    }
    tracing::info!(
        words = words.len(),
        buckets = words.capacity(),
        load_factor = words.load_factor(),
        "loaded word list"
    );

    let lower: Vec<char> = ('a'..='z').collect();
    let checker = if args.keep_case {
        WordChecker::with_alphabet(&words, &lower)
    } else {
        WordChecker::new(&words)
    };

    for word in &args.check {
        let word = normalize(word, args.keep_case);
        if checker.word_exists(&word) {
            println!("{word}: ok");
            continue;
        }

        let suggestions = checker.find_suggestions(&word);
        if suggestions.is_empty() {
            println!("{word}: no suggestions");
        } else {
            println!("{word}: {}", suggestions.join(", "));
        }
    }

    Ok(())
}
