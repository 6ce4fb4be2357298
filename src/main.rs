use anyhow::Result;
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use five_words::config::{ALPHABET_SIZE, NUM_WORDS, WORD_LEN};
use five_words::report::Diagnostics;
use five_words::{input, solver, Config, Options};

/// Find sets of words that together use no letter twice.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Dictionary files, one word per line. Reads stdin when none are given.
    files: Vec<PathBuf>,
    /// Letters per word.
    #[arg(long, default_value_t = WORD_LEN)]
    word_len: usize,
    /// Letters in the alphabet, starting from `a`.
    #[arg(long, default_value_t = ALPHABET_SIZE)]
    alphabet_size: usize,
    /// Words per solution.
    #[arg(long, default_value_t = NUM_WORDS)]
    num_words: usize,
    /// Print solutions in sorted order.
    #[arg(long)]
    sort: bool,
    /// Use all cores.
    #[arg(long)]
    parallel: bool,
    /// Only print the words without repeated letters, then exit. Input is
    /// split on any whitespace in this mode.
    #[arg(long)]
    unique_letters: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = Config {
        word_len: args.word_len,
        alphabet_size: args.alphabet_size,
        num_words: args.num_words,
    };
    config.validate()?;

    let mut out = BufWriter::new(io::stdout().lock());
    let mut diagnostics = Diagnostics::new(io::stderr());

    if args.unique_letters {
        let tokens = input::read_source_tokens(&args.files)?;
        solver::write_unique_letter_words(&tokens, &config, &mut out, &mut diagnostics)?;
    } else {
        let words = input::read_sources(&args.files, &config)?;
        let options = Options {
            config,
            sort: args.sort,
            parallel: args.parallel,
        };
        solver::run(words, &options, &mut out, &mut diagnostics)?;
    }

    out.flush()?;
    Ok(())
}
