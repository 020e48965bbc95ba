//! Hash a string with SHA-0 or SHA-1 and look for a word list entry with the same digest.

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use collider::hashes::{ChainingState, HashFunction, ScheduleVariant};
use collider::report::Report;
use collider::search::{self, SearchOutcome};

#[derive(Parser)]
#[command(name = "collider", about = "Dictionary preimage search for SHA-0 and SHA-1 digests")]
struct Cli {
    /// Newline-delimited word list, one candidate per line
    wordlist: PathBuf,

    /// Hash algorithm (sha0 or sha1)
    #[arg(long, short, default_value = "sha1")]
    algorithm: ScheduleVariant,

    /// String to hash. Read from stdin if omitted
    #[arg(long, short)]
    input: Option<String>,

    /// Do not print a line for every comparison
    #[arg(long, short)]
    quiet: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = try_main() {
        log::error!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let Cli { wordlist, algorithm, input, quiet } = Cli::parse();
    let mut report = Report::new(io::stdout(), quiet);

    let input = match input {
        Some(input) => input.into_bytes(),
        None => {
            report.prompt(algorithm)?;
            match search::read_input_line(&mut io::stdin().lock()).context("failed to read input")? {
                Some(line) => line,
                None => bail!("no input given"),
            }
        }
    };

    let input_hash = ChainingState::digest_message(&algorithm, &input);
    report.input_hash(&input_hash)?;

    let mut progress = Ok(());
    let outcome = search::search_file(&wordlist, algorithm, &input_hash, |comparison| {
        if progress.is_ok() {
            progress = report.comparison(&input_hash, comparison);
        }
    })
    .with_context(|| format!("failed to search word list {}", wordlist.display()))?;
    progress.context("failed to write progress")?;

    report.outcome(&input_hash, &outcome)?;
    if let SearchOutcome::Exhausted { lines } = outcome {
        log::debug!("no match among {} lines", lines);
    }

    Ok(())
}
