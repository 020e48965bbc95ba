//! Dictionary based preimage search: hash every line of a word list and look for a digest equal to a target.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use collider_hashes::{Digest, Engine, HashError, ScheduleVariant};
use log::{debug, info};
use thiserror::Error;

/// Errors that abort a search.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The word list (or the interactive input) could not be read.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The engine was misused. Indicates a bug in the caller, a search always resets before hashing.
    #[error("hash error: {0}")]
    Hash(#[from] HashError),
}

/// One candidate that was hashed and compared against the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison<'a> {
    /// 1-based line number within the word list
    pub line_number: usize,
    pub line: &'a [u8],
    pub digest: Digest,
}

impl Comparison<'_> {
    /// The candidate as text. Invalid UTF-8 is replaced.
    pub fn line_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.line)
    }
}

/// A word list entry whose digest equals the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub line_number: usize,
    pub line: Vec<u8>,
    pub digest: Digest,
}

impl Match {
    pub fn line_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.line)
    }
}

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The first matching line. No further lines were read.
    Found(Match),
    /// Every line was compared without a match.
    Exhausted { lines: usize },
}

/// Remove one trailing line terminator (`\n` or `\r\n`) in place.
fn strip_line_terminator(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
}

/// Read one line of user input without its line terminator. Returns `None` if the input is already at its end.
pub fn read_input_line<R: BufRead>(reader: &mut R) -> io::Result<Option<Vec<u8>>> {
    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    strip_line_terminator(&mut line);
    Ok(Some(line))
}

/// Hash `input` from a freshly reset engine.
pub fn hash_candidate(engine: &mut Engine, input: &[u8]) -> Result<Digest, HashError> {
    engine.reset();
    engine.update(input)?;
    engine.digest()
}

/// Compare the digest of every line of `reader` against `target`, in order. `on_compare` is invoked once per hashed
/// line, before the comparison result is known. The search stops at the first line with an equal digest; digests
/// are compared in constant time.
pub fn preimage_search<R, F>(
    engine: &mut Engine,
    target: &Digest,
    mut reader: R,
    mut on_compare: F,
) -> Result<SearchOutcome, SearchError>
where
    R: BufRead,
    F: FnMut(&Comparison<'_>),
{
    debug!("starting {} preimage search for {}", engine.variant(), target);

    let mut line = Vec::new();
    let mut line_number = 0;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        strip_line_terminator(&mut line);
        line_number += 1;

        let digest = hash_candidate(engine, &line)?;
        on_compare(&Comparison { line_number, line: &line, digest });

        if digest.ct_eq(target) {
            info!("digest {} matched line {}", target, line_number);
            return Ok(SearchOutcome::Found(Match { line_number, line, digest }));
        }
    }

    debug!("word list exhausted after {} lines without a match", line_number);
    Ok(SearchOutcome::Exhausted { lines: line_number })
}

/// Run [`preimage_search`] over the word list at `path` with a new engine of the given variant. The file is closed
/// on every exit path.
pub fn search_file<P, F>(
    path: P,
    variant: ScheduleVariant,
    target: &Digest,
    on_compare: F,
) -> Result<SearchOutcome, SearchError>
where
    P: AsRef<Path>,
    F: FnMut(&Comparison<'_>),
{
    let file = File::open(path.as_ref())?;
    let mut engine = Engine::new(variant);
    preimage_search(&mut engine, target, BufReader::new(file), on_compare)
}
