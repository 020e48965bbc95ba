//! Console output of the `collider` tool, written to any `Write` sink.

use std::io::{self, Write};

use collider_hashes::{Digest, ScheduleVariant};

use crate::search::{Comparison, SearchOutcome};

/// Writes the prompt, progress and result lines of a search run.
pub struct Report<W: Write> {
    out: W,
    quiet: bool,
}

impl<W: Write> Report<W> {
    /// With `quiet` set, no line is written per comparison.
    pub fn new(out: W, quiet: bool) -> Self {
        Report { out, quiet }
    }

    pub fn prompt(&mut self, variant: ScheduleVariant) -> io::Result<()> {
        writeln!(self.out, "Enter your password, it is hashed with {}", variant)?;
        self.out.flush()
    }

    pub fn input_hash(&mut self, digest: &Digest) -> io::Result<()> {
        writeln!(self.out, "This is your hash: {}", digest)
    }

    pub fn comparison(&mut self, target: &Digest, comparison: &Comparison<'_>) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "{}.Comparing hash: {} and hash {}", comparison.line_number, target, comparison.digest)
    }

    /// Report a match over three lines. An exhausted word list produces no output.
    pub fn outcome(&mut self, target: &Digest, outcome: &SearchOutcome) -> io::Result<()> {
        if let SearchOutcome::Found(found) = outcome {
            writeln!(self.out, "Collision found at line {}:", found.line_number)?;
            writeln!(self.out, "Your hash was {}", target)?;
            writeln!(self.out, "The same hash was found for string: {}", found.line_lossy())?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
