use std::fmt;
use std::str::FromStr;

use collider_util::align_to_u32a_be;

use crate::BLOCK_LENGTH_BYTES;

/// Number of message words consumed by the compression function, one per step.
pub const SCHEDULE_LENGTH: usize = 80;

/// The message schedule expansion rule. This is the only difference between SHA-0 and SHA-1.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ScheduleVariant {
    /// The original FIPS 180 expansion, without rotating the expanded words.
    Sha0,
    /// The FIPS 180-1 expansion, rotating every expanded word left by one bit.
    Sha1,
}

impl ScheduleVariant {
    /// All supported variants.
    pub const ALL: [ScheduleVariant; 2] = [ScheduleVariant::Sha0, ScheduleVariant::Sha1];

    pub fn name(self) -> &'static str {
        match self {
            ScheduleVariant::Sha0 => "sha0",
            ScheduleVariant::Sha1 => "sha1",
        }
    }

    /// Expand one block into the full message schedule.
    pub fn expand(self, block: &[u8; BLOCK_LENGTH_BYTES]) -> [u32; SCHEDULE_LENGTH] {
        let mut schedule = [0_u32; SCHEDULE_LENGTH];
        align_to_u32a_be(&mut schedule[0..16], block);

        let rotation = match self {
            ScheduleVariant::Sha0 => 0,
            ScheduleVariant::Sha1 => 1,
        };

        for i in 16..SCHEDULE_LENGTH {
            schedule[i] = u32::rotate_left(
                schedule[i - 3] ^ schedule[i - 8] ^ schedule[i - 14] ^ schedule[i - 16],
                rotation,
            );
        }

        schedule
    }
}

impl Default for ScheduleVariant {
    fn default() -> Self {
        ScheduleVariant::Sha1
    }
}

impl fmt::Display for ScheduleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a variant name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hash algorithm: {0} (expected sha0 or sha1)")]
pub struct UnknownVariant(pub String);

impl FromStr for ScheduleVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha0" | "sha-0" => Ok(ScheduleVariant::Sha0),
            "sha1" | "sha-1" => Ok(ScheduleVariant::Sha1),
            _ => Err(UnknownVariant(s.to_owned())),
        }
    }
}
