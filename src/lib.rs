//! Tools built on top of the SHA-0 / SHA-1 engine of `collider_hashes`.

pub mod report;
pub mod search;

pub use collider_hashes as hashes;
