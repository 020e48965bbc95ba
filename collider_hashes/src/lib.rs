//! This crate contains a software implementation of the SHA-0 / SHA-1 hash family. Both algorithms share one
//! streaming engine and differ only in the message schedule that is selected when the engine is created. The
//! individual steps (padding, compression, serialization) are public, so a hash can be manually forged and
//! inspected.

pub mod compression;
pub mod engine;
pub mod error;
pub mod padding;
pub mod schedule;
pub mod state;

pub use engine::{Engine, EngineState};
pub use error::{HashError, Result};
pub use schedule::ScheduleVariant;
pub use state::{ChainingState, Digest, DIGEST_LENGTH_BYTES, INITIAL};

/// Size of one message block in bytes.
pub const BLOCK_LENGTH_BYTES: usize = 64;

/// Output of a `HashFunction`.
pub trait HashValue {
    /// Obtain the hash as a raw byte array.
    fn raw(&self) -> Vec<u8>;
}

/// An implementation of a hashing algorithm. It defines three implementation dependent types,
/// one of which is the output hash type.
pub trait HashFunction {
    /// Implementation dependent context during hashing. May contain parameters specific to the
    /// algorithm.
    type Context;

    /// Contains the current unfinished hash value. It is constructed using `init_hash` and then
    /// used by this function as the target where all data is compressed into.
    type HashState;

    /// Final hash value that is obtained through completion of the hashing function.
    type HashData: HashValue;

    /// Obtain an initial hash state conforming to the parameters set by the given `Self::Context`.
    fn init_hash(ctx: &Self::Context) -> Self::HashState;

    /// Update the hash with more data. Fails if the state was already finished.
    fn update_hash(hash: &mut Self::HashState, ctx: &Self::Context, input: &[u8]) -> Result<()>;

    /// Finish the hash and return it. The given `hash` is then in a final state and may not be
    /// used for further hashing until it is reset.
    fn finish_hash(hash: &mut Self::HashState, ctx: &Self::Context) -> Result<Self::HashData>;

    /// Convenience method to initialize a hash state and completely compress the given `input`
    /// into it. Then the final hash is returned.
    fn digest_message(ctx: &Self::Context, input: &[u8]) -> Self::HashData;
}

/// A special hash function that consumes input in blocks of uniform size.
pub trait BlockHashFunction: HashFunction {
    /// Obtain the block size this hash consumes given the specified context.
    fn block_size(ctx: &Self::Context) -> usize;

    /// Obtain the output size this hash will produce given the specified context.
    fn output_size(ctx: &Self::Context) -> usize;
}

impl HashFunction for ChainingState {
    type Context = ScheduleVariant;
    type HashState = Engine;
    type HashData = Digest;

    fn init_hash(ctx: &Self::Context) -> Self::HashState {
        Engine::new(*ctx)
    }

    fn update_hash(hash: &mut Self::HashState, _ctx: &Self::Context, input: &[u8]) -> Result<()> {
        hash.update(input)
    }

    fn finish_hash(hash: &mut Self::HashState, _ctx: &Self::Context) -> Result<Self::HashData> {
        hash.digest()
    }

    fn digest_message(ctx: &Self::Context, input: &[u8]) -> Self::HashData {
        let mut hash_state = Self::init_hash(ctx);

        match hash_state.update(input).and_then(|_| hash_state.digest()) {
            Ok(digest) => digest,
            Err(_) => unreachable!("a fresh engine is never finalized"),
        }
    }
}

impl BlockHashFunction for ChainingState {
    fn block_size(_ctx: &Self::Context) -> usize {
        BLOCK_LENGTH_BYTES
    }

    fn output_size(_ctx: &Self::Context) -> usize {
        DIGEST_LENGTH_BYTES
    }
}
