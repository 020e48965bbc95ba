use log::{debug, trace};

use crate::compression::compress;
use crate::error::{HashError, Result};
use crate::padding::pad;
use crate::schedule::ScheduleVariant;
use crate::state::{ChainingState, Digest, INITIAL};
use crate::BLOCK_LENGTH_BYTES;

/// Lifecycle of an [`Engine`]. Only an active engine accepts input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EngineState {
    Active,
    Finalized,
}

/// Pending input bytes that do not yet fill a whole block.
#[derive(Debug, Clone)]
struct BlockBuffer {
    block: [u8; BLOCK_LENGTH_BYTES],
    fill: usize,
}

impl BlockBuffer {
    fn new() -> Self {
        BlockBuffer { block: [0; BLOCK_LENGTH_BYTES], fill: 0 }
    }

    fn clear(&mut self) {
        self.fill = 0;
    }

    fn remaining_data(&self) -> &[u8] {
        &self.block[..self.fill]
    }

    /// Copy as many bytes from `input` as fit into the block and return how many were taken.
    fn fill_from(&mut self, input: &[u8]) -> usize {
        let taken = usize::min(BLOCK_LENGTH_BYTES - self.fill, input.len());
        self.block[self.fill..self.fill + taken].copy_from_slice(&input[..taken]);
        self.fill += taken;
        taken
    }

    fn is_full(&self) -> bool {
        self.fill == BLOCK_LENGTH_BYTES
    }
}

/// A streaming SHA-0 / SHA-1 hash engine. Input is fed with `update` in chunks of arbitrary size and the digest is
/// obtained once with `digest`. Afterwards the engine must be `reset` before it can hash another message.
///
/// An engine is not meant to be shared between threads; every concurrent hashing task should own its own instance.
#[derive(Debug, Clone)]
pub struct Engine {
    variant: ScheduleVariant,
    hash: ChainingState,
    message_length: u64,
    buffer: BlockBuffer,
    lifecycle: EngineState,
}

impl Engine {
    /// Create an active engine using the given message schedule.
    pub fn new(variant: ScheduleVariant) -> Self {
        Engine {
            variant,
            hash: INITIAL,
            message_length: 0,
            buffer: BlockBuffer::new(),
            lifecycle: EngineState::Active,
        }
    }

    pub fn sha0() -> Self {
        Self::new(ScheduleVariant::Sha0)
    }

    pub fn sha1() -> Self {
        Self::new(ScheduleVariant::Sha1)
    }

    pub fn variant(&self) -> ScheduleVariant {
        self.variant
    }

    pub fn state(&self) -> EngineState {
        self.lifecycle
    }

    /// The current chaining state. After `digest` this is the final hash value.
    pub fn chaining_state(&self) -> &ChainingState {
        &self.hash
    }

    /// Number of message bits consumed since the last reset.
    pub fn message_length_bits(&self) -> u64 {
        self.message_length
    }

    /// Discard all input and return to the initial, active state.
    pub fn reset(&mut self) {
        trace!("resetting {} engine", self.variant);
        self.hash = INITIAL;
        self.message_length = 0;
        self.buffer.clear();
        self.lifecycle = EngineState::Active;
    }

    /// Update the hash with more data. Every time the block buffer fills up it is compressed into the chaining state,
    /// a trailing partial block is kept until more data arrives or the hash is finished.
    pub fn update(&mut self, input: &[u8]) -> Result<()> {
        self.ensure_active()?;

        self.message_length = self.message_length.wrapping_add((input.len() as u64).wrapping_mul(8));

        let mut input = input;
        while !input.is_empty() {
            let taken = self.buffer.fill_from(input);
            input = &input[taken..];

            if self.buffer.is_full() {
                self.hash = compress(&self.hash, &self.buffer.block, self.variant);
                self.buffer.clear();
            }
        }

        Ok(())
    }

    /// Pad the remaining data, compress the final block(s) and return the digest. The engine is finalized
    /// afterwards.
    pub fn digest(&mut self) -> Result<Digest> {
        self.ensure_active()?;

        let final_blocks = pad(self.buffer.remaining_data(), self.message_length);
        for block in final_blocks.as_slice() {
            self.hash = compress(&self.hash, block, self.variant);
        }
        self.buffer.clear();
        self.lifecycle = EngineState::Finalized;

        let digest = self.hash.to_digest();
        trace!("finalized {} engine after {} bits: {}", self.variant, self.message_length, digest);
        Ok(digest)
    }

    fn ensure_active(&self) -> Result<()> {
        match self.lifecycle {
            EngineState::Active => Ok(()),
            EngineState::Finalized => {
                debug!("{} engine used after finalization", self.variant);
                Err(HashError::AlreadyFinalized)
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(ScheduleVariant::default())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn one_shot(variant: ScheduleVariant, input: &[u8]) -> Digest {
        let mut engine = Engine::new(variant);
        engine.update(input).unwrap();
        engine.digest().unwrap()
    }

    #[test]
    fn test_finalize_guard() {
        let mut engine = Engine::sha1();
        engine.update(b"abc").unwrap();
        engine.digest().unwrap();
        assert_eq!(engine.state(), EngineState::Finalized);

        assert_eq!(engine.digest(), Err(HashError::AlreadyFinalized));
        assert_eq!(engine.digest(), Err(HashError::AlreadyFinalized));
        assert_eq!(engine.update(b"more"), Err(HashError::AlreadyFinalized));
        assert_eq!(engine.update(b""), Err(HashError::AlreadyFinalized));
    }

    #[test]
    fn test_reset_reactivates() {
        let mut engine = Engine::sha0();
        engine.update(b"some data").unwrap();
        let first = engine.digest().unwrap();

        engine.reset();
        assert_eq!(engine.state(), EngineState::Active);
        assert_eq!(engine.message_length_bits(), 0);
        assert_eq!(*engine.chaining_state(), INITIAL);

        engine.update(b"some data").unwrap();
        assert_eq!(engine.digest().unwrap(), first);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut engine = Engine::sha1();
        engine.update(b"partial").unwrap();
        engine.reset();
        engine.reset();
        assert_eq!(engine.digest().unwrap(), one_shot(ScheduleVariant::Sha1, b""));
    }

    #[test]
    fn test_message_length_counts_bits() {
        let mut engine = Engine::sha1();
        engine.update(&[0u8; 100]).unwrap();
        engine.update(&[0u8; 3]).unwrap();
        assert_eq!(engine.message_length_bits(), 103 * 8);
    }

    #[test]
    fn test_buffer_never_holds_a_full_block() {
        let mut engine = Engine::sha1();
        for _ in 0..BLOCK_LENGTH_BYTES {
            engine.update(&[0x5A]).unwrap();
            assert!(engine.buffer.fill < BLOCK_LENGTH_BYTES);
        }
        assert_eq!(engine.buffer.fill, 0);
        assert_ne!(*engine.chaining_state(), INITIAL);
    }

    #[test]
    fn test_byte_wise_updates() {
        let message = [0x61u8; 200];
        for variant in ScheduleVariant::ALL.iter() {
            let mut engine = Engine::new(*variant);
            for byte in message.iter() {
                engine.update(&[*byte]).unwrap();
            }
            assert_eq!(engine.digest().unwrap(), one_shot(*variant, &message));
        }
    }

    proptest! {
        #[test]
        fn prop_streaming_equivalence(
            message in prop::collection::vec(any::<u8>(), 0..300),
            split in any::<prop::sample::Index>(),
        ) {
            let split = split.index(message.len() + 1);
            for variant in ScheduleVariant::ALL.iter() {
                let mut engine = Engine::new(*variant);
                engine.update(&message[..split]).unwrap();
                engine.update(&message[split..]).unwrap();
                prop_assert_eq!(engine.digest().unwrap(), one_shot(*variant, &message));
            }
        }

        #[test]
        fn prop_deterministic_after_reset(message in prop::collection::vec(any::<u8>(), 0..300)) {
            let mut engine = Engine::sha1();
            engine.update(&message).unwrap();
            let first = engine.digest().unwrap();
            engine.reset();
            engine.update(&message).unwrap();
            prop_assert_eq!(engine.digest().unwrap(), first);
        }
    }
}
