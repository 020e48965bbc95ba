use std::mem::size_of;

use crate::BLOCK_LENGTH_BYTES;

/// Offset of the big endian message length within the last block.
pub const LENGTH_OFFSET: usize = BLOCK_LENGTH_BYTES - size_of::<u64>();

/// The one or two blocks that terminate a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalBlocks {
    blocks: [[u8; BLOCK_LENGTH_BYTES]; 2],
    count: usize,
}

impl FinalBlocks {
    /// The padded blocks in the order they must be compressed.
    pub fn as_slice(&self) -> &[[u8; BLOCK_LENGTH_BYTES]] {
        &self.blocks[..self.count]
    }

    /// Whether the padding spilled over into a second block.
    pub fn spilled_over(&self) -> bool {
        self.count == 2
    }
}

/// Pad the last incomplete block of a message. A single 1-bit is appended to the remaining data, followed by
/// zeroes and the total message length in bits as a big endian 64 bit integer. If the 0x80 terminator leaves no
/// room for the length, a second block carrying only zeroes and the length is produced.
///
/// # Parameters
/// - `remaining_data` the unprocessed tail of the message, at most 63 bytes
/// - `message_length_bits` the length of the complete message in bits
///
/// # Panics
/// Panics if `remaining_data` holds a full block (64 bytes) or more. Full blocks must be compressed before padding.
pub fn pad(remaining_data: &[u8], message_length_bits: u64) -> FinalBlocks {
    assert!(remaining_data.len() < BLOCK_LENGTH_BYTES);

    let mut blocks = [[0_u8; BLOCK_LENGTH_BYTES]; 2];
    let last_block = &mut blocks[0];
    last_block[..remaining_data.len()].copy_from_slice(remaining_data);
    last_block[remaining_data.len()] = 0x80;

    let count = if remaining_data.len() + 1 > LENGTH_OFFSET { 2 } else { 1 };
    blocks[count - 1][LENGTH_OFFSET..].copy_from_slice(&message_length_bits.to_be_bytes());

    FinalBlocks { blocks, count }
}
