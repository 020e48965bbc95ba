#![allow(clippy::unreadable_literal)]

use std::fmt;

use collider_util::{constant_time_eq, write_u32a_be};

use crate::HashValue;

/// Size of a finished digest in bytes.
pub const DIGEST_LENGTH_BYTES: usize = 20;

/// The initial state for any SHA-0 or SHA-1 hash. From here, all blocks are applied.
pub const INITIAL: ChainingState = ChainingState {
    a: 0x67452301,
    b: 0xEFCDAB89,
    c: 0x98BADCFE,
    d: 0x10325476,
    e: 0xC3D2E1F0,
};

/// The chaining state threaded through all block compressions. It consists of five double-words named `a`, `b`,
/// `c`, `d` and `e`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ChainingState {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
    pub e: u32,
}

impl ChainingState {
    /// The five words in order `a` to `e`.
    pub fn words(&self) -> [u32; 5] {
        [self.a, self.b, self.c, self.d, self.e]
    }

    /// Add another state word by word, modulo 2^32.
    pub fn wrapping_add(&self, other: &ChainingState) -> ChainingState {
        ChainingState {
            a: self.a.wrapping_add(other.a),
            b: self.b.wrapping_add(other.b),
            c: self.c.wrapping_add(other.c),
            d: self.d.wrapping_add(other.d),
            e: self.e.wrapping_add(other.e),
        }
    }

    /// Serialize the state big endian into a digest.
    pub fn to_digest(&self) -> Digest {
        let mut bytes = [0u8; DIGEST_LENGTH_BYTES];
        write_u32a_be(&mut bytes, &self.words());
        Digest(bytes)
    }
}

impl Default for ChainingState {
    fn default() -> Self {
        INITIAL
    }
}

/// A finished 160 bit digest.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Digest(pub [u8; DIGEST_LENGTH_BYTES]);

impl Digest {
    pub fn as_bytes(&self) -> &[u8; DIGEST_LENGTH_BYTES] {
        &self.0
    }

    /// Compare two digests without leaking the position of the first differing byte through timing.
    pub fn ct_eq(&self, other: &Digest) -> bool {
        constant_time_eq(&self.0, &other.0)
    }

    /// Uppercase hexadecimal rendering, two characters per byte and no separators.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl HashValue for Digest {
    fn raw(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LENGTH_BYTES]> for Digest {
    fn from(bytes: [u8; DIGEST_LENGTH_BYTES]) -> Self {
        Digest(bytes)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}
