//! Small byte and word helpers shared by the hash implementations and the tools built on top of them.

/// Copies the ``source`` array to the ``dest`` array, treating every four bytes of ``source`` as one big endian
/// integer. ``source`` must be at least four times bigger than ``dest``, surplus bytes are ignored.
pub fn align_to_u32a_be(dest: &mut [u32], source: &[u8]) {
    assert!(source.len() >= dest.len() * 4);

    for (dword, bytes) in dest.iter_mut().zip(source.chunks_exact(4)) {
        *dword = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
}

/// Writes the ``source`` words into ``dest`` as big endian byte quadruples. ``dest`` must be at least four times
/// bigger than ``source``.
pub fn write_u32a_be(dest: &mut [u8], source: &[u32]) {
    assert!(dest.len() >= source.len() * 4);

    for (bytes, dword) in dest.chunks_exact_mut(4).zip(source.iter()) {
        bytes.copy_from_slice(&dword.to_be_bytes());
    }
}

/// Compares two byte slices without exiting early on the first differing byte. Slices of unequal length are never
/// equal; their length is not considered secret.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b) {
        diff |= x ^ y;
    }
    diff == 0
}
