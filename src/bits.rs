//! Big-endian bit access into message digests. Bit 0 is the most significant
//! bit of the first byte.

/// Expands `digest` into one `0` or `1` per bit, most significant bit of each
/// byte first, bytes left to right.
pub fn bit_decomposition(digest: &[u8]) -> Vec<u8> {
    (0..digest.len() * 8)
        .map(|i| bit_of_byteslice(i, digest) as u8)
        .collect()
}

/// Reads bit `index` of `bytes`. Panics if `index / 8` is past the end, so
/// callers check the digest length first.
pub fn bit_of_byteslice(index: usize, bytes: &[u8]) -> bool {
    let byte = bytes[index.div_euclid(8)];
    bit_of_byte(index.rem_euclid(8), byte)
}

fn bitmask_for(index: usize) -> u8 {
    match index {
        0 => 0b10000000,
        1 => 0b01000000,
        2 => 0b00100000,
        3 => 0b00010000,
        4 => 0b00001000,
        5 => 0b00000100,
        6 => 0b00000010,
        7 => 0b00000001,
        _ => bitmask_for(index.rem_euclid(8)),
    }
}

fn bit_of_byte(index: usize, byte: u8) -> bool {
    let mask = bitmask_for(index);
    byte & mask == mask
}

#[test]
fn test_bit_of_byte() {
    assert!(bit_of_byte(0, 0b10000000));
    assert!(!bit_of_byte(0, 0b01000000));
    assert!(bit_of_byte(7, 0b00000001));
}

#[test]
fn test_bit_of_byteslice() {
    assert!(!bit_of_byteslice(0, b"\x00\x00"));
    assert!(bit_of_byteslice(0, b"\x80\x00"));
    assert!(!bit_of_byteslice(9, b"\xFF\x00"));
    assert!(bit_of_byteslice(9, b"\x00\x40"));
    assert!(bit_of_byteslice(15, b"\x00\x01"));
}
