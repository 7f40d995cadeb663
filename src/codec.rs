//! Branch-free conversion between the 16-byte binary form and the 8-4-4-4-12 text form.
//!
//! Both directions work on two `u128` lanes, one per 64-bit half of a UUID, and process all
//! nibbles of a lane at once with shifts, masks, and per-byte arithmetic (SIMD within a
//! register). No step branches on or indexes by the value of a nibble, so the running time does
//! not depend on which hex digits are present.
//!
//! ```rust
//! use uuidv4::codec;
//!
//! let text = codec::encode(&[0xab; 16]);
//! assert_eq!(&text, b"abababab-abab-abab-abab-abababababab");
//! assert_eq!(codec::decode(&text), [0xab; 16]);
//! ```

/// Byte offsets of the dashes in the text form.
pub const DASH_OFFSETS: [usize; 4] = [8, 13, 18, 23];

const LO_NIBBLES: u128 = 0x0f0f_0f0f_0f0f_0f0f_0f0f_0f0f_0f0f_0f0f;
const LO_BITS: u128 = 0x0101_0101_0101_0101_0101_0101_0101_0101;

/// Converts 16 bytes into the 36-byte lowercase 8-4-4-4-12 representation.
pub fn encode(bytes: &[u8; 16]) -> [u8; 36] {
    let (hi, lo) = split(bytes);
    let hi = nibbles_to_ascii(spread(hi)).to_be_bytes();
    let lo = nibbles_to_ascii(spread(lo)).to_be_bytes();

    let mut dst = [b'-'; 36];
    dst[0..8].copy_from_slice(&hi[0..8]);
    dst[9..13].copy_from_slice(&hi[8..12]);
    dst[14..18].copy_from_slice(&hi[12..16]);
    dst[19..23].copy_from_slice(&lo[0..4]);
    dst[24..36].copy_from_slice(&lo[4..16]);
    dst
}

/// Converts the 36-byte 8-4-4-4-12 representation into 16 bytes.
///
/// This function does not validate its input. Hex digits of either case decode correctly;
/// anything else, including the characters at the dash offsets, produces an unspecified but
/// deterministic result.
pub fn decode(text: &[u8; 36]) -> [u8; 16] {
    let mut hi = [0u8; 16];
    let mut lo = [0u8; 16];
    hi[0..8].copy_from_slice(&text[0..8]);
    hi[8..12].copy_from_slice(&text[9..13]);
    hi[12..16].copy_from_slice(&text[14..18]);
    lo[0..4].copy_from_slice(&text[19..23]);
    lo[4..16].copy_from_slice(&text[24..36]);

    let hi = gather(ascii_to_nibbles(u128::from_be_bytes(hi)));
    let lo = gather(ascii_to_nibbles(u128::from_be_bytes(lo)));

    let mut dst = [0u8; 16];
    dst[..8].copy_from_slice(&hi.to_be_bytes());
    dst[8..].copy_from_slice(&lo.to_be_bytes());
    dst
}

/// Returns true if `text` is a well-formed 8-4-4-4-12 representation in either case.
///
/// The whole input is always inspected; the scan does not stop at the first bad byte.
pub fn is_well_formed(text: &[u8; 36]) -> bool {
    first_error(text).is_none()
}

/// Returns the offset and value of the first byte that does not belong in a well-formed text
/// representation.
pub(crate) fn first_error(text: &[u8; 36]) -> Option<(usize, u8)> {
    let mut found = None;
    for (i, &c) in text.iter().enumerate() {
        let ok = if DASH_OFFSETS.contains(&i) {
            c == b'-'
        } else {
            c.is_ascii_hexdigit()
        };
        if !ok && found.is_none() {
            found = Some((i, c));
        }
    }
    found
}

fn split(bytes: &[u8; 16]) -> (u64, u64) {
    let mut hi = [0u8; 8];
    let mut lo = [0u8; 8];
    hi.copy_from_slice(&bytes[..8]);
    lo.copy_from_slice(&bytes[8..]);
    (u64::from_be_bytes(hi), u64::from_be_bytes(lo))
}

/// Moves each nibble of `x` into its own byte, high nibble first.
///
/// `0x1234_5678_9abc_def0` becomes `0x0102_0304_0506_0708_090a_0b0c_0d0e_0f00`.
#[inline]
fn spread(x: u64) -> u128 {
    let mut t = x as u128;
    t = (t | (t << 32)) & 0x0000_0000_ffff_ffff_0000_0000_ffff_ffff;
    t = (t | (t << 16)) & 0x0000_ffff_0000_ffff_0000_ffff_0000_ffff;
    t = (t | (t << 8)) & 0x00ff_00ff_00ff_00ff_00ff_00ff_00ff_00ff;
    (((t >> 4) & LO_NIBBLES) << 8) | (t & LO_NIBBLES)
}

/// Inverse of [`spread`]: packs the low nibble of each byte pair back into one byte.
#[inline]
fn gather(t: u128) -> u64 {
    let mut t = (t | (t >> 4)) & 0x00ff_00ff_00ff_00ff_00ff_00ff_00ff_00ff;
    t = (t | (t >> 8)) & 0x0000_ffff_0000_ffff_0000_ffff_0000_ffff;
    t = (t | (t >> 16)) & 0x0000_0000_ffff_ffff_0000_0000_ffff_ffff;
    t = (t | (t >> 32)) & 0xffff_ffff_ffff_ffff;
    t as u64
}

/// Maps every byte `0..=15` to its lowercase hex digit.
#[inline]
fn nibbles_to_ascii(d: u128) -> u128 {
    // bit 4 of d + 6 is set exactly for 10..=15
    let alpha = ((d + 0x06 * LO_BITS) >> 4) & LO_BITS;
    d + b'0' as u128 * LO_BITS + alpha * (b'a' - b'0' - 10) as u128
}

/// Maps every hex digit byte to its value `0..=15`.
#[inline]
fn ascii_to_nibbles(c: u128) -> u128 {
    // letters have bit 6 set and their low nibble counts from 1
    let alpha = (c >> 6) & LO_BITS;
    (c & LO_NIBBLES) + alpha * 9
}

#[cfg(test)]
mod tests {
    use super::{decode, encode, gather, is_well_formed, spread};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [([u8; 16], &'static str)] {
        &[
            ([0x00; 16], "00000000-0000-0000-0000-000000000000"),
            ([0xff; 16], "ffffffff-ffff-ffff-ffff-ffffffffffff"),
            (
                [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16],
                "01020304-0506-0708-090a-0b0c0d0e0f10",
            ),
            (
                [
                    0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98, 0x76,
                    0x54, 0x32, 0x10,
                ],
                "01234567-89ab-cdef-fedc-ba9876543210",
            ),
            (
                [
                    0x2c, 0xa4, 0xb2, 0xce, 0x6c, 0x13, 0x40, 0xd4, 0xbc, 0xcf, 0x37, 0xd2, 0x22,
                    0x82, 0x0f, 0x6f,
                ],
                "2ca4b2ce-6c13-40d4-bccf-37d222820f6f",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (bytes, text) in prepare_cases() {
            assert_eq!(&encode(bytes), text.as_bytes());
            assert_eq!(&decode(text.as_bytes().try_into().unwrap()), bytes);
            let upper = text.to_uppercase();
            assert_eq!(&decode(upper.as_bytes().try_into().unwrap()), bytes);
        }
    }

    /// Maps every byte value to two hex digits
    #[test]
    fn maps_every_byte_value_to_two_hex_digits() {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";
        for b in 0..=255u8 {
            let mut bytes = [0u8; 16];
            for (i, e) in bytes.iter_mut().enumerate() {
                *e = b.wrapping_add(i as u8 * 17);
            }
            let text = encode(&bytes);
            let mut digits = text.iter().filter(|c| **c != b'-');
            for e in bytes {
                assert_eq!(*digits.next().unwrap(), DIGITS[(e >> 4) as usize]);
                assert_eq!(*digits.next().unwrap(), DIGITS[(e & 15) as usize]);
            }
            assert_eq!(decode(&text), bytes);
        }
    }

    /// Spreads and gathers nibbles symmetrically
    #[test]
    fn spreads_and_gathers_nibbles_symmetrically() {
        assert_eq!(
            spread(0x1234_5678_9abc_def0),
            0x0102_0304_0506_0708_090a_0b0c_0d0e_0f00
        );
        for x in [0, u64::MAX, 0x0123_4567_89ab_cdef, 0x8000_0000_0000_0001] {
            assert_eq!(gather(spread(x)), x);
        }
    }

    /// Places dashes at fixed offsets
    #[test]
    fn places_dashes_at_fixed_offsets() {
        let text = encode(&[0x5a; 16]);
        for (i, c) in text.iter().enumerate() {
            assert_eq!(*c == b'-', super::DASH_OFFSETS.contains(&i), "offset {}", i);
        }
    }

    /// Decodes malformed input without panicking
    #[test]
    fn decodes_malformed_input_without_panicking() {
        let cases: [&[u8; 36]; 3] = [
            b"zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz",
            b"0123456789abcdef0123456789abcdef0123",
            b"                                    ",
        ];
        for e in cases {
            assert!(!is_well_formed(e));
            let _ = decode(e);
        }
        assert!(is_well_formed(b"01234567-89AB-cdef-FEDC-ba9876543210"));
    }
}
