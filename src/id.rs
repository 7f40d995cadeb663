#[cfg(not(feature = "std"))]
use core as std;

use crate::codec;
use fstr::FStr;
use std::{array, cmp, fmt, hash, str};

/// Represents a Universally Unique IDentifier.
///
/// The 16 bytes are kept in RFC 4122 field order, so the first eight bytes form the big-endian
/// high half and the last eight the low half of the 128-bit value. Comparison orders by the high
/// half first and then by the low half, both as unsigned integers.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns the Nil UUID.
    ///
    /// The Nil UUID is an ordinary value; it is not used to signal errors anywhere in this crate.
    pub const fn null() -> Self {
        Self::NIL
    }

    /// Returns true if all 128 bits are zero.
    pub const fn is_null(&self) -> bool {
        let (high, low) = self.as_u64_pair();
        high == 0 && low == 0
    }

    /// Creates an object from the high and low 64-bit halves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidv4::Uuid;
    ///
    /// let x = Uuid::from_u64_pair(0xffff_ffff_ffff_4fff, 0xbfff_ffff_ffff_ffff);
    /// assert_eq!(x.to_string(), "ffffffff-ffff-4fff-bfff-ffffffffffff");
    /// ```
    pub const fn from_u64_pair(high: u64, low: u64) -> Self {
        Self::from_u128(((high as u128) << 64) | low as u128)
    }

    /// Returns the high and low 64-bit halves.
    pub const fn as_u64_pair(&self) -> (u64, u64) {
        let value = u128::from_be_bytes(self.0);
        ((value >> 64) as u64, value as u64)
    }

    /// Creates an object from a 128-bit unsigned integer.
    pub const fn from_u128(value: u128) -> Self {
        Self(value.to_be_bytes())
    }

    /// Creates an object from a 16-byte array in RFC 4122 field order.
    ///
    /// Any 16 bytes are accepted.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns the 16-byte array in RFC 4122 field order.
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the 64-bit hash value used by the [`Hash`](hash::Hash) implementation.
    ///
    /// This value is a quick mix of the two halves, suitable for hash tables only.
    pub const fn hash_value(&self) -> u64 {
        let (high, low) = self.as_u64_pair();
        high ^ low
            .wrapping_add(0x9e37_79b9)
            .wrapping_add(high << 6)
            .wrapping_add(high >> 2)
    }

    /// Reports the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0x0..=0x7 => Variant::Var0,
            0x8..=0xb => Variant::Var10,
            0xc..=0xd => Variant::Var110,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the version field value of the UUID or `None` if the UUID does not have the
    /// variant field value of `10`.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidv4::Uuid;
    ///
    /// let x = "2ca4b2ce-6c13-40d4-bccf-37d222820f6f".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "2ca4b2ce-6c13-40d4-bccf-37d222820f6f");
    /// assert_eq!(format!("{}", y), "2ca4b2ce-6c13-40d4-bccf-37d222820f6f");
    /// # Ok::<(), uuidv4::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        let buffer = codec::encode(&self.0);
        debug_assert!(buffer.is_ascii());
        // SAFETY: the codec emits ASCII hex digits and dashes only
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation without
    /// validating it.
    ///
    /// Well-formed input of either case decodes exactly as [`str::parse`] would. Anything else
    /// yields some value instead of an error: input shorter than 36 bytes is padded with zeros,
    /// input longer than 36 bytes is truncated, and non-hex characters decode to unspecified
    /// digits. Use [`str::parse`] when the input comes from an untrusted source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidv4::Uuid;
    ///
    /// let x = Uuid::parse_unchecked("ffffffff-ffff-4fff-bfff-ffffffffffff");
    /// assert_eq!(x.as_u64_pair(), (0xffff_ffff_ffff_4fff, 0xbfff_ffff_ffff_ffff));
    /// ```
    pub fn parse_unchecked(src: &str) -> Self {
        let mut text = [0u8; 36];
        let len = cmp::min(src.len(), text.len());
        text[..len].copy_from_slice(&src.as_bytes()[..len]);
        Self(codec::decode(&text))
    }
}

impl hash::Hash for Uuid {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation, rejecting any
    /// input that is not exactly 36 characters with dashes at the right offsets and hex digits
    /// of either case elsewhere.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let text = <&[u8; 36]>::try_from(src.as_bytes()).map_err(|_| ParseError {
            kind: ParseErrorKind::InvalidLength(src.len()),
        })?;
        if let Some((offset, found)) = codec::first_error(text) {
            return Err(ParseError {
                kind: ParseErrorKind::InvalidCharacter { offset, found },
            });
        }
        Ok(Self(codec::decode(text)))
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = array::TryFromSliceError;

    /// Creates an object from a byte slice that must be exactly 16 bytes long.
    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 16]>::try_from(src).map(Self)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self::from_u128(src)
    }
}

/// UUID variants defined by RFC 4122.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// `0xx` (reserved for NCS backward compatibility)
    Var0,
    /// `10x` (the variant specified by RFC 4122)
    Var10,
    /// `110` (reserved for Microsoft backward compatibility)
    Var110,
    /// `111` (reserved for future definition)
    VarReserved,
}

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    kind: ParseErrorKind,
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
enum ParseErrorKind {
    InvalidLength(usize),
    InvalidCharacter { offset: usize, found: u8 },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid string representation: ")?;
        match self.kind {
            ParseErrorKind::InvalidLength(len) => {
                write!(f, "expected 36 bytes, found {}", len)
            }
            ParseErrorKind::InvalidCharacter { offset, found } => {
                let expected = if codec::DASH_OFFSETS.contains(&offset) {
                    "'-'"
                } else {
                    "hex digit"
                };
                write!(
                    f,
                    "expected {} at offset {}, found {:?}",
                    expected,
                    offset,
                    char::from(found)
                )
            }
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{ParseError, Uuid};

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }

    impl std::error::Error for ParseError {}
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::try_from(value).map_err(de::Error::custom)
        }
    }

}
