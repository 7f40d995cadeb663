//! A fast implementation of UUID version 4
//!
//! ```rust
//! use uuidv4::uuid4;
//!
//! let uuid = uuid4();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            random                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |            random             |  ver  |        random         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        random                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            random                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where the 4-bit `ver` field is set at `0100`, the 2-bit `var` field is set at `10`, and the
//! remaining 122 bits come unchanged from the random number generator.
//!
//! # Text representation
//!
//! [`Uuid::encode()`] and the [`Display`](core::fmt::Display) impl produce the lowercase
//! 8-4-4-4-12 form, and [`str::parse`] accepts it in either case. Both directions run through the
//! branch-free transforms in [`codec`]. [`Uuid::parse_unchecked()`] skips validation for callers
//! that already trust their input.
//!
//! ```rust
//! use uuidv4::Uuid;
//!
//! let x = "2CA4B2CE-6C13-40D4-BCCF-37D222820F6F".parse::<Uuid>()?;
//! assert_eq!(x.to_string(), "2ca4b2ce-6c13-40d4-bccf-37d222820f6f");
//! assert!("2ca4b2ce-6c13-40d4-bccf-37d222820f6".parse::<Uuid>().is_err());
//! # Ok::<(), uuidv4::ParseError>(())
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen`: Enables the thread-local default generator, [`uuid4()`], and the seeded
//!   constructors of [`V4Generator`]. Implies `std`.
//! - `std`: Enables features that depend on the standard library.
//!
//! Optional features:
//!
//! - `serde`: Enables serialization and deserialization of [`Uuid`] objects.
//! - `uuid`: Enables conversion from/to the UUID types of the [uuid] crate.
//!
//! [uuid]: https://crates.io/crates/uuid

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{ParseError, Uuid, Variant};

pub mod codec;

pub mod generator;
pub use generator::V4Generator;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::uuid4;
