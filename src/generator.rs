//! UUIDv4 generator and related types.

use crate::Uuid;

pub mod with_rand08;
#[cfg(feature = "global_gen")]
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub use with_rand08::DefaultRng;

/// A trait that defines the minimum random number generator interface for [`V4Generator`].
///
/// Every call must return an independent, uniformly distributed `u64`.
pub trait Rng {
    /// Returns the next random `u64`.
    fn next_u64(&mut self) -> u64;
}

/// Lends a random number generator to a [`V4Generator`] without handing over its ownership.
impl<R: Rng + ?Sized> Rng for &mut R {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

/// Represents a UUIDv4 generator that draws 128 random bits from a random number generator and
/// stamps the version and variant fields onto them.
///
/// A generator either owns its random number generator (`V4Generator<R>`) or borrows one that
/// the caller keeps managing (`V4Generator<&mut R>`). The generated values are the same either
/// way. A generator instance is not synchronized; use one generator per thread, or wrap one in a
/// lock as in the following example.
///
/// # Examples
///
/// ```rust
/// use std::{sync, thread};
/// use uuidv4::V4Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(V4Generator::with_seed(42)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
///
/// Borrowing a random number generator owned elsewhere:
///
/// ```rust
/// use rand::{rngs::StdRng, RngCore, SeedableRng};
/// use uuidv4::{generator::with_rand08::Adapter, V4Generator};
///
/// let mut rng = Adapter(StdRng::seed_from_u64(42));
/// let first = V4Generator::new(&mut rng).generate();
/// let second = V4Generator::new(&mut rng).generate();
/// assert_ne!(first, second);
/// rng.0.next_u64(); // still usable by the caller
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V4Generator<R> {
    /// The random number generator used by the generator.
    rng: R,
}

/// Bits of the high half kept as drawn: all but the version nibble.
const HIGH_AND_MASK: u64 = 0xffff_ffff_ffff_0fff;
/// Version nibble `0100`.
const HIGH_OR_MASK: u64 = 0x0000_0000_0000_4000;
/// Bits of the low half kept as drawn: all but the top two variant bits.
const LOW_AND_MASK: u64 = 0x3fff_ffff_ffff_ffff;
/// Variant bits `10`.
const LOW_OR_MASK: u64 = 0x8000_0000_0000_0000;

impl<R: Rng> V4Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object.
    ///
    /// Two `u64` values are drawn, the first for the high half and the second for the low half.
    /// The version and variant bits are cleared and then set, so the other 122 bits keep the
    /// distribution of the random number generator.
    pub fn generate(&mut self) -> Uuid {
        let high = self.rng.next_u64();
        let low = self.rng.next_u64();
        Uuid::from_u64_pair(
            (high & HIGH_AND_MASK) | HIGH_OR_MASK,
            (low & LOW_AND_MASK) | LOW_OR_MASK,
        )
    }

    /// Returns a mutable reference to the random number generator inside.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Consumes the generator and returns the random number generator inside.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv4 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uuidv4::V4Generator;
///
/// V4Generator::with_rand08(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<R: Rng> Iterator for V4Generator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<R: Rng> std::iter::FusedIterator for V4Generator<R> {}

#[cfg(test)]
mod tests {
    use super::{Rng, V4Generator};
    use crate::{Uuid, Variant};

    /// Returns the same word again and again
    struct ConstRng(u64);

    impl Rng for ConstRng {
        fn next_u64(&mut self) -> u64 {
            self.0
        }
    }

    /// Counts up from a start value
    struct CountingRng(u64);

    impl Rng for CountingRng {
        fn next_u64(&mut self) -> u64 {
            self.0 = self.0.wrapping_add(1);
            self.0
        }
    }

    /// Clears and sets only version and variant bits
    #[test]
    fn clears_and_sets_only_version_and_variant_bits() {
        let mut g = V4Generator::new(ConstRng(0));
        assert_eq!(
            g.generate(),
            Uuid::from_u64_pair(0x0000_0000_0000_4000, 0x8000_0000_0000_0000)
        );

        let mut g = V4Generator::new(ConstRng(u64::MAX));
        let e = g.generate();
        assert_eq!(
            e.as_u64_pair(),
            (0xffff_ffff_ffff_4fff, 0xbfff_ffff_ffff_ffff)
        );
        assert_eq!(&e.encode() as &str, "ffffffff-ffff-4fff-bfff-ffffffffffff");
    }

    /// Draws high half before low half
    #[test]
    fn draws_high_half_before_low_half() {
        let mut g = V4Generator::new(CountingRng(0x10));
        assert_eq!(
            g.generate().as_u64_pair(),
            (0x0000_0000_0000_4011, 0x8000_0000_0000_0012)
        );
        assert_eq!(g.into_rng().0, 0x12);
    }

    /// Advances borrowed random number generator
    #[test]
    fn advances_borrowed_random_number_generator() {
        let mut rng = CountingRng(0);
        let a = V4Generator::new(&mut rng).generate();
        let b = V4Generator::new(&mut rng).generate();
        assert_ne!(a, b);
        assert_eq!(rng.0, 4);

        let mut g = V4Generator::new(&mut rng);
        g.generate();
        g.rng_mut().next_u64();
        assert_eq!(rng.0, 7);
    }

    /// Generates RFC 4122 version 4 objects from any random number generator
    #[test]
    fn generates_rfc_4122_version_4_objects_from_any_random_number_generator() {
        for seed in [0, 1, 0x5555_5555_5555_5555, 0xaaaa_aaaa_aaaa_aaaa, u64::MAX] {
            let mut g = V4Generator::new(CountingRng(seed));
            for _ in 0..1_000 {
                let e = g.generate();
                assert_eq!(e.variant(), Variant::Var10);
                assert_eq!(e.version(), Some(4));
            }
        }
    }
}
