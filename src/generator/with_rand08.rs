//! Integration with `rand` (v0.8) crate.

use super::{Rng, V4Generator};
use rand::RngCore;

/// An adapter that implements [`Rng`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> Rng for Adapter<T> {
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }
}

impl<T: RngCore> V4Generator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidv4::V4Generator;
    ///
    /// let mut g = V4Generator::with_rand08(rand::rngs::OsRng);
    /// println!("{}", g.generate());
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}

#[cfg(feature = "global_gen")]
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
mod seeded {
    use super::{Adapter, V4Generator};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    /// The random number generator used by [`V4Generator::with_seed`] and
    /// [`V4Generator::from_entropy`].
    pub type DefaultRng = Adapter<ChaCha12Rng>;

    impl V4Generator<DefaultRng> {
        /// Creates a generator object whose output is fully determined by `seed`.
        ///
        /// # Examples
        ///
        /// ```rust
        /// use uuidv4::V4Generator;
        ///
        /// let mut a = V4Generator::with_seed(42);
        /// let mut b = V4Generator::with_seed(42);
        /// assert_eq!(a.generate(), b.generate());
        /// ```
        pub fn with_seed(seed: u64) -> Self {
            Self::with_rand08(ChaCha12Rng::seed_from_u64(seed))
        }

        /// Creates a generator object seeded from the operating system's entropy source.
        ///
        /// # Panics
        ///
        /// Panics if the operating system's entropy source is unavailable.
        pub fn from_entropy() -> Self {
            Self::with_rand08(ChaCha12Rng::from_entropy())
        }
    }
}

#[cfg(feature = "global_gen")]
pub use seeded::DefaultRng;
