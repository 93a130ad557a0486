use xxhash_rust::xxh3::xxh3_128_with_seed;

/// Seed used by [`Xxh3Hasher::default`].
pub const DEFAULT_SEED: u64 = 0x5348_4152_4455_4944;

/// A deterministic 96-bit content hash, split into three 32-bit components.
///
/// Only determinism and an even spread of each component matter; no
/// cryptographic property is expected. Any `Fn(&[u8]) -> [i32; 3]` is a
/// `ContentHasher`, which makes it easy to pin hashes in tests.
///
/// # Example
///
/// ```
/// use hashuid::{HashUidBuilder, UidBuilder};
///
/// let builder = HashUidBuilder::with_hasher(|_: &[u8]| [1, 2, 3]);
/// assert_eq!(builder.new_id(Some(b"anything".as_slice())).to_string(), "1.2.3");
/// ```
pub trait ContentHasher {
    /// Hashes `data` into `(h0, h1, h2)`.
    fn hash(&self, data: &[u8]) -> [i32; 3];
}

impl<F> ContentHasher for F
where
    F: Fn(&[u8]) -> [i32; 3],
{
    fn hash(&self, data: &[u8]) -> [i32; 3] {
        self(data)
    }
}

/// Seeded XXH3-128, keeping the low 96 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Xxh3Hasher {
    seed: u64,
}

impl Xxh3Hasher {
    /// Creates a hasher with a custom seed. Identifiers built with different
    /// seeds are unrelated.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// The seed in use.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for Xxh3Hasher {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl ContentHasher for Xxh3Hasher {
    fn hash(&self, data: &[u8]) -> [i32; 3] {
        let h = xxh3_128_with_seed(data, self.seed);
        // Truncating casts keep exactly one 32-bit lane each
        [h as u32 as i32, (h >> 32) as u32 as i32, (h >> 64) as u32 as i32]
    }
}
