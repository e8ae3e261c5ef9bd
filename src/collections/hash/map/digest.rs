use std::hash::{BuildHasher, Hasher};

/// The initial state of every [`Djb2Hasher`].
pub const DIGEST_SEED: u64 = 81;

/// A [`Hasher`] implementing a seeded variant of Dan Bernstein's djb2 string hash.
///
/// Every byte is mixed in as `state * 33 + byte`, wrapping on overflow. The result depends only on
/// the bytes written, so it is stable across runs, processes and platforms. It is meant for bucket
/// placement only and provides no resistance to deliberately colliding keys.
#[derive(Debug, Clone)]
pub struct Djb2Hasher {
    state: u64,
}

impl Default for Djb2Hasher {
    fn default() -> Self {
        Djb2Hasher {
            state: DIGEST_SEED,
        }
    }
}

impl Hasher for Djb2Hasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = (self.state << 5)
                .wrapping_add(self.state)
                .wrapping_add(u64::from(*byte));
        }
    }
}

/// The default [`BuildHasher`] for [`BucketMap`](super::BucketMap), producing [`Djb2Hasher`]s.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Djb2Builder;

impl BuildHasher for Djb2Builder {
    type Hasher = Djb2Hasher;

    fn build_hasher(&self) -> Self::Hasher {
        Djb2Hasher::default()
    }
}

/// Calculates the 64-bit digest of `key` with the default hasher.
///
/// Equal strings always produce equal digests. Distinct strings may of course collide once the
/// digest is reduced to a bucket index.
pub fn digest(key: &str) -> u64 {
    digest_with(&Djb2Builder, key)
}

pub(crate) fn digest_with<B: BuildHasher>(builder: &B, key: &str) -> u64 {
    let mut hasher = builder.build_hasher();
    // Only the raw bytes: `str::hash` would also write a terminator.
    hasher.write(key.as_bytes());
    hasher.finish()
}
