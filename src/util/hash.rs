use std::hash::{BuildHasher, Hasher};

/// A hasher that ignores its input entirely, forcing every key into the same bucket.
#[derive(Debug)]
pub struct ConstHasher {
    state: u64,
}

impl Hasher for ConstHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConstHasherBuilder(pub u64);

impl BuildHasher for ConstHasherBuilder {
    type Hasher = ConstHasher;

    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher {
            state: self.0,
        }
    }
}

/// A hasher that only looks at the length of its input, so keys of equal length collide while the
/// order of buckets stays predictable.
#[derive(Debug)]
pub struct LengthHasher {
    state: u64,
}

impl Hasher for LengthHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        self.state += bytes.len() as u64;
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LengthHasherBuilder;

impl BuildHasher for LengthHasherBuilder {
    type Hasher = LengthHasher;

    fn build_hasher(&self) -> Self::Hasher {
        LengthHasher {
            state: 0,
        }
    }
}
