use std::hash::BuildHasher;
use std::iter::FusedIterator;
use std::{slice, vec};

use super::bucket_map::Chain;
use super::BucketMap;

impl<V, B: BuildHasher> IntoIterator for BucketMap<V, B> {
    type Item = (String, V);

    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.len(),
            buckets: self.buckets.into_vec().into_iter(),
            chain: Vec::new().into_iter(),
        }
    }
}

pub struct IntoIter<V> {
    pub(crate) buckets: vec::IntoIter<Chain<V>>,
    pub(crate) chain: vec::IntoIter<(String, V)>,
    pub(crate) len: usize,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                self.len -= 1;
                return Some(entry);
            }
            // Move on to the next bucket, stopping once they run out.
            self.chain = self.buckets.next()?.into_iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> FusedIterator for IntoIter<V> {}

impl<'a, V, B: BuildHasher> IntoIterator for &'a BucketMap<V, B> {
    type Item = (&'a str, &'a V);

    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            len: self.len(),
            buckets: self.buckets.iter(),
            chain: Default::default(),
        }
    }
}

pub struct Iter<'a, V> {
    pub(crate) buckets: slice::Iter<'a, Chain<V>>,
    pub(crate) chain: slice::Iter<'a, (String, V)>,
    pub(crate) len: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, value)) = self.chain.next() {
                self.len -= 1;
                return Some((key.as_str(), value));
            }
            self.chain = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Iter {
            buckets: self.buckets.clone(),
            chain: self.chain.clone(),
            len: self.len,
        }
    }
}

pub struct IntoKeys<V>(
    pub(crate) IntoIter<V>
);

impl<V> Iterator for IntoKeys<V> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

pub struct Keys<'a, V>(
    pub(crate) Iter<'a, V>
);

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

pub struct IntoValues<V>(
    pub(crate) IntoIter<V>
);

impl<V> Iterator for IntoValues<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

pub struct Values<'a, V>(
    pub(crate) Iter<'a, V>
);

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
