//! Property tests checking `BucketMap` against `std::collections::HashMap`, with bucket counts
//! small enough to force chaining.

use std::collections::HashMap;

use proptest::prelude::*;
use support_lib::collections::hash::BucketMap;
use support_lib::collections::hash::map::digest;

#[derive(Debug, Clone)]
enum Op {
    Set(String, u32),
    Remove(String),
}

fn key() -> impl Strategy<Value = String> {
    "[a-e]{0,3}"
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (key(), any::<u32>()).prop_map(|(k, v)| Op::Set(k, v)),
        1 => key().prop_map(Op::Remove),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    #[test]
    fn map_matches_model(buckets in 1usize..8, ops in prop::collection::vec(op(), 0..64)) {
        let mut map = BucketMap::with_buckets(buckets);
        let mut model = HashMap::new();

        for op in ops {
            match op {
                Op::Set(k, v) => {
                    let previous = map.set(k.as_str(), v);
                    prop_assert_eq!(previous, model.insert(k, v));
                },
                Op::Remove(k) => prop_assert_eq!(map.remove(&k), model.remove(&k)),
            }
            prop_assert_eq!(map.len(), model.len());
        }

        prop_assert_eq!(map.buckets(), buckets);
        for (k, v) in &model {
            prop_assert_eq!(map.get(k), Some(v));
        }

        let mut entries: Vec<(String, u32)> = map.into_iter().collect();
        let mut expected: Vec<(String, u32)> = model.into_iter().collect();
        entries.sort();
        expected.sort();
        prop_assert_eq!(entries, expected);
    }

    #[test]
    fn digest_is_stable(key in ".*") {
        let map = BucketMap::<()>::new();
        prop_assert_eq!(map.bucket_index(&key) as u64, digest(&key) % 64);
        prop_assert_eq!(map.bucket_index(&key), map.bucket_index(&key.clone()));
    }
}
