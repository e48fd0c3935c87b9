use std::collections::{HashMap, HashSet};

use longmap::LongMap;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Insert(i64, u32),
    Remove(i64),
    Get(i64),
    Clear,
}

fn key_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        // Small keys: plenty of overwrites and hits on removal.
        4 => -64_i64..64,
        // Keys whose halves are equal all share the mixed hash zero.
        1 => (0_i64..16).prop_map(|n| (n << 32) | n),
        1 => any::<i64>(),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (key_strategy(), any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        4 => key_strategy().prop_map(Op::Remove),
        2 => key_strategy().prop_map(Op::Get),
        1 => Just(Op::Clear),
    ]
}

fn assert_same_contents(map: &LongMap<u32>, model: &HashMap<i64, u32>) {
    assert_eq!(map.len(), model.len());
    assert_eq!(map.is_empty(), model.is_empty());

    let keys = map.keys();
    let values = map.values();
    assert_eq!(keys.len(), model.len());
    assert_eq!(values.len(), model.len());
    assert_eq!(
        keys.iter().copied().collect::<HashSet<_>>().len(),
        keys.len(),
        "duplicate keys: {keys:?}"
    );
    for (key, value) in keys.iter().zip(&values) {
        assert_eq!(model.get(key), Some(value));
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        failure_persistence: None,
        ..ProptestConfig::default()
    })]

    #[cfg_attr(miri, ignore)]
    #[test]
    fn behaves_like_std_hash_map(ops in prop::collection::vec(op_strategy(), 1..400)) {
        let mut map = LongMap::new();
        let mut model = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    prop_assert_eq!(map.insert(k, v), model.insert(k, v));
                    prop_assert!(map.len() <= map.threshold());
                }
                Op::Remove(k) => {
                    prop_assert_eq!(map.remove(k), model.remove(&k));
                }
                Op::Get(k) => {
                    prop_assert_eq!(map.get(k), model.get(&k));
                    prop_assert_eq!(map.contains_key(k), model.contains_key(&k));
                }
                Op::Clear => {
                    let capacity = map.capacity();
                    map.clear();
                    model.clear();
                    prop_assert_eq!(map.capacity(), capacity);
                }
            }

            let capacity = map.capacity();
            prop_assert!(capacity == 0 || capacity.is_power_of_two());
            prop_assert!(capacity == 0 || capacity >= 16);
            prop_assert_eq!(map.len(), model.len());
        }

        assert_same_contents(&map, &model);
        for (key, value) in &model {
            prop_assert_eq!(map.get(*key), Some(value));
            prop_assert!(map.contains_value(value));
        }
    }

    #[cfg_attr(miri, ignore)]
    #[test]
    fn custom_configuration(
        capacity in 0_usize..300,
        load_factor in 0.05_f32..8.0,
        keys in prop::collection::vec(key_strategy(), 0..300),
    ) {
        let mut map = LongMap::with_capacity_and_load_factor(capacity, load_factor).unwrap();
        let mut model = HashMap::new();
        let initial_capacity = capacity.max(1).next_power_of_two();

        for (i, key) in keys.iter().enumerate() {
            prop_assert_eq!(map.insert(*key, i as u32), model.insert(*key, i as u32));
        }
        assert_same_contents(&map, &model);

        for key in &keys {
            prop_assert_eq!(map.remove(*key), model.remove(key));
            if map.capacity() != 0 {
                prop_assert!(map.capacity() >= initial_capacity);
            }
        }
        prop_assert!(map.is_empty());
        // Each removal halves the array at most once. With a tiny load factor the
        // last levels all trigger at zero entries, so the map may stop above its
        // initial capacity.
        if !keys.is_empty() && 2.0 * initial_capacity as f32 * load_factor >= 1.0 {
            prop_assert_eq!(map.capacity(), initial_capacity);
        }
    }
}
