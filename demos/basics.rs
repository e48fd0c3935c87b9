use longmap::LongMap;

fn value(n: i64) -> String {
    format!("value {n}")
}

fn main() -> anyhow::Result<()> {
    const NUM_KEYS: i64 = 64;

    // Create a map that allocates 32 buckets on the first insert and grows once
    // it holds more than 32 * 0.5 = 16 entries.
    let mut map = LongMap::with_capacity_and_load_factor(32, 0.5)?;

    // Insert 64 entries, half of them with negative keys.
    for key in -NUM_KEYS / 2..NUM_KEYS / 2 {
        // insert() returns the previous value, if any.
        assert_eq!(map.insert(key, value(key)), None);
    }
    println!(
        "Inserted {} entries; the map now has {} buckets.",
        map.len(),
        map.capacity()
    );

    // Remove every 4 element of the inserted entries.
    for key in (-NUM_KEYS / 2..NUM_KEYS / 2).step_by(4) {
        assert_eq!(map.remove(key), Some(value(key)));
    }

    // Verify the result.
    for key in -NUM_KEYS / 2..NUM_KEYS / 2 {
        if key % 4 == 0 {
            assert_eq!(map.get(key), None);
        } else {
            assert_eq!(map.get(key), Some(&value(key)));
        }
    }

    let mut keys = map.keys();
    keys.sort_unstable();
    println!("{} keys remain: {:?}", keys.len(), keys);

    map.clear();
    assert!(map.is_empty());
    println!("Cleared; the map still has {} buckets.", map.capacity());

    Ok(())
}
