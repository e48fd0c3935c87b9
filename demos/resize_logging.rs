// Run with:
//   RUST_LOG=longmap=trace cargo run --example resize_logging --features logging

use longmap::LongMap;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut map = LongMap::builder()
        .initial_capacity(4)
        .load_factor(1.0)
        .build()?;

    // Grows 4 -> 8 -> 16 -> ... -> 1024.
    for key in 0..1_000_i64 {
        map.insert(key * 1_000_003, key);
    }

    // Shrinks back down to 4.
    for key in 0..1_000_i64 {
        map.remove(key * 1_000_003);
    }

    println!("Done. Capacity: {}", map.capacity());
    Ok(())
}
