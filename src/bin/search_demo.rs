//! Times every search algorithm over one random sorted array and prints what
//! each of them returns.
//!
//! Usage:
//!     cargo run --release --bin search-demo
//!     cargo run --release --bin search-demo -- --len 100000 --seed 7

use anyhow::{Context, bail};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use searching::{
    Identity,
    bench::{Bench, BenchConfig},
    bisect_left, contains, contains_recursive,
    data::{pick, sorted_random},
    find, find_all, find_all_indices, find_index, find_leftmost, find_leftmost_index,
    find_rightmost, find_rightmost_index, linear_search, random_search_default,
};
use tracing::info;

#[derive(Debug, Parser)]
#[command(about = "Times searching strategies over random sorted data")]
struct Args {
    /// Length of the generated array
    #[arg(long, default_value_t = 10_000)]
    len: usize,
    /// Largest generated value
    #[arg(long, default_value_t = 10_000)]
    max: u32,
    /// Seed for reproducible data
    #[arg(long)]
    seed: Option<u64>,
    /// Timed batches per algorithm
    #[arg(long, default_value_t = 3)]
    repeat: usize,
    /// Calls per batch
    #[arg(long, default_value_t = 10)]
    number: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut rng = args
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let array = sorted_random(args.len, args.max, &mut rng);
    let Some(&value) = pick(&array, &mut rng) else {
        bail!("`--len` must be at least 1 to have a value to search for");
    };
    let absent = args
        .max
        .checked_mul(10)
        .and_then(|v| v.checked_add(1))
        .context("`--max` too large to derive an absent value")?;
    info!(len = array.len(), value, "generated data");

    let bench = Bench::new(BenchConfig {
        repeat: args.repeat,
        number: args.number,
    })?;
    let a = array.as_slice();

    println!("{}", bench.run("random_search", || random_search_default(a, &value)).with_target(value));

    println!("{}", bench.run("linear_search", || linear_search(a, &value)).with_target(value));
    println!("Index of Located Value: {:?}", linear_search(a, &value));

    println!("{}", bench.run("bisect_left", || bisect_left(a, &value)).with_target(value));
    println!("Index of Located Value: {:?}", bisect_left(a, &value));

    println!("{}", bench.run("find_index", || find_index(a, &value, &Identity)).with_target(value));
    println!("Find Index Return Value: {:?}", find_index(a, &value, &Identity));

    println!("{}", bench.run("find", || find(a, &value, &Identity)).with_target(value));
    println!("Find Return Value: {:?}", find(a, &value, &Identity));

    println!("{}", bench.run("contains", || contains(a, &value, &Identity)).with_target(value));
    println!("Contains Return Value: {}", contains(a, &value, &Identity));
    println!("Contains False Test Value: {}", contains(a, &absent, &Identity));

    println!("{}", bench.run("contains_recursive", || contains_recursive(a, &value)).with_target(value));
    println!("Contains Recursive Value: {}", contains_recursive(a, &value));
    println!("Contains Recursive False Test Value: {}", contains_recursive(a, &absent));

    println!(
        "{}",
        bench.run("find_leftmost_index", || find_leftmost_index(a, &value, &Identity)).with_target(value)
    );
    println!(
        "Find Leftmost Index Return Value: {:?}",
        find_leftmost_index(a, &value, &Identity)
    );

    println!(
        "{}",
        bench.run("find_rightmost_index", || find_rightmost_index(a, &value, &Identity)).with_target(value)
    );
    println!(
        "Find Rightmost Index Return Value: {:?}",
        find_rightmost_index(a, &value, &Identity)
    );

    println!(
        "{}",
        bench.run("find_all_indices", || find_all_indices(a, &value, &Identity)).with_target(value)
    );
    println!(
        "Find All Indices Return Value: {:?}",
        find_all_indices(a, &value, &Identity)
    );

    println!("{}", bench.run("find_leftmost", || find_leftmost(a, &value, &Identity)).with_target(value));
    println!("Find Leftmost Return Value: {:?}", find_leftmost(a, &value, &Identity));

    println!("{}", bench.run("find_rightmost", || find_rightmost(a, &value, &Identity)).with_target(value));
    println!("Find Rightmost Return Value: {:?}", find_rightmost(a, &value, &Identity));

    println!("{}", bench.run("find_all", || find_all(a, &value, &Identity)).with_target(value));
    println!("Find All Value: {:?}", find_all(a, &value, &Identity));

    Ok(())
}
