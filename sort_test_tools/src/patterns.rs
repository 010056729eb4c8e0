//! Input patterns for testing and benchmarking sorting algorithms.
//! Currently limited to i32 values.
//!
//! All random patterns are derived from one seed per process, which is printed by the tests and
//! can be pinned with the `OVERRIDE_SEED` env var to reproduce a failure.

use std::env;
use std::str::FromStr;
use std::sync::Mutex;

use once_cell::sync::OnceCell;
use rand::prelude::*;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_seed();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    // Simulates appending new values to an already sorted slice.
    let mut v = random_vec(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    saw(len, saw_count, |_| true)
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    saw(len, saw_count, |_| false)
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    let directions = random_uniform(saw_count.max(1) + 1, 0..=1);
    saw(len, saw_count, |i| directions[i % directions.len()] == 0)
}

pub fn saw_mixed_range(len: usize, range: std::ops::Range<usize>) -> Vec<i32> {
    //     :.
    // :.  :::.    .::.      .:
    // :::.:::::..::::::..:.:::

    // Ascending and descending chunks picked at random, with chunk length in `range`.

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);

    let max_chunks = len / range.start;
    let directions = random_uniform(max_chunks + 1, 0..=1);
    let chunk_lens = random_uniform(max_chunks + 1, (range.start as i32)..(range.end as i32));

    let mut i = 0;
    let mut start = 0;
    while start < len {
        let end = (start + chunk_lens[i] as usize).min(len);
        sort_chunk(&mut vals[start..end], directions[i] == 0);

        i += 1;
        start = end;
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    vals[..len / 2].sort();
    vals[len / 2..].sort_by(|a, b| b.cmp(a));

    vals
}

/// Makes every call to a random pattern yield new values, instead of the same values per process.
/// Benchmarks should call this.
pub fn use_random_seed_each_time() {
    if override_seed().is_some() {
        panic!("Using use_random_seed_each_time conflicts with the external seed override.");
    }

    *SEED.lock().unwrap() = Some(SeedMode::EachTime);
}

/// The seed all random patterns are derived from.
pub fn random_init_seed() -> u64 {
    let mut seed = SEED.lock().unwrap();
    let mode = *seed.get_or_insert_with(|| match override_seed() {
        Some(value) => SeedMode::Fixed(value),
        None => SeedMode::Fixed(thread_rng().gen()),
    });

    match mode {
        SeedMode::Fixed(value) => value,
        SeedMode::EachTime => thread_rng().gen(),
    }
}

// --- Private ---

#[derive(Copy, Clone, PartialEq, Eq)]
enum SeedMode {
    Fixed(u64),
    EachTime,
}

static SEED: Mutex<Option<SeedMode>> = Mutex::new(None);

fn override_seed() -> Option<u64> {
    static OVERRIDE: OnceCell<Option<u64>> = OnceCell::new();

    *OVERRIDE.get_or_init(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .map(|seed| u64::from_str(&seed).expect("OVERRIDE_SEED must be a u64"))
    })
}

fn new_seed() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = new_seed();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

fn saw(len: usize, saw_count: usize, mut ascending: impl FnMut(usize) -> bool) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunk_len = (len / saw_count.max(1)).max(1);

    for (i, chunk) in vals.chunks_mut(chunk_len).enumerate() {
        sort_chunk(chunk, ascending(i));
    }

    vals
}

fn sort_chunk(chunk: &mut [i32], ascending: bool) {
    if ascending {
        chunk.sort();
    } else {
        chunk.sort_by_key(|&e| std::cmp::Reverse(e));
    }
}
