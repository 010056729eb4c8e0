mod input;

use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use timsort::verify::is_sorted_logged;
use timsort::TimSort;

use crate::input::{InputError, Mode, Prompter};

const DEFAULT_LOWER: i32 = -1_000_000;
const DEFAULT_UPPER: i32 = 1_000_000;

/// Sorts an array of integers with TimSort and reports the result.
///
/// Anything not given on the command line is asked for on stdin.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of elements to sort
    #[arg(long, value_parser = parse_size)]
    size: Option<usize>,

    /// Read the values from stdin or generate them
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Inclusive lower bound of the random values
    #[arg(long, allow_hyphen_values = true)]
    lower: Option<i32>,

    /// Exclusive upper bound of the random values
    #[arg(long, allow_hyphen_values = true)]
    upper: Option<i32>,

    /// Seed for the random values, a fresh one is drawn if absent
    #[arg(long, env = "OVERRIDE_SEED")]
    seed: Option<u64>,

    /// How many of the sorted elements to print
    #[arg(long, default_value_t = 100)]
    show: usize,
}

fn parse_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("size must be a positive integer".into()),
        Ok(size) => Ok(size),
        Err(err) => Err(err.to_string()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting TimSort program.");
    let result = run(Args::parse());

    if let Err(err) = &result {
        error!("An unexpected error occurred: {err:#}");
        eprintln!("An error occurred. Please check the log output for more details.");
    }

    info!("Program ended.");
    result
}

fn run(args: Args) -> Result<()> {
    print_banner();

    let mut prompter = Prompter::new(io::stdin().lock());

    let size = match args.size {
        Some(size) => size,
        None => prompter.array_size().context("reading the array size")?,
    };

    let (mode, interactive) = match args.mode {
        Some(mode) => (mode, false),
        None => (prompter.mode().context("reading the input mode")?, true),
    };

    let mut values = match mode {
        Mode::Custom => prompter
            .custom_array(size)
            .context("reading the custom array")?,
        Mode::Random => {
            let lower = match args.lower {
                Some(lower) => lower,
                None if interactive => prompter.integer_or(
                    &format!(
                        "Enter the lower bound for random array values ({DEFAULT_LOWER} is default): "
                    ),
                    DEFAULT_LOWER,
                )?,
                None => DEFAULT_LOWER,
            };
            let upper = match args.upper {
                Some(upper) => upper,
                None if interactive => prompter.integer_or(
                    &format!(
                        "Enter the upper bound for random array values ({DEFAULT_UPPER} is default): "
                    ),
                    DEFAULT_UPPER,
                )?,
                None => DEFAULT_UPPER,
            };

            random_values(size, lower, upper, args.seed).context("generating the random array")?
        }
    };

    info!("Array of size {} prepared for sorting.", values.len());

    let start = Instant::now();
    info!("Starting the TimSort algorithm.");

    let stats = {
        let mut sorter = TimSort::new(&mut values, |a: &i32, b: &i32| a.cmp(b));
        sorter.sort();
        sorter.stats()
    };

    info!("TimSort algorithm completed in {} ms", start.elapsed().as_millis());
    debug!("{stats:?}");

    print_sorted(&values, args.show);

    Ok(())
}

fn random_values(
    len: usize,
    lower: i32,
    upper: i32,
    seed: Option<u64>,
) -> Result<Vec<i32>, InputError> {
    if lower >= upper {
        return Err(InputError::EmptyRange { lower, upper });
    }

    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("Generating {len} values in {lower}..{upper}, seed: {seed}");

    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..len).map(|_| rng.gen_range(lower..upper)).collect())
}

fn print_banner() {
    println!("********************************************");
    println!("**   Welcome to TimSort Sorting Program   **");
    println!("********************************************");
}

fn print_sorted(values: &[i32], show: usize) {
    let shown = values
        .iter()
        .take(show)
        .map(i32::to_string)
        .collect::<Vec<_>>();

    println!("Sorting completed successfully.");
    println!("First {} elements of the sorted array:", shown.len());
    println!("{}", shown.join(", "));

    let sorted = is_sorted_logged(values);
    println!("Array Sorted: {sorted}");

    if !sorted {
        warn!("The array was not sorted correctly.");
    }
}
