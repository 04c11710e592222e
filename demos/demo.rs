//! Command-line demo driving every funlib kernel in batch mode.
//!
//! ```text
//! cargo run --example demo -- rand --seed 42 --count 5
//! cargo run --example demo -- math 2 10
//! cargo run --example demo -- similarity kitten sitting
//! cargo run --example demo -- sort --algo merge 170 45 75 90 802 24 2 66
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use funlib::math;
use funlib::rng::Lcg;
use funlib::similarity::{levenshtein_distance, similarity_ratio};
use funlib::sort;

#[derive(Parser)]
#[command(name = "funlib-demo", about = "Exercise the funlib algorithm kernels")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw pseudo-random floats and integers from the LCG.
    Rand {
        /// Seed for the generator; drawn from OS entropy when omitted.
        #[arg(long)]
        seed: Option<u32>,
        /// How many values to draw.
        #[arg(long, default_value_t = 5)]
        count: usize,
        /// Lower bound for the integer draws (inclusive).
        #[arg(long, default_value_t = 1)]
        low: i64,
        /// Upper bound for the integer draws (inclusive).
        #[arg(long, default_value_t = 100)]
        high: i64,
    },
    /// Run the math kernel on a pair of numbers.
    Math {
        a: f64,
        b: f64,
    },
    /// Compare two strings by edit distance and similarity ratio.
    Similarity {
        first: String,
        second: String,
    },
    /// Sort (or reverse) a sequence of integers.
    Sort {
        /// Which algorithm to run.
        #[arg(long, value_enum, default_value_t = Algo::Merge)]
        algo: Algo,
        /// The values to sort.
        #[arg(required = true)]
        values: Vec<i64>,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum Algo {
    Bubble,
    Quick,
    Insertion,
    Selection,
    Merge,
    Heap,
    Shell,
    Counting,
    Radix,
    Gnome,
    Comb,
    Reverse,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let cli = Cli::parse();
    match cli.command {
        Command::Rand {
            seed,
            count,
            low,
            high,
        } => {
            let mut rng = match seed {
                Some(seed) => Lcg::new(seed),
                None => Lcg::from_entropy(),
            };
            info!("initial state: {}", rng.state());
            for _ in 0..count {
                println!("float: {:.10}", rng.next_float());
            }
            for _ in 0..count {
                println!("int in [{}, {}]: {}", low, high, rng.next_int(low, high));
            }
        }
        Command::Math { a, b } => {
            println!("a + b = {}", math::add(a, b));
            println!("a - b = {}", math::subtract(a, b));
            println!("a * b = {}", math::multiply(a, b));
            match math::divide(a, b) {
                Ok(q) => println!("a / b = {}", q),
                Err(e) => println!("a / b = error: {}", e),
            }
            println!("a ^ {} = {}", b as u32, math::power(a, b as u32));
            match math::sqrt(a) {
                Ok(root) => println!("sqrt(a) = {}", root),
                Err(e) => println!("sqrt(a) = error: {}", e),
            }
            println!("sin(a) ~ {}", math::sin(a));
            println!("cos(a) ~ {}", math::cos(a));
        }
        Command::Similarity { first, second } => {
            let dist = levenshtein_distance(&first, &second);
            let ratio = similarity_ratio(&first, &second);
            println!("levenshtein distance: {}", dist);
            println!("similarity ratio: {:.2}", ratio);
        }
        Command::Sort { algo, values } => {
            let sorted = match algo {
                Algo::Bubble => sort::bubble_sort(&values),
                Algo::Quick => sort::quick_sort(&values),
                Algo::Insertion => sort::insertion_sort(&values),
                Algo::Selection => sort::selection_sort(&values),
                Algo::Merge => sort::merge_sort(&values),
                Algo::Heap => sort::heap_sort(&values),
                Algo::Shell => sort::shell_sort(&values),
                Algo::Counting => sort::counting_sort(&values)?,
                Algo::Radix => sort::radix_sort(&values)?,
                Algo::Gnome => sort::gnome_sort(&values),
                Algo::Comb => sort::comb_sort(&values),
                Algo::Reverse => sort::reverse(&values),
            };
            println!("input:  {:?}", values);
            println!("output: {:?}", sorted);
        }
    }
    Ok(())
}
