use clap::{ArgAction, Parser};
use log::LevelFilter;

use merge_sort::error::{parse_value, Result};
use merge_sort::random_input::{DEFAULT_MAX, DEFAULT_MIN};
use merge_sort::{RandomInput, Sorter, Strategy, TieBreak};

const DEFAULT_INPUT: [i32; 4] = [10, 2, 30, 4];

/// Sort integers with a merge sort.
///
/// Values given on the command line take precedence over --random; with
/// neither, a small built-in input is sorted.
#[derive(Debug, Parser)]
#[command(name = "merge_sort", version)]
pub struct Cli {
    /// Values to sort
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,

    /// Sort LEN random values instead
    #[arg(short, long, value_name = "LEN", env = "MERGE_SORT_RANDOM")]
    random: Option<usize>,

    /// Seed for --random; seeded from entropy when absent
    #[arg(long, env = "MERGE_SORT_SEED")]
    seed: Option<u64>,

    /// Smallest random value (inclusive)
    #[arg(long, default_value_t = DEFAULT_MIN, allow_negative_numbers = true)]
    min: i32,

    /// Largest random value (inclusive)
    #[arg(long, default_value_t = DEFAULT_MAX, allow_negative_numbers = true)]
    max: i32,

    #[arg(long, value_enum, default_value_t = Strategy::TopDown)]
    strategy: Strategy,

    /// Which half wins when two values compare equal during a merge
    #[arg(long, value_enum, default_value_t = TieBreak::RightFirst)]
    tie_break: TieBreak,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    pub fn sorter(&self) -> Sorter {
        Sorter::new()
            .strategy(self.strategy)
            .tie_break(self.tie_break)
    }

    pub fn input(&self) -> Result<Vec<i32>> {
        if !self.values.is_empty() {
            return self.values.iter().map(|val| parse_value(val)).collect();
        }

        if let Some(len) = self.random {
            let range = self.min..=self.max;
            let mut random = match self.seed {
                Some(seed) => RandomInput::new(seed, range)?,
                None => RandomInput::from_entropy(range)?,
            };
            return Ok(random.sequence(len));
        }

        Ok(DEFAULT_INPUT.to_vec())
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
