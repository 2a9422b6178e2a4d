use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::Rng;

use sort_lab::containers::{BoundedDeque, BoundedStack, ContainerResult};
use sort_lab::element::display_slice;
use sort_lab::median::{self, Median};
use sort_lab::sorts::Algorithm;
use sort_lab::{
    brackets, nearest, palindrome, patterns, phone, Element, LogTrace, Stability, Step, Trace,
};

#[derive(Parser)]
#[command(
    name = "sort-lab",
    version,
    about = "Coursework algorithms: stability aware sorts, bracket balance, palindromes, nearest numbers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the demonstration input through the sorts, printing every step
    Sorts {
        /// Algorithm to run
        #[arg(short, long, default_value = "all")]
        algorithm: CliAlgorithm,

        /// Tie-breaking policy
        #[arg(short, long, default_value = "both")]
        stability: CliStability,
    },

    /// Check whether the brackets of an algebraic statement are balanced
    Balanced {
        /// Statement to check
        statement: String,
    },

    /// Run the bracket checker against randomly generated statements
    BalancedTest {
        /// Number of tests to run
        #[arg(short, long, default_value = "1000")]
        tests: usize,

        /// Maximum length of a statement
        #[arg(short, long, default_value = "10")]
        length: usize,

        /// Print passing tests too
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check whether a string is a palindrome, ignoring punctuation and case
    Palindrome {
        /// String to check
        text: String,
    },

    /// Run the palindrome checker against randomly generated strings
    PalindromeTest {
        /// Number of tests to run
        #[arg(short, long, default_value = "1000")]
        tests: usize,

        /// Maximum length of a string
        #[arg(short, long, default_value = "10")]
        length: usize,

        /// Print passing tests too
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the phone numbers in a file nearest to a target number
    Nearest {
        /// File with one phone number per line
        file: PathBuf,

        /// Target phone number
        target: String,

        /// Number of distinct nearest numbers
        #[arg(default_value = "1")]
        k: usize,
    },

    /// Print the median of the given phone numbers
    Median {
        /// Phone numbers, in any common notation
        #[arg(required = true)]
        numbers: Vec<String>,
    },

    /// Fill randomly sized stacks with random numbers, then pop them empty
    StackDemo {
        /// Number of stacks
        #[arg(short, long, default_value = "10")]
        stacks: usize,

        /// Upper bound for both the capacity and the number of pushes
        #[arg(short, long, default_value = "10")]
        max_size: usize,
    },

    /// Walk a bounded deque through inserts and removals at both ends, overflow and underflow
    DequeDemo {
        /// Capacity of the deque
        #[arg(short, long, default_value = "30")]
        capacity: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CliAlgorithm {
    Selection,
    Insertion,
    Quick,
    All,
}

impl CliAlgorithm {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            CliAlgorithm::Selection => vec![Algorithm::Selection],
            CliAlgorithm::Insertion => vec![Algorithm::Insertion],
            CliAlgorithm::Quick => vec![Algorithm::Quick],
            CliAlgorithm::All => Algorithm::ALL.to_vec(),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CliStability {
    Stable,
    Unstable,
    Both,
}

impl CliStability {
    fn policies(self) -> Vec<Stability> {
        match self {
            CliStability::Stable => vec![Stability::Stable],
            CliStability::Unstable => vec![Stability::Unstable],
            CliStability::Both => vec![Stability::Stable, Stability::Unstable],
        }
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn run_sorts(algorithm: CliAlgorithm, stability: CliStability) {
    for algo in algorithm.algorithms() {
        for policy in stability.policies() {
            let mut v = match algo {
                Algorithm::Quick => patterns::demo_quick(),
                _ => patterns::demo(),
            };

            println!(
                "====={} {} Sort=====",
                title_case(&policy.to_string()),
                title_case(algo.name())
            );
            println!("{}", display_slice(&v));

            let mut log = LogTrace;
            let mut print_step = |step: Step, v: &[Element<i32>]| {
                log.step(step, v);
                println!("{}", display_slice(v));
            };
            algo.sort_by_traced(&mut v, policy, Element::cmp_key, &mut print_step);

            println!("{}", display_slice(&v));
        }
    }
}

fn run_stack_demo(stacks: usize, max_size: usize) {
    let seed = patterns::random_init_seed();
    println!("Seed: {seed}");
    let mut rng = patterns::seeded_rng();

    for i in 0..stacks {
        let capacity = rng.gen_range(0..=max_size);
        let pushes = rng.gen_range(0..=max_size);
        println!("Stack {i}, capacity {capacity}, pushing {pushes} items");

        let mut stack = BoundedStack::new(capacity);
        for _ in 0..pushes {
            let item = rng.gen_range(0..1_000);
            if let Err(err) = stack.push(item) {
                println!("  failed to push {item}: {err}");
            }
        }
        println!("  top first: {stack}");

        let popped: Vec<String> = std::iter::from_fn(|| stack.pop().ok())
            .map(|item: i32| item.to_string())
            .collect();
        println!("  popped: [{}]", popped.join(", "));
    }
}

/// Prints the error of a failed container operation and discards it.
fn show_err<T>(result: ContainerResult<T>) -> Option<T> {
    result.map_err(|err| println!("{err}")).ok()
}

fn run_deque_demo(capacity: usize) {
    let mut deque = BoundedDeque::new(capacity);
    println!("Initial deque: {deque}");

    for i in 0..10 {
        show_err(deque.push_front(i + 10));
    }
    println!("After pushing 10 items to the front: {deque}");

    for i in 0..10 {
        show_err(deque.push_back(i * 2));
    }
    println!("After pushing 10 items to the back: {deque}");

    show_err(deque.push_front(13));
    show_err(deque.push_back(14));
    println!("After pushing 13 to the front and 14 to the back: {deque}");

    if let Some(item) = show_err(deque.pop_front()) {
        println!("Removed {item} from the front: {deque}");
    }
    if let Some(item) = show_err(deque.pop_back()) {
        println!("Removed {item} from the back: {deque}");
    }

    for index in [5, 20] {
        if let Some(item) = show_err(deque.get(index)) {
            println!("Item at index {index}: {item}");
        }
    }

    let mut pushed = 0;
    let err = loop {
        match deque.push_front(1) {
            Ok(()) => pushed += 1,
            Err(err) => break err,
        }
    };
    println!("Pushed {pushed} items to the front before: {err}");
    println!("Current deque: {deque}");

    let mut removed = 0;
    while deque.pop_back().is_ok() {
        removed += 1;
    }
    println!("Removed {removed} items from the back: {deque}");

    let mut pushed = 0;
    let err = loop {
        match deque.push_back(0) {
            Ok(()) => pushed += 1,
            Err(err) => break err,
        }
    };
    println!("Pushed {pushed} items to the back before: {err}");

    while deque.pop_front().is_ok() {}
    println!("After removing every item from the front: {deque}");
    show_err(deque.pop_front());
}

/// Prints one line per failing (or with `verbose` every) case and a summary, errors if any case
/// failed.
fn report<I>(cases: I, total: usize, verbose: bool) -> Result<()>
where
    I: Iterator<Item = (String, bool, bool)>,
{
    let width = total.to_string().len();
    let mut passed = 0;

    for (i, (input, expected, got)) in cases.enumerate() {
        if got == expected {
            passed += 1;
            if verbose {
                println!("Test {:>width$}: {input}: Passed ({got})", i + 1);
            }
        } else {
            println!(
                "Test {:>width$}: {input}: Failed: {got} (should be {expected})",
                i + 1
            );
        }
    }

    println!("Passed {passed} out of {total} tests");
    if passed != total {
        bail!("{} of {total} tests failed", total - passed);
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sorts {
            algorithm,
            stability,
        } => run_sorts(algorithm, stability),

        Commands::Balanced { statement } => {
            println!("{}", brackets::is_balanced(&statement));
        }

        Commands::BalancedTest {
            tests,
            length,
            verbose,
        } => {
            let seed = patterns::random_init_seed();
            println!("Seed: {seed}");
            let mut rng = patterns::seeded_rng();

            let cases = (0..tests).map(|_| {
                let statement = brackets::generate_statement(&mut rng, length);
                let got = brackets::is_balanced(&statement.text);
                (statement.text, statement.balanced, got)
            });
            report(cases, tests, verbose)?;
        }

        Commands::Palindrome { text } => {
            println!("{}", palindrome::is_palindrome(&text));
        }

        Commands::PalindromeTest {
            tests,
            length,
            verbose,
        } => {
            let seed = patterns::random_init_seed();
            println!("Seed: {seed}");
            let mut rng = patterns::seeded_rng();

            let cases = (0..tests).map(|_| {
                let candidate = palindrome::generate_candidate(&mut rng, length);
                let got = palindrome::is_palindrome(&candidate.text);
                (candidate.text, candidate.palindrome, got)
            });
            report(cases, tests, verbose)?;
        }

        Commands::Nearest { file, target, k } => {
            let numbers = nearest::find_nearest(&file, &target, k)
                .with_context(|| format!("nearest lookup in {} failed", file.display()))?;
            for number in numbers {
                println!("{number}");
            }
        }

        Commands::Median { numbers } => {
            let numbers: Vec<u64> = numbers
                .iter()
                .filter_map(|text| match phone::sanitize(text) {
                    Ok(number) => Some(number),
                    Err(err) => {
                        tracing::warn!(%err, "ignoring argument");
                        None
                    }
                })
                .collect();

            match median::median(&numbers) {
                Some(Median::Single(mid)) => println!("{mid}"),
                Some(Median::Pair(low, high)) => println!("{low},{high}"),
                None => println!("No median"),
            }
        }

        Commands::StackDemo { stacks, max_size } => run_stack_demo(stacks, max_size),

        Commands::DequeDemo { capacity } => run_deque_demo(capacity),
    }

    Ok(())
}
