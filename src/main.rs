/// Command line front-end: deal hands, look for SETs, and time the two search
/// strategies.
///
/// CLI Usage:
///   cargo run -- deal                          # deal 12 cards from the 81-card deck
///   cargo run -- deal -p 6 -s 20 --seed 42     # 20 cards, 6 properties, reproducible
///   cargo run -- check 0120 1221 2022          # search the given cards
///   cargo run -- lookup 0120 2222              # are these cards in a dealt hand?
///   cargo run -- time-n --from 8 --to 81 -o time_varying_n.json
///   cargo run -- time-p --from 3 --to 15 -o time_varying_p.json

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use set_finder::deck::{DEFAULT_HAND_SIZE, DEFAULT_PROPERTY_COUNT, seeded_rng};
use set_finder::timing::{TimingConfig, TimingReport, time_varying_n, time_varying_p};
use set_finder::utils::*;
use set_finder::{Card, Deck, Hand, Result, Strategy, search_with_stats};

/// CLI arguments structure
#[derive(Parser, Debug)]
#[command(name = "set_finder")]
#[command(about = "Find SETs in a hand of SET cards", long_about = None)]
struct Args {
    /// Print debug traces
    #[arg(long, global = true)]
    debug: bool,

    /// Also write the output to a timestamped log file
    #[arg(long, global = true)]
    log: bool,

    /// Seed for dealing hands (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Deal a hand and search it with both strategies
    Deal {
        /// Number of properties of the deck
        #[arg(short, long, default_value_t = DEFAULT_PROPERTY_COUNT)]
        properties: usize,
        /// Number of cards dealt
        #[arg(short, long, default_value_t = DEFAULT_HAND_SIZE)]
        size: usize,
    },
    /// Search the cards given on the command line (e.g. 0120 or "0 1 2 0")
    Check {
        #[arg(required = true)]
        cards: Vec<Card>,
    },
    /// Deal a hand and tell whether each given card is in it
    Lookup {
        #[arg(short, long, default_value_t = DEFAULT_PROPERTY_COUNT)]
        properties: usize,
        #[arg(short, long, default_value_t = DEFAULT_HAND_SIZE)]
        size: usize,
        #[arg(required = true)]
        cards: Vec<Card>,
    },
    /// Time both strategies for a range of hand sizes
    TimeN {
        #[arg(long, default_value_t = 8)]
        from: usize,
        #[arg(long, default_value_t = 81)]
        to: usize,
        #[arg(short, long, default_value_t = DEFAULT_PROPERTY_COUNT)]
        properties: usize,
        #[arg(short, long, default_value_t = 1000)]
        iterations: usize,
        /// Write the raw samples to this JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Time both strategies for a range of property counts
    TimeP {
        #[arg(long, default_value_t = 3)]
        from: usize,
        #[arg(long, default_value_t = 15)]
        to: usize,
        #[arg(short, long, default_value_t = DEFAULT_HAND_SIZE)]
        size: usize,
        #[arg(short, long, default_value_t = 500)]
        iterations: usize,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn report_searches(hand: &Hand) {
    for strategy in Strategy::ALL {
        let report = search_with_stats(hand, strategy);
        match report.triple {
            Some((a, b, c)) => test_print(&format!(
                "   ... {:<26}: SET {} {} {} ({} pairs checked)",
                strategy.to_string(), a, b, c, report.pairs_checked)),
            None => test_print(&format!(
                "   ... {:<26}: no SET ({} pairs checked)",
                strategy.to_string(), report.pairs_checked)),
        }
    }
}

fn finish_timing(report: &TimingReport, output: Option<PathBuf>) -> Result<()> {
    test_print(&report.summary());
    if let Some(path) = output {
        report.save_json(&path)?;
        test_print(&format!("Saved timings to {}", path.display()));
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let mut rng = seeded_rng(args.seed);

    match args.command {
        Command::Deal { properties, size } => {
            let deck = Deck::new(properties)?;
            test_print(&deck.to_string());
            let hand = deck.deal(size, &mut rng)?;
            test_print(&hand.to_string());
            report_searches(&hand);
        }
        Command::Check { cards } => {
            let hand = Hand::new(cards)?;
            test_print(&hand.to_string());
            report_searches(&hand);
        }
        Command::Lookup { properties, size, cards } => {
            let deck = Deck::new(properties)?;
            let hand = deck.deal(size, &mut rng)?;
            test_print(&hand.to_string());
            for card in &cards {
                let answer = if hand.find_card(card) { "in the hand" } else { "not in the hand" };
                test_print(&format!("   ... {} is {}", card, answer));
            }
        }
        Command::TimeN { from, to, properties, iterations, output } => {
            let deck = Deck::new(properties)?;
            let cfg = TimingConfig { iterations, seed: args.seed };
            let start = std::time::Instant::now();
            let report = time_varying_n(&deck, from..=to.min(deck.size()), &cfg)?;
            finish_timing(&report, output)?;
            test_print(&format!("Time elapsed: {:.2}s", start.elapsed().as_secs_f64()));
        }
        Command::TimeP { from, to, size, iterations, output } => {
            let cfg = TimingConfig { iterations, seed: args.seed };
            let start = std::time::Instant::now();
            let report = time_varying_p(from..=to, size, &cfg)?;
            finish_timing(&report, output)?;
            test_print(&format!("Time elapsed: {:.2}s", start.elapsed().as_secs_f64()));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.debug {
        debug_print_on();
    } else {
        debug_print_off();
    }
    if args.log {
        match init_log_file() {
            Ok(filename) => eprintln!("Log file created: {}", filename),
            Err(e) => eprintln!("Warning: could not create log file: {}", e),
        }
    }
    banner("SET finder");
    debug_print(&format!("main: {:?}", args));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            test_print(&format!("Error: {}", e));
            ExitCode::FAILURE
        }
    }
}
