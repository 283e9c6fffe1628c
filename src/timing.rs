/// Timing harness comparing the two search strategies
///
/// For each point (a hand size, or a number of properties), many hands are
/// dealt and both strategies search the same hand, so that their durations
/// are comparable. Only the searches are timed, not the deal. Raw samples are
/// kept as JSON for later analysis.

use std::fs;
use std::path::Path;
use std::time::Instant;

use separator::Separatable;
use serde::{Deserialize, Serialize};

use crate::deck::{Deck, seeded_rng};
use crate::error::Result;
use crate::io_helpers::write_text_atomic;
use crate::search::{SearchReport, Strategy, search_with_stats};
use crate::utils::{debug_print, progress_print};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingConfig {
    /// Number of hands dealt for each point
    pub iterations: usize,
    /// Seed of the dealing; each point gets its own derived seed
    pub seed: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            seed: None,
        }
    }
}

/// Measurements for one point of a timing run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimingSample {
    /// Hand size or property count, depending on the run
    pub x: usize,
    pub iterations: usize,
    pub partitioned_secs: f64,
    pub brute_force_secs: f64,
    pub partitioned_pairs: u64,
    pub brute_force_pairs: u64,
    /// Number of hands in which a SET was found
    pub found: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimingReport {
    pub label: String,
    pub samples: Vec<TimingSample>,
}

fn timed(hand: &crate::hand::Hand, strategy: Strategy) -> (SearchReport, f64) {
    let start = Instant::now();
    let report = search_with_stats(hand, strategy);
    (report, start.elapsed().as_secs_f64())
}

fn sample_point(
    deck: &Deck,
    hand_size: usize,
    x: usize,
    cfg: &TimingConfig,
) -> Result<TimingSample> {
    let mut rng = seeded_rng(cfg.seed.map(|s| s.wrapping_add(x as u64)));
    let mut sample = TimingSample {
        x,
        iterations: cfg.iterations,
        partitioned_secs: 0.0,
        brute_force_secs: 0.0,
        partitioned_pairs: 0,
        brute_force_pairs: 0,
        found: 0,
    };
    for _ in 0..cfg.iterations {
        let hand = deck.deal(hand_size, &mut rng)?;
        let (part, part_secs) = timed(&hand, Strategy::Partitioned);
        let (brute, brute_secs) = timed(&hand, Strategy::BruteForce);
        sample.partitioned_secs += part_secs;
        sample.brute_force_secs += brute_secs;
        sample.partitioned_pairs += part.pairs_checked as u64;
        sample.brute_force_pairs += brute.pairs_checked as u64;
        if brute.triple.is_some() {
            sample.found += 1;
        }
        if part.triple.is_some() != brute.triple.is_some() {
            debug_print(&format!("sample_point: strategies disagree on {}", hand));
        }
    }
    Ok(sample)
}

/// Time both strategies on hands of each given size dealt from `deck`
pub fn time_varying_n<I>(deck: &Deck, sizes: I, cfg: &TimingConfig) -> Result<TimingReport>
where
    I: IntoIterator<Item = usize>,
{
    let mut samples = Vec::new();
    for n in sizes {
        samples.push(sample_point(deck, n, n, cfg)?);
        progress_print(&format!("Vary n: {}", n));
    }
    Ok(TimingReport {
        label: format!("hand size ({} properties)", deck.property_count()),
        samples,
    })
}

/// Time both strategies on hands of `hand_size` cards, with a fresh deck for
/// each property count
pub fn time_varying_p<I>(
    properties: I,
    hand_size: usize,
    cfg: &TimingConfig,
) -> Result<TimingReport>
where
    I: IntoIterator<Item = usize>,
{
    let mut samples = Vec::new();
    for p in properties {
        let deck = Deck::new(p)?;
        samples.push(sample_point(&deck, hand_size, p, cfg)?);
        progress_print(&format!("Vary p: {}", p));
    }
    Ok(TimingReport {
        label: format!("number of properties ({} cards dealt)", hand_size),
        samples,
    })
}

impl TimingReport {
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        write_text_atomic(path.as_ref(), &text)?;
        Ok(())
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = fs::File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    /// Human readable table of the samples
    pub fn summary(&self) -> String {
        let mut out = format!("Timing by {}\n", self.label);
        out.push_str(&format!(
            "{:>6} {:>8} {:>14} {:>14} {:>14} {:>14} {:>8}\n",
            "x", "hands", "partitioned s", "brute s", "part. pairs", "brute pairs", "found"
        ));
        for s in &self.samples {
            out.push_str(&format!(
                "{:>6} {:>8} {:>14.6} {:>14.6} {:>14} {:>14} {:>8}\n",
                s.x,
                s.iterations.separated_string(),
                s.partitioned_secs,
                s.brute_force_secs,
                s.partitioned_pairs.separated_string(),
                s.brute_force_pairs.separated_string(),
                s.found.separated_string()
            ));
        }
        out
    }
}
