use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

const ENTRIES: [&str; 12] = [
    "The Left Hand of Darkness",
    "Dune",
    "Neuromancer",
    "Hyperion",
    "Solaris",
    "Kindred",
    "Foundation",
    "The Dispossessed",
    "Blindsight",
    "Ubik",
    "Ancillary Justice",
    "Roadside Picnic",
];

#[derive(Parser, Debug)]
#[command(about = "Write a pair of sample rating files")]
struct Args {
    /// Directory to write rating1.txt and rating2.txt into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Seed for the rating generator
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Deterministic rating source (splitmix64), so a seed always yields the
/// same pair of files.
struct RatingRng(u64);

impl RatingRng {
    fn unit(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 53) as f64
    }

    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }
}

/// One rating file and the number of entries rated in it.
///
/// Each entry is rated with probability `coverage`, either on a 0–10 scale
/// or as a percentage. An unparseable `N/A` line is appended and not counted.
fn rating_file(rng: &mut RatingRng, coverage: f64) -> (String, usize) {
    let mut out = String::new();
    let mut rated = 0;
    for entry in ENTRIES {
        if !rng.chance(coverage) {
            continue;
        }
        let score = rng.unit() * 10.0;
        if rng.chance(0.3) {
            out.push_str(&format!("{:.0}% {entry}\n", score * 10.0));
        } else {
            out.push_str(&format!("{score:.1} {entry}\n"));
        }
        rated += 1;
    }
    out.push_str("N/A Unfinished Manuscript\n");
    (out, rated)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = RatingRng(args.seed);

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    for name in ["rating1.txt", "rating2.txt"] {
        let path = args.out_dir.join(name);
        let (contents, rated) = rating_file(&mut rng, 0.75);
        std::fs::write(&path, &contents)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {rated} ratings to {}", path.display());
    }

    Ok(())
}
