mod app;
mod config;
mod data;
mod vector;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use config::AffinityConfig;
use data::model::FieldOrder;

#[derive(Parser, Debug)]
#[command(name = "rating-affinity")]
#[command(about = "Cosine affinity between two rating files")]
#[command(version)]
struct Args {
    /// First rating file [default: rating1.txt]
    first: Option<PathBuf>,

    /// Second rating file [default: rating2.txt]
    second: Option<PathBuf>,

    /// Lines are "<entry> <rating>" instead of "<rating> <entry>"
    #[arg(long)]
    entry_first: bool,
}

impl Args {
    fn into_config(self) -> AffinityConfig {
        let order = if self.entry_first {
            FieldOrder::EntryFirst
        } else {
            FieldOrder::RatingFirst
        };
        AffinityConfig::new(self.first, self.second, order)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = Args::parse().into_config();

    let stdout = std::io::stdout();
    app::run(&config, &mut stdout.lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_default_files() {
        let config = Args::try_parse_from(["rating-affinity"])
            .unwrap()
            .into_config();

        assert_eq!(config, AffinityConfig::default());
    }

    #[test]
    fn single_path_keeps_default_second_file() {
        let config = Args::try_parse_from(["rating-affinity", "mine.txt"])
            .unwrap()
            .into_config();

        assert_eq!(config.first, PathBuf::from("mine.txt"));
        assert_eq!(config.second, PathBuf::from("rating2.txt"));
    }

    #[test]
    fn positional_paths_and_order_flag() {
        let config =
            Args::try_parse_from(["rating-affinity", "a.txt", "b.txt", "--entry-first"])
                .unwrap()
                .into_config();

        assert_eq!(config.first, PathBuf::from("a.txt"));
        assert_eq!(config.second, PathBuf::from("b.txt"));
        assert_eq!(config.order, FieldOrder::EntryFirst);
    }
}
