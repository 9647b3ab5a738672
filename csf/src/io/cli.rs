use std::path::PathBuf;

use crate::config::StrategyKind;
use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Corner-Space-Fill: lays out weighted word lists as word clouds")]
pub struct Cli {
    /// Word list to lay out (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder the JSON and SVG solutions are written to
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// Custom CSFConfig (JSON), defaults apply otherwise
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Overrides the placement strategy from the config
    #[arg(long, value_enum, value_name = "STRATEGY")]
    pub strategy: Option<StrategyKind>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_override_parses() {
        let cli = Cli::try_parse_from([
            "csf",
            "-i",
            "words.json",
            "-s",
            "out/",
            "--strategy",
            "spiral",
        ])
        .unwrap();
        assert_eq!(cli.strategy, Some(StrategyKind::Spiral));
        assert_eq!(cli.log_level, LevelFilter::Info);
    }

    #[test]
    fn strategy_defaults_to_config() {
        let cli = Cli::try_parse_from(["csf", "-i", "words.json", "-s", "out/"]).unwrap();
        assert_eq!(cli.strategy, None);
    }
}
