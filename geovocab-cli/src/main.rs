//! GeoVocab CLI - Command-line interface
//!
//! Exposes the three-word address service on the command line. Store-backed
//! commands print the JSON response envelope and exit with status 1 when
//! the response status is 400 or above.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::config::ConfigCommands;
use error::CliError;
use runner::CliRunner;

#[derive(Parser)]
#[command(name = "geovocab")]
#[command(version = geovocab::VERSION)]
#[command(about = "Three-word addresses for geographic coordinates", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.geovocab/config.ini
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging and mirror log output to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get the three words for a coordinate
    Words {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: String,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: String,
    },

    /// Get the coordinate for a three-word phrase
    Locate {
        /// Phrase in the form word1-word2-word3
        phrase: String,
    },

    /// Register a premium phrase for a 9-character geohash
    Premium {
        /// Full 9-character geohash
        geohash: String,

        /// Phrase in the form word1-word2-word3
        phrase: String,
    },

    /// Look up the word assigned to a 3-character segment
    Segment {
        /// Geohash segment
        segment: String,
    },

    /// List segment mappings page by page
    List {
        /// Page number, starting at 1
        #[arg(long, default_value = "1")]
        page: usize,

        /// Mappings per page (default and cap come from config)
        #[arg(long)]
        per_page: Option<usize>,
    },

    /// Report store status and mapping counts
    Health,

    /// Encode a coordinate as a geohash
    Encode {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Number of geohash characters (1-12)
        #[arg(long, default_value = "9")]
        precision: usize,
    },

    /// Decode a geohash to its cell center
    Decode {
        /// Geohash to decode
        geohash: String,
    },

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.config.as_deref();
    let with_runner = |f: &dyn Fn(&CliRunner) -> Result<(), CliError>| {
        let runner = CliRunner::new(config, cli.debug)?;
        f(&runner)
    };

    match cli.command {
        Commands::Words { lat, lon } => {
            with_runner(&|runner| commands::lookup::run_words(runner, &lat, &lon))
        }
        Commands::Locate { phrase } => {
            with_runner(&|runner| commands::lookup::run_locate(runner, &phrase))
        }
        Commands::Premium { geohash, phrase } => {
            with_runner(&|runner| commands::lookup::run_premium(runner, &geohash, &phrase))
        }
        Commands::Segment { segment } => {
            with_runner(&|runner| commands::lookup::run_segment(runner, &segment))
        }
        Commands::List { page, per_page } => {
            with_runner(&|runner| commands::lookup::run_list(runner, page, per_page))
        }
        Commands::Health => with_runner(&commands::lookup::run_health),
        Commands::Encode {
            lat,
            lon,
            precision,
        } => commands::codec::run_encode(lat, lon, precision),
        Commands::Decode { geohash } => commands::codec::run_decode(&geohash),
        Commands::Config { command } => commands::config::run(command, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_coordinates_parse() {
        let cli = Cli::try_parse_from([
            "geovocab", "words", "--lat", "-33.8688", "--lon", "151.2093",
        ])
        .unwrap();
        match cli.command {
            Commands::Words { lat, lon } => {
                assert_eq!(lat, "-33.8688");
                assert_eq!(lon, "151.2093");
            }
            _ => panic!("expected words command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["geovocab", "health", "--config", "/tmp/g.ini", "--debug"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/g.ini")));
        assert!(cli.debug);
    }

    #[test]
    fn test_list_defaults() {
        let cli = Cli::try_parse_from(["geovocab", "list"]).unwrap();
        match cli.command {
            Commands::List { page, per_page } => {
                assert_eq!(page, 1);
                assert_eq!(per_page, None);
            }
            _ => panic!("expected list command"),
        }
    }
}
