#![warn(clippy::pedantic)]

mod config;

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::owo_colors::OwoColorize;
use config::Config;
use cube_core::{Algorithm, CubeN, validate::validate};
use env_logger::TimestampPrecision;
use fastrand::Rng;
use itertools::Itertools;
use log::{LevelFilter, debug};
use std::path::PathBuf;

/// Apply, invert, scramble and validate algorithms on NxNxN cubes
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format. Defaults to
    /// `cubing/config.toml` in the user configuration directory.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Cube size, overriding the configuration file
    #[arg(long, short)]
    size: Option<usize>,

    /// Face colors in U F R B L D order, overriding the configuration file
    #[arg(long)]
    colors: Option<String>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply an algorithm to a solved cube and print the result.
    Apply {
        /// The algorithm to apply, e.g. "R U R' U'".
        algorithm: String,
    },
    /// Print the inverse of an algorithm.
    Invert {
        /// The algorithm to invert.
        algorithm: String,
    },
    /// Scramble a cube and print the scramble.
    Scramble {
        /// Number of moves, `8 × size` by default
        #[arg(long, short)]
        length: Option<usize>,
        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply an algorithm and check that the result is a reachable cube.
    Validate {
        /// The algorithm to apply before validating.
        algorithm: String,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = Config::load(cli.config.as_deref())?;
    let size = cli.size.unwrap_or(config.size);
    let colors = cli.colors.as_deref().unwrap_or(&config.colors);

    debug!("Using a {size}x{size}x{size} cube colored {colors}");

    let mut cube = CubeN::new(size, colors)?;

    match cli.command {
        Commands::Apply { algorithm } => {
            cube.apply_str(&algorithm)?;
            println!("{cube}");

            if cube.is_solved() {
                println!("{}", "SOLVED".green());
            } else {
                println!("{}", "NOT SOLVED".red());
            }
        }
        Commands::Invert { algorithm } => {
            println!("{}", Algorithm::parse(&algorithm)?.inverse());
        }
        Commands::Scramble { length, seed } => {
            let mut rng = seed.map_or_else(Rng::new, Rng::with_seed);
            let scramble = cube.scramble_with(&mut rng, length.or(config.scramble_length));

            println!("{scramble}");
            println!("{cube}");
        }
        Commands::Validate { algorithm } => {
            cube.apply_str(&algorithm)?;

            match validate(&cube.to_face_map(), cube.size()) {
                Ok(scheme) => println!("{} {}", "VALID".green(), scheme.iter().join(" ")),
                Err(reason) => println!("{} {reason}", "INVALID".red()),
            }
        }
    }

    Ok(())
}
