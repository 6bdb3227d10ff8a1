//! Transient CLI - Command Line Operations for Transient Conduction
//!
//! This is the operational entry point for the conduction analysis crates.
//!
//! # Commands
//!
//! - `transient eigenvalues <geometry> <biot>` - Roots of the characteristic equation
//! - `transient profile <geometry> ...` - Temperature profiles at one or more times
//! - `transient heat <geometry> ...` - Heat absorbed since exposure
//! - `transient bessel` - Table of J₀…Jₙ over [0, 35]
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate only parses arguments,
//! loads configuration and renders results; all numerics live in
//! `conduction_core` and `conduction_models`.

use std::path::Path;

use clap::{Parser, Subcommand};
use conduction_models::Geometry;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::heat::HeatArgs;
use commands::profile::ProfileArgs;
use config::TransientConfig;

/// Transient Conduction Analysis CLI
#[derive(Parser)]
#[command(name = "transient")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "transient.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the characteristic equation of a geometry
    Eigenvalues {
        /// Geometry: wall (p), cylinder (c) or sphere (e)
        geometry: Geometry,

        /// Biot number
        biot: f64,

        /// Number of eigenvalues [default: from configuration]
        count: Option<usize>,

        /// Output format (json, csv, table) [default: from configuration]
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Temperature profile of a body at one or more times
    Profile(ProfileArgs),

    /// Heat absorbed by a body since exposure
    Heat(HeatArgs),

    /// Tabulate Bessel functions of the first kind
    Bessel {
        /// Highest order
        #[arg(short = 'n', long, default_value = "3")]
        max_order: u32,

        /// Spacing of the argument grid
        #[arg(short, long, default_value = "0.5")]
        step: f64,

        /// Upper end of the argument grid
        #[arg(long, default_value = "35.0")]
        max_x: f64,

        /// Output format (json, csv, table) [default: from configuration]
        #[arg(short, long)]
        format: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing
    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = TransientConfig::load(Path::new(&cli.config))?.with_env_override()?;
    let format_or_default = |format: Option<String>| -> Result<config::OutputFormat> {
        format.map_or(Ok(config.output.format), |f| f.parse())
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Eigenvalues {
            geometry,
            biot,
            count,
            format,
        } => commands::eigenvalues::run(geometry, biot, count, format_or_default(format)?, &config, &mut out),
        Commands::Profile(args) => commands::profile::run(&args, &config, &mut out),
        Commands::Heat(args) => commands::heat::run(&args, &config, &mut out),
        Commands::Bessel {
            max_order,
            step,
            max_x,
            format,
        } => commands::bessel::run(max_order, step, max_x, format_or_default(format)?, &mut out),
    }
}
