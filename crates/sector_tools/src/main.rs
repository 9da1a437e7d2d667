//! Hex Sector - Development Tools

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sector_core::combat::LogSource;
use sector_core::data::Catalog;
use sector_core::fleet::ShipCounts;
use sector_tools::skirmish::{run_skirmish, SkirmishConfig};
use sector_tools::validate::{export_standard_catalog, validate_catalog_file};
use sector_tools::ToolError;

#[derive(Parser)]
#[command(name = "sector-tools")]
#[command(about = "Development tools for Hex Sector")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a RON catalog file
    Validate {
        /// Path to the catalog
        path: PathBuf,
    },

    /// Write the built-in catalog as RON
    ExportCatalog {
        /// Output file (stdout when omitted)
        path: Option<PathBuf>,
    },

    /// Fight a seeded battle with stock ships and print the log
    Skirmish {
        /// Dice seed
        #[arg(long, default_value = "1")]
        seed: u64,

        /// Interceptors in the fleet
        #[arg(long, default_value = "0")]
        interceptors: u32,

        /// Cruisers in the fleet
        #[arg(long, default_value = "0")]
        cruisers: u32,

        /// Dreadnoughts in the fleet
        #[arg(long, default_value = "0")]
        dreadnoughts: u32,

        /// Attack the galactic core instead of an ancient guardian
        #[arg(long)]
        gcds: bool,

        /// Print the report as RON
        #[arg(long)]
        ron: bool,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        if let ToolError::InvalidCatalog { problems } = &e {
            for problem in problems {
                tracing::error!("{problem}");
            }
        }
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> sector_tools::Result<()> {
    match command {
        Commands::Validate { path } => {
            tracing::info!("Validating catalog: {}", path.display());
            let catalog = validate_catalog_file(&path)?;
            tracing::info!(
                techs = catalog.techs.len(),
                parts = catalog.parts.len(),
                "Validation passed"
            );
        }
        Commands::ExportCatalog { path } => {
            let text = export_standard_catalog(path.as_deref())?;
            if path.is_none() {
                println!("{text}");
            }
        }
        Commands::Skirmish {
            seed,
            interceptors,
            cruisers,
            dreadnoughts,
            gcds,
            ron,
        } => {
            let config = SkirmishConfig {
                seed,
                ships: ShipCounts::new(interceptors, cruisers, dreadnoughts),
                against_gcds: gcds,
            };
            let report = run_skirmish(&Catalog::standard(), &config)?;
            if ron {
                println!("{}", report.to_ron()?);
            } else {
                for entry in &report.log {
                    let tag = match entry.source {
                        LogSource::Player => ">>",
                        LogSource::Enemy => "<<",
                        LogSource::Info => "--",
                    };
                    println!("{tag} {}", entry.message);
                }
                println!("Outcome: {:?}", report.outcome);
            }
        }
    }
    Ok(())
}
