use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;
use libflagquiz::catalog::Filter;
use libflagquiz::{Catalog, Continent, DrivingSide, Error, Region};
use log::{error, info};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flagquiz-catalog")]
#[command(version, about = "Check or export flagquiz country catalogs", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a catalog (the built-in one if no file is given) and print per-continent counts
    Check { json: Option<PathBuf> },
    /// Write the built-in catalog to stdout as JSON
    Export,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(&args.log_level)).init();

    match args.command {
        Commands::Check { json } => {
            let loaded = match &json {
                Some(path) => Catalog::from_path(path),
                None => Catalog::embedded(),
            };
            let catalog = match loaded {
                Ok(catalog) => catalog,
                Err(err) => {
                    error!("{}", format!("Invalid catalog: {}!", err).red());
                    return Err(err);
                }
            };
            info!(
                "{}",
                format!("Catalog OK ({} countries)", catalog.len()).blue()
            );
            check_report(&catalog).iter().for_each(|line| println!("{}", line));
        }
        Commands::Export => {
            println!("{}", Catalog::embedded()?.to_json()?);
        }
    }

    Ok(())
}

/// One line per continent: total, GeoGuessr-eligible and left-hand-traffic counts.
fn check_report(catalog: &Catalog) -> Vec<String> {
    Continent::ALL
        .iter()
        .map(|continent| {
            let all = Filter {
                region: Region::Continent(*continent),
                geoguessr_only: false,
            };
            let ids = catalog.filtered(&all);
            let geoguessr = catalog.filtered(&Filter {
                geoguessr_only: true,
                ..all
            });
            let left = ids
                .iter()
                .filter_map(|id| catalog.get(*id))
                .filter(|c| c.drives_on == DrivingSide::Left)
                .count();
            format!(
                "├ {}: {} countries, {} on GeoGuessr, {} drive on the left",
                continent,
                ids.len(),
                geoguessr.len(),
                left
            )
        })
        .collect()
}
