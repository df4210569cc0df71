use clap::Parser;
use env_logger::Env;
use libflagquiz::flash::Flash;
use libflagquiz::{Catalog, Error, Region, Session, Settings};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Duration;

mod cli;

#[derive(Parser, Debug)]
#[command(name = "flagquiz")]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON catalog to use instead of the built-in country list
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,
    /// `world` or a continent, e.g. `europe` or `south-america`
    #[arg(short, long, default_value = "world")]
    region: Region,
    /// Include countries outside GeoGuessr's coverage
    #[arg(short, long)]
    all_countries: bool,
    /// Show country names and ask for flags
    #[arg(short, long)]
    name_prompt: bool,
    #[arg(short, long)]
    seed: Option<u64>,
    /// How long answer feedback stays up, in milliseconds (default 3000)
    #[arg(short, long)]
    flash_ms: Option<u64>,
    #[arg(short, long, default_value = "error")]
    log_level: String,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(&args.log_level)).init();

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::embedded()?,
    };
    let settings = Settings {
        region: args.region,
        geoguessr_only: !args.all_countries,
        prompt_is_flag: !args.name_prompt,
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    debug!("[Setup] {:?}", settings);

    let mut session = Session::new(catalog, settings, rng);
    let mut flash = args
        .flash_ms
        .map(Duration::from_millis)
        .map_or_else(Flash::default, Flash::new);
    cli::cli_loop(&mut session, &mut flash);
    Ok(())
}
