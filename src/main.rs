//! coursegraph: mapa de prerequisitos y progreso de grado.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use coursegraph::cli::{self, Cli};
use coursegraph::config::AppConfig;
use coursegraph::session::Session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut config = AppConfig::from_env()?;
    if let Some(path) = &args.catalog {
        config.catalog_path = Some(path.clone());
    }

    let base = std::env::current_dir()?;
    let catalog = config.load_catalog(&base)?;
    let session = Session::with_policy(catalog, Default::default(), config.targets);

    cli::run(args, session)
}
