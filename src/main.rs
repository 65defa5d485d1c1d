use anyhow::Result;
use clap::Parser;

use wattage_cli::cli::{self, Commands};
use wattage_cli::config::{Settings, WattagePaths};
use wattage_cli::storage::RegistryStore;

#[derive(Parser)]
#[command(
    name = "wattage",
    version,
    about = "Terminal-based appliance load tracker and electricity billing estimator",
    long_about = "wattage tracks household and office appliances (rated power and \
                  daily usage hours), computes their daily energy consumption, and \
                  produces electricity billing reports for a given tariff. Run \
                  without a subcommand for the interactive menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = WattagePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let store = RegistryStore::new(paths.registry_file());
    let mut registry = store.load();

    match cli.command {
        Some(cmd) => cli::handle_command(&mut registry, &store, &paths, &settings, cmd)?,
        None => cli::menu::run(&mut registry, &store, &paths, &settings)?,
    }

    Ok(())
}
