use anyhow::Result;

use inventory_tracker::{logging, run, Config};

fn main() -> Result<()> {
    logging::init();

    // No flags: paths come from defaults / environment
    let config = Config::from_env();
    tracing::debug!(?config, version = inventory_tracker::VERSION, "starting");

    run(&config)
}
