use clap::Parser;
use log::{error, info};

use mindgarden::{App, Cli, Config, GardenStore};

fn initialize_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();
}

fn main() {
    let cli = Cli::parse();
    initialize_logger(cli.verbose);

    info!("mindgarden starting up");

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Some(garden_file) = cli.garden_file {
        config.garden_file = garden_file;
    }

    let store = GardenStore::load(config.clone());
    let mut app = App::new(store, config, cli.verbose);

    if let Err(e) = app.run(cli.command) {
        error!("{}", e);
        std::process::exit(1);
    }
}
