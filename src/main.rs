use std::process;

use clap::Parser;
use log::{error, info};

use cogs::{App, Cli, Config, JsonFileStore, UserService};

pub fn initialize_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    info!("Logger initialized");
}

fn main() {
    initialize_logger();

    let cli = Cli::parse();

    let mut config = Config::load();
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    // A store that cannot be opened is a startup-time hard failure.
    let store = match JsonFileStore::open(&config.data_dir) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open record store: {}", e);
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let user_service = UserService::new(store);
    let mut app = App::new(user_service, config, cli.verbose);

    if let Err(e) = app.run(cli.command) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
