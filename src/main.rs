mod app;
mod config;
mod error;
mod events;
mod hydration;
mod logger;
mod state;
mod ui;
mod utils;

use anyhow::Result;
use app::App;
use clap::{App as ClapApp, Arg};
use config::Config;

fn main() -> Result<()> {
    let matches = ClapApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .help("Specify configuration file path.")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    App::start(config)
}
