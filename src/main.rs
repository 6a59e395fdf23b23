mod cli;
mod clock;
mod config;
mod error;
mod history;
mod logging;
mod model;
mod notify;
mod report;

use std::process;

use config::Config;

fn main() {
    logging::init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(&config) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
