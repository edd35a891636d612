#[macro_use]
extern crate lazy_static;

use std::error::Error;
use std::io;

use crate::session::Session;

mod calculator;
mod config;
mod error;
mod history;
mod input;
mod menu;
mod session;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config: config::Config = config::figment().extract()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&config.ui, stdin.lock(), stdout.lock()).run()?;

    if config.telemetry.print_on_exit {
        print!("{}", telemetry::encode()?);
    }

    Ok(())
}
