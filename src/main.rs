//! Radix Calc - command line entry point

use std::error::Error;
use std::process;

use radix_calc::Config;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let config = match Config::from_args(std::env::args()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    if let Err(err) = radix_calc::run(&config) {
        log::error!("{}", err);
        process::exit(1);
    }
    Ok(())
}
