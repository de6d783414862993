mod cli;
mod display;
mod error;
mod models;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    pretty_env_logger::init();

    let cli = Cli::parse();
    cli::run(cli);
}
