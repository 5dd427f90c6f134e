mod cli;
mod extract_cmd;
mod page_range;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    shared::init_logging();

    if let Err(code) = extract_cmd::run(&cli) {
        std::process::exit(code);
    }
}
