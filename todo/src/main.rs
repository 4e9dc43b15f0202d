use clap::Parser;

use todo::cli::{Cli, run};
use todo::{exit_codes, logging};

fn main() {
    logging::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}
