use clap::Parser;
use nospread::cli::{self, Cli};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = cli::execute(&cli) {
        eprintln!("{:?}", miette::Report::new(e));
        std::process::exit(1);
    }
}
