use clap::Parser;
use planit::cli::commands::Cli;
use planit::cli::handlers;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = handlers::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
