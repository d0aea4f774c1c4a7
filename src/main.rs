mod analysis;
mod cipher;
mod config;
mod encoding;
mod error;
mod report;

use clap::Parser;
use config::{Cli, Command};
use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn run(command: Command) -> Result<(), failure::Error> {
    match command {
        Command::Analyze(args) => {
            let ciphertext = args.input.load()?;
            let analysis = analysis::analyze(&ciphertext, &args.options())?;

            let stdout = io::stdout();
            report::write_report(&mut stdout.lock(), &analysis)?;
        }
        Command::Decode(args) => {
            let ciphertext = args.input.load()?;
            println!("{}", cipher::decode(&ciphertext, &args.key)?);
        }
        Command::Encrypt(args) => {
            let plaintext = args.input.load()?;
            println!("{}", cipher::encrypt(&plaintext, &args.key)?);
        }
    }

    Ok(())
}

fn main() -> Result<(), failure::Error> {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    run(cli.into_command())
}
