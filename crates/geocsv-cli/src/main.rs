use clap::Parser;
use geocsv_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.log_file {
        if let Err(e) = logging::init_logging_file() {
            logging::init_logging_stderr();
            tracing::warn!("file logging unavailable ({:#}), logging to stderr", e);
        }
    } else {
        logging::init_logging_stderr();
    }

    if let Err(err) = cli.run().await {
        eprintln!("geocsv error: {:#}", err);
        std::process::exit(1);
    }
}
