use std::path::PathBuf;

use clap::Parser;
use trivia_quiz::config::{DEFAULT_AMOUNT, DEFAULT_CATEGORY, DEFAULT_ENDPOINT};
use trivia_quiz::{logging, Config, Quiz};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Trivia API endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Questions per batch
    #[arg(long, default_value_t = DEFAULT_AMOUNT, value_parser = clap::value_parser!(u8).range(1..=50))]
    amount: u8,

    /// Question category id
    #[arg(long, default_value_t = DEFAULT_CATEGORY)]
    category: u32,

    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            endpoint: self.endpoint.clone(),
            amount: self.amount,
            category: self.category,
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(e) = logging::init(path, &args.log_level) {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    match Quiz::new(args.config()).run().await {
        Ok(score) => println!("Game Over! Your score is: {}", score),
        Err(e) => {
            eprintln!("Error running quiz: {}", e);
            std::process::exit(1);
        }
    }
}
