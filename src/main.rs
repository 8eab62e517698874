use clap::Parser;
use colored::Colorize;

use ipquery::cli::Cli;
use ipquery::errors::IpQueryError;
use ipquery::runtime::modes::run_query;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run_query(cli).await {
        match e.downcast_ref::<IpQueryError>() {
            Some(err) => eprintln!("{}", err.format_colored()),
            None => eprintln!("{} {:#}", "[ERROR]".red().bold(), e),
        }
        std::process::exit(1);
    }
}
