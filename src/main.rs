use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use zelig::core::config;
use zelig::tui;

#[derive(Parser)]
#[command(name = "zelig", about = "Terminal travel companion for Morocco")]
struct Args {
    /// Backend base URL (overrides config file and ZELIG_API_URL)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to zelig.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("zelig.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e));
        }
    };
    let resolved = config::resolve(
        file_config,
        std::env::var("ZELIG_API_URL").ok(),
        args.base_url,
    );

    log::info!("Zelig starting up against {}", resolved.base_url);

    tui::run(resolved)
}
