extern crate courserec;

use std::io::{self, BufRead};

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use courserec::config::AppConfig;
use courserec::recommender::Recommender;

/// Interactive front for the recommender: one course name per stdin line,
/// ranked recommendations on stdout.
fn main() -> Result<()> {
    let config_path = std::env::args().nth(1).unwrap_or_default();
    let config = AppConfig::new(config_path);

    let filter =
        EnvFilter::try_new(&config.log.level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let recommender = Recommender::new(&config)?;
    if recommender.is_available() {
        info!("ready, enter one course name per line");
    } else {
        warn!("similarity artifacts are missing, recommendations are disabled");
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let selected = line?;
        let selected = selected.trim();
        if selected.is_empty() {
            continue;
        }

        let recommendations = recommender.recommend(selected);
        if recommendations.is_empty() {
            println!("no recommendations for '{}'", selected);
            continue;
        }
        println!("courses similar to '{}':", selected);
        for (position, recommendation) in recommendations.iter().enumerate() {
            println!(
                "  {}. {} ({})",
                position + 1,
                recommendation.name,
                recommendation.url
            );
        }
    }

    Ok(())
}
