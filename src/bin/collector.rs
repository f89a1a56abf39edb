use std::path::Path;

use env_logger::Env;
use marketscope::{
    configuration::get_configuration,
    domain::Listing,
    services::{Droid, MarketCollector},
    storage,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");
    let collector = MarketCollector::new(&configuration.collector)?;

    let droid = Droid::new(&configuration.collector.webdriver_url).await?;
    droid
        .driver
        .goto(&configuration.collector.market_url)
        .await?;

    let mut table: Vec<Listing> = Vec::new();
    for query in &configuration.collector.queries {
        // One shot per query; a dead search never aborts the batch.
        if let Err(e) = collector
            .collect_search(&droid.driver, query, &mut table)
            .await
        {
            log::error!("Search {} failed: {}", query, e);
        }
    }

    storage::save_listings(Path::new(&configuration.data.csv_path), &table)?;
    log::info!(
        "Wrote {} listings to {}",
        table.len(),
        configuration.data.csv_path
    );

    droid.quit().await?;
    Ok(())
}
