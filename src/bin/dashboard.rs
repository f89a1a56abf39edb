use std::net::TcpListener;
use std::path::Path;

use env_logger::Env;
use marketscope::{
    analytics::ListingTable, configuration::get_configuration, startup::run, storage,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let rows = storage::load_listings(Path::new(&configuration.data.csv_path))?;
    log::info!(
        "Loaded {} listings from {}",
        rows.len(),
        configuration.data.csv_path
    );
    let table = ListingTable::from_rows(rows);

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(&address)?;
    log::info!("Serving dashboard on http://{}", address);

    run(listener, table)?.await?;
    Ok(())
}
