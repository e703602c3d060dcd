// tavolo-client/examples/browse.rs
// Browse restaurants and check table availability for tonight's slots.

use anyhow::Context;
use chrono::Utc;
use shared::floorplan::{DEFAULT_GRID_SIZE, FloorGrid};
use shared::types::standard_blocks;
use tavolo_client::api::{reservations, restaurants};
use tavolo_client::ClientConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        println!("Usage: {} <base_url> [token]", args[0]);
        println!("  Example: {} http://localhost:8080", args[0]);
        return Ok(());
    }

    let mut config = ClientConfig::new(&args[1]);
    if let Some(token) = args.get(2) {
        config = config.with_token(token);
    }
    let client = config.build_http_client()?;

    let all = restaurants::list(&client)
        .await
        .context("failed to fetch restaurants")?;
    tracing::info!(count = all.len(), "fetched restaurants");

    let Some(first) = all.first() else {
        println!("No restaurants available");
        return Ok(());
    };

    // Tonight's first standard slot
    let today = Utc::now().date_naive();
    let blocks = standard_blocks();
    let block = &blocks[0];
    let window = block.window_on(today);

    let reserved = reservations::reserved_tables(&client, &first.id, window)
        .await
        .context("failed to fetch reserved tables")?;
    let grid = FloorGrid::build(&first.layout, DEFAULT_GRID_SIZE, &reserved);

    println!("{} — {} for {}", first.name, block.label, today);
    for row in grid.rows() {
        let line: String = row
            .iter()
            .map(|cell| match (cell.is_table, cell.reserved) {
                (false, _) => '.',
                (true, true) => 'x',
                (true, false) => 'o',
            })
            .collect();
        println!("{line}");
    }
    println!(
        "{} tables, {} reserved",
        grid.table_count(),
        reserved.len()
    );

    Ok(())
}
