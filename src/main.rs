use city_grid::{GridCell, GridConfig, GridError, GridMapper};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), GridError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Optional JSON config text as the first argument, e.g. '{"columns": 500}'
    let config = match std::env::args().nth(1) {
        Some(json) => GridConfig::from_json_str(&json)?,
        None => GridConfig::default(),
    };
    let mapper = GridMapper::new(config)?;

    let lon = -73.9857;
    let lat = 40.7484;

    if !mapper.is_in_region(&(lon, lat)) {
        info!(lon, lat, "point is outside the grid region");
        return Ok(());
    }

    let cell = GridCell::from_coord(&mapper, &(lon, lat));

    println!("Cell ID: {}", cell.id);
    println!("Row: {}, Col: {}", cell.row, cell.column);
    println!("Center: ({}, {})", cell.lon(), cell.lat());
    println!("Polygon: {}", cell.to_wkt());

    Ok(())
}
