//! Reference configuration: a grid of roughly 100 x 100 m cells over New York City.

/// Eastern longitude bound
pub const LON_EAST: f64 = -73.7;

/// Western longitude bound
pub const LON_WEST: f64 = -74.05;

/// Northern latitude bound
pub const LAT_NORTH: f64 = 41.0;

/// Southern latitude bound
pub const LAT_SOUTH: f64 = 40.5;

/// Cell width in degrees of longitude
pub const DELTA_LON: f64 = 0.0014;

/// Cell height in degrees of latitude
pub const DELTA_LAT: f64 = 0.00125;

/// Number of grid columns, `(|LON_WEST| - |LON_EAST|) / DELTA_LON`
pub const GRID_COLUMNS: u32 = 250;

/// Number of grid rows, `(LAT_NORTH - LAT_SOUTH) / DELTA_LAT`
pub const GRID_ROWS: u32 = 400;
