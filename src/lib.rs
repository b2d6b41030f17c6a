//! # city-grid
//!
//! Maps longitude/latitude coordinates onto a uniform grid of cells laid over
//! a rectangular city bounding box, and maps cell ids back to cell centers.
//! The reference configuration covers New York City with 250 x 400 cells of
//! roughly 100 x 100 m, numbered from the north-west corner.
//!
//! Everything is pure arithmetic over an immutable [`GridConfig`]; there is
//! no I/O and no shared mutable state.
//!
//! ### 1. `GridMapper` - Forward and Inverse Mapping
//!
//! ```
//! use city_grid::GridMapper;
//!
//! let mapper = GridMapper::default();
//! let (lon, lat) = (-73.9857, 40.7484);
//!
//! if mapper.is_in_region(&(lon, lat)) {
//!     let id = mapper.map_to_cell(&(lon, lat));
//!     println!("cell {} centered at ({}, {})", id, mapper.cell_center_lon(id), mapper.cell_center_lat(id));
//! }
//! ```
//!
//! ### 2. `GridCell` and `CityGrid` - Cells and Whole Grids
//!
//! ```
//! use city_grid::{CityGrid, GridMapper};
//!
//! let grid = CityGrid::new(GridMapper::default());
//! let ids = grid.map_coords(&[(-73.9857, 40.7484), (-0.1276, 51.5072)]);
//! assert!(ids[0].is_some());
//! assert!(ids[1].is_none());
//! ```
//!
//! ### 3. `GridConfig` - Retargeting Another Region
//!
//! ```
//! use city_grid::{GridConfig, GridMapper};
//!
//! # fn main() -> Result<(), city_grid::GridError> {
//! let config = GridConfig::from_json_str(r#"{
//!     "east": -87.5, "west": -87.95, "north": 42.05, "south": 41.6,
//!     "lon_step": 0.0018, "lat_step": 0.0009, "columns": 250, "rows": 500
//! }"#)?;
//! let chicago = GridMapper::new(config)?;
//! assert_eq!(chicago.map_to_cell(&(-87.95, 42.05)), 0);
//! # Ok(())
//! # }
//! ```
//!
//! Results for NaN or infinite coordinates are unspecified.

pub mod api;
pub mod core;
pub mod util;

pub use crate::api::{CityGrid, GridCell, GridMapper};
pub use crate::core::{
    DELTA_LAT, DELTA_LON, GRID_COLUMNS, GRID_ROWS, GridCellId, GridConfig, LAT_NORTH, LAT_SOUTH,
    LON_EAST, LON_WEST, bounding_box, cell_bounds, cell_center_lat, cell_center_lon, cell_column,
    cell_row, create_cell_polygon, is_in_region, point_to_cell, point_to_row_col,
};
pub use crate::util::{Coordinate, GridError};

pub use geo_types;
