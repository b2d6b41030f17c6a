pub mod config;
pub mod constants;
pub mod geometry;
pub mod grid;

pub use config::GridConfig;
pub use constants::{
    DELTA_LAT, DELTA_LON, GRID_COLUMNS, GRID_ROWS, LAT_NORTH, LAT_SOUTH, LON_EAST, LON_WEST,
};
pub use geometry::{
    bounding_box, cell_bounds, create_cell_polygon, polygon_to_geojson, polygon_to_wkt,
};
pub use grid::{
    GridCellId, cell_center_lat, cell_center_lon, cell_column, cell_row, is_in_region,
    point_to_cell, point_to_row_col,
};
