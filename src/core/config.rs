use crate::core::constants::{
    DELTA_LAT, DELTA_LON, GRID_COLUMNS, GRID_ROWS, LAT_NORTH, LAT_SOUTH, LON_EAST, LON_WEST,
};
use crate::util::error::GridError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Bounding box and grid resolution for one deployment.
///
/// Every field can be overridden on its own. When deserializing, missing
/// fields keep their reference (New York City) value.
///
/// Columns and rows are taken as given. Nothing checks that
/// `columns * lon_step` matches the box width; keeping them coherent is up to
/// whoever writes the configuration.
///
/// # Example
///
/// ```
/// use city_grid::GridConfig;
///
/// # fn main() -> Result<(), city_grid::GridError> {
/// let config = GridConfig::from_json_str(r#"{ "columns": 500, "lon_step": 0.0007 }"#)?;
/// assert_eq!(config.columns, 500);
/// assert_eq!(config.rows, 400);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Eastern longitude bound (inclusive)
    pub east: f64,
    /// Western longitude bound (inclusive)
    pub west: f64,
    /// Northern latitude bound (inclusive)
    pub north: f64,
    /// Southern latitude bound (inclusive)
    pub south: f64,
    /// Cell width in degrees of longitude
    pub lon_step: f64,
    /// Cell height in degrees of latitude
    pub lat_step: f64,
    /// Number of cells per row
    pub columns: u32,
    /// Number of rows
    pub rows: u32,
}

impl GridConfig {
    /// The reference grid over New York City.
    pub const NYC: GridConfig = GridConfig {
        east: LON_EAST,
        west: LON_WEST,
        north: LAT_NORTH,
        south: LAT_SOUTH,
        lon_step: DELTA_LON,
        lat_step: DELTA_LAT,
        columns: GRID_COLUMNS,
        rows: GRID_ROWS,
    };

    /// Parses a JSON document and validates the result.
    pub fn from_json_str(json: &str) -> Result<Self, GridError> {
        let config: GridConfig =
            serde_json::from_str(json).map_err(|e| GridError::ConfigParse(e.to_string()))?;
        config.validate()?;
        debug!(?config, "parsed grid configuration");
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, GridError> {
        serde_json::to_string_pretty(self).map_err(|e| GridError::ConfigParse(e.to_string()))
    }

    pub fn east(mut self, east: f64) -> Self {
        self.east = east;
        self
    }

    pub fn west(mut self, west: f64) -> Self {
        self.west = west;
        self
    }

    pub fn north(mut self, north: f64) -> Self {
        self.north = north;
        self
    }

    pub fn south(mut self, south: f64) -> Self {
        self.south = south;
        self
    }

    pub fn lon_step(mut self, lon_step: f64) -> Self {
        self.lon_step = lon_step;
        self
    }

    pub fn lat_step(mut self, lat_step: f64) -> Self {
        self.lat_step = lat_step;
        self
    }

    pub fn columns(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    /// Checks each field on its own: ordered finite bounds, positive steps,
    /// non-zero grid dimensions.
    pub fn validate(&self) -> Result<(), GridError> {
        let bounds = [self.east, self.west, self.north, self.south];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(GridError::InvalidBounds(
                "Bounds must be finite".to_string(),
            ));
        }
        if self.east <= self.west {
            return Err(GridError::InvalidBounds(format!(
                "east ({}) must be greater than west ({})",
                self.east, self.west
            )));
        }
        if self.north <= self.south {
            return Err(GridError::InvalidBounds(format!(
                "north ({}) must be greater than south ({})",
                self.north, self.south
            )));
        }
        if !(self.lon_step.is_finite() && self.lon_step > 0.0) {
            return Err(GridError::InvalidStep(format!(
                "lon_step must be positive, got {}",
                self.lon_step
            )));
        }
        if !(self.lat_step.is_finite() && self.lat_step > 0.0) {
            return Err(GridError::InvalidStep(format!(
                "lat_step must be positive, got {}",
                self.lat_step
            )));
        }
        if self.columns == 0 || self.rows == 0 {
            return Err(GridError::InvalidGridSize(format!(
                "grid must have at least one cell, got {} x {}",
                self.columns, self.rows
            )));
        }
        Ok(())
    }

    /// Total number of cells, `columns * rows`.
    pub fn cell_count(&self) -> i64 {
        i64::from(self.columns) * i64::from(self.rows)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::NYC
    }
}
