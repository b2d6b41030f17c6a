use crate::core::config::GridConfig;
use crate::core::geometry::{bounding_box, cell_bounds};
use crate::core::grid::{
    GridCellId, cell_center_lat, cell_center_lon, cell_column, cell_row, is_in_region,
    point_to_cell,
};
use crate::util::coord::Coordinate;
use crate::util::error::GridError;
use geo_types::{Point, Rect};
use tracing::warn;

/// Maps coordinates to cells of a uniform grid over a city bounding box, and back.
///
/// A `GridMapper` holds a validated, immutable [`GridConfig`]. Every method is
/// a pure function of its arguments and that configuration, so a mapper can
/// be copied or shared across threads freely.
///
/// None of the mapping methods check their input against the region:
/// [`map_to_cell`](Self::map_to_cell) happily returns ids for points outside
/// the box, and the inverse methods accept any id. Use
/// [`is_in_region`](Self::is_in_region) (or
/// [`map_to_cell_checked`](Self::map_to_cell_checked)) to gate them.
///
/// # Example
///
/// ```
/// use city_grid::GridMapper;
///
/// let mapper = GridMapper::default();
/// let empire_state = (-73.9857, 40.7484);
///
/// assert!(mapper.is_in_region(&empire_state));
/// let id = mapper.map_to_cell(&empire_state);
/// let center = mapper.cell_center(id);
/// assert_eq!(mapper.map_to_cell(&center), id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMapper {
    config: GridConfig,
}

impl GridMapper {
    /// Creates a mapper after validating the configuration.
    ///
    /// Columns and rows that disagree with the bounds and steps are accepted
    /// as configured, only logged.
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;

        let width = config.east - config.west;
        let height = config.north - config.south;
        let covered_width = f64::from(config.columns) * config.lon_step;
        let covered_height = f64::from(config.rows) * config.lat_step;
        if (covered_width - width).abs() > config.lon_step
            || (covered_height - height).abs() > config.lat_step
        {
            warn!(
                width,
                covered_width,
                height,
                covered_height,
                "grid dimensions do not match the bounding box"
            );
        }

        Ok(Self { config })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> i64 {
        self.config.cell_count()
    }

    /// Returns `true` if the coordinate is inside the bounding box, bounds included.
    ///
    /// Unspecified for NaN or infinite input.
    pub fn is_in_region(&self, coord: &impl Coordinate) -> bool {
        is_in_region(coord, &self.config)
    }

    /// Returns the id of the cell containing the coordinate.
    ///
    /// Does not check the region. Points outside the box get negative or
    /// out-of-range ids. Unspecified for NaN or infinite input.
    pub fn map_to_cell(&self, coord: &impl Coordinate) -> GridCellId {
        point_to_cell(coord, &self.config)
    }

    /// Returns the cell id only if the coordinate is inside the box.
    pub fn map_to_cell_checked(&self, coord: &impl Coordinate) -> Option<GridCellId> {
        self.is_in_region(coord)
            .then(|| point_to_cell(coord, &self.config))
    }

    /// Longitude of the cell center. Only `id % columns` is used.
    pub fn cell_center_lon(&self, id: GridCellId) -> f64 {
        cell_center_lon(id, &self.config)
    }

    /// Latitude of the cell center.
    pub fn cell_center_lat(&self, id: GridCellId) -> f64 {
        cell_center_lat(id, &self.config)
    }

    pub fn cell_center(&self, id: GridCellId) -> Point<f64> {
        Point::new(self.cell_center_lon(id), self.cell_center_lat(id))
    }

    pub fn cell_column(&self, id: GridCellId) -> i64 {
        cell_column(id, &self.config)
    }

    pub fn cell_row(&self, id: GridCellId) -> i64 {
        cell_row(id, &self.config)
    }

    pub fn cell_bounds(&self, id: GridCellId) -> Rect<f64> {
        cell_bounds(id, &self.config)
    }

    pub fn bounding_box(&self) -> Rect<f64> {
        bounding_box(&self.config)
    }
}

impl Default for GridMapper {
    fn default() -> Self {
        Self {
            config: GridConfig::NYC,
        }
    }
}
