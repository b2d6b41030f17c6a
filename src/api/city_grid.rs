use crate::api::grid_cell::GridCell;
use crate::api::mapper::GridMapper;
use crate::core::geometry::create_cell_polygon;
use crate::core::grid::GridCellId;
use crate::util::coord::Coordinate;
use geo_types::Polygon;
use rayon::prelude::*;
use tracing::debug;

/// Every cell of a city grid, in id order.
///
/// Cells are produced on demand from the [`GridMapper`], nothing is stored.
///
/// # Example
///
/// ```
/// use city_grid::{CityGrid, GridMapper};
///
/// let grid = CityGrid::new(GridMapper::default());
/// assert_eq!(grid.len(), 100_000);
///
/// if let Some(cell) = grid.get_cell_at(&(-73.9857, 40.7484)) {
///     println!("{}", cell.id);
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CityGrid {
    mapper: GridMapper,
}

impl CityGrid {
    pub fn new(mapper: GridMapper) -> Self {
        Self { mapper }
    }

    pub fn mapper(&self) -> &GridMapper {
        &self.mapper
    }

    pub fn len(&self) -> usize {
        usize::try_from(self.mapper.cell_count()).unwrap_or(usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.mapper.cell_count() == 0
    }

    /// Iterates over all cells, ids `0..columns * rows`.
    pub fn iter(&self) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.mapper.cell_count()).map(move |id| GridCell::from_id(&self.mapper, id))
    }

    /// Returns the cell containing the coordinate, or `None` outside the region.
    pub fn get_cell_at(&self, coord: &impl Coordinate) -> Option<GridCell> {
        self.mapper
            .map_to_cell_checked(coord)
            .map(|id| GridCell::from_id(&self.mapper, id))
    }

    /// Maps a batch of coordinates in parallel.
    ///
    /// The output lines up with the input; coordinates outside the region
    /// give `None`.
    pub fn map_coords<C: Coordinate + Sync>(&self, coords: &[C]) -> Vec<Option<GridCellId>> {
        let ids: Vec<Option<GridCellId>> = coords
            .par_iter()
            .map(|c| self.mapper.map_to_cell_checked(c))
            .collect();

        debug!(
            total = ids.len(),
            in_region = ids.iter().filter(|id| id.is_some()).count(),
            "mapped coordinate batch"
        );
        ids
    }

    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        (0..self.mapper.cell_count())
            .into_par_iter()
            .map(|id| create_cell_polygon(id, self.mapper.config()))
            .collect()
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<GridCell>
    where
        F: Fn(&GridCell) -> bool,
    {
        self.iter().filter(|cell| predicate(cell)).collect()
    }
}
