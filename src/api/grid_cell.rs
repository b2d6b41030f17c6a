use crate::api::mapper::GridMapper;
use crate::core::geometry::{polygon_to_geojson, polygon_to_wkt};
use crate::core::grid::GridCellId;
use crate::util::coord::Coordinate;
use geo_types::{Point, Polygon, Rect};

/// A single rectangular cell of a city grid.
///
/// Carries the cell id together with its column, row, center and extent, so
/// it can be handed around without the [`GridMapper`] that produced it.
///
/// # Example
///
/// ```
/// use city_grid::{GridCell, GridMapper};
///
/// let mapper = GridMapper::default();
/// let cell = GridCell::from_coord(&mapper, &(-73.9857, 40.7484));
/// println!("Cell {} at ({}, {})", cell.id, cell.lon(), cell.lat());
///
/// // Convert to polygon for GIS operations
/// let polygon = cell.to_polygon();
/// assert_eq!(polygon.exterior().coords().count(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    /// Flattened cell id, `row * columns + column`
    pub id: GridCellId,
    /// Column index, counted eastwards from the western bound
    pub column: i64,
    /// Row index, counted southwards from the northern bound
    pub row: i64,
    /// Cell center as (lon, lat)
    pub center: Point<f64>,
    /// Cell extent in degrees
    pub bounds: Rect<f64>,
}

impl GridCell {
    /// Builds the cell for an id. Ids outside the grid are not rejected.
    pub fn from_id(mapper: &GridMapper, id: GridCellId) -> Self {
        Self {
            id,
            column: mapper.cell_column(id),
            row: mapper.cell_row(id),
            center: mapper.cell_center(id),
            bounds: mapper.cell_bounds(id),
        }
    }

    /// Builds the cell containing a coordinate, without a region check.
    pub fn from_coord(mapper: &GridMapper, coord: &impl Coordinate) -> Self {
        Self::from_id(mapper, mapper.map_to_cell(coord))
    }

    pub fn lon(&self) -> f64 {
        self.center.x()
    }

    pub fn lat(&self) -> f64 {
        self.center.y()
    }

    /// Converts this cell to a closed rectangular polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.bounds.to_polygon()
    }

    /// The cell polygon as Well-Known Text.
    pub fn to_wkt(&self) -> String {
        polygon_to_wkt(&self.to_polygon())
    }

    /// The cell polygon as a GeoJSON geometry object.
    pub fn to_geojson(&self) -> String {
        polygon_to_geojson(&self.to_polygon())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id() {
        let mapper = GridMapper::default();
        let cell = GridCell::from_id(&mapper, 1001);

        assert_eq!(cell.id, 1001);
        assert_eq!(cell.column, 1);
        assert_eq!(cell.row, 4);
        assert_eq!(cell.lon(), mapper.cell_center_lon(1001));
        assert_eq!(cell.lat(), mapper.cell_center_lat(1001));
    }

    #[test]
    fn test_same_point_same_cell() {
        let mapper = GridMapper::default();
        let cell1 = GridCell::from_coord(&mapper, &(-73.9857, 40.7484));
        let cell2 = GridCell::from_coord(&mapper, &(-73.9857, 40.7484));
        assert_eq!(cell1, cell2);

        // a point near the center stays in the cell
        let cell3 = GridCell::from_coord(&mapper, &(cell1.lon() + 0.0001, cell1.lat() - 0.0001));
        assert_eq!(cell1.id, cell3.id);
    }

    #[test]
    fn test_tuple_and_point_same_result() {
        let mapper = GridMapper::default();
        let from_tuple = GridCell::from_coord(&mapper, &(-73.9857, 40.7484));
        let from_point = GridCell::from_coord(&mapper, &Point::new(-73.9857, 40.7484));
        assert_eq!(from_tuple, from_point);
    }

    #[test]
    fn test_polygon_surrounds_center() {
        let mapper = GridMapper::default();
        let cell = GridCell::from_id(&mapper, 77_777);
        let polygon = cell.to_polygon();

        let exterior = polygon.exterior();
        assert_eq!(exterior.coords().count(), 5);
        assert_eq!(exterior.0[0], exterior.0[4]);

        let xs: Vec<f64> = exterior.coords().map(|c| c.x).collect();
        let ys: Vec<f64> = exterior.coords().map(|c| c.y).collect();
        assert!(xs.iter().any(|&x| x < cell.lon()) && xs.iter().any(|&x| x > cell.lon()));
        assert!(ys.iter().any(|&y| y < cell.lat()) && ys.iter().any(|&y| y > cell.lat()));
    }

    #[test]
    fn test_text_renderings() {
        let cell = GridCell::from_id(&GridMapper::default(), 0);
        assert!(cell.to_wkt().starts_with("POLYGON"));
        assert!(cell.to_geojson().contains("coordinates"));
    }
}
