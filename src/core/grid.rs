use crate::core::config::GridConfig;
use crate::util::coord::Coordinate;

/// Flattened cell index, `row * columns + column`, numbered from the north-west
/// corner. Signed because coordinates west or north of the box map to
/// negative indices.
pub type GridCellId = i64;

/// Returns `true` if the coordinate lies inside the bounding box.
///
/// All four bounds are inclusive. The result for NaN or infinite input is
/// unspecified.
pub fn is_in_region<C: Coordinate>(coord: &C, config: &GridConfig) -> bool {
    let (lon, lat) = (coord.lon(), coord.lat());
    lon >= config.west && lon <= config.east && lat >= config.south && lat <= config.north
}

/// Converts a coordinate to its grid row/column indices.
///
/// Returns `(row, col)`. There is no region check: off-region input gives
/// negative or out-of-range indices. Indices are floored, so a point just west
/// of the box lands in column -1, not 0.
///
/// The column is measured as `|west| - |lon|`, which assumes a box in the
/// western hemisphere.
pub fn point_to_row_col<C: Coordinate>(coord: &C, config: &GridConfig) -> (i64, i64) {
    let (lon, lat) = (coord.lon(), coord.lat());
    let mut col = ((config.west.abs() - lon.abs()) / config.lon_step).floor() as i64;
    let mut row = ((config.north - lat) / config.lat_step).floor() as i64;

    // The east and south edges are inside the box and belong to the last column/row.
    if col == i64::from(config.columns) && lon == config.east {
        col -= 1;
    }
    if row == i64::from(config.rows) && lat == config.south {
        row -= 1;
    }

    (row, col)
}

/// Maps a coordinate to the id of the grid cell containing it.
///
/// Callers who need a guaranteed in-grid result must check [`is_in_region`]
/// first. The result for NaN or infinite input is unspecified.
pub fn point_to_cell<C: Coordinate>(coord: &C, config: &GridConfig) -> GridCellId {
    let (row, col) = point_to_row_col(coord, config);
    row.saturating_mul(i64::from(config.columns))
        .saturating_add(col)
}

/// Column of a cell id, `id % columns`.
///
/// Uses truncating remainder, so forward-mapped ids with a negative column
/// come back with the same column.
///
/// A config with zero columns has no column decomposition; every id then
/// gives column 0.
pub fn cell_column(id: GridCellId, config: &GridConfig) -> i64 {
    id.checked_rem(i64::from(config.columns)).unwrap_or(0)
}

/// Row of a cell id, `(id - column) / columns`.
///
/// Zero columns gives row 0.
pub fn cell_row(id: GridCellId, config: &GridConfig) -> i64 {
    (id - cell_column(id, config))
        .checked_div(i64::from(config.columns))
        .unwrap_or(0)
}

/// Longitude of the center of the cell's column.
///
/// Depends only on `id % columns`. Ids outside `0..columns * rows` are not
/// rejected; they return whatever longitude that column formula gives.
pub fn cell_center_lon(id: GridCellId, config: &GridConfig) -> f64 {
    let col = cell_column(id, config) as f64;
    -(config.west.abs() - col * config.lon_step - config.lon_step / 2.0)
}

/// Latitude of the center of the cell's row.
///
/// Same caveat as [`cell_center_lon`] for out-of-range ids.
pub fn cell_center_lat(id: GridCellId, config: &GridConfig) -> f64 {
    let row = cell_row(id, config) as f64;
    config.north - row * config.lat_step - config.lat_step / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const NYC: GridConfig = GridConfig::NYC;

    #[test]
    fn test_is_in_region_inclusive_bounds() {
        assert!(is_in_region(&(-74.05, 40.5), &NYC));
        assert!(is_in_region(&(-73.7, 41.0), &NYC));
        assert!(is_in_region(&(-73.7_f32, 40.5_f32), &NYC));
        assert!(is_in_region(&(-74.05_f32, 41.0_f32), &NYC));
    }

    #[test]
    fn test_is_in_region_outside() {
        assert!(!is_in_region(&(-73.69_f32, 40.5_f32), &NYC));
        assert!(!is_in_region(&(-74.06, 40.7), &NYC));
        assert!(!is_in_region(&(-73.9, 41.01), &NYC));
        assert!(!is_in_region(&(-73.9, 40.49), &NYC));
    }

    #[test]
    fn test_north_west_corner_is_cell_zero() {
        assert_eq!(point_to_cell(&(-74.05_f32, 41.0_f32), &NYC), 0);
        assert_eq!(point_to_cell(&(-74.05, 41.0), &NYC), 0);
    }

    #[test]
    fn test_corners_cover_grid() {
        assert_eq!(point_to_cell(&(-74.05, 41.0), &NYC), 0);
        assert_eq!(point_to_cell(&(-73.7, 41.0), &NYC), 249);
        assert_eq!(point_to_cell(&(-74.05, 40.5), &NYC), 399 * 250);
        assert_eq!(point_to_cell(&(-73.7, 40.5), &NYC), 400 * 250 - 1);
    }

    #[test]
    fn test_floor_not_truncation() {
        // just west and north of the box
        let (row, col) = point_to_row_col(&(-74.0501, 41.0001), &NYC);
        assert_eq!(row, -1);
        assert_eq!(col, -1);
        assert_eq!(point_to_cell(&(-74.0501, 41.0001), &NYC), -251);
    }

    #[test]
    fn test_far_off_region_does_not_panic() {
        let id = point_to_cell(&(-180.0, -90.0), &NYC);
        assert!(id > NYC.cell_count());

        let id = point_to_cell(&(1.0e300, -1.0e300), &NYC);
        assert!(id < 0 || id >= NYC.cell_count());
    }

    #[test]
    fn test_cell_zero_center() {
        assert!((cell_center_lon(0, &NYC) - (-74.05 + 0.0014 / 2.0)).abs() < 1e-6);
        assert!((cell_center_lat(0, &NYC) - (41.0 - 0.00125 / 2.0)).abs() < 1e-6);
    }

    #[test]
    fn test_center_roundtrip_every_cell() {
        for id in 0..NYC.cell_count() {
            let center = (cell_center_lon(id, &NYC), cell_center_lat(id, &NYC));
            assert!(is_in_region(&center, &NYC));
            assert_eq!(point_to_cell(&center, &NYC), id);
        }
    }

    #[test]
    fn test_lon_ignores_row() {
        assert_eq!(cell_center_lon(17, &NYC), cell_center_lon(17 + 250 * 12, &NYC));
        assert_ne!(cell_center_lat(17, &NYC), cell_center_lat(17 + 250 * 12, &NYC));
    }

    #[test]
    fn test_out_of_range_id_is_permissive() {
        let id = NYC.cell_count() + 3;
        assert_eq!(cell_column(id, &NYC), 3);
        assert_eq!(cell_row(id, &NYC), 400);
        assert_eq!(cell_center_lon(id, &NYC), cell_center_lon(3, &NYC));
        assert!(cell_center_lat(id, &NYC) < NYC.south);

        assert_eq!(cell_column(i64::MIN, &NYC), i64::MIN % 250);
        assert!(cell_center_lat(i64::MAX, &NYC).is_finite());
    }

    #[test]
    fn test_zero_columns_does_not_panic() {
        let config = NYC.columns(0);
        let result = std::panic::catch_unwind(|| {
            (
                cell_column(5, &config),
                cell_row(5, &config),
                cell_center_lon(5, &config),
                cell_center_lat(5, &config),
            )
        });

        let (col, row, lon, lat) = result.expect("inverse mapping must not panic");
        assert_eq!(col, 0);
        assert_eq!(row, 0);
        assert_eq!(lon, cell_center_lon(0, &NYC));
        assert_eq!(lat, cell_center_lat(0, &NYC));

        // forward mapping never divides by columns
        assert!(std::panic::catch_unwind(|| point_to_cell(&(-73.9, 40.7), &config)).is_ok());
    }

    #[test]
    fn test_negative_id_keeps_forward_column() {
        let id = point_to_cell(&(-74.0501, 40.9995), &NYC);
        assert_eq!(id, -1);
        assert_eq!(cell_column(id, &NYC), -1);
        assert_eq!(cell_row(id, &NYC), 0);
    }

    #[test]
    fn test_monotonic_within_region() {
        let lat = 40.73;
        let mut last_col = i64::MIN;
        for i in 0..=350 {
            let lon = -74.05 + i as f64 * 0.001;
            let (_, col) = point_to_row_col(&(lon, lat), &NYC);
            assert!(col >= last_col);
            last_col = col;
        }

        let lon = -73.9;
        let mut last_row = i64::MAX;
        for i in 0..=500 {
            let lat = 40.5 + i as f64 * 0.001;
            let (row, _) = point_to_row_col(&(lon, lat), &NYC);
            assert!(row <= last_row);
            last_row = row;
        }
    }

    #[test]
    fn test_custom_config() {
        let config = NYC.columns(500).lon_step(0.0007);
        assert_eq!(point_to_cell(&(-73.7, 41.0), &config), 499);
        assert_eq!(cell_column(1000, &config), 0);
        assert_eq!(cell_row(1000, &config), 2);
    }
}
