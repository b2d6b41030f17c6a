use crate::core::config::GridConfig;
use crate::core::grid::{GridCellId, cell_center_lat, cell_center_lon};
use geo_types::{Polygon, Rect, coord};

/// The whole region covered by the grid as a rectangle.
pub fn bounding_box(config: &GridConfig) -> Rect<f64> {
    Rect::new(
        coord! { x: config.west, y: config.south },
        coord! { x: config.east, y: config.north },
    )
}

/// The rectangle of one cell, one step wide and tall around its center.
pub fn cell_bounds(id: GridCellId, config: &GridConfig) -> Rect<f64> {
    let lon = cell_center_lon(id, config);
    let lat = cell_center_lat(id, config);
    let half_lon = config.lon_step / 2.0;
    let half_lat = config.lat_step / 2.0;

    Rect::new(
        coord! { x: lon - half_lon, y: lat - half_lat },
        coord! { x: lon + half_lon, y: lat + half_lat },
    )
}

pub fn create_cell_polygon(id: GridCellId, config: &GridConfig) -> Polygon<f64> {
    cell_bounds(id, config).to_polygon()
}

pub fn polygon_to_wkt(polygon: &Polygon<f64>) -> String {
    use wkt::ToWkt;
    polygon.wkt_string()
}

pub fn polygon_to_geojson(polygon: &Polygon<f64>) -> String {
    let geom = geojson::Geometry::from(polygon);
    geom.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box() {
        let rect = bounding_box(&GridConfig::NYC);
        assert_eq!(rect.min().x, -74.05);
        assert_eq!(rect.max().x, -73.7);
        assert_eq!(rect.min().y, 40.5);
        assert_eq!(rect.max().y, 41.0);
    }

    #[test]
    fn test_cell_bounds_first_cell() {
        let rect = cell_bounds(0, &GridConfig::NYC);
        assert!((rect.min().x - -74.05).abs() < 1e-9);
        assert!((rect.max().x - (-74.05 + 0.0014)).abs() < 1e-9);
        assert!((rect.max().y - 41.0).abs() < 1e-9);
        assert!((rect.min().y - (41.0 - 0.00125)).abs() < 1e-9);
    }

    #[test]
    fn test_create_cell_polygon() {
        let polygon = create_cell_polygon(1234, &GridConfig::NYC);
        let exterior = polygon.exterior();
        assert_eq!(exterior.coords().count(), 5); // 4 vertices + 1 to close
        assert_eq!(exterior.0[0], exterior.0[4]);
    }

    #[test]
    fn test_polygon_renderings() {
        let polygon = create_cell_polygon(0, &GridConfig::NYC);

        let wkt = polygon_to_wkt(&polygon);
        assert!(wkt.starts_with("POLYGON"));

        let geojson = polygon_to_geojson(&polygon);
        assert!(geojson.contains("\"Polygon\""));
    }
}
