pub mod city_grid;
pub mod grid_cell;
pub mod mapper;

pub use city_grid::CityGrid;
pub use grid_cell::GridCell;
pub use mapper::GridMapper;
