//! Helpers shared between several days.

pub mod geometry;
pub mod grid;
pub mod shortest_path;

pub use geometry::{between, Dir, Edge, Point, Point3, Polygon};
pub use grid::Grid;
pub use shortest_path::{dijkstra, floyd_warshall};
