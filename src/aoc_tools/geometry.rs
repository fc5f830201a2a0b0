//! Points, directions and polygons on the integer lattice.

use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Error, Result};
use num::Integer;

/// A direction on the grid: left, right, up, or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dir {
    Left,
    Right,
    Up,
    Down,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Left, Dir::Right, Dir::Up, Dir::Down];

    pub fn reverse(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
        }
    }

    pub fn turn_left(self) -> Dir {
        match self {
            Dir::Left => Dir::Down,
            Dir::Right => Dir::Up,
            Dir::Up => Dir::Left,
            Dir::Down => Dir::Right,
        }
    }

    pub fn turn_right(self) -> Dir {
        self.turn_left().reverse()
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Dir::Left | Dir::Right)
    }
}

impl FromStr for Dir {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "L" => Ok(Dir::Left),
            "R" => Ok(Dir::Right),
            "U" => Ok(Dir::Up),
            "D" => Ok(Dir::Down),
            _ => Err(anyhow!("unrecognized direction {:?}", s)),
        }
    }
}

/// One point in 2D space, addressed by row and column.
///
/// Use [`Point::from_xy`] to build one from x/y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub row: i64,
    pub col: i64,
}

impl Point {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    pub const fn from_xy(x: i64, y: i64) -> Self {
        Self { row: y, col: x }
    }

    pub fn x(self) -> i64 {
        self.col
    }

    pub fn y(self) -> i64 {
        self.row
    }

    pub fn go(self, dir: Dir, n: i64) -> Point {
        match dir {
            Dir::Left => Point::new(self.row, self.col - n),
            Dir::Right => Point::new(self.row, self.col + n),
            Dir::Up => Point::new(self.row - n, self.col),
            Dir::Down => Point::new(self.row + n, self.col),
        }
    }

    pub fn step(self, dir: Dir) -> Point {
        self.go(dir, 1)
    }

    /// Whether the point lies in `0..=max_row` x `0..=max_col`.
    pub fn valid(self, max_row: i64, max_col: i64) -> bool {
        (0..=max_row).contains(&self.row) && (0..=max_col).contains(&self.col)
    }

    pub fn neighbors(self) -> [Point; 4] {
        Dir::ALL.map(|d| self.step(d))
    }

    pub fn determinant(self, other: Point) -> i64 {
        Edge::new(self, other).determinant()
    }

    pub fn distance(self, other: Point) -> f64 {
        Edge::new(self, other).distance()
    }

    pub fn manhattan(self, other: Point) -> i64 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub p1: Point,
    pub p2: Point,
}

impl Edge {
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Determinant of the 2x2 matrix `[p1; p2]`, the shoelace summand.
    pub fn determinant(self) -> i64 {
        self.p1.col * self.p2.row - self.p1.row * self.p2.col
    }

    pub fn distance(self) -> f64 {
        let dr = (self.p1.row - self.p2.row) as f64;
        let dc = (self.p1.col - self.p2.col) as f64;
        dr.hypot(dc)
    }

    /// Lattice points on the edge, counting the start but not the end.
    pub fn integer_points(self) -> i64 {
        let dr = (self.p1.row - self.p2.row).abs();
        let dc = (self.p1.col - self.p2.col).abs();
        dr.gcd(&dc)
    }

    /// Whether `point` lies on the infinite line through this edge.
    pub fn collinear_with(self, point: Point) -> bool {
        let (dr1, dc1) = (self.p2.row - self.p1.row, self.p2.col - self.p1.col);
        let (dr2, dc2) = (point.row - self.p1.row, point.col - self.p1.col);
        dr1 * dc2 == dc1 * dr2
    }

    /// Whether the two edges cross. With `infinite`, both are treated as whole lines, so only
    /// parallel lines miss.
    pub fn intersects(self, other: Edge, infinite: bool) -> bool {
        let Some((row, col)) = self.intersection_point(other) else {
            return false;
        };
        infinite
            || [self, other].iter().all(|e| {
                between(row, e.p1.row as f64, e.p2.row as f64)
                    && between(col, e.p1.col as f64, e.p2.col as f64)
            })
    }

    /// Intersection `(row, col)` of the infinite lines through both edges, `None` if parallel.
    pub fn intersection_point(self, other: Edge) -> Option<(f64, f64)> {
        let (x1, y1) = (self.p1.x() as f64, self.p1.y() as f64);
        let (x2, y2) = (self.p2.x() as f64, self.p2.y() as f64);
        let (x3, y3) = (other.p1.x() as f64, other.p1.y() as f64);
        let (x4, y4) = (other.p2.x() as f64, other.p2.y() as f64);

        let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if denom == 0.0 {
            return None;
        }
        let a = x1 * y2 - y1 * x2;
        let b = x3 * y4 - y3 * x4;
        let x = (a * (x3 - x4) - (x1 - x2) * b) / denom;
        let y = (a * (y3 - y4) - (y1 - y2) * b) / denom;
        Some((y, x))
    }
}

/// A closed polygon made of its corner points, in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let next = self.points.iter().cycle().skip(1);
        self.points
            .iter()
            .zip(next)
            .map(|(&p1, &p2)| Edge::new(p1, p2))
    }

    /// Twice the enclosed area (shoelace formula). Independent of winding order.
    pub fn double_area(&self) -> i64 {
        self.edges().map(Edge::determinant).sum::<i64>().abs()
    }

    pub fn enclosed_area(&self) -> f64 {
        self.double_area() as f64 / 2.0
    }

    pub fn boundary_points(&self) -> i64 {
        self.edges().map(Edge::integer_points).sum()
    }

    /// Number of lattice points strictly inside the polygon (Pick's theorem).
    pub fn count_enclosed_points(&self) -> i64 {
        (self.double_area() - self.boundary_points() + 2) / 2
    }

    pub fn perimeter(&self) -> f64 {
        self.edges().map(Edge::distance).sum()
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A point in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point3 {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Point3 {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    pub fn distance(self, other: Point3) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        let dz = (self.z - other.z) as f64;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl FromStr for Point3 {
    type Err = Error;

    /// Parses `x,y,z`, tolerating whitespace around each coordinate.
    fn from_str(s: &str) -> Result<Self> {
        let mut coords = s.trim().split(',').map(|c| {
            c.trim()
                .parse::<i64>()
                .with_context(|| format!("bad coordinate in {:?}", s))
        });
        let (Some(x), Some(y), Some(z), None) =
            (coords.next(), coords.next(), coords.next(), coords.next())
        else {
            bail!("{:?} does not match the format x,y,z", s);
        };
        Ok(Point3::new(x?, y?, z?))
    }
}

/// Whether `value` lies between `a` and `b` (inclusive, in either order).
pub fn between<T: PartialOrd + Copy>(value: T, a: T, b: T) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    lo <= value && value <= hi
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(side: i64) -> Polygon {
        [(0, 0), (0, side), (side, side), (side, 0)]
            .into_iter()
            .map(|(r, c)| Point::new(r, c))
            .collect()
    }

    #[test]
    fn shoelace_unit_square() {
        assert_eq!(square(1).enclosed_area(), 1.0);
        assert_eq!(square(1).perimeter(), 4.0);
    }

    #[test]
    fn area_ignores_winding_order() {
        let mut poly = square(3);
        let area = poly.double_area();
        poly.points.reverse();
        assert_eq!(poly.double_area(), area);
        assert_eq!(area, 18);
    }

    #[test]
    fn picks_theorem() {
        // A 4x4 square has a 3x3 block of interior points and 16 on the boundary.
        let poly = square(4);
        assert_eq!(poly.boundary_points(), 16);
        assert_eq!(poly.count_enclosed_points(), 9);

        let triangle = Polygon::new(vec![Point::new(0, 0), Point::new(0, 4), Point::new(4, 0)]);
        assert_eq!(triangle.boundary_points(), 12);
        assert_eq!(triangle.count_enclosed_points(), 3);
    }

    #[test]
    fn edge_lattice_points() {
        let e = Edge::new(Point::new(0, 0), Point::new(6, 4));
        assert_eq!(e.integer_points(), 2);
        assert_eq!(e.determinant(), 0);
    }

    #[test]
    fn line_intersection() {
        let a = Edge::new(Point::from_xy(0, 0), Point::from_xy(2, 2));
        let b = Edge::new(Point::from_xy(0, 2), Point::from_xy(2, 0));
        assert_eq!(a.intersection_point(b), Some((1.0, 1.0)));
        let c = Edge::new(Point::from_xy(0, 1), Point::from_xy(2, 3));
        assert_eq!(a.intersection_point(c), None);
    }

    #[test]
    fn segment_and_line_intersections() {
        let a = Edge::new(Point::new(0, 0), Point::new(2, 2));
        let b = Edge::new(Point::new(0, 2), Point::new(2, 0));
        assert!(a.intersects(b, false));

        // The lines cross at (3, 3), beyond the end of both segments.
        let c = Edge::new(Point::new(0, 6), Point::new(2, 4));
        assert!(a.intersects(c, true));
        assert!(!a.intersects(c, false));

        let parallel = Edge::new(Point::new(0, 1), Point::new(2, 3));
        assert!(!a.intersects(parallel, true));
    }

    #[test]
    fn collinear_points() {
        let e = Edge::new(Point::new(1, 1), Point::new(3, 5));
        assert!(e.collinear_with(Point::new(2, 3)));
        assert!(e.collinear_with(Point::new(-1, -3)));
        assert!(!e.collinear_with(Point::new(2, 2)));
    }

    #[test]
    fn directions() {
        let p = Point::new(2, 3);
        assert_eq!(p.go(Dir::Up, 2), Point::new(0, 3));
        assert_eq!(p.step(Dir::Left).step(Dir::Left.reverse()), p);
        assert_eq!(Dir::Up.turn_left(), Dir::Left);
        assert_eq!(Dir::Up.turn_right(), Dir::Right);
        assert!(p.valid(2, 3));
        assert!(!p.step(Dir::Down).valid(2, 3));
        assert_eq!("U".parse::<Dir>().ok(), Some(Dir::Up));
        assert!("X".parse::<Dir>().is_err());
    }

    #[test]
    fn parse_point3() -> Result<()> {
        assert_eq!(" 1, -2,3 ".parse::<Point3>()?, Point3::new(1, -2, 3));
        assert!("1,2".parse::<Point3>().is_err());
        assert!("1,2,3,4".parse::<Point3>().is_err());
        assert_eq!(Point3::new(0, 0, 0).distance(Point3::new(2, 3, 6)), 7.0);
        Ok(())
    }

    #[test]
    fn between_is_order_independent() {
        assert!(between(3, 5, 1));
        assert!(between(1, 1, 5));
        assert!(!between(6, 5, 1));
    }
}
