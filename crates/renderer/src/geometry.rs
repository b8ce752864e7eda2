//! Isoband polygons for classified cells.
//!
//! Polygons live in the unit square with `(0, 0)` at the top-left corner
//! and `y` growing downwards. The cell perimeter is walked top-left,
//! top-right, bottom-right, bottom-left; corners inside the band are kept
//! and every edge contributes the points where it crosses the band's
//! lower or upper threshold.
//!
//! Crossing positions depend only on the classes of the edge's two
//! corners: a single crossing sits at the midpoint, a double crossing at
//! one and two thirds measured from the lower-class corner. Neighbouring
//! cells therefore agree on every shared edge.

use contour_map::{BandClass, CellCode, CellPosition, CellSize, Corner};

/// A point in unit-square or surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Map a unit-square point onto the drawing surface.
    pub fn to_surface(self, cell: CellPosition, size: CellSize) -> Point {
        let (ox, oy) = size.origin(cell);
        Point::new(ox + self.x * size.width, oy + self.y * size.height)
    }

    fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// A closed polygon; the last vertex connects back to the first.
pub type Polygon = Vec<Point>;

/// Perimeter walk order.
const WALK: [Corner; 4] = [
    Corner::TopLeft,
    Corner::TopRight,
    Corner::BottomRight,
    Corner::BottomLeft,
];

const ONE_THIRD: f64 = 1.0 / 3.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

fn corner_point(corner: Corner) -> Point {
    match corner {
        Corner::TopLeft => Point::new(0.0, 0.0),
        Corner::TopRight => Point::new(1.0, 0.0),
        Corner::BottomRight => Point::new(1.0, 1.0),
        Corner::BottomLeft => Point::new(0.0, 1.0),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Corner,
    Lower,
    Upper,
}

/// Edge crossings from `a` to `b`, in walk order.
fn crossings(a: Corner, ca: BandClass, b: Corner, cb: BandClass, out: &mut Vec<(Point, Kind)>) {
    if ca == cb {
        return;
    }

    // Measure from the lower-class corner so both cells sharing the edge
    // compute identical points.
    let (low, high) = if ca < cb { (a, b) } else { (b, a) };
    let (p, q) = (corner_point(low), corner_point(high));

    let mut found = match (ca.min(cb), ca.max(cb)) {
        (BandClass::Below, BandClass::Inside) => vec![(p.lerp(q, 0.5), Kind::Lower)],
        (BandClass::Inside, BandClass::Above) => vec![(p.lerp(q, 0.5), Kind::Upper)],
        _ => vec![
            (p.lerp(q, ONE_THIRD), Kind::Lower),
            (p.lerp(q, TWO_THIRDS), Kind::Upper),
        ],
    };

    if ca > cb {
        found.reverse();
    }
    out.extend(found);
}

fn walk(code: CellCode) -> Vec<(Point, Kind)> {
    let mut points = Vec::with_capacity(8);
    for (i, &corner) in WALK.iter().enumerate() {
        let next = WALK[(i + 1) % WALK.len()];
        let class = code.corner(corner);
        if class == BandClass::Inside {
            points.push((corner_point(corner), Kind::Corner));
        }
        crossings(corner, class, next, code.corner(next), &mut points);
    }
    points
}

/// Polygons covering the in-band part of a cell.
///
/// Codes 0 and 80 produce nothing. A saddle whose centre falls below
/// (above) the band is split wherever two lower (upper) crossings are
/// adjacent, since the out-of-band corners connect through the centre.
pub fn cell_polygons(code: CellCode, saddle: Option<BandClass>) -> Vec<Polygon> {
    if code.is_empty() {
        return Vec::new();
    }

    let points = walk(code);

    let cut = match saddle {
        Some(BandClass::Below) if code.is_saddle() => Some(Kind::Lower),
        Some(BandClass::Above) if code.is_saddle() => Some(Kind::Upper),
        _ => None,
    };

    let n = points.len();
    let splits: Vec<usize> = match cut {
        Some(kind) => (0..n)
            .filter(|&i| points[i].1 == kind && points[(i + 1) % n].1 == kind)
            .map(|i| (i + 1) % n)
            .collect(),
        None => Vec::new(),
    };

    if splits.len() < 2 {
        return vec![points.into_iter().map(|(p, _)| p).collect()];
    }

    splits
        .iter()
        .enumerate()
        .map(|(k, &start)| {
            let end = splits[(k + 1) % splits.len()];
            let len = (end + n - start) % n;
            (0..len).map(|j| points[(start + j) % n].0).collect()
        })
        .collect()
}

/// Shoelace area of a polygon (always non-negative).
pub fn polygon_area(polygon: &[Point]) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| {
            let (a, b) = (polygon[i], polygon[(i + 1) % n]);
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice.abs() / 2.0
}
