// Recursive half-scale embedding of board states.

use std::f64::consts::PI;
use std::ops::{Add, Sub};

use hanoi_core::{BoardState, DISK_COUNT, Peg};

use crate::config::LayoutConfig;

/// A point in layout space. `y` grows downward, as in SVG.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Point) -> f64 {
        (self - other).length()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// One unit vector per peg, indexed by [`Peg::index`].
type Triple = [Point; 3];

/// Unit vectors 120 degrees apart: `a` points up, `b` and `c` point 30
/// degrees below horizontal to the left and right.
pub fn peg_vectors() -> Triple {
    let half_width = (PI / 6.0).cos();
    [
        Point::new(0.0, -1.0),
        Point::new(-half_width, 0.5),
        Point::new(half_width, 0.5),
    ]
}

/// Keep the vector of `peg` fixed and swap the other two.
fn permute(vectors: Triple, peg: Peg) -> Triple {
    let [a, b, c] = vectors;
    match peg {
        Peg::A => [a, c, b],
        Peg::B => [c, b, a],
        Peg::C => [b, a, c],
    }
}

/// Position of `state` considering disks `1..=disks` only, at unit scale.
fn embed(state: &BoardState, disks: usize, vectors: Triple) -> Point {
    if disks == 0 {
        return Point::ORIGIN;
    }
    let peg = state.pegs()[disks - 1];
    let inner = embed(state, disks - 1, permute(vectors, peg));
    (inner + vectors[peg.index()]).scale(0.5)
}

/// Layout coordinate of a state.
///
/// A pure function of `state` and `config.scale`: the same input always
/// yields bit-identical coordinates.
pub fn node_position(state: &BoardState, config: &LayoutConfig) -> Point {
    embed(state, DISK_COUNT, peg_vectors()).scale(config.scale)
}
