//! Lattice positions and the adjacency test.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A single point on the 2-D square lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column coordinate.
    pub x: i32,
    /// Row coordinate.
    pub y: i32,
}

impl Position {
    /// Builds a position from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four unit lattice directions: up, down, right, left.
    pub const DIRECTIONS: [Position; 4] = [
        Position::new(0, 1),
        Position::new(0, -1),
        Position::new(1, 0),
        Position::new(-1, 0),
    ];

    /// L1 (Manhattan) distance to another position.
    pub fn l1_distance(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Returns true iff `p` and `q` are at unit L1 distance on the lattice.
pub fn adjacent(p: Position, q: Position) -> bool {
    p.l1_distance(q) == 1
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}
