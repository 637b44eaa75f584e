//! Path builder: turns the endpoint's left/right moves into the waypoints the
//! ball passes through, ending on the centre of its landing slot.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MovesError;
use crate::geometry::{BoardGeometry, Point};

/// Left/right decisions for one drop, one per peg row below the apex.
/// `1` steps right; anything else (including `null`, strings or a missing
/// entry) steps left. Entries keep their raw JSON so `check` can report what
/// the endpoint actually sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveSequence(Vec<Value>);

impl MoveSequence {
    pub fn new(moves: Vec<i64>) -> Self {
        Self(moves.into_iter().map(Value::from).collect())
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // numeric equality, so `1.0` counts as a right step too
    fn steps_right(&self, idx: usize) -> bool {
        self.0.get(idx).and_then(Value::as_f64) == Some(1.0)
    }

    /// Checks the endpoint contract: exactly `rows - 1` values, each the
    /// integer 0 or 1. Building a path never depends on this passing.
    pub fn check(&self, geometry: &BoardGeometry) -> Result<(), MovesError> {
        let expected = geometry.expected_moves();
        if self.0.len() != expected {
            return Err(MovesError::Length { expected, actual: self.0.len() });
        }
        let binary = |v: &Value| matches!(v.as_i64(), Some(0 | 1));
        match self.0.iter().position(|v| !binary(v)) {
            Some(index) => Err(MovesError::Value { index, value: self.0[index].to_string() }),
            None => Ok(()),
        }
    }
}

impl From<Vec<i64>> for MoveSequence {
    fn from(moves: Vec<i64>) -> Self {
        Self::new(moves)
    }
}

/// Waypoints for one drop: apex, one peg per following row, slot centre.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    waypoints: Vec<Point>,
    landing_column: usize,
}

impl Path {
    /// A path over arbitrary points; the landing column is informational.
    pub fn from_waypoints(waypoints: Vec<Point>, landing_column: usize) -> Self {
        Self { waypoints, landing_column }
    }

    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<Point> {
        self.waypoints.get(idx).copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.waypoints.last().copied()
    }

    pub fn landing_column(&self) -> usize {
        self.landing_column
    }
}

/// Column reached at `row` coming from `col`. The lattice edge overrides the
/// supplied move: column 0 always goes right, column `row` always goes left.
fn step(col: usize, row: usize, moves: &MoveSequence) -> usize {
    if col == 0 {
        col + 1
    } else if col == row {
        col - 1
    } else if moves.steps_right(row - 1) {
        col + 1
    } else {
        col - 1
    }
}

pub fn build_path(geometry: &BoardGeometry, moves: &MoveSequence) -> Path {
    let mut col = geometry.cols / 2;
    let mut waypoints = Vec::with_capacity(geometry.rows + 1);
    waypoints.push(Point::new(geometry.row_origin_x(0), geometry.offset_y));

    for row in 1..geometry.rows {
        col = step(col, row, moves);
        let x = geometry.row_origin_x(row) + col as f64 * geometry.obstacle_pad;
        waypoints.push(Point::new(x, geometry.row_y(row)));
    }

    // slot directly below the last peg column
    waypoints.push(Point::new(geometry.slot_center_x(col), geometry.slot_center_y()));
    Path { waypoints, landing_column: col }
}

/// Final column of the walk `build_path` follows, without the coordinates.
/// The drop endpoint reports its slot from this same walk.
pub fn landing_column(geometry: &BoardGeometry, moves: &MoveSequence) -> usize {
    (1..geometry.rows).fold(geometry.cols / 2, |col, row| step(col, row, moves))
}

/// Clamp-consistent random moves for drops that never reach the endpoint.
#[cfg(feature = "rng")]
pub fn random_moves(geometry: &BoardGeometry) -> Result<MoveSequence, getrandom::Error> {
    let mut bits = vec![0u8; geometry.expected_moves()];
    getrandom::getrandom(&mut bits)?;
    let mut col = geometry.cols / 2;
    let mut moves = Vec::with_capacity(bits.len());
    for (idx, bit) in bits.iter().enumerate() {
        let row = idx + 1;
        let mv = if col == 0 {
            1
        } else if col == row {
            0
        } else {
            i64::from(bit & 1)
        };
        col = if mv == 1 { col + 1 } else { col - 1 };
        moves.push(mv);
    }
    Ok(MoveSequence::new(moves))
}
