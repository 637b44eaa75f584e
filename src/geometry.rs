//! Board geometry shared by the path builder, the animation and the static
//! board renderer. One value describes the whole board; every derived
//! coordinate is computed from it on demand.

/// A point in board pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `to` by `frac` (0 = self, 1 = to).
    pub fn lerp(self, to: Point, frac: f64) -> Point {
        Point {
            x: self.x + (to.x - self.x) * frac,
            y: self.y + (to.y - self.y) * frac,
        }
    }
}

// --- Board constants --------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardGeometry {
    pub width: f64,
    pub height: f64,
    pub rows: usize,        // peg rows, apex included
    pub cols: usize,        // scoring slots
    pub obstacle_pad: f64,  // distance between neighbouring pegs
    pub offset_x: f64,      // x of slot 0
    pub offset_y: f64,      // y of the apex row
    pub slot_gap: f64,      // last peg row -> slot top
    pub peg_radius: f64,
    pub ball_radius: f64,
    pub slot_width: f64,
    pub slot_height: f64,
}

impl BoardGeometry {
    /// The production board: 16 peg rows over 17 slots on a 1000x800 canvas.
    pub const fn classic() -> Self {
        Self {
            width: 1000.0,
            height: 800.0,
            rows: 16,
            cols: 17,
            obstacle_pad: 40.0,
            offset_x: 100.0,
            offset_y: 100.0,
            slot_gap: 40.0,
            peg_radius: 8.0,
            ball_radius: 10.0,
            slot_width: 38.0,
            slot_height: 38.0,
        }
    }

    /// Same board with a different lattice size.
    pub const fn with_grid(rows: usize, cols: usize) -> Self {
        let mut g = Self::classic();
        g.rows = rows;
        g.cols = cols;
        g
    }

    /// Number of move values a drop response should carry.
    pub fn expected_moves(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    /// Top edge of the slot row.
    pub fn slot_y(&self) -> f64 {
        self.offset_y + self.rows.saturating_sub(1) as f64 * self.obstacle_pad + self.slot_gap
    }

    pub fn slot_center_y(&self) -> f64 {
        self.slot_y() + self.slot_height / 2.0
    }

    pub fn slot_center_x(&self, col: usize) -> f64 {
        self.offset_x + col as f64 * self.obstacle_pad
    }

    /// x of column 0 in peg row `row`; each row moves half a pad outwards.
    pub fn row_origin_x(&self, row: usize) -> f64 {
        let inset = self.cols as f64 - 1.0 - row as f64;
        self.offset_x + inset * (self.obstacle_pad / 2.0)
    }

    pub fn row_y(&self, row: usize) -> f64 {
        self.offset_y + row as f64 * self.obstacle_pad
    }

    pub fn peg(&self, row: usize, col: usize) -> Point {
        Point::new(self.row_origin_x(row) + col as f64 * self.obstacle_pad, self.row_y(row))
    }

    /// The triangular peg lattice, row by row: row `r` holds `r + 1` pegs.
    pub fn pegs(&self) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.rows * (self.rows + 1) / 2);
        for row in 0..self.rows {
            for col in 0..=row {
                out.push(self.peg(row, col));
            }
        }
        out
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::classic()
    }
}

// --- Slot multipliers -------------------------------------------------------

pub const MULTIPLIER_COLORS: [&str; 17] = [
    "#ff0000", "#ff4000", "#ff8000", "#ffbf00", "#ffff00", "#ffff66", "#ffff99", "#ffffcc",
    "#ffffff", // center
    "#ffffcc", "#ffff99", "#ffff66", "#ffff00", "#ffbf00", "#ff8000", "#ff4000", "#ff0000",
];

pub const MULTIPLIER_LABELS: [&str; 17] = [
    "1000x", "130x", "26x", "9x", "4x", "2x", "0.2x", "0.2x",
    "0.2x", // center
    "0.2x", "0.2x", "2x", "4x", "9x", "26x", "130x", "1000x",
];

/// Colours repeat for boards wider than the table.
pub fn slot_color(slot: usize) -> &'static str {
    MULTIPLIER_COLORS[slot % MULTIPLIER_COLORS.len()]
}

/// Empty for slots the table does not cover.
pub fn slot_label(slot: usize) -> &'static str {
    MULTIPLIER_LABELS.get(slot).copied().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_derived_values() {
        let g = BoardGeometry::classic();
        assert_eq!(g.expected_moves(), 15);
        assert_eq!(g.slot_y(), 100.0 + 15.0 * 40.0 + 40.0);
        assert_eq!(g.slot_center_y(), 740.0 + 19.0);
        assert_eq!(g.slot_center_x(8), 420.0);
    }

    #[test]
    fn apex_sits_above_middle_slot() {
        let g = BoardGeometry::classic();
        let apex = g.peg(0, 0);
        assert_eq!(apex, Point::new(420.0, 100.0));
        assert_eq!(apex.x, g.slot_center_x(g.cols / 2));
    }

    #[test]
    fn lattice_is_triangular() {
        let g = BoardGeometry::with_grid(4, 5);
        let pegs = g.pegs();
        assert_eq!(pegs.len(), 1 + 2 + 3 + 4);
        // row 1 straddles the apex by half a pad each side
        assert_eq!(pegs[1].x, pegs[0].x - 20.0);
        assert_eq!(pegs[2].x, pegs[0].x + 20.0);
        assert_eq!(pegs[1].y, pegs[0].y + 40.0);
    }

    #[test]
    fn labels_past_table_are_empty() {
        assert_eq!(slot_label(0), "1000x");
        assert_eq!(slot_label(8), "0.2x");
        assert_eq!(slot_label(40), "");
        assert_eq!(slot_color(17), slot_color(0));
    }

    #[test]
    fn lerp_endpoints() {
        let a = Point::new(0.0, 10.0);
        let b = Point::new(10.0, 30.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point::new(5.0, 20.0));
    }
}
