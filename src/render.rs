//! Drawing on an abstract surface: the static board (slots, labels, pegs) and
//! the ball. The canvas implementation lives in `web::canvas`; tests record
//! the calls instead.

use crate::geometry::{BoardGeometry, Point, slot_color, slot_label};

const PEG_FILL: &str = "#fff";
const PEG_STROKE: &str = "#888";
const SLOT_STROKE: &str = "#222";
const LABEL_FILL: &str = "#000";
const SHADOW_FILL: &str = "#222";
const SHADOW_ALPHA: f64 = 0.3;
const BALL_STROKE: &str = "#aa0";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleStyle<'a> {
    pub fill: &'a str,
    pub stroke: Option<&'a str>,
    pub alpha: f64,
}

/// The handful of 2D primitives the board needs.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
    /// Centred text in the surface's label font.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: &str);
    fn circle(&mut self, center: Point, radius: f64, style: CircleStyle<'_>);
}

/// Full clear and redraw of everything except the ball.
pub fn draw_board<S: Surface + ?Sized>(surface: &mut S, geometry: &BoardGeometry, pegs: &[Point]) {
    surface.clear(geometry.width, geometry.height);

    let slot_y = geometry.slot_y();
    let (sw, sh) = (geometry.slot_width, geometry.slot_height);
    for slot in 0..geometry.cols {
        let x = geometry.slot_center_x(slot);
        surface.fill_rect(x - sw / 2.0, slot_y, sw, sh, slot_color(slot));
        surface.stroke_rect(x - sw / 2.0, slot_y, sw, sh, SLOT_STROKE);
        // multiplier inside the slot and repeated above it
        let label = slot_label(slot);
        surface.fill_text(label, x, slot_y + sh / 1.5, LABEL_FILL);
        surface.fill_text(label, x, slot_y - 10.0, LABEL_FILL);
    }

    let peg_style = CircleStyle { fill: PEG_FILL, stroke: Some(PEG_STROKE), alpha: 1.0 };
    for peg in pegs {
        surface.circle(*peg, geometry.peg_radius, peg_style);
    }
}

/// Hue drifts by 10 degrees per waypoint as the ball descends.
pub fn ball_color(waypoint: usize) -> String {
    format!("hsl({}, 100%, 50%)", 50 + 10 * waypoint)
}

/// Shadow first, then the ball on top of it.
pub fn draw_ball<S: Surface + ?Sized>(
    surface: &mut S,
    geometry: &BoardGeometry,
    at: Point,
    waypoint: usize,
) {
    let r = geometry.ball_radius;
    let shadow = Point::new(at.x, at.y + r + 4.0);
    surface.circle(
        shadow,
        r * 0.9,
        CircleStyle { fill: SHADOW_FILL, stroke: None, alpha: SHADOW_ALPHA },
    );
    let fill = ball_color(waypoint);
    surface.circle(at, r, CircleStyle { fill: &fill, stroke: Some(BALL_STROKE), alpha: 1.0 });
}


#[cfg(test)]
mod tests {
    use super::testing::{Op, Recorder};
    use super::*;

    #[test]
    fn board_draws_slots_labels_and_pegs() {
        let g = BoardGeometry::with_grid(3, 4);
        let pegs = g.pegs();
        let mut rec = Recorder::default();
        draw_board(&mut rec, &g, &pegs);

        assert_eq!(rec.ops[0], Op::Clear);
        let rects = rec.ops.iter().filter(|op| matches!(op, Op::FillRect { .. })).count();
        let texts = rec.ops.iter().filter(|op| matches!(op, Op::Text { .. })).count();
        let circles = rec.ops.iter().filter(|op| matches!(op, Op::Circle { .. })).count();
        assert_eq!(rects, 4);
        assert_eq!(texts, 8);
        assert_eq!(circles, pegs.len());
        assert_eq!(rec.ops[1], Op::FillRect { x: g.slot_center_x(0) - 19.0, color: "#ff0000".into() });
    }

    #[test]
    fn shadow_precedes_ball() {
        let g = BoardGeometry::classic();
        let mut rec = Recorder::default();
        draw_ball(&mut rec, &g, Point::new(50.0, 60.0), 3);
        match &rec.ops[..] {
            [
                Op::Circle { center: sc, radius: sr, alpha: sa, stroke: None, .. },
                Op::Circle { center: bc, radius: br, fill, stroke: Some(_), .. },
            ] => {
                assert_eq!(*sc, Point::new(50.0, 74.0));
                assert!((*sr - 9.0).abs() < 1e-12);
                assert_eq!(*sa, 0.3);
                assert_eq!(*bc, Point::new(50.0, 60.0));
                assert_eq!(*br, 10.0);
                assert_eq!(fill, "hsl(80, 100%, 50%)");
            }
            other => panic!("unexpected ops {other:?}"),
        }
    }
}
