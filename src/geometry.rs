// Shield and checkmark geometry, derived from the icon size alone

use crate::style::{
    CHECK_HEIGHT, CHECK_MIN_THICKNESS, CHECK_THICKNESS_DIVISOR, CHECK_WIDTH, SHIELD_BOTTOM,
    SHIELD_SHOULDER, SHIELD_TOP, SHIELD_WIDTH,
};
use tiny_skia::{Path, PathBuilder, Point};

/// The checkmark polyline and its stroke width in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Checkmark {
    pub points: [Point; 3],
    pub thickness: u32,
}

/// Center of the canvas, snapped to a whole pixel.
fn center(size: u32) -> f32 {
    (size / 2) as f32
}

/// Five points of the shield: top-left, top-right, right shoulder,
/// bottom tip, left shoulder. Symmetric about the vertical center line.
pub fn shield_polygon(size: u32) -> [Point; 5] {
    let s = size as f32;
    let cx = center(size);
    let top = s * SHIELD_TOP;
    let bottom = s * SHIELD_BOTTOM;
    let width = s * SHIELD_WIDTH;
    let half = (width / 2.0).floor();
    let shoulder = top + width * SHIELD_SHOULDER;

    [
        Point::from_xy(cx - half, top),
        Point::from_xy(cx + half, top),
        Point::from_xy(cx + half, shoulder),
        Point::from_xy(cx, bottom),
        Point::from_xy(cx - half, shoulder),
    ]
}

pub fn checkmark_stroke(size: u32) -> Checkmark {
    let s = size as f32;
    let cx = center(size);
    let cy = center(size);
    let width = s * CHECK_WIDTH;
    let height = s * CHECK_HEIGHT;

    Checkmark {
        points: [
            Point::from_xy(cx - (width / 2.0).floor(), cy),
            Point::from_xy(cx - (width / 6.0).floor(), cy + (height / 2.0).floor()),
            Point::from_xy(cx + (width / 2.0).floor(), cy - (height / 2.0).floor()),
        ],
        thickness: (size / CHECK_THICKNESS_DIVISOR).max(CHECK_MIN_THICKNESS),
    }
}

/// Closed path through the shield points.
pub fn shield_path(size: u32) -> Option<Path> {
    let [first, rest @ ..] = shield_polygon(size);
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.close();
    pb.finish()
}

/// Open two-segment path through the checkmark points.
pub fn checkmark_path(check: &Checkmark) -> Option<Path> {
    let [a, b, c] = check.points;
    let mut pb = PathBuilder::new();
    pb.move_to(a.x, a.y);
    pb.line_to(b.x, b.y);
    pb.line_to(c.x, c.y);
    pb.finish()
}
