//! Circle row layout geometry.

use crate::color::Rgba;
use kurbo::{Circle, Point, Size};

/// Horizontal cell width reserved per circle; the surface width is
/// `count * CELL_WIDTH`.
pub const CELL_WIDTH: f64 = 40.0;
/// Horizontal distance between adjacent circle centers. Smaller than the
/// circle diameter, so neighboring circles overlap.
pub const CIRCLE_SPACING: f64 = 30.0;
/// Radius of every circle.
pub const CIRCLE_RADIUS: f64 = 20.0;
/// Fixed surface height.
pub const STACK_HEIGHT: f64 = 60.0;
/// Center x of the first circle.
pub const FIRST_CENTER_X: f64 = 30.0;

/// The computed visual output of a circle stack: a sized surface and a row
/// of identically filled circles, in left-to-right index order.
#[derive(Debug, Clone, PartialEq)]
pub struct StackLayout {
    /// Surface size in layout units.
    pub size: Size,
    /// Fill shared by every circle.
    pub fill: Rgba,
    /// Circle geometry, index order.
    pub circles: Vec<Circle>,
}

impl StackLayout {
    /// Compute the layout for `count` circles with the given fill.
    ///
    /// Deterministic in its inputs: equal parameters always produce an equal
    /// layout.
    pub fn compute(count: u32, fill: Rgba) -> Self {
        let circles = (0..count)
            .map(|i| {
                let cx = FIRST_CENTER_X + f64::from(i) * CIRCLE_SPACING;
                Circle::new(Point::new(cx, STACK_HEIGHT / 2.0), CIRCLE_RADIUS)
            })
            .collect();
        Self {
            size: Size::new(f64::from(count) * CELL_WIDTH, STACK_HEIGHT),
            fill,
            circles,
        }
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }
}
