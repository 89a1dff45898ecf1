use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use super::{Delta, Direction, Point, RectAnchor, Size, Space};

/// An axis-aligned rectangle in the coordinate space `S`.
///
/// Width and height may be negative while a creation drag is being previewed;
/// [`Rect::normalized`] folds them back before anything is persisted.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Rect<S: Space> {
    /// Top-left corner X coordinate
    pub x: f32,
    /// Top-left corner Y coordinate
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(skip)]
    space: PhantomData<S>,
}

impl<S: Space> Rect<S> {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            space: PhantomData,
        }
    }

    /// Bounding box of two corner points (min/max on each axis).
    pub fn from_corners(p1: Point<S>, p2: Point<S>) -> Self {
        let x = p1.x.min(p2.x);
        let y = p1.y.min(p2.y);
        Self::new(x, y, p1.x.max(p2.x) - x, p1.y.max(p2.y) - y)
    }

    /// Rectangle of `size` centred on `center`.
    pub fn with_center_and_size(center: Point<S>, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    pub(crate) fn cast<T: Space>(self) -> Rect<T> {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn position(&self) -> Point<S> {
        Point::new(self.x, self.y)
    }

    pub fn bottom_right(&self) -> Point<S> {
        Point::new(self.x + self.width, self.y + self.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// True when either side is zero (or not a number).
    pub fn is_degenerate(&self) -> bool {
        !(self.width.abs() > 0.0 && self.height.abs() > 0.0)
    }

    /// Check if a point is inside the rectangle, edges included.
    pub fn contains(&self, point: Point<S>) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn translate(&self, delta: Delta) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }

    /// Grow by `delta` on every side; a negative delta shrinks.
    pub fn expand(&self, delta: Delta) -> Self {
        Self::new(
            self.x - delta.x,
            self.y - delta.y,
            self.width + 2.0 * delta.x,
            self.height + 2.0 * delta.y,
        )
    }

    /// Multiply position and size by `factor`, staying in the same space.
    pub fn scale(&self, factor: f32) -> Self {
        Self::new(
            self.x * factor,
            self.y * factor,
            self.width * factor,
            self.height * factor,
        )
    }

    /// Fold negative width/height into a positive rectangle covering the same area.
    pub fn normalized(&self) -> Self {
        Self::from_corners(self.position(), self.bottom_right())
    }

    /// Clamp a point into this rectangle.
    pub fn snap_point(&self, point: Point<S>) -> Point<S> {
        let br = self.bottom_right();
        Point::new(
            point.x.max(self.x).min(br.x),
            point.y.max(self.y).min(br.y),
        )
    }

    /// The eight perimeter handles, corners and edge midpoints, clockwise from top-left.
    pub fn anchors(&self) -> [RectAnchor<S>; 8] {
        let (x, y, w, h) = (self.x, self.y, self.width, self.height);
        let at = |direction, px, py| RectAnchor::new(direction, Point::new(px, py));
        [
            at(Direction::TopLeft, x, y),
            at(Direction::Top, x + 0.5 * w, y),
            at(Direction::TopRight, x + w, y),
            at(Direction::Right, x + w, y + 0.5 * h),
            at(Direction::BottomRight, x + w, y + h),
            at(Direction::Bottom, x + 0.5 * w, y + h),
            at(Direction::BottomLeft, x, y + h),
            at(Direction::Left, x, y + 0.5 * h),
        ]
    }

    /// Move the edges controlled by `direction` by `delta`.
    ///
    /// Corner anchors move two edges, edge midpoints one. Components of the
    /// delta along an edge the anchor does not control are ignored. The
    /// result is normalized, so dragging an edge past its opposite flips
    /// the rectangle instead of producing a negative size.
    pub fn resize(&self, direction: Direction, delta: Delta) -> Self {
        let mut rect = *self;
        if direction.moves_left_edge() {
            rect.x += delta.x;
            rect.width -= delta.x;
        } else if direction.moves_right_edge() {
            rect.width += delta.x;
        }
        if direction.moves_top_edge() {
            rect.y += delta.y;
            rect.height -= delta.y;
        } else if direction.moves_bottom_edge() {
            rect.height += delta.y;
        }
        rect.normalized()
    }

    /// Convert into an untagged UI rectangle for drawing.
    pub fn to_ui(self) -> labelkit_ui::Rectangle {
        labelkit_ui::Rectangle::new(self.x, self.y, self.width, self.height)
    }

    /// Convert for drawing with both corners moved onto pixel centres, so a
    /// one-pixel stroke lands on a single row of pixels instead of two.
    pub fn to_ui_between_pixels(self) -> labelkit_ui::Rectangle {
        let between = |v: f32| v.floor() + 0.5;
        let (x1, y1) = (between(self.x), between(self.y));
        let (x2, y2) = (between(self.x + self.width), between(self.y + self.height));
        labelkit_ui::Rectangle::new(x1, y1, x2 - x1, y2 - y1)
    }
}

impl<S: Space> fmt::Debug for Rect<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect<{}>({}, {}, {}x{})",
            S::NAME,
            self.x,
            self.y,
            self.width,
            self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Content, Rendered};

    type R = Rect<Rendered>;

    #[test]
    fn test_from_corners_normalizes() {
        let a = R::from_corners(Point::new(10.0, 20.0), Point::new(50.0, 80.0));
        let b = R::from_corners(Point::new(50.0, 80.0), Point::new(10.0, 20.0));
        assert_eq!(a, R::new(10.0, 20.0, 40.0, 60.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_contains_includes_edges() {
        let rect = R::new(10.0, 10.0, 100.0, 100.0);
        assert!(rect.contains(Point::new(50.0, 50.0)));
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(110.0, 110.0)));
        assert!(!rect.contains(Point::new(5.0, 50.0)));
    }

    #[test]
    fn test_expand_and_shrink() {
        let rect = R::new(10.0, 10.0, 20.0, 20.0);
        assert_eq!(
            rect.expand(Delta::new(2.0, 3.0)),
            R::new(8.0, 7.0, 24.0, 26.0)
        );
        assert_eq!(
            rect.expand(Delta::new(-2.0, -2.0)),
            R::new(12.0, 12.0, 16.0, 16.0)
        );
    }

    #[test]
    fn test_snap_point_clamps() {
        let rect: Rect<Content> = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(
            rect.snap_point(Point::new(-5.0, 20.0)),
            Point::new(0.0, 20.0)
        );
        assert_eq!(
            rect.snap_point(Point::new(150.0, 70.0)),
            Point::new(100.0, 50.0)
        );
        assert_eq!(
            rect.snap_point(Point::new(30.0, 30.0)),
            Point::new(30.0, 30.0)
        );
    }

    #[test]
    fn test_anchor_positions() {
        let rect = R::new(0.0, 0.0, 100.0, 50.0);
        let anchors = rect.anchors();
        assert_eq!(anchors[0].direction, Direction::TopLeft);
        assert_eq!(anchors[1].position, Point::new(50.0, 0.0));
        assert_eq!(anchors[3].position, Point::new(100.0, 25.0));
        assert_eq!(anchors[4].position, Point::new(100.0, 50.0));
        assert_eq!(anchors[7].position, Point::new(0.0, 25.0));
    }

    #[test]
    fn test_resize_right_only_changes_width() {
        let rect = R::new(10.0, 10.0, 40.0, 30.0);
        let resized = rect.resize(Direction::Right, Delta::new(15.0, 99.0));
        assert_eq!(resized, R::new(10.0, 10.0, 55.0, 30.0));
    }

    #[test]
    fn test_resize_top_ignores_x_component() {
        let rect = R::new(10.0, 10.0, 40.0, 30.0);
        let resized = rect.resize(Direction::Top, Delta::new(25.0, -5.0));
        assert_eq!(resized, R::new(10.0, 5.0, 40.0, 35.0));
    }

    #[test]
    fn test_resize_top_left_moves_two_edges() {
        let rect = R::new(10.0, 10.0, 40.0, 30.0);
        let resized = rect.resize(Direction::TopLeft, Delta::new(5.0, 5.0));
        assert_eq!(resized, R::new(15.0, 15.0, 35.0, 25.0));
    }

    #[test]
    fn test_resize_past_opposite_edge_flips() {
        let rect = R::new(10.0, 10.0, 40.0, 30.0);
        let resized = rect.resize(Direction::Left, Delta::new(50.0, 0.0));
        assert_eq!(resized, R::new(50.0, 10.0, 10.0, 30.0));
    }

    #[test]
    fn test_between_pixels() {
        let rect = R::new(10.2, 10.7, 20.0, 20.0);
        let ui = rect.to_ui_between_pixels();
        assert_eq!(ui.x, 10.5);
        assert_eq!(ui.y, 10.5);
        assert_eq!(ui.width, 20.0);
        assert_eq!(ui.height, 20.0);
    }

    #[test]
    fn test_degenerate() {
        assert!(R::new(0.0, 0.0, 0.0, 10.0).is_degenerate());
        assert!(R::new(0.0, 0.0, 10.0, f32::NAN).is_degenerate());
        assert!(!R::new(0.0, 0.0, -3.0, 10.0).is_degenerate());
    }
}
