//! Coordinate transforms between image, rendered, content and viewport space.
//!
//! The layout around the editor decides where the image is drawn; this module
//! only maps points and rectangles between the spaces given that placement.
//! One scale factor is used for both axes.

use crate::geometry::{Content, Delta, Image, Point, Rect, Rendered, Size, Viewport};

/// Current placement of the image on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Native size of the image in pixels.
    natural_size: Size,
    /// Where the image is drawn, in content space (after zoom).
    image_rect: Rect<Content>,
    /// Scroll offset of the viewport into the content.
    scroll: Delta,
}

impl ViewTransform {
    /// Build a transform for the given placement.
    ///
    /// Returns `None` if either the natural size or the rendered rect has no
    /// usable width, since the scale factor would be undefined.
    pub fn new(natural_size: Size, image_rect: Rect<Content>, scroll: Delta) -> Option<Self> {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if !usable(natural_size.width) || !usable(image_rect.width) {
            log::warn!(
                "Degenerate image placement: natural={:?}, rendered={:?}",
                natural_size,
                image_rect
            );
            return None;
        }
        Some(Self {
            natural_size,
            image_rect,
            scroll,
        })
    }

    pub fn natural_size(&self) -> Size {
        self.natural_size
    }

    pub fn image_rect(&self) -> Rect<Content> {
        self.image_rect
    }

    pub fn scroll(&self) -> Delta {
        self.scroll
    }

    /// Image pixels per rendered pixel.
    pub fn scale(&self) -> f32 {
        self.natural_size.width / self.image_rect.width
    }

    fn origin(&self) -> Delta {
        Delta::new(self.image_rect.x, self.image_rect.y)
    }

    /// Check if a content point lies on the image (edges included).
    pub fn is_over_image(&self, point: Point<Content>) -> bool {
        self.image_rect.contains(point)
    }

    /// Clamp a content point onto the image.
    pub fn snap_to_image(&self, point: Point<Content>) -> Point<Content> {
        self.image_rect.snap_point(point)
    }

    // ------------------------------------------------------------------------
    // Points
    // ------------------------------------------------------------------------

    pub fn content_to_rendered(&self, point: Point<Content>) -> Point<Rendered> {
        (point - self.origin()).cast()
    }

    pub fn rendered_to_content(&self, point: Point<Rendered>) -> Point<Content> {
        point.cast::<Content>() + self.origin()
    }

    pub fn rendered_to_image(&self, point: Point<Rendered>) -> Point<Image> {
        let s = self.scale();
        Point::new(point.x * s, point.y * s)
    }

    pub fn image_to_rendered(&self, point: Point<Image>) -> Point<Rendered> {
        let s = self.scale();
        Point::new(point.x / s, point.y / s)
    }

    pub fn content_to_image(&self, point: Point<Content>) -> Point<Image> {
        self.rendered_to_image(self.content_to_rendered(point))
    }

    pub fn image_to_content(&self, point: Point<Image>) -> Point<Content> {
        self.rendered_to_content(self.image_to_rendered(point))
    }

    pub fn content_to_viewport(&self, point: Point<Content>) -> Point<Viewport> {
        (point - self.scroll).cast()
    }

    pub fn viewport_to_content(&self, point: Point<Viewport>) -> Point<Content> {
        point.cast::<Content>() + self.scroll
    }

    // ------------------------------------------------------------------------
    // Rectangles
    // ------------------------------------------------------------------------

    pub fn content_rect_to_rendered(&self, rect: Rect<Content>) -> Rect<Rendered> {
        let o = self.origin();
        rect.translate(Delta::new(-o.x, -o.y)).cast()
    }

    pub fn rendered_rect_to_content(&self, rect: Rect<Rendered>) -> Rect<Content> {
        rect.cast::<Content>().translate(self.origin())
    }

    pub fn rendered_rect_to_image(&self, rect: Rect<Rendered>) -> Rect<Image> {
        rect.scale(self.scale()).cast()
    }

    pub fn image_rect_to_rendered(&self, rect: Rect<Image>) -> Rect<Rendered> {
        rect.scale(1.0 / self.scale()).cast()
    }

    pub fn content_rect_to_image(&self, rect: Rect<Content>) -> Rect<Image> {
        self.rendered_rect_to_image(self.content_rect_to_rendered(rect))
    }

    pub fn image_rect_to_content(&self, rect: Rect<Image>) -> Rect<Content> {
        self.rendered_rect_to_content(self.image_rect_to_rendered(rect))
    }
}
