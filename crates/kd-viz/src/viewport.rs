//! Mapping between the tree domain and screen coordinates.

use kd_tree::{Point, Rect};
use nalgebra::Point2;

/// A square screen area showing the tree domain.
///
/// Screen y grows downwards, so the domain's `ymax` maps to the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    domain: Rect,
    origin: Point2<f32>,
    size: f32,
}

impl Viewport {
    /// Creates a viewport drawing `domain` into the square with top-left
    /// corner `origin` and side `size` pixels.
    pub fn new(domain: Rect, origin: Point2<f32>, size: f32) -> Self {
        Self {
            domain,
            origin,
            size,
        }
    }

    /// Centers the largest square that fits a `width` × `height` screen,
    /// keeping `margin` pixels free on every side.
    pub fn fit(domain: Rect, width: f32, height: f32, margin: f32) -> Self {
        let size = (width.min(height) - 2.0 * margin).max(1.0);
        let origin = Point2::new((width - size) / 2.0, (height - size) / 2.0);
        Self::new(domain, origin, size)
    }

    #[inline]
    pub fn domain(&self) -> &Rect {
        &self.domain
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Maps a domain point to screen pixels.
    pub fn to_screen(&self, point: Point) -> Point2<f32> {
        let u = (point.x() - self.domain.xmin()) / span(self.domain.width());
        let v = (self.domain.ymax() - point.y()) / span(self.domain.height());
        Point2::new(
            self.origin.x + u as f32 * self.size,
            self.origin.y + v as f32 * self.size,
        )
    }

    /// Maps screen pixels back to a domain point.
    pub fn to_domain(&self, screen: Point2<f32>) -> Point {
        let u = f64::from((screen.x - self.origin.x) / self.size);
        let v = f64::from((screen.y - self.origin.y) / self.size);
        Point::new(
            self.domain.xmin() + u * self.domain.width(),
            self.domain.ymax() - v * self.domain.height(),
        )
    }

    /// Maps a domain rectangle to `(x, y, width, height)` in screen pixels,
    /// with `(x, y)` the top-left corner.
    pub fn rect_to_screen(&self, rect: &Rect) -> (f32, f32, f32, f32) {
        let top_left = self.to_screen(Point::new(rect.xmin(), rect.ymax()));
        let bottom_right = self.to_screen(Point::new(rect.xmax(), rect.ymin()));
        (
            top_left.x,
            top_left.y,
            bottom_right.x - top_left.x,
            bottom_right.y - top_left.y,
        )
    }
}

/// Guards against zero-extent domains.
#[inline]
fn span(extent: f64) -> f64 {
    if extent.abs() < f64::EPSILON {
        f64::EPSILON
    } else {
        extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn fit_centers_square() {
        let viewport = Viewport::fit(Rect::unit(), 800.0, 600.0, 20.0);

        assert_eq!(viewport.size(), 560.0);
        assert_eq!(viewport.to_screen(Point::new(0.0, 1.0)), Point2::new(120.0, 20.0));
        assert_eq!(viewport.to_screen(Point::new(1.0, 0.0)), Point2::new(680.0, 580.0));
    }

    #[test]
    fn y_axis_is_flipped() {
        let viewport = Viewport::new(Rect::unit(), Point2::new(0.0, 0.0), 100.0);

        let low = viewport.to_screen(Point::new(0.5, 0.1));
        let high = viewport.to_screen(Point::new(0.5, 0.9));
        assert!(high.y < low.y);
    }

    #[test]
    fn round_trips_through_screen() {
        let viewport = Viewport::new(
            Rect::new(-2.0, -1.0, 2.0, 3.0),
            Point2::new(10.0, 30.0),
            400.0,
        );
        let point = Point::new(0.5, 2.0);

        let back = viewport.to_domain(viewport.to_screen(point));
        assert!((back.x() - point.x()).abs() < 1e-4);
        assert!((back.y() - point.y()).abs() < 1e-4);
    }

    #[test]
    fn rect_to_screen_has_positive_extent() {
        let viewport = Viewport::new(Rect::unit(), Point2::new(0.0, 0.0), 200.0);
        let (x, y, w, h) = viewport.rect_to_screen(&Rect::new(0.25, 0.5, 0.75, 1.0));

        assert!(close(x, 50.0));
        assert!(close(y, 0.0));
        assert!(close(w, 100.0));
        assert!(close(h, 100.0));
    }

    #[test]
    fn degenerate_domain_does_not_divide_by_zero() {
        let viewport = Viewport::new(
            Rect::new(0.5, 0.5, 0.5, 0.5),
            Point2::new(0.0, 0.0),
            100.0,
        );
        let screen = viewport.to_screen(Point::new(0.5, 0.5));

        assert!(screen.x.is_finite());
        assert!(screen.y.is_finite());
    }
}
