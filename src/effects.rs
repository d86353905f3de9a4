//! Framework independent state machines behind the decorative widgets.
//!
//! Every widget owns its state outright; nothing here is shared between widgets.
//! Components in `app::motion` feed them pointer, visibility and frame events and
//! turn the result into inline styles.

pub mod cylinder;
pub mod magnetic;
pub mod marquee;
pub mod pullup;
pub mod reveal;
pub mod spotlight;
pub mod spring;
pub mod ticker;
pub mod tilt;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box of an element, in the same coordinate space as the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// A box anchored at the origin, for pointer positions already relative to the element.
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Formats a float for inline CSS without trailing noise.
pub(crate) fn css_num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_center() {
        let r = Rect {
            left: 10.0,
            top: 20.0,
            width: 100.0,
            height: 50.0,
        };
        assert_eq!(r.center(), Point::new(60.0, 45.0));
        assert!(!r.is_empty());
        assert!(Rect::sized(0.0, 10.0).is_empty());
    }

    #[test]
    fn test_css_num() {
        assert_eq!(css_num(0.0), "0");
        assert_eq!(css_num(-0.0001), "0");
        assert_eq!(css_num(1.5), "1.5");
        assert_eq!(css_num(2.0), "2");
        assert_eq!(css_num(1.23456), "1.235");
    }
}
