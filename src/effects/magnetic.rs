use super::spring::{Spring, SpringConfig};
use super::{css_num, Point, Rect};

pub const DEFAULT_STRENGTH: f64 = 0.3;
const SPRING: SpringConfig = SpringConfig::new(300.0, 20.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagneticState {
    Resting,
    Attracted,
}

/// A button that leans toward the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnetic {
    strength: f64,
    state: MagneticState,
    x: Spring,
    y: Spring,
}

impl Default for Magnetic {
    fn default() -> Self {
        Self::new(DEFAULT_STRENGTH)
    }
}

impl Magnetic {
    pub fn new(strength: f64) -> Self {
        Self {
            strength,
            state: MagneticState::Resting,
            x: Spring::new(0.0, SPRING),
            y: Spring::new(0.0, SPRING),
        }
    }

    pub fn state(&self) -> MagneticState {
        self.state
    }

    pub fn pointer_move(&mut self, bounds: Rect, pointer: Point) {
        let center = bounds.center();
        self.state = MagneticState::Attracted;
        self.x.set_target((pointer.x - center.x) * self.strength);
        self.y.set_target((pointer.y - center.y) * self.strength);
    }

    pub fn pointer_leave(&mut self) {
        self.state = MagneticState::Resting;
        self.x.set_target(0.0);
        self.y.set_target(0.0);
    }

    /// Where the springs are heading.
    pub fn target(&self) -> Point {
        Point::new(self.x.target(), self.y.target())
    }

    pub fn offset(&self) -> Point {
        Point::new(self.x.value(), self.y.value())
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }

    pub fn tick(&mut self, dt: f64) -> Point {
        self.x.step(dt);
        self.y.step(dt);
        self.offset()
    }

    pub fn style(&self) -> String {
        let Point { x, y } = self.offset();
        let scale = match self.state {
            MagneticState::Attracted => "1.05",
            MagneticState::Resting => "1",
        };
        format!(
            "transform:translate({}px,{}px) scale({scale})",
            css_num(x),
            css_num(y)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulls_toward_pointer() {
        let mut magnetic = Magnetic::new(0.2);
        magnetic.pointer_move(Rect::sized(100.0, 40.0), Point::new(100.0, 0.0));
        assert_eq!(magnetic.state(), MagneticState::Attracted);
        assert_eq!(magnetic.target(), Point::new(10.0, -4.0));
        for _ in 0..120 {
            magnetic.tick(1.0 / 60.0);
        }
        assert_eq!(magnetic.offset(), Point::new(10.0, -4.0));
        assert!(magnetic.style().contains("scale(1.05)"));
    }

    #[test]
    fn test_leave_returns_to_rest() {
        let mut magnetic = Magnetic::default();
        magnetic.pointer_move(Rect::sized(100.0, 100.0), Point::new(0.0, 0.0));
        magnetic.tick(0.1);
        magnetic.pointer_leave();
        assert_eq!(magnetic.target(), Point::ORIGIN);
        for _ in 0..120 {
            magnetic.tick(1.0 / 60.0);
        }
        assert!(magnetic.is_settled());
        assert_eq!(magnetic.offset(), Point::ORIGIN);
        assert_eq!(magnetic.style(), "transform:translate(0px,0px) scale(1)");
    }
}
