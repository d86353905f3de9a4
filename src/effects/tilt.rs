use super::{css_num, Point, Rect};

pub const DEFAULT_TILT_DEGREES: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TiltState {
    Neutral,
    Tracking { rotate_x: f64, rotate_y: f64 },
}

/// Pointer-tracked 3D tilt of a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    amount: f64,
    state: TiltState,
}

impl Default for Tilt {
    fn default() -> Self {
        Self::new(DEFAULT_TILT_DEGREES)
    }
}

impl Tilt {
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            state: TiltState::Neutral,
        }
    }

    pub fn state(&self) -> TiltState {
        self.state
    }

    pub fn pointer_move(&mut self, bounds: Rect, pointer: Point) {
        if bounds.is_empty() {
            self.state = TiltState::Neutral;
            return;
        }
        let center = bounds.center();
        let dx = pointer.x - center.x;
        let dy = pointer.y - center.y;
        self.state = TiltState::Tracking {
            rotate_x: -dy / (bounds.height / 2.0) * self.amount,
            rotate_y: dx / (bounds.width / 2.0) * self.amount,
        };
    }

    pub fn pointer_leave(&mut self) {
        self.state = TiltState::Neutral;
    }

    /// `(rotate_x, rotate_y)` in degrees.
    pub fn rotation(&self) -> (f64, f64) {
        match self.state {
            TiltState::Neutral => (0.0, 0.0),
            TiltState::Tracking { rotate_x, rotate_y } => (rotate_x, rotate_y),
        }
    }

    pub fn style(&self) -> String {
        let (x, y) = self.rotation();
        format!(
            "transform:perspective(1000px) rotateX({}deg) rotateY({}deg);transform-style:preserve-3d;transition:transform 0.15s ease-out",
            css_num(x),
            css_num(y)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_flat() {
        let mut tilt = Tilt::default();
        tilt.pointer_move(Rect::sized(200.0, 100.0), Point::new(100.0, 50.0));
        assert!(matches!(tilt.state(), TiltState::Tracking { .. }));
        let (x, y) = tilt.rotation();
        assert_eq!(x, 0.0);
        assert_eq!(y, 0.0);
    }

    #[test]
    fn test_corners_hit_full_amount() {
        let mut tilt = Tilt::new(10.0);
        let bounds = Rect::sized(200.0, 100.0);
        tilt.pointer_move(bounds, Point::new(200.0, 0.0));
        assert_eq!(tilt.rotation(), (10.0, 10.0));
        tilt.pointer_move(bounds, Point::new(0.0, 100.0));
        assert_eq!(tilt.rotation(), (-10.0, -10.0));
    }

    #[test]
    fn test_leave_resets() {
        let mut tilt = Tilt::default();
        tilt.pointer_move(Rect::sized(100.0, 100.0), Point::new(0.0, 0.0));
        tilt.pointer_leave();
        assert_eq!(tilt.state(), TiltState::Neutral);
        assert!(tilt.style().contains("rotateX(0deg) rotateY(0deg)"));
    }

    #[test]
    fn test_empty_bounds_stay_neutral() {
        let mut tilt = Tilt::default();
        tilt.pointer_move(Rect::sized(0.0, 0.0), Point::new(5.0, 5.0));
        assert_eq!(tilt.state(), TiltState::Neutral);
    }
}
