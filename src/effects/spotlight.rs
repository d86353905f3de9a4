use super::{css_num, Point};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpotlightState {
    Idle,
    Lit(Point),
}

/// Soft radial light that follows the pointer across a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spotlight {
    state: SpotlightState,
}

impl Default for Spotlight {
    fn default() -> Self {
        Self {
            state: SpotlightState::Idle,
        }
    }
}

impl Spotlight {
    pub fn state(&self) -> SpotlightState {
        self.state
    }

    /// `local` is relative to the card's top-left corner.
    pub fn pointer_move(&mut self, local: Point) {
        self.state = SpotlightState::Lit(local);
    }

    pub fn pointer_leave(&mut self) {
        self.state = SpotlightState::Idle;
    }

    pub fn style(&self, color: &str) -> String {
        match self.state {
            SpotlightState::Idle => "opacity:0".to_string(),
            SpotlightState::Lit(Point { x, y }) => format!(
                "opacity:1;background:radial-gradient(600px circle at {}px {}px, {color}, transparent 40%)",
                css_num(x),
                css_num(y)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lights_and_dims() {
        let mut spot = Spotlight::default();
        assert_eq!(spot.style("red"), "opacity:0");
        spot.pointer_move(Point::new(12.0, 30.5));
        assert_eq!(
            spot.style("red"),
            "opacity:1;background:radial-gradient(600px circle at 12px 30.5px, red, transparent 40%)"
        );
        spot.pointer_leave();
        assert_eq!(spot.state(), SpotlightState::Idle);
    }
}
