use super::css_num;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarqueeState {
    Running,
    Paused,
}

/// Horizontal strip of repeated badges scrolling at a constant speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marquee {
    /// Seconds per full loop.
    pub duration: f64,
    /// Gap between items, in rem.
    pub gap: f64,
    pub repeat: usize,
    pub reverse: bool,
    pub pause_on_hover: bool,
    state: MarqueeState,
    elapsed: f64,
}

impl Default for Marquee {
    fn default() -> Self {
        Self {
            duration: 40.0,
            gap: 1.0,
            repeat: 4,
            reverse: false,
            pause_on_hover: false,
            state: MarqueeState::Running,
            elapsed: 0.0,
        }
    }
}

impl Marquee {
    pub fn new(duration: f64, gap: f64) -> Self {
        Self {
            duration,
            gap,
            ..Self::default()
        }
    }

    pub fn state(&self) -> MarqueeState {
        self.state
    }

    pub fn hover(&mut self, hovering: bool) {
        self.state = if hovering && self.pause_on_hover {
            MarqueeState::Paused
        } else {
            MarqueeState::Running
        };
    }

    /// Accumulates running time. Paused strips hold their position.
    pub fn advance(&mut self, dt: f64) {
        if self.state == MarqueeState::Running && dt > 0.0 {
            self.elapsed += dt;
            if self.duration > 0.0 {
                self.elapsed %= self.duration;
            }
        }
    }

    /// Progress through one loop, in `[0, 1)`.
    pub fn offset(&self) -> f64 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        let fraction = (self.elapsed / self.duration).fract();
        if self.reverse && fraction > 0.0 {
            1.0 - fraction
        } else {
            fraction
        }
    }

    /// The items laid out `repeat` times so the loop never shows a seam.
    pub fn track<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let mut out = Vec::with_capacity(items.len() * self.repeat.max(1));
        for _ in 0..self.repeat.max(1) {
            out.extend_from_slice(items);
        }
        out
    }

    /// One loop moves the track by exactly one copy of the items.
    pub fn style(&self) -> String {
        let copy = 100.0 / self.repeat.max(1) as f64;
        format!(
            "gap:{}rem;transform:translateX(-{}%)",
            css_num(self.gap),
            css_num(self.offset() * copy)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_repeats_in_order() {
        let marquee = Marquee {
            repeat: 2,
            ..Marquee::default()
        };
        assert_eq!(marquee.track(&["a", "b"]), vec!["a", "b", "a", "b"]);
        let once = Marquee {
            repeat: 0,
            ..Marquee::default()
        };
        assert_eq!(once.track(&[1, 2, 3]).len(), 3);
    }

    #[test]
    fn test_offset_wraps() {
        let mut marquee = Marquee {
            duration: 10.0,
            ..Marquee::default()
        };
        marquee.advance(2.5);
        assert!((marquee.offset() - 0.25).abs() < 1e-9);
        marquee.advance(10.0);
        assert!((marquee.offset() - 0.25).abs() < 1e-9);
        assert!(marquee.offset() < 1.0);
    }

    #[test]
    fn test_reverse_runs_backwards() {
        let mut marquee = Marquee {
            duration: 10.0,
            reverse: true,
            ..Marquee::default()
        };
        assert_eq!(marquee.offset(), 0.0);
        marquee.advance(2.5);
        assert!((marquee.offset() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_pause_on_hover() {
        let mut marquee = Marquee {
            duration: 10.0,
            pause_on_hover: true,
            ..Marquee::default()
        };
        marquee.advance(1.0);
        marquee.hover(true);
        assert_eq!(marquee.state(), MarqueeState::Paused);
        marquee.advance(3.0);
        assert!((marquee.offset() - 0.1).abs() < 1e-9);
        marquee.hover(false);
        assert_eq!(marquee.state(), MarqueeState::Running);
    }

    #[test]
    fn test_hover_ignored_without_pause() {
        let mut marquee = Marquee::default();
        marquee.hover(true);
        assert_eq!(marquee.state(), MarqueeState::Running);
    }

    #[test]
    fn test_style() {
        let mut marquee = Marquee::new(10.0, 0.5);
        assert_eq!(marquee.style(), "gap:0.5rem;transform:translateX(-0%)");
        marquee.advance(5.0);
        assert_eq!(marquee.style(), "gap:0.5rem;transform:translateX(-12.5%)");
    }
}
