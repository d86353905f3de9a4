/// `omega * duration` for a critically damped spring that has covered 99.9% of
/// the distance when the duration runs out.
const SETTLE_OMEGA_T: f64 = 9.23;
pub const DEFAULT_DURATION: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickerState {
    Idle,
    Delayed { remaining: f64 },
    Running { elapsed: f64 },
    Done,
}

/// Animated counter. Starts the first time it becomes visible and never again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberTicker {
    value: f64,
    direction: Direction,
    delay: f64,
    duration: f64,
    state: TickerState,
}

impl NumberTicker {
    pub fn new(value: f64, direction: Direction, delay: f64) -> Self {
        Self {
            value,
            direction,
            delay: delay.max(0.0),
            duration: DEFAULT_DURATION,
            state: TickerState::Idle,
        }
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    pub fn state(&self) -> TickerState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        matches!(
            self.state,
            TickerState::Delayed { .. } | TickerState::Running { .. }
        )
    }

    fn from(&self) -> f64 {
        match self.direction {
            Direction::Up => 0.0,
            Direction::Down => self.value,
        }
    }

    fn to(&self) -> f64 {
        match self.direction {
            Direction::Up => self.value,
            Direction::Down => 0.0,
        }
    }

    pub fn observe(&mut self, visible: bool) {
        if visible && self.state == TickerState::Idle {
            self.state = TickerState::Delayed {
                remaining: self.delay,
            };
            // a zero delay starts right away
            self.tick(0.0);
        }
    }

    pub fn tick(&mut self, dt: f64) {
        let dt = dt.max(0.0);
        self.state = match self.state {
            TickerState::Delayed { remaining } if dt < remaining => TickerState::Delayed {
                remaining: remaining - dt,
            },
            TickerState::Delayed { remaining } => self.running(dt - remaining),
            TickerState::Running { elapsed } => self.running(elapsed + dt),
            other => other,
        };
    }

    fn running(&self, elapsed: f64) -> TickerState {
        if elapsed >= self.duration {
            TickerState::Done
        } else {
            TickerState::Running { elapsed }
        }
    }

    fn progress(&self) -> f64 {
        match self.state {
            TickerState::Idle | TickerState::Delayed { .. } => 0.0,
            TickerState::Done => 1.0,
            TickerState::Running { elapsed } => {
                let wt = SETTLE_OMEGA_T * elapsed / self.duration;
                1.0 - (1.0 + wt) * (-wt).exp()
            }
        }
    }

    pub fn current(&self) -> f64 {
        let (from, to) = (self.from(), self.to());
        from + (to - from) * self.progress()
    }

    pub fn display(&self) -> i64 {
        self.current().round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waits_for_visibility() {
        let mut ticker = NumberTicker::new(7.0, Direction::Up, 0.0);
        ticker.tick(5.0);
        assert_eq!(ticker.state(), TickerState::Idle);
        assert_eq!(ticker.display(), 0);
        ticker.observe(false);
        assert_eq!(ticker.state(), TickerState::Idle);
    }

    #[test]
    fn test_respects_delay() {
        let mut ticker = NumberTicker::new(100.0, Direction::Up, 0.5);
        ticker.observe(true);
        ticker.tick(0.3);
        assert!(matches!(ticker.state(), TickerState::Delayed { .. }));
        assert_eq!(ticker.display(), 0);
        ticker.tick(0.3);
        assert!(matches!(ticker.state(), TickerState::Running { .. }));
        assert!(ticker.current() > 0.0);
    }

    #[test]
    fn test_lands_on_target_and_stays() {
        let mut ticker = NumberTicker::new(42.0, Direction::Up, 0.0);
        ticker.observe(true);
        let mut last = 0.0;
        for _ in 0..200 {
            ticker.tick(1.0 / 60.0);
            assert!(ticker.current() >= last);
            last = ticker.current();
        }
        assert_eq!(ticker.state(), TickerState::Done);
        assert_eq!(ticker.display(), 42);
        // a second sighting doesn't restart it
        ticker.observe(true);
        assert_eq!(ticker.state(), TickerState::Done);
        assert!(!ticker.is_animating());
    }

    #[test]
    fn test_counts_down() {
        let mut ticker = NumberTicker::new(3.0, Direction::Down, 0.0);
        assert_eq!(ticker.display(), 3);
        ticker.observe(true);
        ticker.tick(DEFAULT_DURATION);
        assert_eq!(ticker.display(), 0);
    }

    #[test]
    fn test_near_target_before_duration() {
        let mut ticker = NumberTicker::new(1000.0, Direction::Up, 0.0);
        ticker.observe(true);
        ticker.tick(DEFAULT_DURATION * 0.99);
        assert!(ticker.is_animating());
        assert!(ticker.display() >= 995);
    }
}
