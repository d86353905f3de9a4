/// Largest integration step; longer frames are split so stiff springs stay stable.
const MAX_STEP: f64 = 1.0 / 240.0;
const REST_DELTA: f64 = 0.01;
const REST_SPEED: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }
}

/// A damped spring chasing a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(value: f64, config: SpringConfig) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Advances the simulation by `dt` seconds and returns the new value.
    pub fn step(&mut self, dt: f64) -> f64 {
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let force = -stiffness * (self.value - self.target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_settles_on_target() {
        let mut spring = Spring::new(0.0, SpringConfig::new(300.0, 20.0));
        spring.set_target(40.0);
        for _ in 0..120 {
            spring.step(1.0 / 60.0);
        }
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 40.0);
    }

    #[test]
    fn test_spring_moves_toward_target() {
        let mut spring = Spring::new(0.0, SpringConfig::new(300.0, 20.0));
        spring.set_target(10.0);
        let first = spring.step(1.0 / 60.0);
        assert!(first > 0.0 && first < 10.0);
    }

    #[test]
    fn test_zero_step_is_noop() {
        let mut spring = Spring::new(5.0, SpringConfig::new(100.0, 10.0));
        spring.set_target(8.0);
        assert_eq!(spring.step(0.0), 5.0);
        assert_eq!(spring.step(-1.0), 5.0);
    }
}
