use super::css_num;

/// Degrees of rotation per pixel dragged.
const DRAG_FACTOR: f64 = 0.2;
/// Degrees of extra spin per px/s of release velocity.
const INERTIA_FACTOR: f64 = 0.5;
/// Seconds without movement after which a release carries no spin.
const RELEASE_WINDOW: f64 = 0.08;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CylinderState {
    Idle,
    Dragging { velocity: f64 },
}

/// Cards arranged around a vertical cylinder that spins under drag and snaps
/// to the nearest card on release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    count: usize,
    radius: f64,
    rotation: f64,
    state: CylinderState,
}

impl Cylinder {
    pub fn new(count: usize, radius: f64) -> Self {
        Self {
            count,
            radius,
            rotation: 0.0,
            state: CylinderState::Idle,
        }
    }

    pub fn state(&self) -> CylinderState {
        self.state
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn angle_per_item(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            360.0 / self.count as f64
        }
    }

    pub fn drag_start(&mut self) {
        self.state = CylinderState::Dragging { velocity: 0.0 };
    }

    /// Pointer moved `delta_x` px over `dt` seconds while held.
    pub fn drag(&mut self, delta_x: f64, dt: f64) {
        if let CylinderState::Dragging { velocity } = self.state {
            self.rotation += delta_x * DRAG_FACTOR;
            let velocity = if dt > 0.0 { delta_x / dt } else { velocity };
            self.state = CylinderState::Dragging { velocity };
        }
    }

    /// Lets go `idle` seconds after the last move: carries a recent flick
    /// forward and snaps to the closest card. A held pointer only snaps.
    pub fn release(&mut self, idle: f64) {
        if let CylinderState::Dragging { velocity } = self.state {
            let velocity = if idle > RELEASE_WINDOW { 0.0 } else { velocity };
            self.rotation = self.snap(self.rotation + velocity * INERTIA_FACTOR);
        }
        self.state = CylinderState::Idle;
    }

    fn snap(&self, rotation: f64) -> f64 {
        let step = self.angle_per_item();
        if step == 0.0 {
            rotation
        } else {
            (rotation / step).round() * step
        }
    }

    /// Spins so that the next (`1`) or previous (`-1`) card faces front.
    pub fn step_by(&mut self, items: i32) {
        self.rotation = self.snap(self.rotation) - items as f64 * self.angle_per_item();
    }

    /// Index of the card currently facing the viewer.
    pub fn front_index(&self) -> Option<usize> {
        let step = self.angle_per_item();
        if step == 0.0 {
            return None;
        }
        let slot = (-self.rotation / step).round() as i64;
        Some(slot.rem_euclid(self.count as i64) as usize)
    }

    pub fn item_style(&self, index: usize) -> String {
        format!(
            "transform:rotateY({}deg) translateZ({}px)",
            css_num(index as f64 * self.angle_per_item()),
            css_num(self.radius)
        )
    }

    pub fn style(&self) -> String {
        let transition = match self.state {
            CylinderState::Dragging { .. } => "none",
            CylinderState::Idle => "transform 0.8s cubic-bezier(0.16,1,0.3,1)",
        };
        format!(
            "transform:rotateY({}deg);transform-style:preserve-3d;transition:{transition}",
            css_num(self.rotation)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angles() {
        let cyl = Cylinder::new(6, 1200.0);
        assert_eq!(cyl.angle_per_item(), 60.0);
        assert_eq!(cyl.front_index(), Some(0));
        assert_eq!(
            cyl.item_style(2),
            "transform:rotateY(120deg) translateZ(1200px)"
        );
        assert_eq!(Cylinder::new(0, 100.0).front_index(), None);
    }

    #[test]
    fn test_drag_and_snap() {
        let mut cyl = Cylinder::new(4, 500.0);
        // drags are ignored until pressed
        cyl.drag(100.0, 0.1);
        assert_eq!(cyl.rotation(), 0.0);

        cyl.drag_start();
        cyl.drag(-200.0, 0.0);
        assert_eq!(cyl.rotation(), -40.0);
        assert!(cyl.style().contains("transition:none"));
        cyl.release(0.0);
        assert_eq!(cyl.state(), CylinderState::Idle);
        assert_eq!(cyl.rotation(), 0.0);

        cyl.drag_start();
        cyl.drag(-300.0, 0.0);
        cyl.release(0.0);
        assert_eq!(cyl.rotation(), -90.0);
        assert_eq!(cyl.front_index(), Some(1));
    }

    #[test]
    fn test_release_inertia() {
        let mut cyl = Cylinder::new(4, 500.0);
        cyl.drag_start();
        // 10px in 50ms is 200px/s, which adds 100 degrees before snapping
        cyl.drag(10.0, 0.05);
        cyl.release(0.0);
        assert_eq!(cyl.rotation(), 90.0);
        assert_eq!(cyl.front_index(), Some(3));
    }

    #[test]
    fn test_release_after_hold_only_snaps() {
        let mut cyl = Cylinder::new(7, 460.0);
        cyl.drag_start();
        cyl.drag(30.0, 0.016);
        // pointer held still for half a second before letting go
        cyl.release(0.5);
        assert_eq!(cyl.state(), CylinderState::Idle);
        assert_eq!(cyl.rotation(), 0.0);
        assert_eq!(cyl.front_index(), Some(0));
    }

    #[test]
    fn test_release_inside_window_keeps_flick() {
        let mut cyl = Cylinder::new(4, 500.0);
        cyl.drag_start();
        cyl.drag(10.0, 0.05);
        cyl.release(0.03);
        assert_eq!(cyl.rotation(), 90.0);
    }

    #[test]
    fn test_step_wraps() {
        let mut cyl = Cylinder::new(3, 500.0);
        cyl.step_by(-1);
        assert_eq!(cyl.front_index(), Some(2));
        cyl.step_by(1);
        cyl.step_by(1);
        assert_eq!(cyl.front_index(), Some(1));
    }
}
