//! Damped spring used by the cursor follower.

use crate::types::PointerPosition;

/// Fixed integration step, in seconds.
const SUBSTEP: f64 = 1.0 / 240.0;
/// Longest frame gap the follower integrates; tab switches jump instead.
const MAX_FRAME: f64 = 0.25;

/// Spring constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Restoring force per pixel of displacement
    pub stiffness: f64,
    /// Resisting force per pixel/second of velocity
    pub damping: f64,
    /// Inertia
    pub mass: f64,
    /// Distance and speed under which the spring counts as at rest
    pub rest_delta: f64,
}

impl SpringConfig {
    /// Cursor follower: stiff and quick to settle.
    pub const CURSOR: SpringConfig = SpringConfig {
        stiffness: 500.0,
        damping: 28.0,
        mass: 1.0,
        rest_delta: 0.01,
    };

    /// Damping ratio; 1.0 is critical.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::CURSOR
    }
}

/// A point chasing a target through a spring in two dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct SpringFollower {
    config: SpringConfig,
    position: PointerPosition,
    velocity: PointerPosition,
}

impl SpringFollower {
    /// Follower at rest at `start`.
    pub fn new(config: SpringConfig, start: PointerPosition) -> Self {
        Self {
            config,
            position: start,
            velocity: PointerPosition::default(),
        }
    }

    /// Current drawn position.
    pub fn position(&self) -> PointerPosition {
        self.position
    }

    /// Current velocity, px/s.
    pub fn velocity(&self) -> PointerPosition {
        self.velocity
    }

    /// Jump to `target` and stop.
    pub fn snap_to(&mut self, target: PointerPosition) {
        self.position = target;
        self.velocity = PointerPosition::default();
    }

    /// Advance by `dt` seconds toward `target`.
    pub fn step(&mut self, target: PointerPosition, dt: f64) -> PointerPosition {
        if !dt.is_finite() || dt <= 0.0 {
            return self.position;
        }
        if dt > MAX_FRAME {
            self.snap_to(target);
            return self.position;
        }

        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP);
            self.integrate(target, h);
            remaining -= h;
        }

        if self.is_settled(target) {
            self.snap_to(target);
        }
        self.position
    }

    /// Whether the follower is close enough and slow enough to stop.
    pub fn is_settled(&self, target: PointerPosition) -> bool {
        let eps = self.config.rest_delta;
        (self.position.x - target.x).abs() < eps
            && (self.position.y - target.y).abs() < eps
            && self.velocity.x.abs() < eps
            && self.velocity.y.abs() < eps
    }

    // Semi-implicit Euler: velocity first, then position with the new velocity.
    fn integrate(&mut self, target: PointerPosition, h: f64) {
        let SpringConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.config;
        let ax = (-stiffness * (self.position.x - target.x) - damping * self.velocity.x) / mass;
        let ay = (-stiffness * (self.position.y - target.y) - damping * self.velocity.y) / mass;
        self.velocity.x += ax * h;
        self.velocity.y += ay * h;
        self.position.x += self.velocity.x * h;
        self.position.y += self.velocity.y * h;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(follower: &mut SpringFollower, target: PointerPosition, seconds: f64) {
        let frame = 1.0 / 60.0;
        let mut t = 0.0;
        while t < seconds {
            follower.step(target, frame);
            t += frame;
        }
    }

    #[test]
    fn converges_on_target() {
        let mut f = SpringFollower::new(SpringConfig::CURSOR, PointerPosition::default());
        let target = PointerPosition::new(300.0, -120.0);
        run(&mut f, target, 2.0);
        assert!(f.is_settled(target));
        assert_eq!(f.position(), target);
    }

    #[test]
    fn moves_toward_target_on_first_frame() {
        let mut f = SpringFollower::new(SpringConfig::CURSOR, PointerPosition::default());
        let p = f.step(PointerPosition::new(100.0, 0.0), 1.0 / 60.0);
        assert!(p.x > 0.0 && p.x < 100.0);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn cursor_spring_is_underdamped_but_close() {
        let ratio = SpringConfig::CURSOR.damping_ratio();
        assert!(ratio > 0.6 && ratio < 0.7, "ratio={ratio}");
    }

    #[test]
    fn overshoot_stays_small() {
        let mut f = SpringFollower::new(SpringConfig::CURSOR, PointerPosition::default());
        let target = PointerPosition::new(100.0, 0.0);
        let mut peak: f64 = 0.0;
        for _ in 0..120 {
            peak = peak.max(f.step(target, 1.0 / 60.0).x);
        }
        assert!(peak > 100.0 && peak < 112.0, "peak={peak}");
    }

    #[test]
    fn long_gap_snaps() {
        let mut f = SpringFollower::new(SpringConfig::CURSOR, PointerPosition::default());
        let target = PointerPosition::new(10.0, 10.0);
        assert_eq!(f.step(target, 3.0), target);
        assert_eq!(f.velocity(), PointerPosition::default());
    }

    #[test]
    fn zero_or_bad_dt_is_a_no_op() {
        let mut f = SpringFollower::new(SpringConfig::CURSOR, PointerPosition::new(1.0, 2.0));
        let target = PointerPosition::new(50.0, 50.0);
        assert_eq!(f.step(target, 0.0), PointerPosition::new(1.0, 2.0));
        assert_eq!(f.step(target, f64::NAN), PointerPosition::new(1.0, 2.0));
        assert_eq!(f.step(target, -1.0), PointerPosition::new(1.0, 2.0));
    }
}
