//! Skill ring placement.
//!
//! Items sit at equal angular steps on a circle. Angles are in degrees with
//! 0° pointing right and growing clockwise in screen space (y grows down).

use super::timeline::{Easing, LoopAnimation};

/// Ring radius in pixels.
pub const RING_RADIUS: f64 = 140.0;
/// Amplitude of the synthetic depth value.
pub const DEPTH_RADIUS: f64 = 50.0;
/// Seconds between consecutive badges' animation starts.
pub const PHASE_STEP: f64 = 0.1;
/// Number of particles orbiting the globe.
pub const ORBIT_PARTICLES: usize = 8;
/// Furthest excursion of an orbiting particle, in pixels.
pub const ORBIT_REACH: f64 = 200.0;

/// Where one ring item sits, and how it moves.
#[derive(Clone, Debug, PartialEq)]
pub struct RingSlot {
    /// Position in the input list
    pub index: usize,
    /// Angle in degrees, `[0, 360)`
    pub angle: f64,
    /// Horizontal offset from the ring center
    pub x: f64,
    /// Vertical offset from the ring center
    pub y: f64,
    /// Depth used only for the 3-D transform
    pub z: f64,
    /// Seconds of delay applied to every loop on this slot
    pub phase: f64,
}

impl RingSlot {
    /// Vertical bob: 0 → -10px → 0, slower for later slots.
    pub fn bob(&self) -> LoopAnimation {
        LoopAnimation::new("ring-bob", &[0.0, -10.0, 0.0], 2.0 + self.index as f64 * 0.2)
            .with_delay(self.phase)
            .with_easing(Easing::EaseInOut)
    }

    /// Counter-rotation keeping the badge facing out while the globe turns.
    pub fn spin(&self) -> LoopAnimation {
        LoopAnimation::new("ring-spin", &[0.0, -360.0], 20.0).with_delay(self.phase)
    }

    /// Inline `left`/`top`/`transform` for a `size`-pixel badge centred on the slot.
    pub fn style(&self, size: f64) -> String {
        let half = size / 2.0;
        format!(
            "left: calc(50% + {:.2}px - {half}px); top: calc(50% + {:.2}px - {half}px); transform: translateZ({:.2}px);",
            self.x, self.y, self.z
        )
    }
}

/// Angle of item `index` out of `count`, in degrees.
pub fn slot_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    index as f64 * 360.0 / count as f64
}

/// Place `count` items on a ring of `radius`.
pub fn layout(count: usize, radius: f64) -> Vec<RingSlot> {
    (0..count)
        .map(|index| {
            let angle = slot_angle(index, count);
            let rad = angle.to_radians();
            RingSlot {
                index,
                angle,
                x: radius * rad.cos(),
                y: radius * rad.sin(),
                z: DEPTH_RADIUS * (2.0 * rad).sin(),
                phase: PHASE_STEP * index as f64,
            }
        })
        .collect()
}

/// Place one slot per item, at the default radius.
pub fn layout_items<T>(items: &[T]) -> Vec<RingSlot> {
    layout(items.len(), RING_RADIUS)
}

/// A particle that drifts out from the globe center and back.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitParticle {
    /// Particle number
    pub index: usize,
    /// Peak horizontal excursion
    pub dx: f64,
    /// Peak vertical excursion
    pub dy: f64,
    /// Seconds per cycle
    pub duration: f64,
    /// Seconds before the first cycle
    pub delay: f64,
}

impl OrbitParticle {
    /// Inline style feeding the `orbit` keyframes through custom properties.
    pub fn style(&self) -> String {
        format!(
            "--orbit-dx: {:.2}px; --orbit-dy: {:.2}px; animation: orbit {}s linear {}s infinite;",
            self.dx, self.dy, self.duration, self.delay
        )
    }
}

/// Particles at 45° steps around the globe.
pub fn orbit_particles() -> Vec<OrbitParticle> {
    (0..ORBIT_PARTICLES)
        .map(|index| {
            let rad = (index as f64 * 45.0).to_radians();
            OrbitParticle {
                index,
                dx: ORBIT_REACH * rad.cos(),
                dy: ORBIT_REACH * rad.sin(),
                duration: 8.0 + index as f64,
                delay: 0.5 * index as f64,
            }
        })
        .collect()
}
