//! Floating background particles.
//!
//! Positions come from a seeded generator so the prerendered page and the
//! browser mount produce the same field.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Particles in the background layer.
pub const PARTICLE_COUNT: usize = 50;
/// Seed used by the published page.
pub const PARTICLE_SEED: u64 = 0xACAD1;

/// One background particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the layer width
    pub left: f64,
    /// Vertical position, percent of the layer height
    pub top: f64,
    /// Seconds per float cycle, `[3, 5)`
    pub duration: f64,
    /// Seconds before the first cycle, `[0, 2)`
    pub delay: f64,
}

impl Particle {
    /// Inline style: position plus the `float` keyframes.
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation: float {:.2}s ease-in-out {:.2}s infinite;",
            self.left, self.top, self.duration, self.delay
        )
    }
}

/// Generate `count` particles from `seed`.
pub fn particle_field(count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Particle {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            duration: 3.0 + rng.gen_range(0.0..2.0),
            delay: rng.gen_range(0.0..2.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_field() {
        assert_eq!(
            particle_field(PARTICLE_COUNT, PARTICLE_SEED),
            particle_field(PARTICLE_COUNT, PARTICLE_SEED)
        );
        assert_ne!(particle_field(8, 1), particle_field(8, 2));
    }

    #[test]
    fn values_stay_in_range() {
        let field = particle_field(PARTICLE_COUNT, PARTICLE_SEED);
        assert_eq!(field.len(), PARTICLE_COUNT);
        for p in field {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((3.0..5.0).contains(&p.duration));
            assert!((0.0..2.0).contains(&p.delay));
        }
    }
}
