use crate::constants::{PARTICLE_MAX_RADIUS, PARTICLE_SPEED_HALF_RANGE};
use rand::prelude::*;

/// A single drifting point. Created once at field initialization and mutated
/// in place every frame; the radius is fixed for the particle's lifetime.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
}

impl Particle {
    fn spawn(rng: &mut StdRng, width: f32, height: f32) -> Self {
        Self {
            x: rng.gen::<f32>() * width,
            y: rng.gen::<f32>() * height,
            vx: (rng.gen::<f32>() - 0.5) * 2.0 * PARTICLE_SPEED_HALF_RANGE,
            vy: (rng.gen::<f32>() - 0.5) * 2.0 * PARTICLE_SPEED_HALF_RANGE,
            radius: rng.gen::<f32>() * PARTICLE_MAX_RADIUS,
        }
    }
}

/// Fixed-capacity set of independently moving particles with elastic
/// reflection at the surface bounds.
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| Particle::spawn(&mut rng, width, height))
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    /// Builds a field from explicit particles; positions are clamped into
    /// the surface bounds.
    pub fn from_particles(particles: Vec<Particle>, width: f32, height: f32) -> Self {
        let mut field = Self {
            particles,
            width,
            height,
        };
        field.clamp_positions();
        field
    }

    /// Updates the surface dimensions after a (debounced) resize. Existing
    /// particles survive with their velocities; only out-of-bounds positions
    /// are pulled back in.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.clamp_positions();
    }

    /// One simulation step: position += velocity, with the matching velocity
    /// component negated when a bound is crossed. Discrete-time elastic
    /// bounce, no restitution loss, no particle-particle interaction.
    pub fn advance(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 || p.x > self.width {
                p.vx = -p.vx;
                p.x = p.x.clamp(0.0, self.width);
            }
            if p.y < 0.0 || p.y > self.height {
                p.vy = -p.vy;
                p.y = p.y.clamp(0.0, self.height);
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    fn clamp_positions(&mut self) {
        for p in &mut self.particles {
            p.x = p.x.clamp(0.0, self.width);
            p.y = p.y.clamp(0.0, self.height);
        }
    }
}
