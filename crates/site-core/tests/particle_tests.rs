// Host-side tests for the particle field simulation.

use site_core::{Particle, ParticleField, PARTICLE_MAX_RADIUS, PARTICLE_SPEED_HALF_RANGE};

#[test]
fn reflects_at_left_bound() {
    let p = Particle {
        x: 0.0,
        y: 50.0,
        vx: -1.0,
        vy: 0.0,
        radius: 1.0,
    };
    let mut field = ParticleField::from_particles(vec![p], 100.0, 100.0);
    field.advance();
    let p = field.particles()[0];
    assert_eq!(p.vx, 1.0, "velocity sign flips on reflection");
    assert!(p.x >= 0.0 && p.x <= 100.0);
}

#[test]
fn reflects_at_bottom_bound() {
    let p = Particle {
        x: 50.0,
        y: 99.9,
        vx: 0.0,
        vy: 0.5,
        radius: 1.0,
    };
    let mut field = ParticleField::from_particles(vec![p], 100.0, 100.0);
    field.advance();
    let p = field.particles()[0];
    assert_eq!(p.vy, -0.5);
    assert!(p.y <= 100.0);
}

#[test]
fn positions_stay_in_bounds_over_many_steps() {
    let mut field = ParticleField::new(320.0, 200.0, 60, 42);
    for step in 0..10_000 {
        field.advance();
        for (i, p) in field.particles().iter().enumerate() {
            assert!(
                p.x >= 0.0 && p.x <= 320.0,
                "particle {i} x={} out of bounds at step {step}",
                p.x
            );
            assert!(
                p.y >= 0.0 && p.y <= 200.0,
                "particle {i} y={} out of bounds at step {step}",
                p.y
            );
        }
    }
}

#[test]
fn spawned_particles_are_within_tuned_ranges() {
    let field = ParticleField::new(640.0, 480.0, 100, 7);
    assert_eq!(field.len(), 100);
    for p in field.particles() {
        assert!(p.x >= 0.0 && p.x <= 640.0);
        assert!(p.y >= 0.0 && p.y <= 480.0);
        assert!(p.vx.abs() <= PARTICLE_SPEED_HALF_RANGE);
        assert!(p.vy.abs() <= PARTICLE_SPEED_HALF_RANGE);
        assert!(p.radius >= 0.0 && p.radius <= PARTICLE_MAX_RADIUS);
    }
}

#[test]
fn set_bounds_keeps_count_and_pulls_positions_in() {
    let mut field = ParticleField::new(800.0, 600.0, 30, 99);
    field.set_bounds(100.0, 50.0);
    assert_eq!(field.len(), 30, "resize must not discard particles");
    assert_eq!(field.width(), 100.0);
    assert_eq!(field.height(), 50.0);
    for p in field.particles() {
        assert!(p.x >= 0.0 && p.x <= 100.0);
        assert!(p.y >= 0.0 && p.y <= 50.0);
    }
}

#[test]
fn same_seed_spawns_identical_fields() {
    let a = ParticleField::new(300.0, 300.0, 20, 1234);
    let b = ParticleField::new(300.0, 300.0, 20, 1234);
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.x, pb.x);
        assert_eq!(pa.vy, pb.vy);
        assert_eq!(pa.radius, pb.radius);
    }
}
