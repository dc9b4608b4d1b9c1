//! Drifting particle field behind the hero headline.
//!
//! World units match a camera at `z = 8` looking at the origin with a
//! 50° vertical field of view. Everything here is pure so the motion can
//! be tested off-browser; `hero.rs` owns the canvas.

pub const PARTICLE_COUNT: usize = 150;
pub const SPREAD: f64 = 20.0;
pub const PARTICLE_SIZE: f64 = 0.04;
pub const PARTICLE_RGB: (u8, u8, u8) = (0x87, 0xce, 0xeb);
pub const PARTICLE_ALPHA: f64 = 0.6;

const CAMERA_Z: f64 = 8.0;
const HALF_FOV_TAN: f64 = 0.466_307_658_154_998_6; // tan(25°)
const CAMERA_EASE: f64 = 0.05;
const NEAR_CLIP: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    vx: f64,
    vy: f64,
}

/// A particle mapped to canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Linear congruential generator; deterministic per seed.
struct Lcg(u64);

impl Lcg {
    fn next_unit(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    fn centered(&mut self) -> f64 {
        self.next_unit() - 0.5
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    spread: f64,
    pointer: (f64, f64),
    camera: (f64, f64),
}

impl ParticleField {
    pub fn new(count: usize, spread: f64, seed: u64) -> Self {
        let mut rng = Lcg(seed);
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.centered() * spread,
                y: rng.centered() * spread,
                z: rng.centered() * spread - 5.0,
                vx: rng.centered() * 0.002,
                vy: rng.centered() * 0.002,
            })
            .collect();
        Self {
            particles,
            spread,
            pointer: (0.0, 0.0),
            camera: (0.0, 0.5),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Pointer position normalized to `[-1, 1]` on both axes.
    pub fn set_pointer(&mut self, nx: f64, ny: f64) {
        self.pointer = (nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0));
    }

    pub fn camera(&self) -> (f64, f64) {
        self.camera
    }

    /// Advance one frame at wall-clock `time_s`.
    pub fn step(&mut self, time_s: f64) {
        let half = self.spread / 2.0;
        for (i, p) in self.particles.iter_mut().enumerate() {
            let phase = time_s + i as f64 * 0.1;
            p.x += p.vx + phase.sin() * 0.001;
            p.y += p.vy + phase.cos() * 0.001;
            if p.x.abs() > half {
                p.x *= -0.9;
            }
            if p.y.abs() > half {
                p.y *= -0.9;
            }
        }

        let target = (self.pointer.0 * 0.5, -self.pointer.1 * 0.3 + 0.5);
        self.camera.0 += (target.0 - self.camera.0) * CAMERA_EASE;
        self.camera.1 += (target.1 - self.camera.1) * CAMERA_EASE;
    }

    /// Perspective-project `p` onto a `width` × `height` canvas. `None` when
    /// the particle is behind the near plane.
    pub fn project(&self, p: &Particle, width: f64, height: f64) -> Option<Projected> {
        let depth = CAMERA_Z - p.z;
        if depth < NEAR_CLIP {
            return None;
        }
        let focal = (height / 2.0) / HALF_FOV_TAN;
        let scale = focal / depth;
        Some(Projected {
            x: width / 2.0 + (p.x - self.camera.0) * scale,
            y: height / 2.0 - (p.y - self.camera.1) * scale,
            radius: (PARTICLE_SIZE * scale).max(0.6),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_field() {
        let a = ParticleField::new(PARTICLE_COUNT, SPREAD, 7);
        let b = ParticleField::new(PARTICLE_COUNT, SPREAD, 7);
        assert_eq!(a.particles(), b.particles());
        assert_eq!(a.particles().len(), PARTICLE_COUNT);

        let c = ParticleField::new(PARTICLE_COUNT, SPREAD, 8);
        assert_ne!(a.particles(), c.particles());
    }

    #[test]
    fn particles_stay_inside_spread() {
        let mut field = ParticleField::new(PARTICLE_COUNT, SPREAD, 2025);
        let half = SPREAD / 2.0;
        for frame in 0..20_000 {
            field.step(frame as f64 / 60.0);
        }
        for p in field.particles() {
            assert!(p.x.abs() <= half + 0.01, "x = {}", p.x);
            assert!(p.y.abs() <= half + 0.01, "y = {}", p.y);
        }
    }

    #[test]
    fn camera_eases_toward_pointer() {
        let mut field = ParticleField::new(0, SPREAD, 1);
        field.set_pointer(1.0, -1.0);
        let mut previous = field.camera().0;
        for _ in 0..200 {
            field.step(0.0);
            assert!(field.camera().0 >= previous);
            previous = field.camera().0;
        }
        let (cx, cy) = field.camera();
        assert!((cx - 0.5).abs() < 1e-3);
        assert!((cy - 0.8).abs() < 1e-3);
    }

    #[test]
    fn pointer_is_clamped() {
        let mut field = ParticleField::new(0, SPREAD, 1);
        field.set_pointer(4.0, -9.0);
        for _ in 0..500 {
            field.step(0.0);
        }
        assert!((field.camera().0 - 0.5).abs() < 1e-6);
    }

    #[test]
    fn point_in_front_of_camera_projects_to_center() {
        let field = ParticleField::new(0, SPREAD, 1);
        let p = Particle {
            x: 0.0,
            y: 0.5,
            z: 0.0,
            vx: 0.0,
            vy: 0.0,
        };
        let projected = field.project(&p, 800.0, 600.0).unwrap();
        assert!((projected.x - 400.0).abs() < 1e-9);
        assert!((projected.y - 300.0).abs() < 1e-9);
        assert!(projected.radius > 0.0);
    }

    #[test]
    fn particles_behind_camera_are_skipped() {
        let field = ParticleField::new(0, SPREAD, 1);
        let p = Particle {
            x: 0.0,
            y: 0.0,
            z: 9.0,
            vx: 0.0,
            vy: 0.0,
        };
        assert_eq!(field.project(&p, 800.0, 600.0), None);
    }
}
