use std::f32::consts::TAU;

use egui::{Color32, Pos2, Vec2};
use rand::Rng;

use crate::config::ParticleConfig;

/// A decaying sparkle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Pos2,
    pub size: f32,
    pub vel: Vec2,
    pub color: Color32,
    /// Remaining life in `(0, 1]`
    pub life: f32,
}

impl Particle {
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Transient population of sparkles, oldest first
#[derive(Debug)]
pub struct ParticleSystem {
    config: ParticleConfig,
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new(config: ParticleConfig) -> Self {
        Self {
            particles: Vec::with_capacity(config.cap),
            config,
        }
    }

    /// Emit `count` particles at `at`, velocities spread evenly around
    /// a full circle with random magnitude up to `speed`.
    pub fn emit(&mut self, rng: &mut impl Rng, at: Pos2, count: usize, speed: f32) {
        let ParticleConfig { min_size, max_size, .. } = self.config;
        for i in 0..count {
            let angle = TAU * i as f32 / count as f32;
            let magnitude = if speed > 0.0 { rng.gen_range(0.0..=speed) } else { 0.0 };
            let size = if max_size > min_size {
                rng.gen_range(min_size..max_size)
            } else {
                min_size
            };
            let color = self.config.palette[rng.gen_range(0..self.config.palette.len())];
            self.particles.push(Particle {
                pos: at,
                size,
                vel: Vec2::angled(angle) * magnitude,
                color,
                life: 1.0,
            });
        }
        self.enforce_cap();
    }

    /// Advance one frame: move, decay, shrink, then prune dead and excess particles
    pub fn step(&mut self) {
        let ParticleConfig { decay, shrink, .. } = self.config;
        for particle in &mut self.particles {
            particle.pos += particle.vel;
            particle.life -= decay;
            particle.size *= shrink;
        }
        self.particles.retain(Particle::is_alive);
        self.enforce_cap();
    }

    pub fn clear(&mut self) {
        self.particles.clear();
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

    pub fn cap(&self) -> usize {
        self.config.cap
    }

    // Keep only the most recently created particles
    fn enforce_cap(&mut self) {
        let excess = self.particles.len().saturating_sub(self.config.cap);
        if excess > 0 {
            self.particles.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn system() -> ParticleSystem {
        ParticleSystem::new(ParticleConfig::default())
    }

    #[test]
    fn test_emit_initial_state() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut particles = system();
        particles.emit(&mut rng, pos2(10.0, 20.0), 6, 2.0);

        assert_eq!(particles.len(), 6);
        let config = ParticleConfig::default();
        for p in particles.particles() {
            assert_eq!(p.pos, pos2(10.0, 20.0));
            assert_eq!(p.life, 1.0);
            assert!(p.size >= config.min_size && p.size < config.max_size);
            assert!(p.vel.length() <= 2.0 + 0.001);
            assert!(config.palette.contains(&p.color));
        }
    }

    #[test]
    fn test_emit_directions_spread_around_circle() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut particles = system();
        particles.emit(&mut rng, Pos2::ZERO, 4, 1.0);

        // angle = 2π·i/4: right, down, left, up (screen coordinates)
        let p = particles.particles();
        assert!(p[0].vel.y.abs() < 0.001 && p[0].vel.x >= 0.0);
        assert!(p[1].vel.x.abs() < 0.001 && p[1].vel.y >= 0.0);
        assert!(p[2].vel.y.abs() < 0.001 && p[2].vel.x <= 0.0);
        assert!(p[3].vel.x.abs() < 0.001 && p[3].vel.y <= 0.0);
    }

    #[test]
    fn test_step_moves_decays_and_shrinks() {
        let mut particles = system();
        particles.particles.push(Particle {
            pos: pos2(0.0, 0.0),
            size: 2.0,
            vel: Vec2::new(1.0, -1.0),
            color: Color32::WHITE,
            life: 1.0,
        });
        particles.step();

        let p = &particles.particles()[0];
        assert_eq!(p.pos, pos2(1.0, -1.0));
        assert!((p.life - 0.99).abs() < 0.0001);
        assert!((p.size - 1.98).abs() < 0.0001);
    }

    #[test]
    fn test_step_prunes_dead() {
        let mut particles = system();
        particles.particles.push(Particle {
            pos: Pos2::ZERO,
            size: 1.0,
            vel: Vec2::ZERO,
            color: Color32::WHITE,
            life: 0.005,
        });
        particles.step();
        assert!(particles.is_empty());
    }

    #[test]
    fn test_cap_keeps_newest() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut particles = system();
        particles.emit(&mut rng, pos2(0.0, 0.0), 80, 1.0);
        particles.emit(&mut rng, pos2(50.0, 50.0), 80, 1.0);

        assert_eq!(particles.len(), particles.cap());
        // The last 80 come from the second burst
        let newest = &particles.particles()[20..];
        assert!(newest.iter().all(|p| p.pos == pos2(50.0, 50.0)));
    }

    #[test]
    fn test_clear() {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut particles = system();
        particles.emit(&mut rng, Pos2::ZERO, 5, 1.0);
        particles.clear();
        assert!(particles.is_empty());
    }
}
