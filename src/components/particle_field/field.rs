//! Particle field state: the store, the pointer, and the per-frame step.
//!
//! Created once when the component mounts, then mutated each frame by the
//! animation loop. Pointer events and window resizes write to it between
//! frames; there is exactly one writer task at any time.

use super::config::FieldConfig;
use super::particle::{Particle, Rng};

/// The full simulation state for one canvas.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	pub width: f64,
	pub height: f64,
	/// Pointer position relative to the canvas origin, `None` while the
	/// pointer is off the canvas. Absent pointer applies no attraction.
	pub pointer: Option<(f64, f64)>,
	pub config: FieldConfig,
	rng: Rng,
}

impl ParticleField {
	pub fn new(config: FieldConfig, width: f64, height: f64, seed: u64) -> Self {
		let mut field = Self {
			particles: Vec::new(),
			width,
			height,
			pointer: None,
			config,
			rng: Rng::new(seed),
		};
		field.initialize();
		field
	}

	/// Discard all particles and recreate `config.count` fresh ones within
	/// the current bounds. The sole creation path; there is no incremental
	/// add or remove.
	pub fn initialize(&mut self) {
		let mut particles = Vec::with_capacity(self.config.count);
		for _ in 0..self.config.count {
			particles.push(Particle::spawn(&mut self.rng, &self.config, self.width, self.height));
		}
		self.particles = particles;
	}

	/// Adopt new surface dimensions and rebuild the store so every particle
	/// lies within the new bounds, rather than waiting for reflection to
	/// herd strays back next frame.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.initialize();
	}

	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		self.pointer = Some((x, y));
	}

	pub fn pointer_left(&mut self) {
		self.pointer = None;
	}

	/// Advance every particle one tick: pointer attraction, translation,
	/// boundary reflection, in that order.
	///
	/// Reflection flips the velocity sign without clamping the position, so a
	/// particle may sit up to one tick's travel outside the bounds for a
	/// single frame before the flipped velocity carries it back in.
	pub fn step(&mut self) {
		let (width, height) = (self.width, self.height);
		let pointer = self.pointer;
		let attraction_radius = self.config.attraction_radius;
		let attraction_strength = self.config.attraction_strength;

		for p in &mut self.particles {
			if let Some((mx, my)) = pointer {
				let dx = p.x - mx;
				let dy = p.y - my;
				let distance = (dx * dx + dy * dy).sqrt();
				// Hard cutoff, not a smooth falloff.
				if distance < attraction_radius {
					p.x -= dx * attraction_strength;
					p.y -= dy * attraction_strength;
				}
			}

			p.x += p.vx;
			p.y += p.vy;

			if p.x < 0.0 || p.x > width {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > height {
				p.vy = -p.vy;
			}
		}
	}
}
