//! Particle state and the generator used to spawn it.

use super::config::FieldConfig;

/// One moving point in the field.
///
/// Position is mutated every frame; velocity only ever has a component's sign
/// flipped on boundary collision; radius is fixed for the particle's lifetime.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
}

impl Particle {
	/// Spawn a particle uniformly over a `width` x `height` surface with
	/// velocity and radius drawn from the configured ranges.
	pub fn spawn(rng: &mut Rng, config: &FieldConfig, width: f64, height: f64) -> Self {
		Self {
			x: rng.range(0.0, width),
			y: rng.range(0.0, height),
			vx: rng.range(-config.max_speed, config.max_speed),
			vy: rng.range(-config.max_speed, config.max_speed),
			radius: rng.range(config.radius_min, config.radius_max),
		}
	}
}

/// Seedable xorshift64 pseudo-random generator.
///
/// Deterministic and dependency-free; the component seeds it from the wall
/// clock, tests from fixed values.
#[derive(Clone, Debug)]
pub struct Rng {
	state: u64,
}

impl Rng {
	pub fn new(seed: u64) -> Self {
		Self {
			state: if seed == 0 { 0x9e37_79b9_7f4a_7c15 } else { seed },
		}
	}

	fn next_u64(&mut self) -> u64 {
		let mut x = self.state;
		x ^= x << 13;
		x ^= x >> 7;
		x ^= x << 17;
		self.state = x;
		x
	}

	/// Uniform value in `[0, 1)`.
	pub fn next_f64(&mut self) -> f64 {
		(self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
	}

	/// Uniform value in `[lo, hi)`.
	pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
		lo + self.next_f64() * (hi - lo)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rng_is_deterministic_per_seed() {
		let mut a = Rng::new(42);
		let mut b = Rng::new(42);
		for _ in 0..32 {
			assert_eq!(a.next_f64(), b.next_f64());
		}
	}

	#[test]
	fn rng_zero_seed_does_not_degenerate() {
		let mut rng = Rng::new(0);
		let first = rng.next_f64();
		let second = rng.next_f64();
		assert_ne!(first, second);
	}

	#[test]
	fn next_f64_stays_in_unit_interval() {
		let mut rng = Rng::new(7);
		for _ in 0..1000 {
			let v = rng.next_f64();
			assert!((0.0..1.0).contains(&v));
		}
	}

	#[test]
	fn spawn_respects_configured_ranges() {
		let config = FieldConfig::default();
		let mut rng = Rng::new(99);
		for _ in 0..200 {
			let p = Particle::spawn(&mut rng, &config, 800.0, 600.0);
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!(p.vx.abs() <= config.max_speed);
			assert!(p.vy.abs() <= config.max_speed);
			assert!((config.radius_min..config.radius_max).contains(&p.radius));
		}
	}
}
