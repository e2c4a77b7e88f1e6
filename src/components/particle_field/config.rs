//! Tunable parameters for the particle field.
//!
//! Defaults reproduce the portal's stock look. A host page can override any
//! subset by embedding a JSON object in a `<script id="particle-config">`
//! element; missing fields keep their defaults.

use serde::Deserialize;

/// Simulation and rendering parameters for a [`ParticleField`].
///
/// [`ParticleField`]: super::field::ParticleField
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Number of particles in the field.
	pub count: usize,
	/// Per-axis velocity is drawn uniformly from `[-max_speed, max_speed]`.
	pub max_speed: f64,
	/// Minimum particle radius in pixels.
	pub radius_min: f64,
	/// Maximum particle radius in pixels.
	pub radius_max: f64,
	/// Particles closer than this to the pointer are pulled toward it.
	pub attraction_radius: f64,
	/// Fraction of the particle-to-pointer displacement applied per frame.
	pub attraction_strength: f64,
	/// Particle pairs closer than this are connected by a line.
	pub link_distance: f64,
	/// Stroke width of connecting lines, in pixels.
	pub link_width: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			count: 300,
			max_speed: 1.5,
			radius_min: 1.0,
			radius_max: 4.0,
			attraction_radius: 150.0,
			attraction_strength: 0.02,
			link_distance: 100.0,
			link_width: 0.3,
		}
	}
}
