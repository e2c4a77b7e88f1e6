//! Color palettes for the two portal themes.
//!
//! The theme flag only affects rendering; the simulation never reads it.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// The fixed pair of colors used by one theme. No interpolation between
/// themes; the renderer picks one palette per frame.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
	/// Fill color for particle discs.
	pub particle: Color,
	/// Stroke color for proximity links.
	pub link: Color,
}

impl Palette {
	/// Violet on transparent, for dark mode.
	pub fn dark() -> Self {
		Self {
			particle: Color::rgba(138, 43, 226, 0.8),
			link: Color::rgba(138, 43, 226, 0.2),
		}
	}

	/// Gold on transparent, for light mode.
	pub fn light() -> Self {
		Self {
			particle: Color::rgba(255, 215, 0, 0.8),
			link: Color::rgba(255, 215, 0, 0.2),
		}
	}

	pub fn for_dark(dark: bool) -> Self {
		if dark { Self::dark() } else { Self::light() }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_serialization_uses_rgba_for_translucent_colors() {
		assert_eq!(
			Color::rgba(138, 43, 226, 0.8).to_css(),
			"rgba(138, 43, 226, 0.8)"
		);
		assert_eq!(Color::rgba(255, 215, 0, 1.0).to_css(), "#ffd700");
	}

	#[test]
	fn palettes_differ_only_by_hue_not_structure() {
		let dark = Palette::dark();
		let light = Palette::light();
		assert_eq!(dark.particle.a, light.particle.a);
		assert_eq!(dark.link.a, light.link.a);
		assert_ne!(dark.particle.to_css(), light.particle.to_css());
	}

	#[test]
	fn for_dark_selects_the_matching_palette() {
		assert_eq!(Palette::for_dark(true).particle, Palette::dark().particle);
		assert_eq!(Palette::for_dark(false).link, Palette::light().link);
	}
}
