//! Canvas rendering for the particle field.
//!
//! One pass per frame: clear to transparent, fill particle discs, then stroke
//! proximity links. The canvas background stays transparent so the field sits
//! behind the host page's own content.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;
use super::theme::Palette;

/// Draw the complete field for one frame.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d, palette: &Palette) {
	if field.width <= 0.0 || field.height <= 0.0 {
		return;
	}

	ctx.clear_rect(0.0, 0.0, field.width, field.height);

	draw_particles(field, ctx, palette);
	draw_links(field, ctx, palette);
}

fn draw_particles(field: &ParticleField, ctx: &CanvasRenderingContext2d, palette: &Palette) {
	ctx.set_fill_style_str(&palette.particle.to_css());
	for p in &field.particles {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.fill();
	}
}

/// Connect every pair of particles closer than the link distance.
///
/// A quadratic scan over all pairs; fine at the configured particle count.
/// Larger fields would want a spatial index here.
fn draw_links(field: &ParticleField, ctx: &CanvasRenderingContext2d, palette: &Palette) {
	let max_distance = field.config.link_distance;

	ctx.set_stroke_style_str(&palette.link.to_css());
	ctx.set_line_width(field.config.link_width);

	for (i, a) in field.particles.iter().enumerate() {
		for b in &field.particles[i + 1..] {
			let dx = a.x - b.x;
			let dy = a.y - b.y;
			let distance = (dx * dx + dy * dy).sqrt();

			if distance < max_distance {
				ctx.begin_path();
				ctx.move_to(a.x, a.y);
				ctx.line_to(b.x, b.y);
				ctx.stroke();
			}
		}
	}
}
