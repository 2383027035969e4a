//! Canvas drawing for the particle field.
//!
//! Two passes over a transparent background: connection lines first, then
//! the points on top. All geometry goes through the perspective projection;
//! anything that fails to project is skipped for the frame.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;
use super::projection::{self, Projection};
use super::theme::Theme;

/// Clamp a unit color channel into a CSS byte.
fn channel(value: f64) -> u8 {
	(value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Draw the field for elapsed time `t`.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d, proj: &Projection, theme: &Theme, t: f64) {
	ctx.clear_rect(0.0, 0.0, proj.width(), proj.height());

	let angle = t * projection::SPIN_RATE;

	draw_edges(field, ctx, proj, theme, angle);
	draw_points(field, ctx, proj, theme, angle);
}

fn draw_edges(
	field: &ParticleField,
	ctx: &CanvasRenderingContext2d,
	proj: &Projection,
	theme: &Theme,
	angle: f64,
) {
	let particles = field.particles();

	for edge in field.edges() {
		let Some(a) = proj.project(projection::rotate_y(particles[edge.a].pos, angle)) else {
			continue;
		};
		let Some(b) = proj.project(projection::rotate_y(particles[edge.b].pos, angle)) else {
			continue;
		};

		// Line color fades with distance; the layer opacity stays constant
		let color = theme
			.line
			.color
			.darken(1.0 - edge.alpha)
			.with_alpha(theme.line.opacity);
		ctx.set_stroke_style_str(&color.to_css());
		ctx.set_line_width(1.0);
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
}

fn draw_points(
	field: &ParticleField,
	ctx: &CanvasRenderingContext2d,
	proj: &Projection,
	theme: &Theme,
	angle: f64,
) {
	for particle in field.particles() {
		let Some(p) = proj.project(projection::rotate_y(particle.pos, angle)) else {
			continue;
		};

		let radius = (theme.point.size / 2.0 * p.scale).max(0.5);
		ctx.set_fill_style_str(&format!(
			"rgba({}, {}, {}, {})",
			channel(particle.color[0]),
			channel(particle.color[1]),
			channel(particle.color[2]),
			theme.point.opacity
		));
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, radius, 0.0, PI * 2.0);
		ctx.fill();
	}
}
