//! Visual theming for the particle field.
//!
//! Provides the color value type plus style configuration for the field
//! motion, the rendered points, and the connection lines.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	/// Linear interpolation between two colors
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * (1.0 - t) + other.r as f64 * t) as u8,
			g: (self.g as f64 * (1.0 - t) + other.g as f64 * t) as u8,
			b: (self.b as f64 * (1.0 - t) + other.b as f64 * t) as u8,
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Motion and proximity configuration for the particle field.
///
/// Positions are in world units; the camera in `projection` maps them to
/// canvas pixels. Per-frame displacement is a pure function of elapsed time,
/// particle index, and the pointer, so two fields with the same seed and
/// style stay in lockstep.
#[derive(Clone, Debug)]
pub struct FieldStyle {
	/// Number of particles. Fixed for the field's lifetime.
	pub count: usize,
	/// Half-extents of the spawn box on each axis.
	pub bounds: [f64; 3],
	/// Drift amplitude per axis, world units.
	pub drift_amplitude: [f64; 3],
	/// Drift frequency per axis, radians per second.
	pub drift_frequency: [f64; 3],
	/// Per-particle phase offset per axis; desynchronizes the drift.
	pub phase_step: [f64; 3],
	/// How far the whole field leans toward the pointer.
	pub pointer_drift: f64,
	/// Pointer world range: normalized [-1, 1] input maps to ±(x, y).
	pub pointer_range: (f64, f64),
	/// Planar distance at which the pointer glow falls to zero.
	pub glow_radius: f64,
	/// Maximum distance at which two particles are connected.
	pub connection_dist: f64,
	/// Resting color channels in [0, 1].
	pub color_base: [f64; 3],
	/// Per-channel gain added at full glow.
	pub color_glow_gain: [f64; 3],
}

/// Rendered point style.
#[derive(Clone, Debug)]
pub struct PointStyle {
	/// Point diameter in world units (perspective-attenuated).
	pub size: f64,
	/// Point layer opacity.
	pub opacity: f64,
}

/// Connection line style.
#[derive(Clone, Debug)]
pub struct LineStyle {
	/// Line color at full edge strength; channels fade with distance.
	pub color: Color,
	/// Line layer opacity.
	pub opacity: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub field: FieldStyle,
	pub point: PointStyle,
	pub line: LineStyle,
}

impl Theme {
	/// Cool teal network on a transparent background (default)
	pub fn signal() -> Self {
		Self {
			name: "signal",
			field: FieldStyle {
				count: 120,
				bounds: [7.0, 5.0, 3.0],
				drift_amplitude: [0.05, 0.05, 0.03],
				drift_frequency: [0.3, 0.4, 0.2],
				phase_step: [0.1, 0.15, 0.2],
				pointer_drift: 0.02,
				pointer_range: (6.0, 4.0),
				glow_radius: 3.0,
				connection_dist: 2.5,
				color_base: [0.0, 0.5, 0.9],
				color_glow_gain: [0.2, 0.5, 0.1],
			},
			point: PointStyle {
				size: 0.06,
				opacity: 0.9,
			},
			line: LineStyle {
				color: Color::rgb(0, 179, 230),
				opacity: 0.4,
			},
		}
	}

	/// Warm amber variant for light-on-dark hero sections
	pub fn ember() -> Self {
		Self {
			name: "ember",
			field: FieldStyle {
				count: 120,
				bounds: [7.0, 5.0, 3.0],
				drift_amplitude: [0.05, 0.05, 0.03],
				drift_frequency: [0.3, 0.4, 0.2],
				phase_step: [0.1, 0.15, 0.2],
				pointer_drift: 0.02,
				pointer_range: (6.0, 4.0),
				glow_radius: 3.0,
				connection_dist: 2.5,
				color_base: [0.85, 0.45, 0.15],
				color_glow_gain: [0.15, 0.35, 0.3],
			},
			point: PointStyle {
				size: 0.06,
				opacity: 0.9,
			},
			line: LineStyle {
				color: Color::rgb(217, 122, 48),
				opacity: 0.4,
			},
		}
	}

	/// Look up a theme preset by name; unknown names fall back to the default.
	pub fn by_name(name: &str) -> Self {
		match name {
			"ember" => Self::ember(),
			_ => Self::signal(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::signal()
	}
}
