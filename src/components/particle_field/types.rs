//! External configuration for the particle field component.

use serde::Deserialize;

use super::theme::Theme;

/// Optional overrides for the particle field, loadable from embedded JSON.
///
/// Every field is optional; anything missing falls back to the selected
/// theme's defaults.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FieldConfig {
	/// Particle count override.
	#[serde(default)]
	pub count: Option<usize>,
	/// Connection distance override, world units.
	#[serde(default)]
	pub connection_dist: Option<f64>,
	/// Pointer glow radius override, world units.
	#[serde(default)]
	pub glow_radius: Option<f64>,
	/// Layout seed; omit for a fresh layout on every mount.
	#[serde(default)]
	pub seed: Option<f64>,
	/// Theme preset name ("signal" or "ember").
	#[serde(default)]
	pub theme: Option<String>,
}

impl FieldConfig {
	/// Resolve the configured theme with overrides applied, plus the
	/// explicit seed if one was given.
	pub fn resolve(&self) -> (Theme, Option<f64>) {
		let mut theme = match self.theme.as_deref() {
			Some(name) => Theme::by_name(name),
			None => Theme::default(),
		};
		if let Some(count) = self.count {
			theme.field.count = count;
		}
		if let Some(dist) = self.connection_dist {
			theme.field.connection_dist = dist;
		}
		if let Some(radius) = self.glow_radius {
			theme.field.glow_radius = radius;
		}
		(theme, self.seed)
	}
}
