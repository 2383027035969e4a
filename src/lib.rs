//! particle-network: animated particle-network canvas background.
//!
//! This crate provides a WASM canvas component that renders a field of
//! drifting points connected by proximity edges, with a pointer-driven glow
//! and a slow group rotation — the kind of decorative network that sits
//! behind a hero section.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{FieldConfig, ParticleFieldCanvas, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-network: logging initialized");
}

/// Load field configuration from a script element with id="field-config".
/// Expected format: JSON with optional count/connection_dist/glow_radius/
/// seed/theme keys.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FieldConfig>(&json_text) {
		Ok(config) => {
			info!("particle-network: loaded field config");
			Some(config)
		}
		Err(e) => {
			warn!("particle-network: failed to parse field config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Renders the particle network fullscreen behind an overlay title.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Particle Network" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-field">
			<ParticleFieldCanvas config=config fullscreen=true />
			<div class="field-overlay">
				<h1>"Particle Network"</h1>
				<p class="subtitle">"Move the pointer to light up nearby points."</p>
			</div>
		</div>
	}
}
