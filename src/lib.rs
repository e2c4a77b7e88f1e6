//! dataverse-field: ambient particle field background for the Dataverse portal.
//!
//! This crate provides a WASM-based canvas component that animates a
//! mouse-reactive field of drifting particles connected by proximity links,
//! plus a thin host `App` that mounts it full-screen with a persisted
//! dark-mode toggle.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{FieldConfig, ParticleField, ParticleFieldCanvas};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("dataverse-field: logging initialized");
}

/// Load field configuration overrides from a script element with
/// id="particle-config". Expected format: a JSON object with any subset of
/// [`FieldConfig`]'s fields. Returns `None` when the element is missing, so
/// callers fall back to the stock configuration.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FieldConfig>(&json_text) {
		Ok(config) => {
			info!("dataverse-field: loaded config, {} particles", config.count);
			Some(config)
		}
		Err(e) => {
			warn!("dataverse-field: failed to parse particle config: {}", e);
			None
		}
	}
}

const DARK_MODE_KEY: &str = "darkMode";

/// Read the persisted dark-mode flag. Missing storage or key means dark.
fn stored_dark_mode() -> bool {
	web_sys::window()
		.and_then(|w| w.local_storage().ok().flatten())
		.and_then(|storage| storage.get_item(DARK_MODE_KEY).ok().flatten())
		.map(|value| value == "true")
		.unwrap_or(true)
}

fn persist_dark_mode(dark: bool) {
	if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
		let _ = storage.set_item(DARK_MODE_KEY, if dark { "true" } else { "false" });
	}
}

/// Main application component.
/// Mounts the particle field behind a title overlay and a theme toggle.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config();
	let dark = RwSignal::new(stored_dark_mode());
	let toggle_theme = move |_| {
		dark.update(|d| *d = !*d);
		persist_dark_mode(dark.get_untracked());
	};

	view! {
		<Html
			attr:lang="en"
			attr:dir="ltr"
			attr:data-theme=move || if dark.get() { "dark" } else { "light" }
		/>
		<Title text="Dataverse Portal" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="portal-landing">
			<ParticleFieldCanvas dark=dark config=config />
			<div class="portal-overlay">
				<h1>"Explore the Infinite Dataverse"</h1>
				<p class="subtitle">"Navigate through vast information landscapes with ease."</p>
				<button class="theme-toggle" on:click=toggle_theme>
					{move || if dark.get() { "LIGHT" } else { "DARK" }}
				</button>
			</div>
		</div>
	}
}
