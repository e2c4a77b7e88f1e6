//! Ambient particle field background component.
//!
//! Renders a continuously animated field of drifting points on an HTML
//! canvas with:
//! - Fixed-count particle store, rebuilt wholesale on every window resize
//! - Pointer attraction within a hard cutoff radius
//! - Reflective boundaries (velocity sign flip, no position clamp)
//! - Proximity links drawn between nearby particle pairs
//! - Dark/light palette selected per frame from the host's theme signal
//!
//! # Example
//!
//! ```ignore
//! use dataverse_field::ParticleFieldCanvas;
//!
//! let (dark, _set_dark) = signal(true);
//! view! { <ParticleFieldCanvas dark=dark /> }
//! ```

mod component;
pub mod config;
mod field;
mod frame;
mod particle;
mod render;
pub mod theme;

pub use component::ParticleFieldCanvas;
pub use config::FieldConfig;
pub use field::ParticleField;
pub use particle::Particle;
pub use theme::Palette;
