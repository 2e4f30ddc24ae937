//! Animated particle background.
//!
//! Renders drifting particles on a full-viewport canvas with:
//! - Particle count scaled to the viewport area, rebuilt on every resize
//! - Pointer repulsion inside a fixed radius
//! - Velocity reflection at the viewport edges
//! - Faded link lines between nearby particles
//!
//! The simulation and rendering are independent of the browser: anything
//! implementing [`Surface`] can be painted on, and a seeded field is fully
//! reproducible.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_canvas::components::particle_field::{Animation, FieldConfig, ParticleField, Viewport};
//!
//! let field = ParticleField::seeded(Viewport::new(800.0, 600.0), FieldConfig::default(), 42);
//! let mut animation = Animation::new(field);
//! let stop = animation.stop_handle();
//! while animation.frame(&mut surface) {
//!     if done() {
//!         stop.stop();
//!     }
//! }
//! ```

mod animation;
mod component;
mod config;
mod field;
mod particles;
mod render;
mod surface;
pub mod theme;
mod types;

pub use animation::{Animation, StopHandle};
pub use component::ParticleCanvas;
pub use config::FieldConfig;
pub use field::{Link, ParticleField, link_opacity};
pub use particles::Particle;
pub use render::render;
pub use surface::{CanvasSurface, Surface};
pub use theme::Color;
pub use types::{Point, Viewport};
