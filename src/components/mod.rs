//! Page components.

pub mod contact;
pub mod nav;
pub mod particle_field;
pub mod projects;
pub mod reveal;
pub mod skills;
pub mod timeline;
