//! Page components.

pub mod contact;
pub mod nav;
pub mod particle_field;
mod reveal;
pub mod sections;

pub use reveal::use_scroll_reveal;
