//! Terminal render adapter.

pub mod surface;

pub use surface::TermSurface;
