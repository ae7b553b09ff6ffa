//! Blockfall: a falling-block puzzle engine with pluggable rendering.
//!
//! The engine keeps the whole game in memory for one session: a grid of
//! locked cells, the falling piece, and the rules for movement, rotation
//! (with a single-direction wall kick), gravity, locking, line clearing, and
//! score-driven speedup. Rendering and input are external collaborators:
//! hosts hand the engine a [`engine::CellSurface`] and forward their input
//! events to the four movement methods.
//!
//! - [`core`]: pure game rules, no I/O
//! - [`engine`]: the boundary API and render-adapter contract
//! - [`term`]: crossterm surface for terminal hosts
//! - [`input`]: key-event to action mapping
//! - [`types`]: shared plain types and tuning constants

pub mod core;
pub mod engine;
pub mod input;
pub mod term;
pub mod types;
