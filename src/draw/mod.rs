// src/draw/mod.rs
// Turning honeycomb frames into nannou Draw calls

pub mod hexagon_draw;

pub use hexagon_draw::{draw_honeycomb, to_nannou};
