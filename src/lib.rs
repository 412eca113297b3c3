// src/lib.rs
//
// A honeycomb loading indicator: seven hexagons that appear and disappear
// one after another while something happens in the background.

pub mod animation;
pub mod config;
pub mod draw;
pub mod error;
pub mod models;

pub use error::{HoneycombError, Result};
