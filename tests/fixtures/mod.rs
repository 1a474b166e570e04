//! Test fixtures for route-planner.
//!
//! Real Las Vegas / Henderson points of interest grouped by category.

pub mod las_vegas_places;

pub use las_vegas_places::*;
