//! route-planner core
//!
//! Greedy multi-stop route planning over places grouped by category.

pub mod cancel;
pub mod config;
pub mod distance;
pub mod error;
pub mod haversine;
pub mod http;
pub mod model;
pub mod planner;
pub mod polyline;
pub mod repository;
pub mod traits;
