//! The standings engine.
//!
//! Flow: resolve each team's raw score per discipline, rank teams within their
//! category, convert positions to points through the points table, then add
//! the extras and sort each category by total.

pub mod constants;
pub mod extras;
pub mod extras_sheet;
pub mod points_table;
pub mod position_ranker;
pub mod score_resolver;
pub mod standings_builder;
pub mod standings_model;
pub mod structures;
pub mod totals;

pub use standings_model::{compute_standings, fetch_and_compute, StandingsError, StandingsModel};
