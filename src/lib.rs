//! Interactive statistics over US bikeshare trip data.
//!
//! A session asks for a city and optional month/day filters, loads the
//! matching CSV into a [`data::model::TripTable`], prints four reports
//! (travel times, stations, trip durations, users) and can page through the
//! raw rows before offering a restart.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod prompt;
pub mod state;
pub mod stats;
pub mod ui;
