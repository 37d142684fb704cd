//! wxdash library
//!
//! The time and forecast-window engine, the provider client, and the
//! dashboard state are exposed here so the binary and the integration tests
//! share them.

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod fetcher;
pub mod icons;
pub mod state;
pub mod timeline;
pub mod ui;
pub mod view;
