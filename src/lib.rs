//! Airline Intel: a desktop viewer for pre-computed airline passenger
//! satisfaction analytics.
//!
//! Literal result bundles live in a [`data::DatasetRegistry`]. The
//! [`charts::ChartAdapter`] turns them into series specs, the
//! [`reports::ReportRenderer`] composes pages for the view chosen through
//! the [`router::ViewRouter`], and [`app::App`] puts it all on screen with
//! iced.

pub mod app;
pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod logging;
pub mod message;
pub mod reports;
pub mod router;
pub mod screens;
pub mod theme;
