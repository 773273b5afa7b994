//! Command-line driver for the xlate initialization normalizer.
//!
//! - `args`: clap argument definitions
//! - `driver`: load, bind, normalize and render one unit
//! - `tracing_config`: `XLATE_LOG` / `XLATE_LOG_FORMAT` subscriber setup

pub mod args;
pub mod driver;
pub mod tracing_config;
