//! Preparation tools for `dex_size` CSV data.
//!
//! * [`analyzer`] – quartiles, Tukey outlier removal and a box plot
//!   (`dex-boxplot` binary).
//! * [`sampler`] – inclusive range filter plus a reproducible sample of at
//!   most 1000 rows (`filter-pick-range` binary).

pub mod analyzer;
pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod render;
pub mod sampler;
pub mod sampling;
pub mod state;
pub mod stats;
pub mod ui;

pub use error::{PrepError, Result};
