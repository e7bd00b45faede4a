#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::just_underscores_and_digits, clippy::len_without_is_empty)]

#[macro_use]
extern crate alloc;

pub(crate) type Kbn<T> = compensated_summation::KahanBabuskaNeumaier<T>;

mod utils;
pub(crate) use utils::helper;

mod sample;
pub use sample::{Sample, SampleStore};

mod aggregates;
pub use aggregates::Aggregates;

mod model;
pub use model::{Domain, Model, Trace};

mod standard_error;
pub use standard_error::standard_error;

mod conclusion;
pub use conclusion::Conclusion;

mod config;
pub use config::{DEFAULT_PRECISION, DEFAULT_SURFACE_WIDTH, EngineConfig, MAX_PRECISION};

mod error;
pub use error::ConfigError;

mod report;
pub use report::Report;

mod frame;
pub use frame::{FrameSink, NoOpFrameSink};

mod engine;
pub use engine::RegressionEngine;
