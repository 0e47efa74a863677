//! Core error types for the ndbin binned-accumulation crates
//!
//! Every ndbin crate reports failures through the [`Error`] enum defined
//! here. Two kinds matter to callers: [`Error::Config`] is fatal at
//! histogram construction, while [`Error::Coordinates`] is the recoverable
//! fill-time kind that histograms can be configured to absorb instead of
//! propagate.

pub mod error;

pub use error::{Error, Result};
